//! Canned source for reproducible output.

use std::collections::VecDeque;

use super::RandomSource;
use crate::error::{Error, Result};

/// Hands out a fixed list of values in order, then repeats `fallback`
/// (0.0 unless built with [`Sequence::constant`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    values: VecDeque<f64>,
    fallback: f64,
}

impl Sequence {
    pub fn new<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values
            .into_iter()
            .map(check_unit)
            .collect::<Result<VecDeque<_>>>()?;
        Ok(Self {
            values,
            fallback: 0.0,
        })
    }

    /// A source that returns `value` forever.
    pub fn constant(value: f64) -> Result<Self> {
        Ok(Self {
            values: VecDeque::new(),
            fallback: check_unit(value)?,
        })
    }

    /// Canned values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

fn check_unit(value: f64) -> Result<f64> {
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::OutOfUnitRange(value))
    }
}

impl RandomSource for Sequence {
    fn next_unit(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(self.fallback)
    }

    fn name(&self) -> &'static str {
        "sequence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_in_order_then_zero() {
        let mut seq = Sequence::new([0.1, 0.9]).unwrap();
        assert_eq!(seq.remaining(), 2);
        assert_eq!(seq.next_unit(), 0.1);
        assert_eq!(seq.next_unit(), 0.9);
        assert_eq!(seq.remaining(), 0);
        assert_eq!(seq.next_unit(), 0.0);
        assert_eq!(seq.next_unit(), 0.0);
    }

    #[test]
    fn constant_repeats() {
        let mut seq = Sequence::constant(0.5).unwrap();
        assert!((0..10).all(|_| seq.next_unit() == 0.5));
    }

    #[test]
    fn rejects_values_outside_unit_range() {
        assert_eq!(
            Sequence::new([0.2, 1.0]).unwrap_err(),
            Error::OutOfUnitRange(1.0)
        );
        assert_eq!(
            Sequence::constant(-0.1).unwrap_err(),
            Error::OutOfUnitRange(-0.1)
        );
        assert!(Sequence::new([f64::NAN]).is_err());
    }
}
