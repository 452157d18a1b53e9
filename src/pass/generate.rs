//! Password generation.
//!
//! Characters rotate through the enabled classes in fixed order, so only the
//! character within each class is random; the class pattern is not.

use std::io::Write;

use log::debug;
use zeroize::Zeroize;

use super::charset::{CharacterClass, Classes};
use crate::error::{Error, Result};
use crate::rand::RandomSource;

/// Sink for user-facing error messages.
pub trait Reporter {
    fn report(&mut self, message: &str);
}

impl<F: FnMut(&str)> Reporter for F {
    fn report(&mut self, message: &str) {
        self(message)
    }
}

/// Reporter that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {
    fn report(&mut self, _message: &str) {}
}

/// Generate a password of exactly `length` characters.
///
/// With no class enabled the reporter receives
/// "Select at least one character type." once and the result is empty.
pub fn generate_password<R, E>(
    classes: Classes,
    length: usize,
    source: &mut R,
    reporter: &mut E,
) -> String
where
    R: RandomSource + ?Sized,
    E: Reporter + ?Sized,
{
    match try_generate(classes, length, source) {
        Ok(pass) => pass,
        Err(e) => {
            reporter.report(&e.to_string());
            String::new()
        }
    }
}

/// Like [`generate_password`] but returns the failure instead of reporting it.
pub fn try_generate<R>(classes: Classes, length: usize, source: &mut R) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    let selection = classes.selection();
    if selection.is_empty() {
        return Err(Error::NoClassSelected);
    }

    debug!(
        "generating {} chars across {} classes from {}",
        length,
        selection.len(),
        source.name()
    );

    Ok(selection
        .iter()
        .cycle()
        .take(length)
        .map(|class| class.draw(source))
        .collect())
}

/// Write `count` passwords to `out`, one per line. Returns how many were written.
///
/// Stops at the first write error and hands it to the reporter.
pub fn generate_batch<R, E, W>(
    classes: Classes,
    length: usize,
    count: usize,
    source: &mut R,
    reporter: &mut E,
    out: &mut W,
) -> usize
where
    R: RandomSource + ?Sized,
    E: Reporter + ?Sized,
    W: Write + ?Sized,
{
    if classes.is_empty() {
        reporter.report(&Error::NoClassSelected.to_string());
        return 0;
    }

    let mut written = 0;
    for _ in 0..count {
        let mut pass = generate_password(classes, length, source, reporter);
        pass.push('\n');
        let result = out.write_all(pass.as_bytes());
        pass.zeroize();
        if let Err(e) = result {
            reporter.report(&Error::from(e).to_string());
            return written;
        }
        written += 1;
    }
    if let Err(e) = out.flush() {
        reporter.report(&Error::from(e).to_string());
        // Buffered lines may never have left the writer.
        return 0;
    }
    written
}

pub fn random_lower<R: RandomSource + ?Sized>(source: &mut R) -> char {
    CharacterClass::Lower.draw(source)
}

pub fn random_upper<R: RandomSource + ?Sized>(source: &mut R) -> char {
    CharacterClass::Upper.draw(source)
}

pub fn random_digit<R: RandomSource + ?Sized>(source: &mut R) -> char {
    CharacterClass::Digit.draw(source)
}

pub fn random_symbol<R: RandomSource + ?Sized>(source: &mut R) -> char {
    CharacterClass::Symbol.draw(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::{Rand, Sequence};

    const NO_CLASS: &str = "Select at least one character type.";

    fn every_toggle_combination() -> impl Iterator<Item = Classes> {
        (1u8..16).map(|bits| {
            Classes::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0)
        })
    }

    #[test]
    fn no_class_reports_once_and_returns_empty() {
        let mut messages = Vec::new();
        let mut reporter = |m: &str| messages.push(m.to_string());
        let mut rng = Rand::new();

        let pass = generate_password(Classes::none(), 10, &mut rng, &mut reporter);

        assert_eq!(pass, "");
        assert_eq!(messages, vec![NO_CLASS.to_string()]);
    }

    #[test]
    fn no_class_without_reporter_is_silent() {
        let mut rng = Rand::new();
        assert_eq!(generate_password(Classes::none(), 5, &mut rng, &mut Silent), "");
    }

    #[test]
    fn try_generate_returns_error() {
        let mut rng = Rand::new();
        assert_eq!(
            try_generate(Classes::none(), 8, &mut rng),
            Err(Error::NoClassSelected)
        );
    }

    #[test]
    fn first_of_each_alphabet_with_zero_source() {
        let mut zero = Sequence::constant(0.0).unwrap();
        let pass = generate_password(Classes::all(), 4, &mut zero, &mut Silent);
        assert_eq!(pass, "aA0!");
    }

    #[test]
    fn cycles_through_enabled_classes() {
        let mut seq = Sequence::new([0.0, 0.5, 0.2, 0.1, 0.9]).unwrap();
        let classes = Classes::new(true, false, true, false);

        let pass = generate_password(classes, 5, &mut seq, &mut Silent);

        assert_eq!(pass, "a5f1x");
        assert_eq!(seq.remaining(), 0);
    }

    #[test]
    fn zero_length_draws_nothing() {
        let mut seq = Sequence::new([0.3]).unwrap();
        assert_eq!(try_generate(Classes::all(), 0, &mut seq).unwrap(), "");
        assert_eq!(seq.remaining(), 1);
    }

    #[test]
    fn length_and_alphabet_hold_for_every_combination() {
        let mut rng = Rand::new();
        for classes in every_toggle_combination() {
            for length in [0, 1, 2, 7, 15, 64] {
                let pass = generate_password(classes, length, &mut rng, &mut Silent);
                assert_eq!(pass.chars().count(), length, "{classes:?}");
                assert!(pass.chars().all(|c| classes.allows(c)), "{pass} vs {classes:?}");
            }
        }
    }

    #[test]
    fn class_pattern_repeats_in_fixed_order() {
        let mut rng = Rand::new();
        let classes = Classes::new(false, true, true, true);
        let pass = try_generate(classes, 12, &mut rng).unwrap();
        let expected = [
            CharacterClass::Upper,
            CharacterClass::Digit,
            CharacterClass::Symbol,
        ];
        for (i, c) in pass.chars().enumerate() {
            assert!(expected[i % 3].contains(c), "{c} at {i}");
        }
    }

    #[test]
    fn toggle_order_does_not_change_output() {
        let values = [0.11, 0.42, 0.73, 0.05, 0.99, 0.61, 0.37, 0.8];

        let mut first = Classes::none();
        first
            .set(CharacterClass::Symbol, true)
            .set(CharacterClass::Upper, true)
            .set(CharacterClass::Lower, true);
        let mut second = Classes::none();
        second
            .set(CharacterClass::Lower, true)
            .set(CharacterClass::Symbol, true)
            .set(CharacterClass::Upper, true);

        let a = try_generate(first, 8, &mut Sequence::new(values).unwrap()).unwrap();
        let b = try_generate(second, 8, &mut Sequence::new(values).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_class_generators_stay_in_alphabet() {
        let mut rng = Rand::new();
        for _ in 0..500 {
            assert!(random_lower(&mut rng).is_ascii_lowercase());
            assert!(random_upper(&mut rng).is_ascii_uppercase());
            assert!(random_digit(&mut rng).is_ascii_digit());
            assert!(CharacterClass::Symbol.contains(random_symbol(&mut rng)));
        }
        assert_eq!(random_lower(&mut rng).to_string().len(), 1);
    }

    #[test]
    fn batch_writes_one_line_per_password() {
        let mut out = Vec::new();
        let mut rng = Rand::new();

        let written = generate_batch(Classes::all(), 6, 3, &mut rng, &mut Silent, &mut out);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(written, 3);
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|line| line.len() == 6));
    }

    struct BrokenPipe {
        accepted: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.accepted == 0 {
                return Err(std::io::ErrorKind::BrokenPipe.into());
            }
            self.accepted -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn batch_stops_at_first_write_error() {
        let mut messages = Vec::new();
        let mut reporter = |m: &str| messages.push(m.to_string());
        let mut out = BrokenPipe { accepted: 1 };
        let mut rng = Rand::new();

        let written = generate_batch(Classes::all(), 6, 3, &mut rng, &mut reporter, &mut out);

        assert_eq!(written, 1);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Failed to write passwords"));
    }

    #[test]
    fn batch_with_no_class_reports_once() {
        let mut out = Vec::new();
        let mut calls = 0;
        let mut reporter = |_: &str| calls += 1;
        let mut rng = Rand::new();

        let written = generate_batch(Classes::none(), 6, 4, &mut rng, &mut reporter, &mut out);

        assert_eq!(written, 0);
        assert!(out.is_empty());
        assert_eq!(calls, 1);
    }
}
