//! Operating system RNG source.

use ::rand::RngCore;
use ::rand::rngs::OsRng;

use super::{RandomSource, unit_from_u64};

#[derive(Debug, Default, Clone, Copy)]
pub struct OsSource;

impl RandomSource for OsSource {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        unit_from_u64(OsRng.next_u64())
    }

    fn name(&self) -> &'static str {
        "os rng"
    }
}
