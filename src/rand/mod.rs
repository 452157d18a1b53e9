//! Random sources feeding the character generators.
//!
//! Every source hands out uniform values in [0, 1). The generators scale
//! that value by an alphabet size and floor it, so a source returning 1.0
//! would index one past the end.

mod hw;
mod os;
mod primes;
mod sequence;

use zeroize::Zeroize;

use primes::PRIMES;

pub use os::OsSource;
pub use sequence::Sequence;

/// A provider of uniform values in [0, 1).
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Short label for log output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Map 64 random bits onto [0, 1) using the top 53 bits.
#[inline]
pub fn unit_from_u64(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

// =============================================================================
// RNG
// =============================================================================

/// Hardware-entropy mixer.
///
/// Each draw folds a fresh cycle-counter reading into the state, multiplies
/// by a prime chosen from the mixed bits and runs the SplitMix64 finalizer
/// over the result. State is wiped on drop.
pub struct Rand {
    state: u64,
}

impl Rand {
    #[inline]
    pub fn new() -> Self {
        Self {
            state: hw::entropy(),
        }
    }

    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let ent = hw::entropy();

        // Mix entropy into prime selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

        // State transition: rotate, multiply by prime, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

impl RandomSource for Rand {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        unit_from_u64(self.next_u64())
    }

    fn name(&self) -> &'static str {
        hw::SOURCE_NAME
    }
}
