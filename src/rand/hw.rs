//! Cycle-counter readings folded into the `Rand` state on every draw.
//!
//! Architectures without a readable counter borrow 64 bits from the OS
//! generator instead.

#[cfg(target_arch = "x86_64")]
pub const SOURCE_NAME: &str = "rdtsc";

#[cfg(any(target_arch = "aarch64", target_arch = "arm"))]
pub const SOURCE_NAME: &str = "cycle counter";

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "arm")))]
pub const SOURCE_NAME: &str = "os rng";

#[inline(always)]
pub fn entropy() -> u64 {
    read_counter()
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_counter() -> u64 {
    // SAFETY: rdtsc has no preconditions on x86_64.
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_counter() -> u64 {
    let ticks: u64;
    // SAFETY: cntvct_el0 is readable from EL0 on every supported OS.
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) ticks) }
    ticks
}

#[cfg(target_arch = "arm")]
#[inline(always)]
fn read_counter() -> u64 {
    unsafe { core::arch::arm::__pmccntr64() }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "arm")))]
#[inline(always)]
fn read_counter() -> u64 {
    use ::rand::RngCore;
    ::rand::rngs::OsRng.next_u64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_change_between_calls() {
        let first = entropy();
        assert!((0..1_000).any(|_| entropy() != first));
        assert!(!SOURCE_NAME.is_empty());
    }
}
