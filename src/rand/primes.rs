//! Multipliers for the state transition: the ten largest primes below 2^64.

pub const PRIMES: [u64; 10] = [
    u64::MAX - 58,
    u64::MAX - 82,
    u64::MAX - 94,
    u64::MAX - 178,
    u64::MAX - 188,
    u64::MAX - 256,
    u64::MAX - 278,
    u64::MAX - 322,
    u64::MAX - 352,
    u64::MAX - 362,
];
