//! Constants for field prime generation and primality testing

/// Bit length of freshly generated field primes
pub const FIELD_PRIME_BITS: u64 = 256;

/// Miller-Rabin witness bases.
///
/// Testing against the first twelve primes is deterministic for every
/// n < 318665857834031151167461 (about 3.3·10²⁴); above that bound it is a
/// strong probable-prime test.
pub const MILLER_RABIN_BASES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Small primes used for trial division before Miller-Rabin
pub const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97,
];

/// Number of prime-search draws between progress warnings
pub const PRIME_SEARCH_WARN_INTERVAL: u64 = 10_000;
