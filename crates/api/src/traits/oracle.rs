//! Primality oracle abstraction
//!
//! The curve core never decides primality itself; it asks an oracle. Passing
//! the oracle explicitly keeps validation deterministic under test.

use num_bigint::BigUint;

/// Answers whether an integer is prime.
///
/// Implementations must be pure: the same input always yields the same
/// answer. `Sync` implementations may be shared across threads evaluating
/// independent candidates.
pub trait PrimalityOracle {
    /// Returns `true` if `n` is (with overwhelming probability) prime
    fn is_prime(&self, n: &BigUint) -> bool;
}

/// Any closure `Fn(&BigUint) -> bool` can stand in as an oracle
impl<F> PrimalityOracle for F
where
    F: Fn(&BigUint) -> bool,
{
    fn is_prime(&self, n: &BigUint) -> bool {
        self(n)
    }
}
