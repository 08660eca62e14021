//! Field prime generation and the default primality oracle

use crate::error::{validate, Result};
use curvefit_api::PrimalityOracle;
use curvefit_params::prime::{
    FIELD_PRIME_BITS, MILLER_RABIN_BASES, PRIME_SEARCH_WARN_INTERVAL, SMALL_PRIMES,
};
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// Miller-Rabin primality oracle over fixed prime bases.
///
/// Trial-divides by the primes below 100 first. With all twelve bases the
/// answer is exact for n < 3.3·10²⁴ and a strong probable-prime test above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MillerRabin {
    rounds: usize,
}

impl MillerRabin {
    /// Use the first `rounds` witness bases (clamped to 1..=12)
    pub fn new(rounds: usize) -> Self {
        MillerRabin {
            rounds: rounds.clamp(1, MILLER_RABIN_BASES.len()),
        }
    }

    /// Number of witness bases tested
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl Default for MillerRabin {
    fn default() -> Self {
        MillerRabin::new(MILLER_RABIN_BASES.len())
    }
}

impl PrimalityOracle for MillerRabin {
    fn is_prime(&self, n: &BigUint) -> bool {
        if *n < BigUint::from(2u32) {
            return false;
        }
        for &small in SMALL_PRIMES.iter() {
            let small = BigUint::from(small);
            if *n == small {
                return true;
            }
            if (n % &small).is_zero() {
                return false;
            }
        }

        // n − 1 = d · 2^s with d odd
        let n_minus_1 = n - 1u32;
        let s = n_minus_1.trailing_zeros().unwrap_or(0);
        let d = &n_minus_1 >> s;

        'witness: for &base in MILLER_RABIN_BASES[..self.rounds].iter() {
            let mut x = BigUint::from(base).modpow(&d, n);
            if x.is_one() || x == n_minus_1 {
                continue;
            }
            for _ in 1..s {
                x = (&x * &x) % n;
                if x == n_minus_1 {
                    continue 'witness;
                }
            }
            return false;
        }
        true
    }
}

/// Random search for field primes of a fixed bit length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimeSearch {
    bits: u64,
}

impl PrimeSearch {
    /// Search among integers of at most `bits` bits (`bits ≥ 2`)
    pub fn new(bits: u64) -> Result<Self> {
        validate::parameter(bits >= 2, "PrimeSearch::new", "need at least two bits")?;
        Ok(PrimeSearch { bits })
    }

    /// Bit length of the draws
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Draw uniform `bits`-bit integers until an odd one passes `oracle`.
    ///
    /// Never gives up: termination is almost sure but unbounded.
    pub fn generate<R, O>(&self, rng: &mut R, oracle: &O) -> BigUint
    where
        R: RngCore + CryptoRng,
        O: PrimalityOracle,
    {
        let mut draws: u64 = 0;
        loop {
            let candidate = rng.gen_biguint(self.bits);
            draws += 1;
            if draws % PRIME_SEARCH_WARN_INTERVAL == 0 {
                log::warn!("prime search still running after {} draws", draws);
            }
            if candidate.is_odd() && oracle.is_prime(&candidate) {
                log::debug!("found {}-bit field prime after {} draws", candidate.bits(), draws);
                return candidate;
            }
        }
    }
}

impl Default for PrimeSearch {
    fn default() -> Self {
        PrimeSearch {
            bits: FIELD_PRIME_BITS,
        }
    }
}

/// Generate a random odd prime of at most 256 bits for use as a field modulus
pub fn get_prime_for_p<R, O>(rng: &mut R, oracle: &O) -> BigUint
where
    R: RngCore + CryptoRng,
    O: PrimalityOracle,
{
    PrimeSearch::default().generate(rng, oracle)
}
