//! Property-based tests for the modular residue toolkit

use curvefit_algorithms::{legendre_symbol, mod_sqrt, try_mod_sqrt, Error};
use curvefit_tests::{is_square_mod, small_primes};
use num_bigint::BigUint;
use proptest::prelude::*;

/// Odd primes below 200
fn odd_prime() -> impl Strategy<Value = u64> {
    let primes: Vec<u64> = small_primes().into_iter().filter(|&p| p != 2).collect();
    prop::sample::select(primes)
}

proptest! {
    #[test]
    fn legendre_matches_exhaustive_squares(p in odd_prime(), a in 0u64..10_000) {
        let symbol = legendre_symbol(&BigUint::from(a), &BigUint::from(p));
        let expected = if a % p == 0 {
            0
        } else if is_square_mod(a, p) {
            1
        } else {
            -1
        };
        prop_assert_eq!(symbol, expected);
    }

    #[test]
    fn mod_sqrt_squares_back(p in odd_prime(), y in 1u64..10_000) {
        let p_big = BigUint::from(p);
        let n = BigUint::from((y % p) * (y % p) % p);
        prop_assume!(n != BigUint::from(0u32));

        let r = mod_sqrt(&n, &p_big);
        prop_assert!(r < p_big);
        prop_assert_eq!((&r * &r) % &p_big, n);
    }

    #[test]
    fn try_mod_sqrt_refuses_non_residues(p in odd_prime(), a in 1u64..10_000) {
        prop_assume!(a % p != 0 && !is_square_mod(a, p));
        let result = try_mod_sqrt(&BigUint::from(a), &BigUint::from(p));
        prop_assert!(
            matches!(result, Err(Error::NotQuadraticResidue { .. })),
            "unexpected result for a={}, p={}",
            a,
            p
        );
    }

    #[test]
    fn legendre_is_multiplicative(p in odd_prime(), a in 1u64..1000, b in 1u64..1000) {
        let p_big = BigUint::from(p);
        let la = legendre_symbol(&BigUint::from(a), &p_big);
        let lb = legendre_symbol(&BigUint::from(b), &p_big);
        let lab = legendre_symbol(&BigUint::from(a * b), &p_big);
        prop_assert_eq!(lab, la * lb);
    }
}
