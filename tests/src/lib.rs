//! Reference implementations and fixtures for the curvefit test suites
//!
//! The helpers here answer the same questions as the library by exhaustive
//! search, which is only feasible for tiny fields. Integration and property
//! tests compare the two.

use curvefit_algorithms::{Candidate, EcPoint};
use num_bigint::BigInt;

/// Primes below 200, including 2
pub fn small_primes() -> Vec<u64> {
    (2..200u64)
        .filter(|&n| (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0))
        .collect()
}

/// Does some y in [0, p) satisfy y² ≡ n (mod p)?
pub fn is_square_mod(n: u64, p: u64) -> bool {
    (0..p).any(|y| (y * y) % p == n % p)
}

/// Every affine point of y² = x³ + ax + b over 𝔽ₚ, ordered by (x, y)
pub fn affine_points(a: u64, b: u64, p: u64) -> Vec<EcPoint> {
    let mut points = Vec::new();
    for x in 0..p {
        let rhs = (x * x % p * x + a * x + b) % p;
        for y in 0..p {
            if y * y % p == rhs {
                points.push(EcPoint::new(x, y));
            }
        }
    }
    points
}

/// Number of points of the curve including the identity
pub fn group_order(a: u64, b: u64, p: u64) -> u64 {
    affine_points(a, b, p).len() as u64 + 1
}

/// Candidate from small signed integers
pub fn candidate(a: i64, b: i64, p: i64, g: &[i64], n: i64, h: i64) -> Candidate {
    Candidate::new(
        BigInt::from(a),
        BigInt::from(b),
        BigInt::from(p),
        g.iter().map(|&c| BigInt::from(c)).collect(),
        BigInt::from(n),
        BigInt::from(h),
    )
}

/// y² = x³ + x + 1 over 𝔽₂₃ with G = (0, 1) of order 28 and subgroup order `n`
pub fn toy_candidate(n: i64) -> Candidate {
    candidate(1, 1, 23, &[0, 1], n, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_helpers() {
        assert_eq!(&small_primes()[..5], &[2, 3, 5, 7, 11]);
        assert!(is_square_mod(2, 23));
        assert!(!is_square_mod(5, 23));
        assert_eq!(group_order(1, 1, 23), 28);
        assert_eq!(group_order(1, 0, 23), 24);
    }
}
