//! Quadratic residuosity and modular square roots

use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Legendre symbol (a | p) by Euler's criterion.
///
/// Returns `0` when `a ≡ 0 (mod p)`, `1` when a^((p−1)/2) ≡ 1 and `-1`
/// otherwise. `p` is expected to be an odd prime; for other moduli the result
/// is still in {-1, 0, 1} but carries no residuosity meaning.
pub fn legendre_symbol(a: &BigUint, p: &BigUint) -> i8 {
    let a = a % p;
    if a.is_zero() {
        return 0;
    }
    let exponent = (p - 1u32) >> 1;
    if a.modpow(&exponent, p).is_one() {
        1
    } else {
        -1
    }
}

/// Square root of `n` modulo the prime `p` (Tonelli-Shanks).
///
/// # Panics
///
/// Panics when `n` is not a nonzero quadratic residue modulo `p`: such a
/// root does not exist and returning any value would be wrong. Use
/// [`try_mod_sqrt`] when the input has not been checked.
pub fn mod_sqrt(n: &BigUint, p: &BigUint) -> BigUint {
    match try_mod_sqrt(n, p) {
        Ok(root) => root,
        Err(err) => panic!("mod_sqrt precondition violated: {}", err),
    }
}

/// Fallible Tonelli-Shanks square root.
///
/// Returns one of the two roots r, p − r; which one is unspecified.
/// Fails with [`Error::NotQuadraticResidue`] for non-residues and with
/// [`Error::CompositeModulus`] when `p` turns out not to behave like a prime.
pub fn try_mod_sqrt(n: &BigUint, p: &BigUint) -> Result<BigUint> {
    const CTX: &str = "mod_sqrt";

    let n = n % p;
    if legendre_symbol(&n, p) != 1 {
        return Err(Error::NotQuadraticResidue { context: CTX });
    }

    // In characteristic two every element is its own square root
    if *p == BigUint::from(2u32) {
        return Ok(n);
    }
    if p.is_even() {
        return Err(Error::CompositeModulus { context: CTX });
    }

    // p − 1 = q · 2^s with q odd
    let p_minus_1 = p - 1u32;
    let s = p_minus_1.trailing_zeros().unwrap_or(0);
    let q = &p_minus_1 >> s;

    // p ≡ 3 (mod 4)
    if s == 1 {
        let root = n.modpow(&((p + 1u32) >> 2), p);
        return checked_root(root, &n, p);
    }

    // Any quadratic non-residue will do; the smallest is found quickly
    let mut z = BigUint::from(2u32);
    while legendre_symbol(&z, p) != -1 {
        z += 1u32;
        if z >= *p {
            return Err(Error::CompositeModulus { context: CTX });
        }
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = n.modpow(&q, p);
    let mut r = n.modpow(&((&q + 1u32) >> 1), p);

    while !t.is_one() {
        // Least i, 0 < i < m, with t^(2^i) = 1
        let mut i = 0u64;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            t2i = (&t2i * &t2i) % p;
            i += 1;
            if i >= m {
                return Err(Error::CompositeModulus { context: CTX });
            }
        }

        // b = c^(2^(m − i − 1))
        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = (&b * &b) % p;
        }

        r = (&r * &b) % p;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        m = i;
    }

    checked_root(r, &n, p)
}

/// Confirm r² ≡ n; a failure can only mean p was not prime.
fn checked_root(root: BigUint, n: &BigUint, p: &BigUint) -> Result<BigUint> {
    if (&root * &root) % p == *n {
        Ok(root)
    } else {
        Err(Error::CompositeModulus { context: "mod_sqrt" })
    }
}
