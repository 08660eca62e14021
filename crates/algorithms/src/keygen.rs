//! Private scalars and key pairs on arbitrary parameter sets
//!
//! A private key is a uniform scalar in `[0, n − 2]` and the matching public
//! key is `d·G`. This is plain key generation for exercising a curve; no
//! signature or key-exchange protocol is built on top of it.

use crate::ec::{scalar_mul, CurveParameters, EcPoint};
use crate::error::{validate, KeyResult};
use core::fmt;
use num_bigint::{BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// A private scalar, stored as big-endian bytes that are wiped on drop
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(Zeroizing<Vec<u8>>);

impl PrivateKey {
    /// Wrap a scalar
    pub fn from_biguint(d: &BigUint) -> Self {
        PrivateKey(Zeroizing::new(d.to_bytes_be()))
    }

    /// The scalar as an integer. The returned value is not zeroized.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// Big-endian bytes of the scalar
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Draw a private key uniformly from `[0, n − 2]`; requires `n ≥ 2`
pub fn generate_private_key<R: RngCore + CryptoRng>(
    params: &CurveParameters,
    rng: &mut R,
) -> KeyResult<PrivateKey> {
    let n = params.order();
    validate::at_least("generate_private_key", n, 2, "subgroup order must be at least 2")?;
    let bound = n - 1u32;
    Ok(PrivateKey::from_biguint(&rng.gen_biguint_below(&bound)))
}

/// Generate a private key and its public point `d·G`
pub fn generate_keypair<R: RngCore + CryptoRng>(
    params: &CurveParameters,
    rng: &mut R,
) -> KeyResult<(PrivateKey, EcPoint)> {
    let private = generate_private_key(params, rng)?;
    let public = scalar_mul(params.generator(), &private.to_biguint(), params)?;
    Ok((private, public))
}

/// [`generate_keypair`] with the operating system's RNG
#[cfg(feature = "std")]
pub fn generate_keypair_os(params: &CurveParameters) -> KeyResult<(PrivateKey, EcPoint)> {
    generate_keypair(params, &mut rand::rngs::OsRng)
}
