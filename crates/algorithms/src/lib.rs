//! Number theory and elliptic-curve algorithms for curve parameter search
//!
//! This crate evaluates short Weierstrass curves y² = x³ + ax + b over prime
//! fields whose parameters are only known at runtime. It provides:
//!
//! - Quadratic residuosity and Tonelli-Shanks square roots
//! - The affine group law with an explicit point at infinity
//! - A deterministic generator-point search
//! - A structural validator rejecting singular, anomalous, supersingular and
//!   malformed candidates
//! - A fitness evaluator scoring validated candidates for an outer search
//! - Private-key and field-prime generation helpers
//!
//! Primality testing and randomness are injected: see
//! [`PrimalityOracle`](curvefit_api::PrimalityOracle) and the
//! `rng: &mut R` parameters. Nothing here is constant time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Modular residue toolkit
pub mod field;
pub use field::{legendre_symbol, mod_sqrt, try_mod_sqrt};

// Elliptic curve primitives
pub mod ec;
pub use ec::{add, double, find_generator_point, negate, scalar_mul, CurveParameters, EcPoint};

// Structural validation
pub mod audit;
pub use audit::{check_curve, validate_curve, CurveValidator, Rejection, SubgroupStructure};

// Fitness scoring
pub mod fitness;
pub use fitness::{evaluate, Candidate, FitnessEvaluator, FitnessReport, FitnessWeights};

// Key and prime helpers
pub mod keygen;
pub use keygen::{generate_keypair, generate_private_key, PrivateKey};

pub mod prime;
pub use prime::{get_prime_for_p, MillerRabin, PrimeSearch};
