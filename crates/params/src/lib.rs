//! Constant values for curvefit
//!
//! This crate provides the named curve definitions used as known-good
//! reference points and the default tunables of the fitness evaluator and
//! the prime generator.

#![no_std]

pub mod fitness;
pub mod prime;
pub mod traditional;

pub use traditional::weierstrass::{CurveSpec, NIST_P224, NIST_P256, SECP256K1, TOY_P23};
