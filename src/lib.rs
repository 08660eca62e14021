//! # curvefit
//!
//! Construction, validation and fitness scoring of short Weierstrass elliptic
//! curve domain parameters over prime fields.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! curvefit = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): OS-backed randomness helpers such as
//!   `generate_keypair_os`
//! - `serde`: `Serialize`/`Deserialize` for candidates, points, parameters and tunables
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`curvefit-api`]: Error type and oracle traits
//! - [`curvefit-params`]: Named curve constants and default tunables
//! - [`curvefit-algorithms`]: Residue toolkit, group law, validator, fitness evaluator

// Core re-exports (always available)
pub use curvefit_algorithms as algorithms;
pub use curvefit_api as api;
pub use curvefit_params as params;

// Integer types used throughout the public API
pub use num_bigint;

/// Common imports for curvefit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, PrimalityOracle, Result};

    // Curve data and group law
    pub use crate::algorithms::ec::{
        add, double, find_generator_point, negate, scalar_mul, CurveParameters, EcPoint,
    };

    // Residue toolkit
    pub use crate::algorithms::field::{legendre_symbol, mod_sqrt, try_mod_sqrt};

    // Validation and scoring
    pub use crate::algorithms::audit::{check_curve, validate_curve, CurveValidator, Rejection};
    pub use crate::algorithms::fitness::{
        evaluate, Candidate, FitnessEvaluator, FitnessReport, FitnessWeights,
    };

    // Key and prime helpers
    pub use crate::algorithms::keygen::{generate_keypair, generate_private_key, PrivateKey};
    pub use crate::algorithms::prime::{get_prime_for_p, MillerRabin, PrimeSearch};
}
