//! Public API traits and types for the curvefit library
//!
//! This crate provides the public API surface shared by the curvefit crates:
//! the error type returned by every fallible operation and the oracle traits
//! through which external collaborators (primality testing) are injected.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::PrimalityOracle;
