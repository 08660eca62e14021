//! Error handling for curve algorithms
//!
//! The algorithms share the api crate's error type; this module adds the
//! guard helpers used at the top of fallible operations.

pub use curvefit_api::error::{Error, KeyResult, PointResult, Result, ResultExt};

// Include the validation submodule
pub mod validate;
