//! Error handling for the curvefit ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Specialized result types for different operations
/// Result of a group-law operation
pub type PointResult<T> = Result<T>;
/// Result of a key or prime generation step
pub type KeyResult<T> = Result<T>;
