//! Error type definitions for curve construction and arithmetic

use thiserror::Error as ThisError;

/// Primary error type for curve operations
///
/// Structural rejection of a candidate curve is *not* an error; the validator
/// reports it as a boolean (or a `Rejection` reason). These variants are the
/// faults that a caller must see.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid parameter error
    #[error("invalid parameter in {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// The generator search exhausted the whole field without a witness
    #[error("no generator point found in {context}")]
    NoGeneratorFound { context: &'static str },

    /// Square root requested of a value that is not a nonzero quadratic residue
    #[error("value is not a nonzero quadratic residue in {context}")]
    NotQuadraticResidue { context: &'static str },

    /// An operation that needs a prime field was given a composite modulus
    #[error("modulus is not prime in {context}")]
    CompositeModulus { context: &'static str },

    /// Modular inverse of zero
    #[error("division by zero modulo p in {context}")]
    NotInvertible { context: &'static str },
}

/// Result type for curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::NoGeneratorFound { .. } => Self::NoGeneratorFound { context },
            Self::NotQuadraticResidue { .. } => Self::NotQuadraticResidue { context },
            Self::CompositeModulus { .. } => Self::CompositeModulus { context },
            Self::NotInvertible { .. } => Self::NotInvertible { context },
        }
    }

    /// The context string naming where the error originated
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidParameter { context, .. }
            | Self::NoGeneratorFound { context }
            | Self::NotQuadraticResidue { context }
            | Self::CompositeModulus { context }
            | Self::NotInvertible { context } => context,
        }
    }
}
