//! Traits for the external collaborators the curve core depends on

pub mod oracle;

pub use oracle::PrimalityOracle;
