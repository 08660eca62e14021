//! Constants for traditional (pre-quantum) elliptic curve parameter sets

pub mod weierstrass;
