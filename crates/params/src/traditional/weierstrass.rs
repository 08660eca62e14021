//! Short Weierstrass curve domain parameters
//!
//! Every curve is y² = x³ + ax + b over 𝔽ₚ, with all values stored as
//! big-endian hexadecimal strings so that this crate stays dependency free.

/// Domain parameters (p, a, b, G, n, h) of a named curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveSpec {
    /// Human readable curve name
    pub name: &'static str,
    /// Field prime p
    pub p: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Generator x-coordinate
    pub g_x: &'static str,
    /// Generator y-coordinate
    pub g_y: &'static str,
    /// Order n of the subgroup generated by G
    pub n: &'static str,
    /// Cofactor h
    pub h: &'static str,
}

/// secp256k1 (SEC 2, section 2.4.1)
pub const SECP256K1: CurveSpec = CurveSpec {
    name: "secp256k1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    a: "0",
    b: "7",
    g_x: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    g_y: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    h: "1",
};

/// NIST P-224 (FIPS 186-4, D.1.2.2). p ≡ 1 (mod 4), so square roots take
/// the general Tonelli-Shanks path.
pub const NIST_P224: CurveSpec = CurveSpec {
    name: "P-224",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE",
    b: "B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4",
    g_x: "B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21",
    g_y: "BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D",
    h: "1",
};

/// NIST P-256 (FIPS 186-4, D.1.2.3)
pub const NIST_P256: CurveSpec = CurveSpec {
    name: "P-256",
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    g_x: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    g_y: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    n: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    h: "1",
};

/// y² = x³ + x + 1 over 𝔽₂₃: 28 points, generated by (0, 1).
/// Small enough to enumerate by hand.
pub const TOY_P23: CurveSpec = CurveSpec {
    name: "toy-p23",
    p: "17",
    a: "1",
    b: "1",
    g_x: "0",
    g_y: "1",
    n: "1C",
    h: "1",
};
