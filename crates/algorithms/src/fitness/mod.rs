//! Fitness scoring of candidate curves
//!
//! The evaluator turns a raw candidate tuple into one scalar for an external
//! search process. Structurally unsound candidates score
//! [`REJECTED_FITNESS`]; sound ones are scored from the supplied subgroup
//! order `n` and its position relative to the Hasse interval
//! `[p + 1 − 2⌊√p⌋, p + 1 + 2⌊√p⌋]`:
//!
//! ```text
//! hasse_score             = max(0, (upper − |n − (p + 1)|) / (upper − lower))
//! attack_resistance_score = 1 if n > p + 1 else 0
//! fitness                 = 0.4·ln n + 0.2·hasse_score·ln n + 0.4·attack_resistance_score
//! ```
//!
//! `n` is taken as given; nothing here counts points or multiplies by `n`.

use crate::audit::CurveValidator;
use crate::ec::{CurveParameters, EcPoint};
use crate::error::{Error, Result};
use crate::field::reduce_signed;
use crate::prime::MillerRabin;
use core::f64::consts::LN_2;
use curvefit_api::PrimalityOracle;
use curvefit_params::fitness::{
    ATTACK_RESISTANCE_WEIGHT, HASSE_WEIGHT, LOG_ORDER_WEIGHT, REJECTED_FITNESS,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, ToPrimitive, Zero};

/// A raw, possibly invalid parameter tuple (a, b, p, G, n, h) as proposed by
/// a search driver. `g` is well formed only with exactly two coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Coefficient a
    pub a: BigInt,
    /// Coefficient b
    pub b: BigInt,
    /// Field modulus p
    pub p: BigInt,
    /// Generator coordinates
    pub g: Vec<BigInt>,
    /// Subgroup order n
    pub n: BigInt,
    /// Cofactor h
    pub h: BigInt,
}

impl Candidate {
    /// Bundle a tuple into a candidate
    pub fn new(a: BigInt, b: BigInt, p: BigInt, g: Vec<BigInt>, n: BigInt, h: BigInt) -> Self {
        Candidate { a, b, p, g, n, h }
    }
}

impl From<&CurveParameters> for Candidate {
    fn from(params: &CurveParameters) -> Self {
        let signed = |v: &BigUint| BigInt::from_biguint(Sign::Plus, v.clone());
        let g = match params.generator().coordinates() {
            Some((x, y)) => vec![signed(x), signed(y)],
            None => Vec::new(),
        };
        Candidate {
            a: signed(params.a()),
            b: signed(params.b()),
            p: signed(params.p()),
            g,
            n: signed(params.order()),
            h: signed(params.cofactor()),
        }
    }
}

impl TryFrom<&Candidate> for CurveParameters {
    type Error = Error;

    /// Reduce a candidate into typed parameters. Fails on a non-positive
    /// modulus, a negative order or cofactor, or a malformed generator; it
    /// does not run the structural checks.
    fn try_from(candidate: &Candidate) -> Result<Self> {
        const CONTEXT: &str = "CurveParameters::try_from";
        if !candidate.p.is_positive() {
            return Err(Error::param(CONTEXT, "modulus must be positive"));
        }
        let p = candidate.p.magnitude();
        let (x, y) = match candidate.g.as_slice() {
            [x, y] => (x, y),
            other => {
                return Err(Error::param(
                    CONTEXT,
                    format!("generator has {} coordinates, expected 2", other.len()),
                ))
            }
        };
        let non_negative = |v: &BigInt, what: &str| {
            if v.is_negative() {
                Err(Error::param(CONTEXT, format!("{} must not be negative", what)))
            } else {
                Ok(v.magnitude().clone())
            }
        };
        CurveParameters::new(
            p.clone(),
            reduce_signed(&candidate.a, p),
            reduce_signed(&candidate.b, p),
            EcPoint::new(reduce_signed(x, p), reduce_signed(y, p)),
            non_negative(&candidate.n, "subgroup order")?,
            non_negative(&candidate.h, "cofactor")?,
        )
    }
}

/// Weights of the three fitness terms
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessWeights {
    /// Weight of `ln n`
    pub log_order: f64,
    /// Weight of `hasse_score·ln n`
    pub hasse: f64,
    /// Weight of the attack-resistance bonus
    pub attack_resistance: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        FitnessWeights {
            log_order: LOG_ORDER_WEIGHT,
            hasse: HASSE_WEIGHT,
            attack_resistance: ATTACK_RESISTANCE_WEIGHT,
        }
    }
}

/// The components behind one fitness value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessReport {
    /// Position of n relative to the Hasse interval, ≥ 0
    pub hasse_score: f64,
    /// 1.0 when n exceeds p + 1, else 0.0
    pub attack_resistance_score: f64,
    /// ln n
    pub log_order: f64,
    /// Weighted sum of the terms above
    pub fitness: f64,
}

/// Scores candidates with an injected primality oracle.
///
/// Stateless apart from its configuration, so one evaluator can be shared by
/// parallel workers when `O: Sync`.
#[derive(Debug, Clone, Default)]
pub struct FitnessEvaluator<O = MillerRabin> {
    validator: CurveValidator<O>,
    weights: FitnessWeights,
}

impl<O: PrimalityOracle> FitnessEvaluator<O> {
    /// Evaluator with the default weights
    pub fn new(oracle: O) -> Self {
        Self::with_weights(oracle, FitnessWeights::default())
    }

    /// Evaluator with custom weights
    pub fn with_weights(oracle: O, weights: FitnessWeights) -> Self {
        FitnessEvaluator {
            validator: CurveValidator::new(oracle),
            weights,
        }
    }

    /// The weights in use
    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    /// The validator run before scoring
    pub fn validator(&self) -> &CurveValidator<O> {
        &self.validator
    }

    /// Fitness of `candidate`; never fails, unsound candidates score zero
    pub fn evaluate(&self, candidate: &Candidate) -> f64 {
        self.report(candidate)
            .map_or(REJECTED_FITNESS, |report| report.fitness)
    }

    /// [`evaluate`](Self::evaluate) packaged as a 1-tuple
    pub fn evaluate_tuple(&self, candidate: &Candidate) -> (f64,) {
        (self.evaluate(candidate),)
    }

    /// Score components, or `None` if the candidate is rejected
    pub fn report(&self, candidate: &Candidate) -> Option<FitnessReport> {
        let Candidate { a, b, p, g, n, h } = candidate;
        if !self.validator.validate(a, b, p, g, n, h) {
            return None;
        }
        // validated: p > 0 and n ≥ 1
        let (lower, expected, upper) = hasse_bounds(p.magnitude());

        let numerator = &upper - (n - &expected).abs();
        let hasse_score = if numerator.is_positive() {
            ratio(&numerator, &(&upper - &lower))
        } else {
            0.0
        };
        let attack_resistance_score = if *n > expected { 1.0 } else { 0.0 };
        let log_order = ln(n.magnitude());

        let w = &self.weights;
        let fitness = w.log_order * log_order
            + w.hasse * hasse_score * log_order
            + w.attack_resistance * attack_resistance_score;

        log::trace!(
            "fitness {} (hasse {}, attack {}, ln n {}) for p = {}",
            fitness,
            hasse_score,
            attack_resistance_score,
            log_order,
            p
        );

        Some(FitnessReport {
            hasse_score,
            attack_resistance_score,
            log_order,
            fitness,
        })
    }
}

/// Score a candidate with the default oracle and weights
pub fn evaluate(candidate: &Candidate) -> f64 {
    FitnessEvaluator::<MillerRabin>::default().evaluate(candidate)
}

/// Hasse interval around p + 1: `(p + 1 − 2⌊√p⌋, p + 1, p + 1 + 2⌊√p⌋)`
pub fn hasse_bounds(p: &BigUint) -> (BigInt, BigInt, BigInt) {
    let expected = BigInt::from_biguint(Sign::Plus, p + 1u32);
    let width = BigInt::from_biguint(Sign::Plus, p.sqrt() << 1);
    (&expected - &width, expected.clone(), expected + width)
}

/// Natural logarithm of an arbitrarily large positive integer.
///
/// Values wider than 64 bits are shifted down to their top 64 bits first,
/// so the result stays finite past the range of `f64`.
pub fn ln(n: &BigUint) -> f64 {
    if n.is_zero() {
        return f64::NEG_INFINITY;
    }
    let bits = n.bits();
    if bits <= 64 {
        return n.to_f64().map_or(f64::NAN, f64::ln);
    }
    let shift = bits - 64;
    let top = (n >> shift).to_f64().map_or(f64::NAN, f64::ln);
    top + shift as f64 * LN_2
}

fn ratio(numerator: &BigInt, denominator: &BigInt) -> f64 {
    match (numerator.to_f64(), denominator.to_f64()) {
        (Some(num), Some(den)) if den != 0.0 => num / den,
        _ => 0.0,
    }
}
