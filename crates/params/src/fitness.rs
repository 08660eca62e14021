//! Default weights of the curve fitness function
//!
//! `fitness = LOG_ORDER_WEIGHT·ln(n) + HASSE_WEIGHT·hasse_score·ln(n)
//!          + ATTACK_RESISTANCE_WEIGHT·attack_resistance_score`

/// Weight of the raw subgroup-order term `ln(n)`
pub const LOG_ORDER_WEIGHT: f64 = 0.4;

/// Weight of the Hasse-interval term `hasse_score·ln(n)`
pub const HASSE_WEIGHT: f64 = 0.2;

/// Weight of the attack-resistance bonus
pub const ATTACK_RESISTANCE_WEIGHT: f64 = 0.4;

/// Fitness assigned to a candidate that fails structural validation
pub const REJECTED_FITNESS: f64 = 0.0;
