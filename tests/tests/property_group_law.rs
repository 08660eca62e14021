//! Property-based tests for the elliptic-curve group law

use curvefit_algorithms::{add, double, negate, scalar_mul, CurveParameters, EcPoint};
use curvefit_params::TOY_P23;
use curvefit_tests::{affine_points, group_order};
use num_bigint::BigUint;
use proptest::prelude::*;

fn toy() -> CurveParameters {
    CurveParameters::from_spec(&TOY_P23).unwrap()
}

/// Any point of y² = x³ + x + 1 over 𝔽₂₃, the identity included
fn toy_point() -> impl Strategy<Value = EcPoint> {
    let mut points = affine_points(1, 1, 23);
    points.push(EcPoint::infinity());
    prop::sample::select(points)
}

proptest! {
    #[test]
    fn addition_stays_on_curve(p in toy_point(), q in toy_point()) {
        let params = toy();
        let sum = add(&p, &q, &params).unwrap();
        prop_assert!(params.is_on_curve(&sum));
    }

    #[test]
    fn addition_is_commutative(p in toy_point(), q in toy_point()) {
        let params = toy();
        prop_assert_eq!(add(&p, &q, &params).unwrap(), add(&q, &p, &params).unwrap());
    }

    #[test]
    fn addition_is_associative(p in toy_point(), q in toy_point(), r in toy_point()) {
        let params = toy();
        let left = add(&add(&p, &q, &params).unwrap(), &r, &params).unwrap();
        let right = add(&p, &add(&q, &r, &params).unwrap(), &params).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn identity_and_inverse(p in toy_point()) {
        let params = toy();
        prop_assert_eq!(add(&p, &EcPoint::infinity(), &params).unwrap(), p.clone());
        prop_assert_eq!(add(&EcPoint::infinity(), &p, &params).unwrap(), p.clone());
        prop_assert!(add(&p, &negate(&p, &params), &params).unwrap().is_infinity());
        prop_assert_eq!(double(&p, &params).unwrap(), add(&p, &p, &params).unwrap());
    }

    #[test]
    fn scalar_mul_is_additive(p in toy_point(), j in 0u64..200, k in 0u64..200) {
        let params = toy();
        let jp = scalar_mul(&p, &BigUint::from(j), &params).unwrap();
        let kp = scalar_mul(&p, &BigUint::from(k), &params).unwrap();
        let sum = scalar_mul(&p, &BigUint::from(j + k), &params).unwrap();
        prop_assert_eq!(add(&jp, &kp, &params).unwrap(), sum);
    }

    #[test]
    fn group_order_annihilates(p in toy_point()) {
        let params = toy();
        let order = BigUint::from(group_order(1, 1, 23));
        prop_assert!(scalar_mul(&p, &order, &params).unwrap().is_infinity());
    }
}
