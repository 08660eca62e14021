//! End-to-end scenarios across the residue toolkit, validator and evaluator

use curvefit_algorithms::{
    check_curve, evaluate, find_generator_point, generate_keypair, get_prime_for_p,
    scalar_mul, validate_curve, Candidate, CurveParameters, EcPoint, FitnessEvaluator,
    MillerRabin, Rejection,
};
use curvefit_api::PrimalityOracle;
use curvefit_params::{NIST_P224, NIST_P256, SECP256K1, TOY_P23};
use curvefit_tests::{affine_points, candidate, group_order, is_square_mod, small_primes, toy_candidate};
use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn check(c: &Candidate) -> Result<(), Rejection> {
    check_curve(&c.a, &c.b, &c.p, &c.g, &c.n, &c.h)
}

#[test]
fn test_generator_search_matches_exhaustive_scan() {
    for p in small_primes().into_iter().filter(|&p| p > 3 && p < 60) {
        for (a, b) in [(1u64, 1u64), (0, 7), (2, 3), (5, 0)] {
            let found = find_generator_point(&BigUint::from(a), &BigUint::from(b), &BigUint::from(p));
            let first_x = affine_points(a, b, p)
                .into_iter()
                .filter(|pt| matches!(pt.coordinates(), Some((_, y)) if *y != BigUint::from(0u32)))
                .map(|pt| pt.coordinates().map(|(x, _)| x.clone()))
                .next()
                .flatten();
            match (found, first_x) {
                (Ok(point), Some(x)) => {
                    assert_eq!(point.coordinates().map(|(px, _)| px.clone()), Some(x));
                    let (px, py) = point.coordinates().unwrap();
                    let rhs = (px * px * px + BigUint::from(a) * px + BigUint::from(b)) % p;
                    assert_eq!((py * py) % p, rhs);
                }
                (Err(_), None) => {}
                (found, expected) => panic!(
                    "p={} a={} b={}: search gave {:?}, scan gave {:?}",
                    p, a, b, found, expected
                ),
            }
        }
    }
}

#[test]
fn test_named_curves_pass_validation() {
    for spec in [SECP256K1, NIST_P224, NIST_P256] {
        let params = CurveParameters::from_spec(&spec).unwrap();
        let c = Candidate::from(&params);
        assert_eq!(check(&c), Ok(()), "{}", spec.name);
        assert!(evaluate(&c) > 0.0);

        // the generator really has the claimed order
        let n_g = scalar_mul(params.generator(), params.order(), &params).unwrap();
        assert!(n_g.is_infinity(), "{}", spec.name);
    }
}

#[test]
fn test_toy_curve_end_to_end() {
    let params = CurveParameters::from_spec(&TOY_P23).unwrap();
    assert_eq!(group_order(1, 1, 23), 28);

    let generator = find_generator_point(params.a(), params.b(), params.p()).unwrap();
    assert_eq!(&generator, params.generator());

    let c = toy_candidate(28);
    assert!(validate_curve(&c.a, &c.b, &c.p, &c.g, &c.n, &c.h));
    assert!((evaluate(&c) - (0.75 * 28f64.ln() + 0.4)).abs() < 1e-12);
}

#[test]
fn test_orders_outside_hasse_interval_lose_hasse_term() {
    // p = 23: the hasse numerator 32 − |n − 24| vanishes from n = 56 on;
    // none of these orders is ≡ 1 (mod 23), which would be supersingular
    for n in [56i64, 60, 100, 1000] {
        let c = toy_candidate(n);
        let report = FitnessEvaluator::<MillerRabin>::default().report(&c).unwrap();
        assert_eq!(report.hasse_score, 0.0, "n={}", n);
        let expected = 0.4 * (n as f64).ln() + 0.4;
        assert!((evaluate(&c) - expected).abs() < 1e-12, "n={}", n);
    }
}

#[test]
fn test_order_just_outside_interval_keeps_partial_hasse_term() {
    // n = 50 lies outside [16, 32] but 32 − 26 > 0
    let report = FitnessEvaluator::<MillerRabin>::default()
        .report(&toy_candidate(50))
        .unwrap();
    assert!((report.hasse_score - 0.375).abs() < 1e-12);
}

#[test]
fn test_composite_modulus_scores_zero() {
    let c = candidate(1, 1, 25, &[0, 1], 30, 1);
    assert_eq!(check(&c), Err(Rejection::NoWitnessPoint));
    assert_eq!(evaluate(&c), 0.0);
}

#[test]
fn test_weak_curves_score_zero() {
    let cases = [
        (candidate(0, 0, 23, &[0, 0], 28, 1), Rejection::Singular),
        (toy_candidate(23), Rejection::Anomalous),
        (candidate(1, 0, 23, &[1, 18], 24, 1), Rejection::Supersingular),
        (candidate(1, 1, 23, &[0], 28, 1), Rejection::MalformedGenerator),
        (candidate(1, 1, 23, &[1, 1], 28, 1), Rejection::GeneratorOffCurve),
        (toy_candidate(0), Rejection::SubgroupOrder),
    ];
    for (c, rejection) in cases {
        assert_eq!(check(&c), Err(rejection));
        assert_eq!(evaluate(&c), 0.0);
    }
}

#[test]
fn test_evaluation_never_panics_on_small_grids() {
    let evaluator = FitnessEvaluator::<MillerRabin>::default();
    for p in [-5i64, 0, 1, 2, 3, 4, 9, 15, 23] {
        for a in -2..3 {
            for b in -2..3 {
                for n in [-1i64, 0, 1, 7, 28] {
                    let c = candidate(a, b, p, &[0, b.rem_euclid(p.max(1))], n, 1);
                    let fitness = evaluator.evaluate(&c);
                    assert!(fitness.is_finite() && fitness >= 0.0);
                }
            }
        }
    }
}

#[test]
fn test_supersingular_family() {
    // y² = x³ + x is supersingular for p ≡ 3 (mod 4), with p + 1 points
    for p in small_primes().into_iter().filter(|&p| p % 4 == 3 && p > 3 && p < 100) {
        let order = group_order(1, 0, p);
        assert_eq!(order, p + 1);
        let g = find_generator_point(&BigUint::from(1u32), &BigUint::from(0u32), &BigUint::from(p))
            .unwrap();
        let (x, y) = g.coordinates().unwrap();
        let g = [BigInt::from(x.clone()), BigInt::from(y.clone())];
        let p = BigInt::from(p);
        let n = BigInt::from(order);
        assert!(!validate_curve(&BigInt::from(1), &BigInt::from(0), &p, &g, &n, &BigInt::from(1)));
    }
}

#[test]
fn test_keypair_on_toy_curve() {
    let params = CurveParameters::from_spec(&TOY_P23).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for _ in 0..50 {
        let (private, public) = generate_keypair(&params, &mut rng).unwrap();
        assert!(private.to_biguint() <= BigUint::from(26u32));
        assert!(params.is_on_curve(&public));
        let expected = scalar_mul(params.generator(), &private.to_biguint(), &params).unwrap();
        assert_eq!(public, expected);
    }
}

#[test]
fn test_generated_prime_supports_a_curve() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let oracle = MillerRabin::default();
    let p = get_prime_for_p(&mut rng, &oracle);
    assert!(oracle.is_prime(&p));

    // y² = x³ + 7 always has a point with nonzero y over a large prime field
    let point = find_generator_point(&BigUint::from(0u32), &BigUint::from(7u32), &p).unwrap();
    let params = CurveParameters::new(
        p,
        BigUint::from(0u32),
        BigUint::from(7u32),
        point.clone(),
        BigUint::from(1u32),
        BigUint::from(1u32),
    )
    .unwrap();
    assert!(params.is_on_curve(&point));
    assert!(!matches!(point, EcPoint::Infinity));
}

#[test]
fn test_reference_residuosity_agrees_for_generators() {
    for p in [7u64, 11, 13, 23, 29] {
        let g = find_generator_point(&BigUint::from(3u32), &BigUint::from(5u32), &BigUint::from(p));
        if let Ok(point) = g {
            let (x, _) = point.coordinates().unwrap();
            let x = x.to_u64().unwrap();
            let rhs = (x * x * x + 3 * x + 5) % p;
            assert!(rhs != 0 && is_square_mod(rhs, p));
        }
    }
}
