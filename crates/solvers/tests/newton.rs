//! End-to-end scenarios for the Newton solver's public API.

use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use proptest::prelude::*;

use tangent_core::{Differentiable, WithDerivative};
use tangent_solvers::equation::newton::{
    self, Action, Config, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_TOLERANCE, Error, Event,
};

fn parabola() -> impl Differentiable {
    WithDerivative::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x)
}

fn find_root_with_defaults<F, D>(f: F, df: D, guess: f64) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    newton::find_root(f, df, guess, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERS)
}

#[test]
fn solves_quadratic_equation() {
    let f = |x: f64| x * x - 4.0;
    let root = find_root_with_defaults(f, |x| 2.0 * x, 3.0).expect("should converge");

    // Step size and residual are different metrics; check both.
    assert!((root - 2.0).abs() <= DEFAULT_TOLERANCE);
    assert!(f(root).abs() < 1e-10);
}

#[test]
fn converges_from_any_guess_in_the_basin() {
    let function = parabola();

    for guess in [3.0, 10.0, 1.5] {
        let solution = newton::solve_unobserved(&function, guess, &Config::default())
            .unwrap_or_else(|err| panic!("guess {guess} failed: {err}"));
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-8);
    }
}

#[test]
fn tight_tolerance_reaches_cube_root() {
    let f = |x: f64| x * x * x - 8.0;
    let root = newton::find_root(f, |x| 3.0 * x * x, 2.5, 1e-12, 100).expect("should converge");

    assert_relative_eq!(root, 2.0, epsilon = 1e-12);
    assert!(f(root).abs() < 1e-12);
}

#[test]
fn finds_pi_from_sine() {
    let root = newton::find_root(f64::sin, f64::cos, 3.0, 1e-12, 100).expect("should converge");

    assert_relative_eq!(root, PI, epsilon = 1e-12);
    assert!(root.sin().abs() < 1e-12);
}

#[test]
fn finds_half_pi_from_cosine() {
    let root =
        find_root_with_defaults(f64::cos, |x: f64| -x.sin(), 1.0).expect("should converge");

    assert_relative_eq!(root, FRAC_PI_2, epsilon = 1e-8);
    assert!(root.cos().abs() < 1e-10);
}

#[test]
fn zero_derivative_at_guess_fails_on_first_iteration() {
    let result = find_root_with_defaults(|x| x * x * x, |x| 3.0 * x * x, 0.0);

    assert!(matches!(
        result,
        Err(Error::DegenerateDerivative { iter: 1, .. })
    ));
}

#[test]
fn function_without_real_root_fails_on_fifth_attempt() {
    // eˣ + 1 has no real root. Each step moves further left, and by the fifth
    // iterate (x ≈ -7.7e8) eˣ underflows to zero, tripping the derivative floor
    // before the iteration budget of five is spent.
    let function = WithDerivative::new(|x: f64| x.exp() + 1.0, f64::exp);
    let config = Config::new(1e-10, 5).expect("valid config");

    let mut attempts = 0;
    let observer = |_event: &Event| -> Option<Action> {
        attempts += 1;
        None
    };
    let result = newton::solve(&function, 1.0, &config, observer);

    assert!(matches!(
        result,
        Err(Error::DegenerateDerivative { iter: 5, .. })
    ));
    assert_eq!(attempts, 4);
}

#[test]
fn function_without_real_root_exhausts_a_short_budget() {
    let function = WithDerivative::new(|x: f64| x.exp() + 1.0, f64::exp);
    let config = Config::new(1e-10, 4).expect("valid config");

    let mut attempts = 0;
    let observer = |_event: &Event| -> Option<Action> {
        attempts += 1;
        None
    };
    let result = newton::solve(&function, 1.0, &config, observer);

    assert_eq!(result, Err(Error::MaxIters { max_iters: 4 }));
    assert_eq!(attempts, 4);
}

#[test]
fn oscillating_iteration_exceeds_five_iterations() {
    // x² + 1 has no real root; from 0.5 the iterates wander without settling.
    let result = newton::find_root(|x| x * x + 1.0, |x| 2.0 * x, 0.5, 1e-10, 5);

    let Err(err) = result else {
        panic!("expected failure, got {result:?}");
    };
    assert_eq!(err, Error::MaxIters { max_iters: 5 });
    assert!(err.to_string().contains('5'));
}

#[test]
fn rejects_invalid_parameters() {
    let f = |x: f64| x - 1.0;
    let df = |_x: f64| 1.0;

    assert!(matches!(
        newton::find_root(f, df, 1.0, -0.1, DEFAULT_MAX_ITERS),
        Err(Error::InvalidConfig(ConfigError::Tolerance { .. }))
    ));
    assert_eq!(
        newton::find_root(f, df, 1.0, 0.1, 0),
        Err(Error::InvalidConfig(ConfigError::MaxIters))
    );

    // Negative limits do not fit in `usize` at all.
    assert!(usize::try_from(-10_i64).is_err());
}

#[test]
fn repeated_solves_are_bit_identical() {
    let first = find_root_with_defaults(|x| x * x - 4.0, |x| 2.0 * x, 1.5).expect("converges");
    let second = find_root_with_defaults(|x| x * x - 4.0, |x| 2.0 * x, 1.5).expect("converges");
    assert_eq!(first.to_bits(), second.to_bits());

    let function = parabola();
    let config = Config::default();
    let a = newton::solve_unobserved(&function, 10.0, &config).expect("converges");
    let b = newton::solve_unobserved(&function, 10.0, &config).expect("converges");
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.iters, b.iters);
}

#[test]
fn solves_concurrently_from_many_threads() {
    let function = parabola();
    let config = Config::default();
    let expected = newton::solve_unobserved(&function, 3.0, &config).expect("converges");

    let (function, config) = (&function, &config);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || newton::solve_unobserved(function, 3.0, config)))
            .collect();

        for handle in handles {
            let solution = handle.join().expect("thread panicked").expect("converges");
            assert_eq!(solution, expected);
        }
    });
}

proptest! {
    #[test]
    fn square_roots_converge_from_above(target in 0.01_f64..1.0e6, scale in 1.0_f64..10.0) {
        let root = target.sqrt();
        let guess = root * scale;

        let found = find_root_with_defaults(move |x| x * x - target, |x| 2.0 * x, guess)
            .expect("positive guesses converge to the positive root");

        prop_assert!((found - root).abs() <= 1e-8 * root.max(1.0));
    }

    #[test]
    fn linear_functions_converge_within_two_iterations(
        slope in prop_oneof![-100.0_f64..-1.0e-3, 1.0e-3_f64..100.0],
        intercept in -100.0_f64..100.0,
        guess in -100.0_f64..100.0,
    ) {
        let function =
            WithDerivative::new(move |x: f64| slope * x + intercept, move |_x: f64| slope);

        let solution = newton::solve_unobserved(&function, guess, &Config::default())
            .expect("linear functions converge");

        prop_assert!(solution.iters <= 2);
        prop_assert!((solution.x + intercept / slope).abs() < 1e-9);
    }
}
