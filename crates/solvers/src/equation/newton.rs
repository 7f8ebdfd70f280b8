//! Newton–Raphson iteration for scalar equations.
//!
//! # Algorithm
//!
//! Starting from an initial guess, each iteration evaluates the function and
//! its derivative at the current estimate and moves to where the tangent line
//! crosses zero:
//!
//! ```text
//! x_next = x - f(x) / f'(x)
//! ```
//!
//! Iteration stops as soon as a single step moves the estimate by less than
//! the configured tolerance. This is a step-size criterion: the residual
//! `f(x)` at the returned root is not compared against the tolerance, so a
//! flat function can stop with a visible residual and a steep one can keep
//! stepping after its residual is already tiny.
//!
//! # Outcomes
//!
//! - `Ok(Solution)` — a step smaller than the tolerance was taken
//! - [`Error::DegenerateDerivative`] — `|f'(x)|` fell below
//!   [`DERIVATIVE_FLOOR`] at some iterate, so no division was attempted
//! - [`Error::MaxIters`] — the iteration budget ran out
//! - [`Error::InvalidConfig`] — the tolerance or iteration limit was rejected
//!   before iterating (only reachable through [`find_root`]; a [`Config`]
//!   cannot be built with invalid values)
//!
//! Nothing is retried internally and no partial result is returned on failure.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per completed step, after the update is
//! computed and before the convergence check. A run that converges at
//! iteration `n` emits `n` events; a run that exhausts its budget emits
//! `max_iters` events; a degenerate derivative at iteration `k` emits `k - 1`.
//!
//! [`Action`] has no variants, so observers can watch the iteration but never
//! stop or steer it.
//!
//! # Logging
//!
//! Convergence is reported through [`tracing`] at `INFO` level with the
//! iteration count; failures are reported at `DEBUG`. Nothing is printed
//! unless the caller installs a subscriber.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_TOLERANCE};
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use tangent_core::{Differentiable, Observer, WithDerivative};
use tracing::{debug, info};

/// Derivative magnitudes below this value are treated as zero.
pub const DERIVATIVE_FLOOR: f64 = 1e-15;

/// Finds a root of `f` starting from `initial_guess`.
///
/// This is the plain-closure entry point: `tolerance` and `max_iters` are
/// validated into a [`Config`] and only the root is returned. Use
/// [`Config::default`] values ([`DEFAULT_TOLERANCE`], [`DEFAULT_MAX_ITERS`])
/// when no particular precision is needed.
///
/// # Example
///
/// ```
/// use tangent_solvers::equation::newton;
///
/// let root = newton::find_root(
///     |x| x * x - 4.0,
///     |x| 2.0 * x,
///     3.0,
///     newton::DEFAULT_TOLERANCE,
///     newton::DEFAULT_MAX_ITERS,
/// )?;
///
/// assert!((root - 2.0).abs() < 1e-8);
/// # Ok::<(), newton::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if `tolerance` is not positive or
/// `max_iters` is zero, and otherwise the errors of [`solve`].
pub fn find_root<F, D>(
    f: F,
    df: D,
    initial_guess: f64,
    tolerance: f64,
    max_iters: usize,
) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let config = Config::new(tolerance, max_iters)?;
    let function = WithDerivative::new(f, df);

    solve_unobserved(&function, initial_guess, &config).map(|solution| solution.x)
}

/// Finds a root of `function` using Newton–Raphson iteration.
///
/// The observer receives an [`Event`] for each completed step.
/// See the [module docs](self) for details on event timing.
///
/// # Errors
///
/// Returns [`Error::DegenerateDerivative`] if the derivative is numerically
/// zero at some iterate, or [`Error::MaxIters`] if no step smaller than the
/// tolerance is taken within the iteration budget.
pub fn solve<F, Obs>(
    function: &F,
    initial_guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    let mut x = initial_guess;

    for iter in 1..=config.max_iters() {
        let value = function.value(x);
        let derivative = function.derivative(x);

        if derivative.abs() < DERIVATIVE_FLOOR {
            debug!(iter, x, derivative, "newton derivative is numerically zero");
            return Err(Error::DegenerateDerivative {
                iter,
                x,
                derivative,
            });
        }

        let next = x - value / derivative;

        let event = Event {
            iter,
            x,
            value,
            derivative,
            next,
        };
        if let Some(action) = observer.observe(&event) {
            match action {}
        }

        if is_converged(x, next, config.tolerance()) {
            info!(iters = iter, root = next, "newton converged");
            return Ok(Solution {
                x: next,
                iters: iter,
                step: next - x,
            });
        }

        x = next;
    }

    debug!(max_iters = config.max_iters(), x, "newton exceeded its iteration limit");
    Err(Error::MaxIters {
        max_iters: config.max_iters(),
    })
}

/// Finds a root of `function` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F>(
    function: &F,
    initial_guess: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
{
    solve(function, initial_guess, config, ())
}

/// Step-size convergence test.
fn is_converged(x_old: f64, x_new: f64, tolerance: f64) -> bool {
    (x_new - x_old).abs() < tolerance
}
