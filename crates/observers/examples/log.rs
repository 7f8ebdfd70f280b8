//! Solves a few sample equations with per-iteration logging.
//!
//! # Usage
//!
//! ```text
//! cargo run --example log
//! RUST_LOG=debug cargo run --example log
//! RUST_LOG=trace cargo run --example log -- 1.5
//! ```
//!
//! The optional argument is the starting guess for `x² - 4 = 0`
//! (default `3.0`). Convergence is reported at `info`; per-iteration records
//! from [`LogObserver`] appear at `debug`.

use std::error::Error;

use tangent_core::WithDerivative;
use tangent_observers::{History, LogObserver};
use tangent_solvers::equation::newton::{self, Config};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let guess = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()?
        .unwrap_or(3.0);

    // --- x² - 4 ----------------------------------------------------------------

    let parabola = WithDerivative::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
    let observer = LogObserver::new().label("parabola");
    let solution = newton::solve(&parabola, guess, &Config::default(), observer)?;
    info!(root = solution.x, iters = solution.iters, "x² - 4 = 0");

    // --- x³ - 8 at tight tolerance --------------------------------------------

    let cube = WithDerivative::new(|x: f64| x.powi(3) - 8.0, |x: f64| 3.0 * x * x);
    let mut history = History::new();
    let solution = newton::solve(&cube, 2.5, &Config::new(1e-12, 100)?, &mut history)?;
    for iterate in history.iterates() {
        info!(iter = iterate.iter, x = iterate.x, residual = iterate.residual, "x³ - 8");
    }
    info!(root = solution.x, "x³ - 8 = 0");

    // --- eˣ + 1 has no real root -----------------------------------------------

    let no_root = WithDerivative::new(|x: f64| x.exp() + 1.0, f64::exp);
    let observer = LogObserver::new().label("no-root");
    match newton::solve(&no_root, 1.0, &Config::new(1e-10, 5)?, observer) {
        Ok(solution) => info!(root = solution.x, "eˣ + 1 = 0"),
        Err(err) => warn!(%err, "eˣ + 1 = 0 has no solution"),
    }

    Ok(())
}
