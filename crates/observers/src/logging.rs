//! Logging observer backed by [`tracing`].

use tangent_core::Observer;
use tracing::Level;

use crate::traits::{HasIteration, HasResidual, HasStep};

/// An observer that emits one [`tracing`] event per solver iteration.
///
/// Each event carries `solver`, `iter`, `x`, `residual` and `step` fields.
/// Where the records end up is decided by the subscriber the caller installs,
/// so the observer never writes to a console stream directly.
///
/// # Example
///
/// ```
/// use tangent_core::WithDerivative;
/// use tangent_observers::LogObserver;
/// use tangent_solvers::equation::newton::{self, Config};
///
/// let function = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// let observer = LogObserver::new().label("sqrt2");
///
/// let solution = newton::solve(&function, 1.0, &Config::default(), observer)?;
/// assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-10);
/// # Ok::<(), newton::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    label: &'static str,
}

impl LogObserver {
    /// Creates a logger that records at `DEBUG` level with the label `"newton"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::DEBUG,
            label: "newton",
        }
    }

    /// Sets the level the per-iteration records are emitted at.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the value of the `solver` field, to tell concurrent solves apart.
    #[must_use]
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Emits a record for one iteration.
    pub fn record<E>(&self, event: &E)
    where
        E: HasIteration + HasResidual + HasStep,
    {
        let solver = self.label;
        let iter = event.iter();
        let x = event.x();
        let residual = event.residual();
        let step = event.step();

        // Callsite levels must be constants.
        match self.level {
            Level::ERROR => tracing::error!(solver, iter, x, residual, step, "iteration"),
            Level::WARN => tracing::warn!(solver, iter, x, residual, step, "iteration"),
            Level::INFO => tracing::info!(solver, iter, x, residual, step, "iteration"),
            Level::DEBUG => tracing::debug!(solver, iter, x, residual, step, "iteration"),
            _ => tracing::trace!(solver, iter, x, residual, step, "iteration"),
        }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIteration + HasResidual + HasStep,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
