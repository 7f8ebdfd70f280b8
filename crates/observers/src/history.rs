//! Iteration history capture.

use tangent_core::Observer;

use crate::traits::{HasIteration, HasResidual, HasStep};

/// One recorded solver iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iterate {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Evaluated x value.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Signed step taken from `x`.
    pub step: f64,
}

/// An observer that records every iteration in order.
///
/// Pass `&mut History` as the solver observer so the record is still
/// available once the solve returns.
///
/// # Example
///
/// ```
/// use tangent_core::WithDerivative;
/// use tangent_observers::History;
/// use tangent_solvers::equation::newton::{self, Config};
///
/// let function = WithDerivative::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
/// let mut history = History::new();
///
/// let solution = newton::solve(&function, 3.0, &Config::default(), &mut history)?;
///
/// assert_eq!(history.len(), solution.iters);
/// # Ok::<(), newton::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    iterates: Vec<Iterate>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single iteration.
    pub fn record<E>(&mut self, event: &E)
    where
        E: HasIteration + HasResidual + HasStep,
    {
        self.iterates.push(Iterate {
            iter: event.iter(),
            x: event.x(),
            residual: event.residual(),
            step: event.step(),
        });
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn iterates(&self) -> &[Iterate] {
        &self.iterates
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    /// Returns the most recent iteration, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Iterate> {
        self.iterates.last()
    }

    /// Returns the residual of every recorded iteration.
    pub fn residuals(&self) -> impl Iterator<Item = f64> + '_ {
        self.iterates.iter().map(|iterate| iterate.residual)
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIteration + HasResidual + HasStep,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the record can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasIteration + HasResidual + HasStep,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).record(event);
        None
    }
}
