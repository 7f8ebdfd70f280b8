//! Capability traits for solver events.
//!
//! These traits abstract over solver-specific event types, enabling observers
//! to work generically across solvers.
//!
//! - [`HasIteration`] — events that carry a 1-based iteration counter
//! - [`HasResidual`] — events that carry the function value at the evaluated point
//! - [`HasStep`] — events that carry the step taken from the evaluated point
//!
//! # Example
//!
//! ```rust
//! use tangent_core::Observer;
//! use tangent_observers::traits::{HasIteration, HasStep};
//!
//! /// Remembers the iteration with the largest step.
//! #[derive(Default)]
//! struct LargestStep {
//!     iter: usize,
//!     step: f64,
//! }
//!
//! impl<E: HasIteration + HasStep, A> Observer<E, A> for LargestStep {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.step().abs() > self.step {
//!             self.iter = event.iter();
//!             self.step = event.step().abs();
//!         }
//!         None
//!     }
//! }
//! ```

use tangent_solvers::equation::newton;

/// An event that carries an iteration counter.
pub trait HasIteration {
    /// Returns the 1-based iteration this event belongs to.
    fn iter(&self) -> usize;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the evaluated x value.
    fn x(&self) -> f64;

    /// Returns the residual (function value) at [`x`](HasResidual::x).
    fn residual(&self) -> f64;
}

/// An event that carries the step taken by the solver.
pub trait HasStep {
    /// Returns the signed step from the evaluated x to the next estimate.
    fn step(&self) -> f64;
}

// --- newton::Event ---

impl HasIteration for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasResidual for newton::Event {
    fn x(&self) -> f64 {
        self.x
    }

    fn residual(&self) -> f64 {
        self.value
    }
}

impl HasStep for newton::Event {
    fn step(&self) -> f64 {
        newton::Event::step(self)
    }
}
