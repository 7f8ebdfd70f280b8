//! Core traits and types for the Tangent root finder.
//!
//! This crate defines the shared abstractions that the solver and the
//! reusable observers build on:
//!
//! - [`Differentiable`] — a scalar function paired with its analytic derivative
//! - [`WithDerivative`] — adapts two plain closures into a [`Differentiable`]
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{Differentiable, WithDerivative};
pub use observer::Observer;
