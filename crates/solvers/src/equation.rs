//! Solvers for equation problems — finding `x` such that `f(x) = 0`.
//!
//! A [`Differentiable`] supplies both the function value and its analytic
//! derivative. Solvers in this module drive the function value toward zero.
//!
//! # Solvers
//!
//! - [`newton`] — Newton–Raphson iteration from a single starting guess
//!
//! [`Differentiable`]: tangent_core::Differentiable

pub mod newton;
