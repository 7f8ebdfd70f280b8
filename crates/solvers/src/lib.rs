//! Numerical solvers for the Tangent workspace.
//!
//! # Modules
//!
//! - [`equation`] — solvers that find roots of scalar equations

pub mod equation;
