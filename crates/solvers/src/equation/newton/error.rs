use thiserror::Error;

use super::ConfigError;

/// Errors that can occur during Newton solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("derivative {derivative:e} is numerically zero at x = {x} (iteration {iter})")]
    DegenerateDerivative {
        /// Iteration at which the derivative was evaluated (1-based).
        iter: usize,
        /// Estimate where the derivative vanished.
        x: f64,
        /// The offending derivative value.
        derivative: f64,
    },

    #[error("no convergence within {max_iters} iterations")]
    MaxIters {
        /// The configured iteration limit.
        max_iters: usize,
    },
}
