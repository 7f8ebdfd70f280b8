/// The result of a converged Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Root estimate produced by the final step.
    pub x: f64,

    /// Number of iterations used, including the converging one.
    pub iters: usize,

    /// Signed size of the final step, always smaller than the tolerance.
    pub step: f64,
}
