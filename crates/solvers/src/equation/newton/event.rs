/// Event emitted by the Newton solver after each completed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Estimate the step started from.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Derivative value at `x`.
    pub derivative: f64,

    /// Estimate after the Newton update.
    pub next: f64,
}

impl Event {
    /// Returns the signed step `next - x`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.next - self.x
    }
}
