/// Control actions supported by the Newton solver.
///
/// There are none: Newton iteration always runs to one of its terminal
/// outcomes, so observers can watch each step but cannot stop or steer it.
/// An observer for this solver returns `None` from every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}
