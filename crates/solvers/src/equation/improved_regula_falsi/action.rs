/// Actions an observer can take during an improved regula falsi solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the latest trial point.
    StopEarly,
}
