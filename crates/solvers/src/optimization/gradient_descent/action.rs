/// Actions an observer can take during gradient descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop before this iteration's update, keeping the current parameters.
    StopEarly,
}
