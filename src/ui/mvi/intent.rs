/// Marker for values a reducer consumes: key presses, mouse gestures,
/// timer expiries, finished saves.
pub trait Intent: Send + 'static {}
