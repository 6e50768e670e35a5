/// Marker for reducer-owned state.
///
/// `Default` lets the owner take the state out while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
