/// Marker for viewer state.
///
/// States are values: cloned to derive a new one, compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
