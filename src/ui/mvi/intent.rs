/// Marker for things that can happen to the viewer: key presses, mouse
/// events, resizes, background results.
pub trait Intent: Send + 'static {}
