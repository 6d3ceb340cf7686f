use crate::viewport::Viewport;

/// Services the layout consumes from the application hosting it.
///
/// The layout owns its host, so every transition sees one consistent view of
/// viewport, path and render requests.
pub trait Host {
    /// Current viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// Ask the rendering backend to draw the layout again.
    fn request_render(&mut self);

    /// Externally visible path, e.g. `/input`.
    fn route(&self) -> &str;

    /// Replace the externally visible path.
    fn set_route(&mut self, path: &str);
}
