/// Discrete orientation class derived from the viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The viewport is strictly wider than it is tall.
    Landscape,
    /// The viewport is at least as tall as it is wide (squares included).
    Portrait,
}

impl Orientation {
    /// Classify a viewport by comparing its width against its height.
    pub fn classify(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape)
    }

    pub fn is_portrait(self) -> bool {
        matches!(self, Orientation::Portrait)
    }
}

/// Current host viewport size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::classify(self.width, self.height)
    }
}
