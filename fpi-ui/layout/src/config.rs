use serde::Deserialize;

use crate::viewport::Orientation;

/// Flags that shape how the navigation rail collapses.
///
/// Missing fields deserialize to their defaults, so a partial JSON document
/// such as `{"minimize_to_icons": true}` is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Collapse to an icon rail in both orientations.
    pub minimize_to_icons: bool,
    /// Collapse to an icon rail in landscape only.
    pub landscape_minimize_to_icons: bool,
    /// Collapse to an icon rail in portrait only.
    pub portrait_minimize_to_icons: bool,
    /// Render the full-label rail in its wide form.
    pub menu_extended: bool,
    /// Bind the selected page to the host path.
    pub support_routes: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            minimize_to_icons: false,
            landscape_minimize_to_icons: false,
            portrait_minimize_to_icons: false,
            menu_extended: true,
            support_routes: true,
        }
    }
}

impl LayoutConfig {
    /// Whether the rail collapses to icons instead of hiding in landscape.
    pub fn minimize_in_landscape(&self) -> bool {
        self.minimize_to_icons || self.landscape_minimize_to_icons
    }

    /// Whether the rail collapses to icons instead of hiding in portrait.
    pub fn minimize_in_portrait(&self) -> bool {
        self.minimize_to_icons || self.portrait_minimize_to_icons
    }

    pub fn minimize_in(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::Landscape => self.minimize_in_landscape(),
            Orientation::Portrait => self.minimize_in_portrait(),
        }
    }

    /// Report icon minimization as enabled when either the global flag is
    /// set or both per-orientation flags are.
    pub fn minimizes_everywhere(&self) -> bool {
        self.minimize_to_icons
            || (self.landscape_minimize_to_icons
                && self.portrait_minimize_to_icons)
    }
}
