use crate::config::LayoutConfig;
use crate::viewport::Orientation;

/// How the navigation rail is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailMode {
    /// Docked next to the content with labels shown.
    Full,
    /// Docked next to the content as a narrow icon strip.
    IconsOnly,
    /// Floating above the content; shown only while the panel is open.
    Overlay,
}

/// Outcome of the panel visibility policy for one layout derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelDecision {
    /// Orientation the decision was derived for.
    pub orientation: Orientation,
    pub mode: RailMode,
    /// Whether the rail uses its wide, extended form.
    pub extended: bool,
    /// Whether the rail container is part of the rendered tree.
    pub panel_shown: bool,
    /// Whether a full-bleed surface that closes the panel is stacked
    /// between content and rail.
    pub dismiss_surface: bool,
}

impl PanelDecision {
    /// Decide the rail presentation for the given orientation and flags.
    pub fn derive(
        orientation: Orientation,
        config: &LayoutConfig,
        panel_visible: bool,
    ) -> Self {
        match orientation {
            Orientation::Landscape => landscape(config, panel_visible),
            Orientation::Portrait => portrait(config, panel_visible),
        }
    }

    pub fn is_docked(&self) -> bool {
        !matches!(self.mode, RailMode::Overlay)
    }

    pub fn shows_labels(&self) -> bool {
        !matches!(self.mode, RailMode::IconsOnly)
    }
}

fn landscape(config: &LayoutConfig, panel_visible: bool) -> PanelDecision {
    if config.minimize_in_landscape() {
        if panel_visible {
            docked(Orientation::Landscape, RailMode::Full, config.menu_extended)
        } else {
            docked(Orientation::Landscape, RailMode::IconsOnly, false)
        }
    } else {
        PanelDecision {
            orientation: Orientation::Landscape,
            mode: RailMode::Full,
            extended: config.menu_extended,
            panel_shown: panel_visible,
            dismiss_surface: false,
        }
    }
}

fn portrait(config: &LayoutConfig, panel_visible: bool) -> PanelDecision {
    if config.minimize_in_portrait() && !panel_visible {
        return docked(Orientation::Portrait, RailMode::IconsOnly, false);
    }

    PanelDecision {
        orientation: Orientation::Portrait,
        mode: RailMode::Overlay,
        extended: config.menu_extended,
        panel_shown: panel_visible,
        dismiss_surface: panel_visible,
    }
}

fn docked(
    orientation: Orientation,
    mode: RailMode,
    extended: bool,
) -> PanelDecision {
    PanelDecision {
        orientation,
        mode,
        extended,
        panel_shown: true,
        dismiss_surface: false,
    }
}
