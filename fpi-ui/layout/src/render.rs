use crate::destination::Destination;
use crate::layout::NavigationState;
use crate::policy::{PanelDecision, RailMode};
use crate::viewport::Orientation;

/// How the layout slots are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Slots laid out side by side.
    Row,
    /// Slots stacked on top of each other, first slot at the bottom.
    Stack,
}

/// A layer or cell of the rendered layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The navigation rail with its divider.
    Panel,
    /// The page area; only the visible page is drawn.
    Content,
    /// Transparent full-bleed surface that closes the panel when pressed.
    DismissSurface,
}

/// Whether rail items show their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelType {
    None,
    All,
}

/// Render-time projection of a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailItem<'a> {
    pub icon: &'a str,
    pub selected_icon: &'a str,
    /// `None` when the rail is icons-only.
    pub label: Option<&'a str>,
    pub route: &'a str,
    pub selected: bool,
}

impl<'a> RailItem<'a> {
    /// Icon to draw for the current selection state.
    pub fn current_icon(&self) -> &'a str {
        if self.selected {
            self.selected_icon
        } else {
            self.icon
        }
    }
}

/// Navigation rail description for the rendering backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rail<'a> {
    pub items: Vec<RailItem<'a>>,
    pub selected_index: usize,
    pub extended: bool,
    pub label_type: LabelType,
}

/// Declarative description of the whole layout, rebuilt on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTree<'a> {
    /// Orientation the panel decision was derived for.
    pub orientation: Orientation,
    pub mode: RailMode,
    pub arrangement: Arrangement,
    pub slots: Vec<Slot>,
    pub rail: Rail<'a>,
    pub visible_page: usize,
}

impl RenderTree<'_> {
    pub fn has_slot(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }

    pub fn panel_shown(&self) -> bool {
        self.has_slot(Slot::Panel)
    }

    pub fn has_dismiss_surface(&self) -> bool {
        self.has_slot(Slot::DismissSurface)
    }
}

pub(crate) fn project<'a>(
    destinations: &'a [Destination],
    routes: &'a [String],
    state: &NavigationState,
    decision: PanelDecision,
) -> RenderTree<'a> {
    let icons_only = !decision.shows_labels();
    let items = destinations
        .iter()
        .zip(routes)
        .enumerate()
        .map(|(index, (destination, route))| RailItem {
            icon: destination.icon(),
            selected_icon: destination.selected_icon(),
            label: (!icons_only).then(|| destination.label()),
            route: route.as_str(),
            selected: index == state.selected_index,
        })
        .collect();

    let (arrangement, slots) = if decision.is_docked() {
        let slots = if decision.panel_shown {
            vec![Slot::Panel, Slot::Content]
        } else {
            vec![Slot::Content]
        };
        (Arrangement::Row, slots)
    } else {
        let mut slots = vec![Slot::Content];
        if decision.dismiss_surface {
            slots.push(Slot::DismissSurface);
        }
        if decision.panel_shown {
            slots.push(Slot::Panel);
        }
        (Arrangement::Stack, slots)
    };

    RenderTree {
        orientation: decision.orientation,
        mode: decision.mode,
        arrangement,
        slots,
        rail: Rail {
            items,
            selected_index: state.selected_index,
            extended: decision.extended,
            label_type: if icons_only {
                LabelType::None
            } else {
                LabelType::All
            },
        },
        visible_page: state.selected_index,
    }
}
