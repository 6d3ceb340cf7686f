/// Direction of a history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HistoryDirection {
    Back,
    Forward,
}

/// Intent events handled by the navigation widget.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NavigationIntent {
    /// A rail destination was clicked.
    Select { index: usize },
    /// The transparent surface behind the overlay was pressed.
    DismissOverlay,
    /// Close the portrait overlay if it is open.
    CloseOverlay,
    ToggleNavigation,
    ToggleIconsOnly,
    ToggleMenuExtended,
    Resized { width: f32, height: f32 },
    History(HistoryDirection),
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NavigationEffect {
    /// A history step was requested with nothing to step to.
    HistoryExhausted { direction: HistoryDirection },
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NavigationEvent {
    /// Intent event reduced by the navigation widget.
    Intent(NavigationIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NavigationEffect),
}
