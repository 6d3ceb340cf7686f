/// Intent events handled by chrome widget views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChromeIntent {
    MenuPressed,
    BackPressed,
    ForwardPressed,
    IconsOnlyPressed,
    MenuWidthPressed,
}

/// Effect events produced by the chrome reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChromeEffect {
    ToggleNavigation,
    HistoryBack,
    HistoryForward,
    ToggleIconsOnly,
    ToggleMenuExtended,
}

/// Chrome event stream routed through the app update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChromeEvent {
    /// Intent event reduced by the chrome widget.
    Intent(ChromeIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ChromeEffect),
}
