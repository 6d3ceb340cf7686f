use super::model::LoadedInput;
use crate::widgets::toast::ToastLevel;

/// Intent events handled by the input widget.
#[derive(Debug, Clone)]
pub(crate) enum InputIntent {
    PathChanged(String),
    LoadRequested,
    LoadFinished {
        generation: u64,
        result: Result<LoadedInput, String>,
    },
    CalculateRequested,
}

/// Effect events produced by the input reducer.
#[derive(Debug, Clone)]
pub(crate) enum InputEffect {
    Notify { message: String, level: ToastLevel },
}

/// Input event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum InputEvent {
    /// Intent event reduced by the input widget.
    Intent(InputIntent),
    /// External effect orchestrated by app-level routing.
    Effect(InputEffect),
}
