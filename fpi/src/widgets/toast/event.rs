use super::model::ToastLevel;

/// Interval between expiry ticks while toasts are shown.
pub(crate) const TOAST_TICK_MS: u64 = 500;

/// Toast event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ToastEvent {
    Show { message: String, level: ToastLevel },
    Dismiss { id: u64 },
    Tick,
}
