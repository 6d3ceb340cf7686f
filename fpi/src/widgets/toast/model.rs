/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastLevel {
    Info,
    Success,
    Error,
}

/// A notification waiting to expire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    pub(crate) id: u64,
    pub(crate) message: String,
    pub(crate) level: ToastLevel,
    pub(crate) remaining_ticks: u32,
}

/// Read-only view model for the toast stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToastViewModel<'a> {
    pub(crate) toasts: &'a [Toast],
}
