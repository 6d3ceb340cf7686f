use super::model::{Toast, ToastLevel};

/// Ticks a toast stays on screen.
pub(crate) const TOAST_LIFETIME_TICKS: u32 = 8;
/// Older toasts are dropped beyond this many.
pub(crate) const MAX_VISIBLE_TOASTS: usize = 3;

/// Toast queue, oldest first.
#[derive(Debug, Default)]
pub(crate) struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub(crate) fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub(crate) fn push(&mut self, message: String, level: ToastLevel) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message,
            level,
            remaining_ticks: TOAST_LIFETIME_TICKS,
        });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Advance one tick and drop expired toasts.
    pub(crate) fn tick(&mut self) {
        for toast in &mut self.toasts {
            toast.remaining_ticks = toast.remaining_ticks.saturating_sub(1);
        }
        self.toasts.retain(|toast| toast.remaining_ticks > 0);
    }
}
