pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{TOAST_TICK_MS, ToastEvent};
pub(crate) use self::model::{ToastLevel, ToastViewModel};
use self::state::ToastState;

/// Transient notifications shown above the page area.
#[derive(Debug, Default)]
pub(crate) struct ToastWidget {
    state: ToastState,
}

impl ToastWidget {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reduce a toast event into state updates.
    pub(crate) fn reduce(&mut self, event: ToastEvent) -> Task<ToastEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Whether expiry ticks are needed.
    pub(crate) fn has_toasts(&self) -> bool {
        !self.state.is_empty()
    }

    pub(crate) fn vm(&self) -> ToastViewModel<'_> {
        ToastViewModel {
            toasts: self.state.toasts(),
        }
    }
}
