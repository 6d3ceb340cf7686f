use std::collections::VecDeque;

use fpi_ui_layout::{Host, Viewport};

const ROOT_PATH: &str = "/";
const MAX_HISTORY: usize = 64;

/// Browser-style location: current path plus back and forward stacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Location {
    current: String,
    back: VecDeque<String>,
    forward: Vec<String>,
}

impl Location {
    pub(crate) fn new(initial: &str) -> Self {
        Self {
            current: initial.to_string(),
            back: VecDeque::new(),
            forward: Vec::new(),
        }
    }

    pub(crate) fn current(&self) -> &str {
        &self.current
    }

    /// Move to `path`, recording the previous path in the back stack.
    ///
    /// Pushing the current path again is a no-op, so re-selecting a page does
    /// not grow the history. Leaving the untouched root path replaces it, so
    /// the startup redirect to the first page is not a history entry. A new
    /// entry clears the forward stack.
    pub(crate) fn push(&mut self, path: &str) {
        if self.current == path {
            return;
        }
        if self.is_pristine_root() {
            self.current = path.to_string();
            return;
        }

        let previous = std::mem::replace(&mut self.current, path.to_string());
        self.back.push_back(previous);
        if self.back.len() > MAX_HISTORY {
            self.back.pop_front();
        }
        self.forward.clear();
    }

    /// Step back and return the path to navigate to.
    pub(crate) fn back(&mut self) -> Option<String> {
        let previous = self.back.pop_back()?;
        let current = std::mem::replace(&mut self.current, previous);
        self.forward.push(current);
        Some(self.current.clone())
    }

    /// Step forward and return the path to navigate to.
    pub(crate) fn forward(&mut self) -> Option<String> {
        let next = self.forward.pop()?;
        let current = std::mem::replace(&mut self.current, next);
        self.back.push_back(current);
        Some(self.current.clone())
    }

    pub(crate) fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub(crate) fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    fn is_pristine_root(&self) -> bool {
        self.current == ROOT_PATH
            && self.back.is_empty()
            && self.forward.is_empty()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(ROOT_PATH)
    }
}

/// Host services backed by the iced window.
///
/// iced redraws after every update, so a render request only bumps a
/// generation counter that views and tests can observe.
#[derive(Debug, Clone)]
pub(crate) struct DesktopHost {
    viewport: Viewport,
    location: Location,
    render_generation: u64,
}

impl DesktopHost {
    pub(crate) fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            location: Location::default(),
            render_generation: 0,
        }
    }

    /// Record the window size reported by iced.
    pub(crate) fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub(crate) fn location(&self) -> &Location {
        &self.location
    }

    pub(crate) fn location_mut(&mut self) -> &mut Location {
        &mut self.location
    }

    #[cfg(test)]
    pub(crate) fn render_generation(&self) -> u64 {
        self.render_generation
    }
}

impl Host for DesktopHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn request_render(&mut self) {
        self.render_generation = self.render_generation.wrapping_add(1);
        log::trace!("render requested: generation {}", self.render_generation);
    }

    fn route(&self) -> &str {
        self.location.current()
    }

    fn set_route(&mut self, path: &str) {
        self.location.push(path);
    }
}
