/// Page bodies kept in destination order with exactly one visible.
#[derive(Debug, Clone)]
pub struct ContentSwitcher<P> {
    pages: Vec<P>,
    visible: usize,
}

impl<P> ContentSwitcher<P> {
    /// Build a switcher showing the first page.
    ///
    /// Returns `None` when `pages` is empty, since no page could be visible.
    pub fn new(pages: Vec<P>) -> Option<Self> {
        if pages.is_empty() {
            return None;
        }
        Some(Self { pages, visible: 0 })
    }

    /// Show the page at `index` and hide every other page.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn set_visible(&mut self, index: usize) {
        assert!(
            index < self.pages.len(),
            "page index {index} out of range for {} pages",
            self.pages.len()
        );
        self.visible = index;
    }

    pub fn visible_index(&self) -> usize {
        self.visible
    }

    pub fn visible_page(&self) -> &P {
        &self.pages[self.visible]
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible == index
    }

    /// Visibility flag of every page, in order.
    pub fn visibility(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.pages.len()).map(|index| self.is_visible(index))
    }

    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
