/// View model for the app bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChromeViewModel<'a> {
    pub(crate) title: &'a str,
    pub(crate) can_go_back: bool,
    pub(crate) can_go_forward: bool,
    pub(crate) icons_only: bool,
    pub(crate) menu_extended: bool,
}
