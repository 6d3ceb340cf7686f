use fpi_ui_layout::ResponsiveLayout;

use crate::host::DesktopHost;
use crate::widgets::pages::PageKind;

/// Responsive layout over the shell pages and the desktop host.
pub(crate) type ShellLayout = ResponsiveLayout<PageKind, DesktopHost>;

/// Read-only navigation state for the app bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NavigationViewModel {
    pub(crate) can_go_back: bool,
    pub(crate) can_go_forward: bool,
    pub(crate) icons_only: bool,
    pub(crate) menu_extended: bool,
}
