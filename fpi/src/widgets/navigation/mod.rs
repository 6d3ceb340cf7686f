pub(crate) mod event;
pub(crate) mod model;
mod reducer;
pub(crate) mod view;

use fpi_ui_layout::{LayoutConfig, LayoutError, RenderTree, ResponsiveLayout};
use iced::Task;

pub(crate) use self::event::{
    HistoryDirection, NavigationEffect, NavigationEvent, NavigationIntent,
};
use self::model::{NavigationViewModel, ShellLayout};
use crate::host::DesktopHost;
use crate::widgets::pages::{PageKind, registry};

/// Navigation rail and page switching, driven by the responsive layout.
pub(crate) struct NavigationWidget {
    layout: ShellLayout,
}

impl NavigationWidget {
    /// Build the widget over the built-in page registry.
    pub(crate) fn new(
        config: LayoutConfig,
        host: DesktopHost,
    ) -> Result<Self, LayoutError> {
        let layout = ResponsiveLayout::new(registry(), config, host)?;
        Ok(Self { layout })
    }

    /// Reduce a navigation intent into layout transitions and effects.
    pub(crate) fn reduce(
        &mut self,
        event: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&mut self.layout, event)
    }

    pub(crate) fn render(&self) -> RenderTree<'_> {
        self.layout.render()
    }

    pub(crate) fn visible_page(&self) -> PageKind {
        *self.layout.visible_page()
    }

    pub(crate) fn vm(&self) -> NavigationViewModel {
        let location = self.layout.host().location();
        NavigationViewModel {
            can_go_back: location.can_go_back(),
            can_go_forward: location.can_go_forward(),
            icons_only: self.layout.minimize_to_icons(),
            menu_extended: self.layout.menu_extended(),
        }
    }

    #[cfg(test)]
    pub(crate) fn layout(&self) -> &ShellLayout {
        &self.layout
    }
}
