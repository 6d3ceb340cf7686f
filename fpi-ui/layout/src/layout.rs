use thiserror::Error;

use crate::config::LayoutConfig;
use crate::destination::Destination;
use crate::host::Host;
use crate::policy::PanelDecision;
use crate::render::{RenderTree, project};
use crate::switcher::ContentSwitcher;
use crate::viewport::Orientation;

/// Errors raised while assembling a layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("a responsive layout needs at least one destination")]
    NoDestinations,
    #[error("route `{route}` is bound to more than one destination")]
    DuplicateRoute { route: String },
}

/// Mutable navigation state owned by a [`ResponsiveLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub selected_index: usize,
    /// Sticky user intent: whether the panel is open.
    pub panel_visible: bool,
    /// Derived from the panel decision on every transition.
    pub extended: bool,
    pub last_orientation: Orientation,
}

/// Navigation rail and page area that adapt to the host viewport.
///
/// Every transition runs to completion against `&mut self`: state is
/// updated, the panel decision is derived again and a render is requested
/// from the host, so a render never observes a half-applied transition.
#[derive(Debug)]
pub struct ResponsiveLayout<P, H> {
    host: H,
    destinations: Vec<Destination>,
    routes: Vec<String>,
    switcher: ContentSwitcher<P>,
    config: LayoutConfig,
    support_routes: bool,
    state: NavigationState,
    decision: PanelDecision,
}

impl<P, H: Host> ResponsiveLayout<P, H> {
    /// Build the layout from `(destination, page)` pairs.
    ///
    /// The panel starts open on landscape viewports and closed on portrait
    /// ones. With route support enabled the host's current path selects the
    /// initial page, falling back to the first one.
    pub fn new(
        pages: Vec<(Destination, P)>,
        config: LayoutConfig,
        host: H,
    ) -> Result<Self, LayoutError> {
        let (destinations, contents): (Vec<_>, Vec<_>) =
            pages.into_iter().unzip();
        let switcher =
            ContentSwitcher::new(contents).ok_or(LayoutError::NoDestinations)?;

        let routes: Vec<String> =
            destinations.iter().map(Destination::path).collect();
        for (index, route) in routes.iter().enumerate() {
            if routes[..index].contains(route) {
                return Err(LayoutError::DuplicateRoute {
                    route: route.clone(),
                });
            }
        }

        let orientation = host.viewport().orientation();
        let panel_visible = orientation.is_landscape();
        let decision =
            PanelDecision::derive(orientation, &config, panel_visible);

        let mut layout = Self {
            host,
            destinations,
            routes,
            switcher,
            config,
            support_routes: config.support_routes,
            state: NavigationState {
                selected_index: 0,
                panel_visible,
                extended: decision.extended,
                last_orientation: orientation,
            },
            decision,
        };

        if layout.support_routes {
            let path = layout.host.route().to_string();
            let index = layout.resolve_route(&path);
            layout.show_page(index);
        } else {
            layout.show_page(0);
        }

        log::debug!(
            "layout ready: {orientation:?}, panel_visible={panel_visible}, page={}",
            layout.state.selected_index
        );
        Ok(layout)
    }

    /// Select a page programmatically.
    ///
    /// # Panics
    ///
    /// Panics when `index` does not address a destination; indices must come
    /// from the destination list.
    pub fn select_page(&mut self, index: usize) {
        self.show_page(index);
        self.refresh();
    }

    /// Select a page in response to a rail click.
    ///
    /// Behaves like [`Self::select_page`] and additionally closes the
    /// portrait overlay.
    ///
    /// # Panics
    ///
    /// Panics when `index` does not address a destination.
    pub fn navigate(&mut self, index: usize) {
        self.show_page(index);
        if self.closes_on_select() {
            self.toggle_navigation();
        } else {
            self.refresh();
        }
    }

    /// Open or close the navigation panel.
    pub fn toggle_navigation(&mut self) {
        self.state.panel_visible = !self.state.panel_visible;
        log::debug!("panel_visible -> {}", self.state.panel_visible);
        self.refresh();
    }

    /// Close the panel when it floats over portrait content.
    pub fn check_toggle_on_select(&mut self) {
        if self.closes_on_select() {
            self.toggle_navigation();
        }
    }

    /// React to a viewport resize reported by the host.
    ///
    /// Only a landscape/portrait crossing changes state; it resets the panel
    /// to the default of the new orientation. Returns whether the layout
    /// changed.
    pub fn handle_resize(&mut self) -> bool {
        let orientation = self.host.viewport().orientation();
        if orientation == self.state.last_orientation {
            return false;
        }

        log::debug!(
            "orientation {:?} -> {orientation:?}",
            self.state.last_orientation
        );
        self.state.last_orientation = orientation;
        self.state.panel_visible = orientation.is_landscape();
        self.refresh();
        true
    }

    /// React to an externally driven path change.
    ///
    /// Unknown paths select the first page. Ignored when route support was
    /// disabled at construction.
    pub fn handle_route_change(&mut self, path: &str) {
        if !self.support_routes {
            log::debug!("route change to `{path}` ignored: routes disabled");
            return;
        }

        let index = self.resolve_route(path);
        self.show_page(index);
        self.refresh();
    }

    pub fn minimize_to_icons(&self) -> bool {
        self.config.minimizes_everywhere()
    }

    pub fn set_minimize_to_icons(&mut self, value: bool) {
        self.config.minimize_to_icons = value;
        self.refresh();
    }

    pub fn landscape_minimize_to_icons(&self) -> bool {
        self.config.minimize_in_landscape()
    }

    pub fn set_landscape_minimize_to_icons(&mut self, value: bool) {
        self.config.landscape_minimize_to_icons = value;
        self.refresh();
    }

    pub fn portrait_minimize_to_icons(&self) -> bool {
        self.config.minimize_in_portrait()
    }

    pub fn set_portrait_minimize_to_icons(&mut self, value: bool) {
        self.config.portrait_minimize_to_icons = value;
        self.refresh();
    }

    pub fn menu_extended(&self) -> bool {
        self.config.menu_extended
    }

    /// Change the preferred rail width.
    ///
    /// While the panel is collapsed to icons the rail stays narrow; the new
    /// preference applies once the panel opens.
    pub fn set_menu_extended(&mut self, value: bool) {
        self.config.menu_extended = value;
        self.refresh();
    }

    /// Project the current state into a render tree.
    pub fn render(&self) -> RenderTree<'_> {
        project(&self.destinations, &self.routes, &self.state, self.decision)
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn decision(&self) -> PanelDecision {
        self.decision
    }

    pub fn orientation(&self) -> Orientation {
        self.host.viewport().orientation()
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    pub fn supports_routes(&self) -> bool {
        self.support_routes
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    pub fn switcher(&self) -> &ContentSwitcher<P> {
        &self.switcher
    }

    pub fn visible_page(&self) -> &P {
        self.switcher.visible_page()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, e.g. to record a new viewport before calling
    /// [`Self::handle_resize`].
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn show_page(&mut self, index: usize) {
        assert!(
            index < self.destinations.len(),
            "page index {index} out of range for {} destinations",
            self.destinations.len()
        );
        self.state.selected_index = index;
        if self.support_routes {
            self.host.set_route(&self.routes[index]);
        }
        self.switcher.set_visible(index);
    }

    fn resolve_route(&self, path: &str) -> usize {
        match self.routes.iter().position(|route| route == path) {
            Some(index) => index,
            None => {
                log::debug!("unknown route `{path}`, showing first page");
                0
            },
        }
    }

    fn closes_on_select(&self) -> bool {
        self.orientation().is_portrait() && self.state.panel_visible
    }

    fn refresh(&mut self) {
        let orientation = self.orientation();
        self.decision = PanelDecision::derive(
            orientation,
            &self.config,
            self.state.panel_visible,
        );
        self.state.extended = self.decision.extended;
        self.host.request_render();
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutError, ResponsiveLayout};
    use crate::config::LayoutConfig;
    use crate::destination::Destination;
    use crate::host::Host;
    use crate::viewport::Viewport;

    #[derive(Debug)]
    struct StubHost {
        viewport: Viewport,
        route: String,
        renders: usize,
    }

    impl StubHost {
        fn landscape() -> Self {
            Self {
                viewport: Viewport::new(800.0, 600.0),
                route: String::from("/"),
                renders: 0,
            }
        }
    }

    impl Host for StubHost {
        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn request_render(&mut self) {
            self.renders += 1;
        }

        fn route(&self) -> &str {
            &self.route
        }

        fn set_route(&mut self, path: &str) {
            self.route = path.to_string();
        }
    }

    fn pages() -> Vec<(Destination, u8)> {
        vec![
            (Destination::new("i", "I", "Input"), 0),
            (Destination::new("o", "O", "Output"), 1),
        ]
    }

    #[test]
    fn given_no_pages_when_built_then_rejected() {
        let result = ResponsiveLayout::<u8, _>::new(
            Vec::new(),
            LayoutConfig::default(),
            StubHost::landscape(),
        );
        assert_eq!(result.err(), Some(LayoutError::NoDestinations));
    }

    #[test]
    fn given_colliding_routes_when_built_then_rejected() {
        let pages = vec![
            (Destination::new("i", "I", "Input"), 0),
            (Destination::new("o", "O", "Other").with_route("input"), 1),
        ];
        let result = ResponsiveLayout::new(
            pages,
            LayoutConfig::default(),
            StubHost::landscape(),
        );
        assert_eq!(
            result.err(),
            Some(LayoutError::DuplicateRoute {
                route: String::from("/input"),
            })
        );
    }

    #[test]
    fn given_routes_disabled_when_page_selected_then_host_path_untouched() {
        let config = LayoutConfig {
            support_routes: false,
            ..LayoutConfig::default()
        };
        let mut layout =
            ResponsiveLayout::new(pages(), config, StubHost::landscape())
                .expect("layout should build");

        layout.select_page(1);
        layout.handle_route_change("/input");

        assert_eq!(layout.host().route, "/");
        assert_eq!(layout.selected_index(), 1);
        assert_eq!(*layout.visible_page(), 1);
    }

    #[test]
    fn given_setter_when_called_then_render_is_requested() {
        let mut layout = ResponsiveLayout::new(
            pages(),
            LayoutConfig::default(),
            StubHost::landscape(),
        )
        .expect("layout should build");
        let before = layout.host().renders;

        layout.set_portrait_minimize_to_icons(true);

        assert_eq!(layout.host().renders, before + 1);
        assert!(layout.portrait_minimize_to_icons());
        assert!(!layout.landscape_minimize_to_icons());
    }

    #[test]
    fn given_same_orientation_resize_when_handled_then_nothing_renders() {
        let mut layout = ResponsiveLayout::new(
            pages(),
            LayoutConfig::default(),
            StubHost::landscape(),
        )
        .expect("layout should build");
        let before = layout.host().renders;

        layout.host_mut().viewport = Viewport::new(1280.0, 720.0);

        assert!(!layout.handle_resize());
        assert_eq!(layout.host().renders, before);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn given_out_of_range_index_when_selected_then_panics() {
        let mut layout = ResponsiveLayout::new(
            pages(),
            LayoutConfig::default(),
            StubHost::landscape(),
        )
        .expect("layout should build");
        layout.select_page(5);
    }
}
