use fpi_ui_layout::{
    Arrangement, Destination, Host, LabelType, LayoutConfig, Orientation,
    RailMode, ResponsiveLayout, Slot, Viewport,
};

#[derive(Debug)]
struct RecordingHost {
    viewport: Viewport,
    route: String,
    routes_pushed: Vec<String>,
    renders: usize,
}

impl RecordingHost {
    fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            route: String::from("/"),
            routes_pushed: Vec::new(),
            renders: 0,
        }
    }

    fn at(mut self, route: &str) -> Self {
        self.route = route.to_string();
        self
    }
}

impl Host for RecordingHost {
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
        self.routes_pushed.push(path.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Input,
    Animation,
    Output,
    Team,
    Info,
}

fn menu() -> Vec<(Destination, Page)> {
    vec![
        (Destination::new("▷", "▶", "Input"), Page::Input),
        (Destination::new("◌", "●", "Animation"), Page::Animation),
        (Destination::new("□", "■", "Output"), Page::Output),
        (Destination::new("♡", "♥", "Team"), Page::Team),
        (Destination::new("ⓘ", "ℹ", "Info"), Page::Info),
    ]
}

fn build(
    config: LayoutConfig,
    host: RecordingHost,
) -> ResponsiveLayout<Page, RecordingHost> {
    ResponsiveLayout::new(menu(), config, host).expect("layout should build")
}

fn resize(
    layout: &mut ResponsiveLayout<Page, RecordingHost>,
    width: f32,
    height: f32,
) -> bool {
    layout.host_mut().viewport = Viewport::new(width, height);
    layout.handle_resize()
}

#[test]
fn given_any_dimensions_when_classified_then_exactly_one_class_matches() {
    let samples = [0.0_f32, 1.0, 299.5, 300.0, 600.0, 800.0, 1920.0];
    for &width in &samples {
        for &height in &samples {
            let expected = if height >= width {
                Orientation::Portrait
            } else {
                Orientation::Landscape
            };
            assert_eq!(Orientation::classify(width, height), expected);
        }
    }
}

#[test]
fn given_valid_index_when_page_selected_then_only_that_page_is_visible() {
    let mut layout =
        build(LayoutConfig::default(), RecordingHost::new(800.0, 600.0));

    for index in [3, 0, 4, 2] {
        layout.select_page(index);

        let visible: Vec<usize> = layout
            .switcher()
            .visibility()
            .enumerate()
            .filter_map(|(i, shown)| shown.then_some(i))
            .collect();
        assert_eq!(visible, vec![index]);
        assert_eq!(layout.render().visible_page, index);
        assert_eq!(layout.state().selected_index, index);
    }
}

#[test]
fn given_routes_enabled_when_selected_path_is_fed_back_then_same_page_returns()
{
    let mut layout =
        build(LayoutConfig::default(), RecordingHost::new(800.0, 600.0));

    for index in 0..5 {
        layout.select_page(index);
        let path = layout.host().route.clone();
        assert_eq!(path, layout.routes()[index]);

        layout.select_page((index + 1) % 5);
        layout.handle_route_change(&path);

        assert_eq!(layout.selected_index(), index);
    }
    assert_eq!(
        layout.routes(),
        ["/input", "/animation", "/output", "/team", "/info"]
    );
}

#[test]
fn given_unknown_path_when_route_changes_then_first_page_is_selected() {
    let mut layout =
        build(LayoutConfig::default(), RecordingHost::new(800.0, 600.0));
    layout.select_page(3);

    layout.handle_route_change("/not-a-route");

    assert_eq!(layout.selected_index(), 0);
    assert_eq!(*layout.visible_page(), Page::Input);
    assert_eq!(layout.host().route, "/input");
}

#[test]
fn given_startup_path_when_built_then_page_is_resolved_from_host() {
    let deep_link = build(
        LayoutConfig::default(),
        RecordingHost::new(800.0, 600.0).at("/team"),
    );
    assert_eq!(*deep_link.visible_page(), Page::Team);

    let root = build(LayoutConfig::default(), RecordingHost::new(800.0, 600.0));
    assert_eq!(*root.visible_page(), Page::Input);
    assert_eq!(root.host().route, "/input");
}

#[test]
fn given_landscape_icon_minimize_and_hidden_panel_then_icon_rail_is_kept() {
    let config = LayoutConfig {
        landscape_minimize_to_icons: true,
        ..LayoutConfig::default()
    };
    let mut layout = build(config, RecordingHost::new(800.0, 600.0));
    assert!(layout.state().panel_visible);

    layout.toggle_navigation();

    let tree = layout.render();
    assert!(!layout.state().panel_visible);
    assert!(!layout.state().extended);
    assert_eq!(tree.mode, RailMode::IconsOnly);
    assert_eq!(tree.rail.label_type, LabelType::None);
    assert!(!tree.rail.extended);
    assert!(tree.panel_shown());
    assert_eq!(tree.arrangement, Arrangement::Row);
}

#[test]
fn given_portrait_overlay_when_opened_then_dismiss_surface_closes_it() {
    let mut layout =
        build(LayoutConfig::default(), RecordingHost::new(400.0, 800.0));
    assert!(!layout.state().panel_visible);
    assert_eq!(layout.render().slots, vec![Slot::Content]);

    layout.toggle_navigation();

    let tree = layout.render();
    assert_eq!(tree.arrangement, Arrangement::Stack);
    assert!(tree.has_dismiss_surface());
    assert!(tree.panel_shown());
    assert_eq!(tree.rail.label_type, LabelType::All);

    // Dismissing runs the same toggle.
    layout.toggle_navigation();
    assert!(!layout.state().panel_visible);
    assert!(!layout.render().has_dismiss_surface());
}

#[test]
fn given_portrait_overlay_when_destination_selected_then_overlay_closes() {
    let mut layout =
        build(LayoutConfig::default(), RecordingHost::new(400.0, 800.0));
    layout.toggle_navigation();

    layout.navigate(2);

    assert!(!layout.state().panel_visible);
    assert_eq!(*layout.visible_page(), Page::Output);
    assert_eq!(layout.host().route, "/output");
}

#[test]
fn given_landscape_panel_when_destination_selected_then_panel_stays_open() {
    let mut layout =
        build(LayoutConfig::default(), RecordingHost::new(800.0, 600.0));

    layout.navigate(1);
    layout.check_toggle_on_select();

    assert!(layout.state().panel_visible);
    assert_eq!(*layout.visible_page(), Page::Animation);
}

#[test]
fn given_landscape_to_portrait_crossing_then_panel_resets_only_on_crossing() {
    let mut layout =
        build(LayoutConfig::default(), RecordingHost::new(800.0, 600.0));
    assert!(layout.state().panel_visible);

    assert!(resize(&mut layout, 400.0, 800.0));
    assert!(!layout.state().panel_visible);
    assert_eq!(layout.state().last_orientation, Orientation::Portrait);

    layout.toggle_navigation();
    let renders = layout.host().renders;

    assert!(!resize(&mut layout, 420.0, 820.0));
    assert!(layout.state().panel_visible);
    assert_eq!(layout.host().renders, renders);

    assert!(resize(&mut layout, 1024.0, 768.0));
    assert!(layout.state().panel_visible);
    assert_eq!(layout.render().mode, RailMode::Full);
}

#[test]
fn given_unreported_rotation_when_transition_runs_then_tree_agrees_with_mode()
{
    let mut layout =
        build(LayoutConfig::default(), RecordingHost::new(800.0, 600.0));
    layout.host_mut().viewport = Viewport::new(400.0, 800.0);

    layout.toggle_navigation();

    let tree = layout.render();
    assert_eq!(tree.orientation, Orientation::Portrait);
    assert_eq!(tree.mode, RailMode::Overlay);
    assert_eq!(tree.arrangement, Arrangement::Stack);
    assert_eq!(layout.decision().orientation, Orientation::Portrait);
    assert_eq!(layout.state().last_orientation, Orientation::Landscape);

    assert!(layout.handle_resize());
    assert_eq!(layout.render().orientation, Orientation::Portrait);
}

#[test]
fn given_hidden_icon_rail_when_menu_extended_toggled_then_effect_is_deferred() {
    let config = LayoutConfig {
        minimize_to_icons: true,
        menu_extended: false,
        ..LayoutConfig::default()
    };
    let mut layout = build(config, RecordingHost::new(800.0, 600.0));
    layout.toggle_navigation();
    assert!(!layout.render().rail.extended);

    layout.set_menu_extended(true);
    assert!(layout.menu_extended());
    assert!(!layout.render().rail.extended);
    assert!(!layout.state().extended);

    layout.toggle_navigation();
    assert!(layout.render().rail.extended);
    assert!(layout.state().extended);
}

#[test]
fn given_portrait_icon_minimize_when_flags_change_then_rail_rederives() {
    let mut layout =
        build(LayoutConfig::default(), RecordingHost::new(400.0, 800.0));
    assert!(!layout.render().panel_shown());

    layout.set_portrait_minimize_to_icons(true);
    let tree = layout.render();
    assert_eq!(tree.mode, RailMode::IconsOnly);
    assert!(tree.panel_shown());
    assert_eq!(tree.arrangement, Arrangement::Row);

    layout.set_portrait_minimize_to_icons(false);
    layout.set_minimize_to_icons(true);
    assert!(layout.minimize_to_icons());
    assert_eq!(layout.render().mode, RailMode::IconsOnly);
}

#[test]
fn given_any_transition_then_render_is_requested() {
    let mut layout =
        build(LayoutConfig::default(), RecordingHost::new(800.0, 600.0));
    let mut expected = layout.host().renders;

    layout.select_page(1);
    expected += 1;
    assert_eq!(layout.host().renders, expected);

    layout.toggle_navigation();
    expected += 1;
    assert_eq!(layout.host().renders, expected);

    layout.handle_route_change("/info");
    expected += 1;
    assert_eq!(layout.host().renders, expected);

    layout.set_landscape_minimize_to_icons(true);
    expected += 1;
    assert_eq!(layout.host().renders, expected);

    assert!(layout.host().routes_pushed.ends_with(&[
        String::from("/animation"),
        String::from("/info"),
    ]));
}
