use fpi_ui_layout::Viewport;
use iced::Task;

use super::event::{
    HistoryDirection, NavigationEffect, NavigationEvent, NavigationIntent,
};
use super::model::ShellLayout;

/// Reduce a navigation intent into layout transitions and effect tasks.
pub(crate) fn reduce(
    layout: &mut ShellLayout,
    event: NavigationIntent,
) -> Task<NavigationEvent> {
    match event {
        NavigationIntent::Select { index } => {
            if index < layout.destinations().len() {
                layout.navigate(index);
            } else {
                log::warn!("ignoring selection of missing page {index}");
            }
        },
        NavigationIntent::DismissOverlay
        | NavigationIntent::ToggleNavigation => layout.toggle_navigation(),
        NavigationIntent::CloseOverlay => layout.check_toggle_on_select(),
        NavigationIntent::ToggleIconsOnly => {
            let value = !layout.minimize_to_icons();
            layout.set_minimize_to_icons(value);
        },
        NavigationIntent::ToggleMenuExtended => {
            let value = !layout.menu_extended();
            layout.set_menu_extended(value);
        },
        NavigationIntent::Resized { width, height } => {
            layout.host_mut().set_viewport(Viewport::new(width, height));
            layout.handle_resize();
        },
        NavigationIntent::History(direction) => {
            return step_history(layout, direction);
        },
    }

    Task::none()
}

fn step_history(
    layout: &mut ShellLayout,
    direction: HistoryDirection,
) -> Task<NavigationEvent> {
    let location = layout.host_mut().location_mut();
    let path = match direction {
        HistoryDirection::Back => location.back(),
        HistoryDirection::Forward => location.forward(),
    };

    match path {
        Some(path) => {
            layout.handle_route_change(&path);
            Task::none()
        },
        None => Task::done(NavigationEvent::Effect(
            NavigationEffect::HistoryExhausted { direction },
        )),
    }
}
