use iced::widget::{Space, container, mouse_area};
use iced::{Element, Length, mouse};

use super::super::event::{NavigationEvent, NavigationIntent};

/// Render the invisible full-bleed layer behind the overlay rail.
///
/// Pressing anywhere outside the rail closes it.
pub(crate) fn view<'a>() -> Element<'a, NavigationEvent> {
    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(NavigationEvent::Intent(NavigationIntent::DismissOverlay))
    .interaction(mouse::Interaction::Idle)
    .into()
}
