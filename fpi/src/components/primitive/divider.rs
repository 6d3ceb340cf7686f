use iced::widget::{Space, container};
use iced::{Element, Length};

use crate::shared::ui::theme::ThemeProps;

const DIVIDER_THICKNESS: f32 = 1.0;

/// Orientation of a divider line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DividerAxis {
    Horizontal,
    Vertical,
}

/// Props for rendering a divider.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DividerProps {
    pub(crate) axis: DividerAxis,
    pub(crate) theme: ThemeProps,
}

/// Render a one pixel separator line.
pub(crate) fn view<'a, Message: 'a>(
    props: DividerProps,
) -> Element<'a, Message> {
    let color = props.theme.palette.divider;
    let (width, height) = match props.axis {
        DividerAxis::Horizontal => {
            (Length::Fill, Length::Fixed(DIVIDER_THICKNESS))
        },
        DividerAxis::Vertical => {
            (Length::Fixed(DIVIDER_THICKNESS), Length::Fill)
        },
    };

    container(Space::new())
        .width(width)
        .height(height)
        .style(move |_| container::Style {
            background: Some(color.into()),
            ..container::Style::default()
        })
        .into()
}
