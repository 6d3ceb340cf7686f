use iced::widget::{Column, container, mouse_area, text};
use iced::{Color, Element, Length, alignment, mouse};

use super::super::event::ToastEvent;
use super::super::model::{ToastLevel, ToastViewModel};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::{ShellPalette, ThemeProps};

const TOAST_WIDTH: f32 = 320.0;
const TOAST_PADDING: f32 = 12.0;
const TOAST_RADIUS: f32 = 4.0;
const TOAST_SPACING: f32 = 8.0;
const STACK_MARGIN: f32 = 16.0;

/// Props for rendering the toast stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToastStackProps<'a> {
    pub(crate) vm: ToastViewModel<'a>,
    pub(crate) theme: ThemeProps,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render toasts anchored to the bottom center; a click dismisses one.
pub(crate) fn view<'a>(props: ToastStackProps<'a>) -> Element<'a, ToastEvent> {
    let palette = props.theme.palette;

    let toasts = props
        .vm
        .toasts
        .iter()
        .fold(Column::new(), |col, toast| {
            let accent = level_color(toast.level, palette);
            let body = container(
                text(toast.message.as_str()).size(props.fonts.ui.size),
            )
            .padding(TOAST_PADDING)
            .width(Length::Fixed(TOAST_WIDTH))
            .style(move |_| container::Style {
                background: Some(palette.surface.into()),
                text_color: Some(palette.foreground),
                border: iced::Border {
                    color: accent,
                    width: 1.0,
                    radius: TOAST_RADIUS.into(),
                },
                ..container::Style::default()
            });

            col.push(
                mouse_area(body)
                    .on_press(ToastEvent::Dismiss { id: toast.id })
                    .interaction(mouse::Interaction::Pointer),
            )
        })
        .spacing(TOAST_SPACING);

    container(toasts)
        .padding(STACK_MARGIN)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn level_color(level: ToastLevel, palette: ShellPalette) -> Color {
    match level {
        ToastLevel::Info => palette.accent,
        ToastLevel::Success => palette.success,
        ToastLevel::Error => palette.danger,
    }
}
