use iced::widget::{button, container, text};
use iced::{Color, Element, Length, alignment};

use crate::shared::ui::theme::ThemeProps;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconButtonVariant {
    Standard,
    /// The option the button controls is switched on.
    Active,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps {
    pub(crate) glyph: &'static str,
    pub(crate) theme: ThemeProps,
    pub(crate) size: f32,
    pub(crate) glyph_size: f32,
    pub(crate) variant: IconButtonVariant,
    pub(crate) enabled: bool,
}

const ICON_BUTTON_PADDING: f32 = 0.0;
const DISABLED_ALPHA: f32 = 0.35;

/// Render a square glyph button used in the app bar.
pub(crate) fn view<'a>(
    props: IconButtonProps,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.palette;
    let (base_color, hover_color) = resolve_variant_colors(
        props.variant,
        props.enabled,
        palette.foreground,
        palette.accent,
    );

    let glyph = container(text(props.glyph).size(props.glyph_size))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(glyph)
        .on_press_maybe(props.enabled.then_some(IconButtonEvent::Pressed))
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let text_color = if matches!(status, button::Status::Hovered) {
                hover_color
            } else {
                base_color
            };
            button::Style {
                text_color,
                ..button::Style::default()
            }
        })
        .into()
}

fn resolve_variant_colors(
    variant: IconButtonVariant,
    enabled: bool,
    default_base: Color,
    accent: Color,
) -> (Color, Color) {
    if !enabled {
        let mut muted = default_base;
        muted.a = DISABLED_ALPHA;
        return (muted, muted);
    }

    match variant {
        IconButtonVariant::Standard => (default_base, accent),
        IconButtonVariant::Active => (accent, default_base),
    }
}
