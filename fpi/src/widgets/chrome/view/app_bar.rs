use iced::widget::{Space, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::{ChromeEvent, ChromeIntent};
use super::super::model::ChromeViewModel;
use crate::components::primitive::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{BACK, FORWARD, ICONS_ONLY, MENU, MENU_WIDTH};
use crate::shared::ui::theme::ThemeProps;

pub(crate) const APP_BAR_HEIGHT: f32 = 48.0;
const APP_BAR_HORIZONTAL_PADDING: f32 = 8.0;
const APP_BAR_SPACING: f32 = 4.0;
const CONTROL_BUTTON_SIZE: f32 = 36.0;
const CONTROL_GLYPH_SIZE: f32 = 20.0;
const TITLE_SCALE: f32 = 1.2;

/// Props for rendering the app bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppBarProps<'a> {
    pub(crate) vm: ChromeViewModel<'a>,
    pub(crate) theme: ThemeProps,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the app bar: menu, history arrows, title and layout toggles.
pub(crate) fn view<'a>(props: AppBarProps<'a>) -> Element<'a, ChromeEvent> {
    let vm = props.vm;
    let palette = props.theme.palette;

    let title = text(vm.title)
        .size(props.fonts.ui.size * TITLE_SCALE)
        .font(props.fonts.heading.font_type);

    let bar = row![
        control(
            props.theme,
            MENU,
            IconButtonVariant::Standard,
            true,
            ChromeIntent::MenuPressed
        ),
        control(
            props.theme,
            BACK,
            IconButtonVariant::Standard,
            vm.can_go_back,
            ChromeIntent::BackPressed
        ),
        control(
            props.theme,
            FORWARD,
            IconButtonVariant::Standard,
            vm.can_go_forward,
            ChromeIntent::ForwardPressed
        ),
        title,
        Space::new().width(Length::Fill),
        control(
            props.theme,
            ICONS_ONLY,
            toggle_variant(vm.icons_only),
            true,
            ChromeIntent::IconsOnlyPressed
        ),
        control(
            props.theme,
            MENU_WIDTH,
            toggle_variant(vm.menu_extended),
            true,
            ChromeIntent::MenuWidthPressed
        ),
    ]
    .spacing(APP_BAR_SPACING)
    .align_y(alignment::Vertical::Center);

    container(bar)
        .padding([0.0, APP_BAR_HORIZONTAL_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(APP_BAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.app_bar.into()),
            text_color: Some(palette.foreground),
            ..container::Style::default()
        })
        .into()
}

fn control<'a>(
    theme: ThemeProps,
    glyph: &'static str,
    variant: IconButtonVariant,
    enabled: bool,
    intent: ChromeIntent,
) -> Element<'a, ChromeEvent> {
    icon_button::view(IconButtonProps {
        glyph,
        theme,
        size: CONTROL_BUTTON_SIZE,
        glyph_size: CONTROL_GLYPH_SIZE,
        variant,
        enabled,
    })
    .map(move |_| ChromeEvent::Intent(intent.clone()))
}

fn toggle_variant(active: bool) -> IconButtonVariant {
    if active {
        IconButtonVariant::Active
    } else {
        IconButtonVariant::Standard
    }
}
