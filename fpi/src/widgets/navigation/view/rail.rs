use fpi_ui_layout::{LabelType, Rail, RailItem};
use iced::widget::{Column, button, column, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::{NavigationEvent, NavigationIntent};
use crate::components::primitive::divider::{
    self, DividerAxis, DividerProps,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::{ShellPalette, ThemeProps};

const RAIL_WIDTH: f32 = 88.0;
const RAIL_ICONS_ONLY_WIDTH: f32 = 60.0;
const RAIL_EXTENDED_WIDTH: f32 = 200.0;
const RAIL_PADDING: f32 = 8.0;
const ITEM_SPACING: f32 = 4.0;
const ITEM_PADDING: f32 = 8.0;
const ITEM_RADIUS: f32 = 16.0;
const ICON_SIZE: f32 = 20.0;
const COMPACT_LABEL_SCALE: f32 = 0.85;
const EXTENDED_ITEM_SPACING: f32 = 12.0;

/// Props for rendering the navigation rail.
#[derive(Debug, Clone)]
pub(crate) struct RailProps<'a> {
    pub(crate) rail: Rail<'a>,
    pub(crate) theme: ThemeProps,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the rail followed by its vertical divider.
pub(crate) fn view<'a>(props: RailProps<'a>) -> Element<'a, NavigationEvent> {
    let palette = props.theme.palette;
    let Rail {
        items,
        extended,
        label_type,
        ..
    } = props.rail;

    let destinations = items
        .into_iter()
        .enumerate()
        .fold(Column::new(), |col, (index, item)| {
            col.push(view_item(index, item, extended, palette, props.fonts))
        })
        .spacing(ITEM_SPACING)
        .padding(RAIL_PADDING)
        .width(Length::Fill);

    let rail = container(destinations)
        .width(Length::Fixed(rail_width(extended, label_type)))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            text_color: Some(palette.foreground),
            ..container::Style::default()
        });

    row![
        rail,
        divider::view(DividerProps {
            axis: DividerAxis::Vertical,
            theme: props.theme,
        })
    ]
    .height(Length::Fill)
    .into()
}

fn view_item<'a>(
    index: usize,
    item: RailItem<'a>,
    extended: bool,
    palette: ShellPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, NavigationEvent> {
    let icon = text(item.current_icon()).size(ICON_SIZE);

    let (content, align): (Element<'a, NavigationEvent>, _) =
        match item.label {
            Some(label) if extended => (
                row![icon, text(label).size(fonts.ui.size)]
                    .spacing(EXTENDED_ITEM_SPACING)
                    .align_y(alignment::Vertical::Center)
                    .into(),
                alignment::Horizontal::Left,
            ),
            Some(label) => (
                column![
                    icon,
                    text(label).size(fonts.ui.size * COMPACT_LABEL_SCALE)
                ]
                .align_x(alignment::Horizontal::Center)
                .into(),
                alignment::Horizontal::Center,
            ),
            None => (icon.into(), alignment::Horizontal::Center),
        };

    let selected = item.selected;
    button(container(content).width(Length::Fill).align_x(align))
        .on_press(NavigationEvent::Intent(NavigationIntent::Select { index }))
        .padding(ITEM_PADDING)
        .width(Length::Fill)
        .style(move |_, status| {
            let background = if selected {
                Some(palette.selection.into())
            } else if matches!(status, button::Status::Hovered) {
                Some(palette.divider.into())
            } else {
                None
            };
            button::Style {
                background,
                text_color: palette.foreground,
                border: iced::Border {
                    radius: ITEM_RADIUS.into(),
                    ..iced::Border::default()
                },
                ..button::Style::default()
            }
        })
        .into()
}

fn rail_width(extended: bool, label_type: LabelType) -> f32 {
    match (extended, label_type) {
        (true, LabelType::All) => RAIL_EXTENDED_WIDTH,
        (_, LabelType::None) => RAIL_ICONS_ONLY_WIDTH,
        (false, LabelType::All) => RAIL_WIDTH,
    }
}
