use iced::widget::{Column, column, container, scrollable, text};
use iced::{Element, Length};

use super::super::model::PageContent;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const CARD_PADDING: f32 = 8.0;
const CARD_RADIUS: f32 = 6.0;
const PAGE_PADDING: f32 = 16.0;
const PAGE_SPACING: f32 = 12.0;
const BODY_LINE_SPACING: f32 = 2.0;

/// Props for rendering a page card.
pub(crate) struct PageCardProps<'a, Message> {
    pub(crate) content: PageContent,
    /// Page specific controls shown below the body text.
    pub(crate) controls: Option<Element<'a, Message>>,
    pub(crate) theme: ThemeProps,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a page: title card, body text and optional controls.
pub(crate) fn view<'a, Message: 'a>(
    props: PageCardProps<'a, Message>,
) -> Element<'a, Message> {
    let palette = props.theme.palette;

    let title = container(
        text(props.content.title)
            .size(props.fonts.heading.size)
            .font(props.fonts.heading.font_type),
    )
    .padding(CARD_PADDING)
    .width(Length::Fill)
    .style(move |_| container::Style {
        background: Some(palette.surface.into()),
        border: iced::Border {
            radius: CARD_RADIUS.into(),
            ..iced::Border::default()
        },
        ..container::Style::default()
    });

    let body = props
        .content
        .body
        .iter()
        .fold(Column::new(), |col, line| {
            col.push(
                text(*line)
                    .size(props.fonts.ui.size)
                    .font(props.fonts.ui.font_type),
            )
        })
        .spacing(BODY_LINE_SPACING);

    let mut page = column![title, body]
        .spacing(PAGE_SPACING)
        .width(Length::Fill);
    if let Some(controls) = props.controls {
        page = page.push(controls);
    }

    container(scrollable(page.padding(PAGE_PADDING)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.background.into()),
            ..container::Style::default()
        })
        .into()
}
