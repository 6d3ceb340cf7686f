use fpi_ui_layout::{Arrangement, RenderTree, Slot};
use iced::widget::{Row, Stack, column};
use iced::{Element, Length, Theme};

use super::{APP_TITLE, App, AppEvent};
use crate::components::primitive::divider::{
    self, DividerAxis, DividerProps,
};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::chrome::model::ChromeViewModel;
use crate::widgets::chrome::view::app_bar;
use crate::widgets::input::view::input_form;
use crate::widgets::navigation::view::{dismiss_surface, rail};
use crate::widgets::pages::PageKind;
use crate::widgets::pages::view::page_card;
use crate::widgets::toast::view::toast_stack;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);

    let header = view_header(app, theme_props);
    let body = view_body(app, theme_props);

    let toasts = toast_stack::view(toast_stack::ToastStackProps {
        vm: app.widgets.toast.vm(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::Toast);

    let root_layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> = vec![
        column![header, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        toasts,
    ];

    Stack::with_children(root_layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the header: app bar + separator.
fn view_header<'a>(
    app: &'a App,
    theme_props: ThemeProps,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let nav = app.widgets.navigation.vm();

    let app_bar = app_bar::view(app_bar::AppBarProps {
        vm: ChromeViewModel {
            title: APP_TITLE,
            can_go_back: nav.can_go_back,
            can_go_forward: nav.can_go_forward,
            icons_only: nav.icons_only,
            menu_extended: nav.menu_extended,
        },
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::Chrome);

    column![
        app_bar,
        divider::view(DividerProps {
            axis: DividerAxis::Horizontal,
            theme: theme_props,
        })
    ]
    .width(Length::Fill)
    .height(Length::Shrink)
    .into()
}

/// Render the slots of the navigation render tree in order.
fn view_body<'a>(
    app: &'a App,
    theme_props: ThemeProps,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let RenderTree {
        arrangement,
        slots,
        rail: nav_rail,
        ..
    } = app.widgets.navigation.render();

    let mut panel = Some(nav_rail);
    let cells: Vec<Element<'a, AppEvent, Theme, iced::Renderer>> = slots
        .into_iter()
        .filter_map(|slot| match slot {
            Slot::Panel => panel.take().map(|tree_rail| {
                rail::view(rail::RailProps {
                    rail: tree_rail,
                    theme: theme_props,
                    fonts: &app.fonts,
                })
                .map(AppEvent::Navigation)
            }),
            Slot::Content => Some(view_page(app, theme_props)),
            Slot::DismissSurface => {
                Some(dismiss_surface::view().map(AppEvent::Navigation))
            },
        })
        .collect();

    match arrangement {
        Arrangement::Row => Row::with_children(cells)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Arrangement::Stack => Stack::with_children(cells)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    }
}

/// Render the visible page with its page specific controls.
fn view_page<'a>(
    app: &'a App,
    theme_props: ThemeProps,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let page = app.widgets.navigation.visible_page();

    let controls = match page {
        PageKind::Input => Some(
            input_form::view(input_form::InputFormProps {
                vm: app.widgets.input.vm(),
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(AppEvent::Input),
        ),
        PageKind::Animation
        | PageKind::Output
        | PageKind::Team
        | PageKind::Info => None,
    };

    page_card::view(page_card::PageCardProps {
        content: page.content(),
        controls,
        theme: theme_props,
        fonts: &app.fonts,
    })
}
