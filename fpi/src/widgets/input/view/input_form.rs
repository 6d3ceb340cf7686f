use iced::widget::{
    Column, button, column, container, row, text, text_input,
};
use iced::{Element, Length, alignment};

use super::super::event::{InputEvent, InputIntent};
use super::super::model::{
    CalculationOutcome, Feedback, FeedbackTone, InputViewModel, LoadedInput,
    REQUIRED_KEYS,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::{ShellPalette, ThemeProps};

const SECTION_PADDING: f32 = 10.0;
const ROW_SPACING: f32 = 8.0;
const RESULTS_TITLE_SIZE: f32 = 18.0;
const PARAMETER_SPACING: f32 = 2.0;
const PATH_PLACEHOLDER: &str = "Path to a JSON input file";

/// Props for rendering the input form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InputFormProps<'a> {
    pub(crate) vm: InputViewModel<'a>,
    pub(crate) theme: ThemeProps,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the load controls, feedback line and results section.
pub(crate) fn view<'a>(props: InputFormProps<'a>) -> Element<'a, InputEvent> {
    let vm = props.vm;
    let palette = props.theme.palette;
    let font_size = props.fonts.ui.size;

    let path_input = text_input(PATH_PLACEHOLDER, vm.path)
        .on_input(|value| InputEvent::Intent(InputIntent::PathChanged(value)))
        .on_submit(InputEvent::Intent(InputIntent::LoadRequested))
        .size(font_size)
        .font(props.fonts.ui.font_type)
        .width(Length::Fill);

    let load_label = if vm.loading {
        "Loading..."
    } else {
        "Select JSON Input File"
    };
    let load_button = button(text(load_label).size(font_size)).on_press_maybe(
        (!vm.loading).then_some(InputEvent::Intent(InputIntent::LoadRequested)),
    );

    let picker = row![path_input, load_button]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center);

    let feedback = view_feedback(vm.feedback, palette, font_size);

    let calculate_button = button(text("Calculate").size(font_size))
        .on_press_maybe(
            vm.can_calculate
                .then_some(InputEvent::Intent(InputIntent::CalculateRequested)),
        );

    let results_title = text("Results:")
        .size(RESULTS_TITLE_SIZE)
        .font(props.fonts.heading.font_type);

    column![
        container(picker).padding(SECTION_PADDING),
        container(feedback).padding(SECTION_PADDING),
        view_parameters(vm.loaded, palette, font_size),
        container(calculate_button).padding(SECTION_PADDING),
        results_title,
        view_outcome(vm.outcome, palette, font_size),
    ]
    .width(Length::Fill)
    .into()
}

fn view_feedback<'a>(
    feedback: Option<&'a Feedback>,
    palette: ShellPalette,
    size: f32,
) -> Element<'a, InputEvent> {
    let Some(feedback) = feedback else {
        return text("").size(size).into();
    };

    let color = match feedback.tone {
        FeedbackTone::Neutral => palette.dim_foreground,
        FeedbackTone::Success => palette.success,
        FeedbackTone::Error => palette.danger,
    };
    text(feedback.message.as_str()).size(size).color(color).into()
}

fn view_parameters<'a>(
    loaded: Option<&'a LoadedInput>,
    palette: ShellPalette,
    size: f32,
) -> Element<'a, InputEvent> {
    let Some(loaded) = loaded else {
        return Column::new().into();
    };

    let fields = loaded.document.fields();
    REQUIRED_KEYS
        .iter()
        .fold(Column::new(), |col, key| {
            let value = fields
                .get(*key)
                .map(|value| value.to_string())
                .unwrap_or_default();
            col.push(
                text(format!("{key}: {value}"))
                    .size(size)
                    .color(palette.dim_foreground),
            )
        })
        .spacing(PARAMETER_SPACING)
        .padding([0.0, SECTION_PADDING])
        .into()
}

fn view_outcome<'a>(
    outcome: Option<&'a CalculationOutcome>,
    palette: ShellPalette,
    size: f32,
) -> Element<'a, InputEvent> {
    match outcome {
        None => text("").size(size).into(),
        Some(CalculationOutcome::Solved(solution)) => text(format!(
            "x = {} after {} iterations",
            solution.root, solution.iterations
        ))
        .size(size)
        .into(),
        Some(CalculationOutcome::Failed(message)) => {
            text(message.as_str()).size(size).color(palette.danger).into()
        },
    }
}
