use iced::Task;

use super::event::{ChromeEffect, ChromeEvent, ChromeIntent};

/// Translate app bar presses into effects.
pub(crate) fn reduce(event: ChromeIntent) -> Task<ChromeEvent> {
    Task::done(ChromeEvent::Effect(effect_for(event)))
}

fn effect_for(event: ChromeIntent) -> ChromeEffect {
    match event {
        ChromeIntent::MenuPressed => ChromeEffect::ToggleNavigation,
        ChromeIntent::BackPressed => ChromeEffect::HistoryBack,
        ChromeIntent::ForwardPressed => ChromeEffect::HistoryForward,
        ChromeIntent::IconsOnlyPressed => ChromeEffect::ToggleIconsOnly,
        ChromeIntent::MenuWidthPressed => ChromeEffect::ToggleMenuExtended,
    }
}

#[cfg(test)]
mod tests {
    use super::effect_for;
    use crate::widgets::chrome::event::{ChromeEffect, ChromeIntent};

    #[test]
    fn given_app_bar_presses_then_each_maps_to_its_effect() {
        let cases = [
            (ChromeIntent::MenuPressed, ChromeEffect::ToggleNavigation),
            (ChromeIntent::BackPressed, ChromeEffect::HistoryBack),
            (ChromeIntent::ForwardPressed, ChromeEffect::HistoryForward),
            (ChromeIntent::IconsOnlyPressed, ChromeEffect::ToggleIconsOnly),
            (
                ChromeIntent::MenuWidthPressed,
                ChromeEffect::ToggleMenuExtended,
            ),
        ];

        for (intent, expected) in cases {
            assert_eq!(effect_for(intent), expected);
        }
    }
}
