use std::path::PathBuf;

use iced::Task;

use super::event::{InputEffect, InputEvent, InputIntent};
use super::model::{CalculationOutcome, FeedbackTone, LoadedInput};
use super::state::InputState;
use super::storage::load_input_file;
use crate::solver::SolveService;
use crate::widgets::toast::ToastLevel;

const NO_FILE_SELECTED: &str = "No file selected.";
const LOAD_SUCCEEDED: &str = "File loaded successfully!";
const LOAD_FAILED: &str = "Failed to load file.";

/// Runtime dependencies required by the input reducer.
pub(crate) struct InputCtx<'a> {
    pub(crate) solver: &'a dyn SolveService,
}

/// Reduce an input intent into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut InputState,
    event: InputIntent,
    ctx: &InputCtx<'_>,
) -> Task<InputEvent> {
    match event {
        InputIntent::PathChanged(path) => {
            state.set_path(path);
            Task::none()
        },
        InputIntent::LoadRequested => request_load(state),
        InputIntent::LoadFinished { generation, result } => {
            if !state.finish_load(generation) {
                log::debug!("ignoring stale input load {generation}");
                return Task::none();
            }
            apply_load_result(state, result)
        },
        InputIntent::CalculateRequested => {
            calculate(state, ctx);
            Task::none()
        },
    }
}

fn request_load(state: &mut InputState) -> Task<InputEvent> {
    let path = state.path().trim();
    if path.is_empty() {
        state.set_feedback(
            String::from(NO_FILE_SELECTED),
            FeedbackTone::Neutral,
        );
        return Task::none();
    }

    let path = PathBuf::from(path);
    let generation = state.begin_load();
    log::debug!("loading input file {}", path.display());

    Task::perform(
        async move { load_input_file(&path).map_err(|err| err.to_string()) },
        move |result| {
            InputEvent::Intent(InputIntent::LoadFinished { generation, result })
        },
    )
}

fn apply_load_result(
    state: &mut InputState,
    result: Result<LoadedInput, String>,
) -> Task<InputEvent> {
    match result {
        Ok(loaded) => {
            log::info!("input file {} loaded", loaded.file_name);
            state.apply_loaded(loaded);
            notify(LOAD_SUCCEEDED, ToastLevel::Success)
        },
        Err(message) => {
            log::warn!("input file load failed: {message}");
            state.apply_load_failure(&message);
            notify(LOAD_FAILED, ToastLevel::Error)
        },
    }
}

fn calculate(state: &mut InputState, ctx: &InputCtx<'_>) {
    let Some(loaded) = state.loaded() else {
        log::debug!("calculate requested without a loaded input");
        return;
    };

    let outcome = match loaded.document.solve_request() {
        Ok(request) => match ctx.solver.solve(&request) {
            Ok(solution) => CalculationOutcome::Solved(solution),
            Err(err) => CalculationOutcome::Failed(err.to_string()),
        },
        Err(err) => CalculationOutcome::Failed(err.to_string()),
    };
    state.set_outcome(outcome);
}

fn notify(message: &str, level: ToastLevel) -> Task<InputEvent> {
    Task::done(InputEvent::Effect(InputEffect::Notify {
        message: message.to_string(),
        level,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{InputCtx, reduce};
    use crate::solver::{
        DetachedSolver, Solution, SolveError, SolveRequest, SolveService,
    };
    use crate::widgets::input::event::InputIntent;
    use crate::widgets::input::model::{
        CalculationOutcome, FeedbackTone, InputDocument, LoadedInput,
    };
    use crate::widgets::input::state::InputState;

    struct FixedSolver;

    impl SolveService for FixedSolver {
        fn solve(
            &self,
            request: &SolveRequest,
        ) -> Result<Solution, SolveError> {
            Ok(Solution {
                root: request.initial_guess,
                iterations: request.max_iterations,
            })
        }
    }

    fn loaded_input() -> LoadedInput {
        LoadedInput {
            file_name: String::from("problem.json"),
            document: InputDocument::from_value(json!({
                "function": "cos(x)",
                "initial_guess": 0.5,
                "tolerance": 0.001,
                "max_iterations": 20,
            }))
            .expect("fixture should validate"),
        }
    }

    fn finish(state: &mut InputState, result: Result<LoadedInput, String>) {
        let generation = state.begin_load();
        let _ = reduce(
            state,
            InputIntent::LoadFinished { generation, result },
            &InputCtx {
                solver: &DetachedSolver,
            },
        );
    }

    #[test]
    fn given_empty_path_when_load_requested_then_no_file_feedback() {
        let mut state = InputState::default();
        state.set_path(String::from("   "));

        let _ = reduce(
            &mut state,
            InputIntent::LoadRequested,
            &InputCtx {
                solver: &DetachedSolver,
            },
        );

        let feedback = state.feedback().expect("feedback should be set");
        assert_eq!(feedback.message, "No file selected.");
        assert!(!state.is_loading());
    }

    #[test]
    fn given_successful_load_then_feedback_names_file_and_calculate_enables() {
        let mut state = InputState::default();

        finish(&mut state, Ok(loaded_input()));

        let feedback = state.feedback().expect("feedback should be set");
        assert_eq!(feedback.message, "Loaded JSON file: problem.json");
        assert_eq!(feedback.tone, FeedbackTone::Success);
        assert!(state.vm().can_calculate);
    }

    #[test]
    fn given_failed_load_then_error_feedback_and_calculate_disabled() {
        let mut state = InputState::default();
        finish(&mut state, Ok(loaded_input()));

        finish(&mut state, Err(String::from("expected value at line 1")));

        let feedback = state.feedback().expect("feedback should be set");
        assert_eq!(feedback.message, "Error: expected value at line 1");
        assert_eq!(feedback.tone, FeedbackTone::Error);
        assert!(!state.vm().can_calculate);
    }

    #[test]
    fn given_superseded_load_when_it_finishes_then_result_is_ignored() {
        let mut state = InputState::default();
        let stale = state.begin_load();
        let _current = state.begin_load();

        let _ = reduce(
            &mut state,
            InputIntent::LoadFinished {
                generation: stale,
                result: Ok(loaded_input()),
            },
            &InputCtx {
                solver: &DetachedSolver,
            },
        );

        assert!(state.loaded().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn given_loaded_input_when_calculated_then_solver_outcome_is_shown() {
        let mut state = InputState::default();
        finish(&mut state, Ok(loaded_input()));

        let _ = reduce(
            &mut state,
            InputIntent::CalculateRequested,
            &InputCtx {
                solver: &FixedSolver,
            },
        );

        assert_eq!(
            state.outcome(),
            Some(&CalculationOutcome::Solved(Solution {
                root: 0.5,
                iterations: 20,
            }))
        );
    }

    #[test]
    fn given_detached_solver_when_calculated_then_failure_is_reported() {
        let mut state = InputState::default();
        finish(&mut state, Ok(loaded_input()));

        let _ = reduce(
            &mut state,
            InputIntent::CalculateRequested,
            &InputCtx {
                solver: &DetachedSolver,
            },
        );

        match state.outcome() {
            Some(CalculationOutcome::Failed(message)) => {
                assert!(message.contains("no fixed-point solver"));
            },
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn given_nothing_loaded_when_calculated_then_no_outcome() {
        let mut state = InputState::default();

        let _ = reduce(
            &mut state,
            InputIntent::CalculateRequested,
            &InputCtx {
                solver: &FixedSolver,
            },
        );

        assert!(state.outcome().is_none());
    }
}
