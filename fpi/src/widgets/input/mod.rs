pub(crate) mod errors;
pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
mod storage;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{InputEffect, InputEvent, InputIntent};
use self::model::InputViewModel;
use self::reducer::InputCtx;
use self::state::InputState;
use crate::solver::SolveService;

/// Input page: loads a JSON problem description and runs the solver.
pub(crate) struct InputWidget {
    state: InputState,
    solver: Box<dyn SolveService>,
}

impl InputWidget {
    pub(crate) fn new(solver: Box<dyn SolveService>) -> Self {
        Self {
            state: InputState::default(),
            solver,
        }
    }

    /// Reduce an input intent into state updates and effects.
    pub(crate) fn reduce(&mut self, event: InputIntent) -> Task<InputEvent> {
        let ctx = InputCtx {
            solver: self.solver.as_ref(),
        };
        reducer::reduce(&mut self.state, event, &ctx)
    }

    pub(crate) fn vm(&self) -> InputViewModel<'_> {
        self.state.vm()
    }
}
