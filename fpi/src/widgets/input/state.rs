use super::model::{
    CalculationOutcome, Feedback, FeedbackTone, InputViewModel, LoadedInput,
};

/// Mutable state of the input page.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    path: String,
    feedback: Option<Feedback>,
    loaded: Option<LoadedInput>,
    /// Generation of the load in flight, if any.
    pending_load: Option<u64>,
    load_generation: u64,
    outcome: Option<CalculationOutcome>,
}

impl InputState {
    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn set_path(&mut self, path: String) {
        self.path = path;
    }

    pub(crate) fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub(crate) fn loaded(&self) -> Option<&LoadedInput> {
        self.loaded.as_ref()
    }

    pub(crate) fn outcome(&self) -> Option<&CalculationOutcome> {
        self.outcome.as_ref()
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    pub(crate) fn set_feedback(
        &mut self,
        message: String,
        tone: FeedbackTone,
    ) {
        self.feedback = Some(Feedback { message, tone });
    }

    /// Start a new load and return its generation.
    pub(crate) fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.pending_load = Some(self.load_generation);
        self.load_generation
    }

    /// Finish the load with `generation`; stale completions return `false`.
    pub(crate) fn finish_load(&mut self, generation: u64) -> bool {
        if self.pending_load != Some(generation) {
            return false;
        }
        self.pending_load = None;
        true
    }

    pub(crate) fn apply_loaded(&mut self, loaded: LoadedInput) {
        self.set_feedback(
            format!("Loaded JSON file: {}", loaded.file_name),
            FeedbackTone::Success,
        );
        self.loaded = Some(loaded);
        self.outcome = None;
    }

    pub(crate) fn apply_load_failure(&mut self, message: &str) {
        self.set_feedback(format!("Error: {message}"), FeedbackTone::Error);
        self.loaded = None;
        self.outcome = None;
    }

    pub(crate) fn set_outcome(&mut self, outcome: CalculationOutcome) {
        self.outcome = Some(outcome);
    }

    pub(crate) fn vm(&self) -> InputViewModel<'_> {
        InputViewModel {
            path: &self.path,
            feedback: self.feedback(),
            loaded: self.loaded(),
            loading: self.is_loading(),
            can_calculate: self.loaded.is_some() && !self.is_loading(),
            outcome: self.outcome(),
        }
    }
}
