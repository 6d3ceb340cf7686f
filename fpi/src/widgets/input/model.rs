use serde_json::{Map, Value};

use super::errors::InputError;
use crate::solver::{Solution, SolveRequest};

/// Keys an input file must define.
pub(crate) const REQUIRED_KEYS: [&str; 4] =
    ["function", "initial_guess", "tolerance", "max_iterations"];

/// A JSON object holding every required key.
///
/// Values are not type checked until a calculation is requested.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct InputDocument {
    fields: Map<String, Value>,
}

impl InputDocument {
    pub(crate) fn from_value(value: Value) -> Result<Self, InputError> {
        let Value::Object(fields) = value else {
            return Err(InputError::NotAnObject);
        };

        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|key| !fields.contains_key(**key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(InputError::MissingKeys { missing });
        }

        Ok(Self { fields })
    }

    pub(crate) fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Convert the document into typed solver parameters.
    pub(crate) fn solve_request(&self) -> Result<SolveRequest, InputError> {
        Ok(SolveRequest {
            function: self.text_field("function")?,
            initial_guess: self.number_field("initial_guess")?,
            tolerance: self.number_field("tolerance")?,
            max_iterations: self.count_field("max_iterations")?,
        })
    }

    fn text_field(&self, key: &'static str) -> Result<String, InputError> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(InputError::InvalidField {
                key,
                expected: "a string",
            })
    }

    fn number_field(&self, key: &'static str) -> Result<f64, InputError> {
        self.fields.get(key).and_then(Value::as_f64).ok_or(
            InputError::InvalidField {
                key,
                expected: "a number",
            },
        )
    }

    fn count_field(&self, key: &'static str) -> Result<u32, InputError> {
        self.fields
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|count| u32::try_from(count).ok())
            .ok_or(InputError::InvalidField {
                key,
                expected: "a non-negative integer",
            })
    }
}

/// A validated input file.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LoadedInput {
    pub(crate) file_name: String,
    pub(crate) document: InputDocument,
}

/// Tone of the status line below the load button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeedbackTone {
    Neutral,
    Success,
    Error,
}

/// Status line shown below the load button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Feedback {
    pub(crate) message: String,
    pub(crate) tone: FeedbackTone,
}

/// Result of the last calculation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CalculationOutcome {
    Solved(Solution),
    Failed(String),
}

/// Read-only view model for the input form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InputViewModel<'a> {
    pub(crate) path: &'a str,
    pub(crate) feedback: Option<&'a Feedback>,
    pub(crate) loaded: Option<&'a LoadedInput>,
    pub(crate) loading: bool,
    pub(crate) can_calculate: bool,
    pub(crate) outcome: Option<&'a CalculationOutcome>,
}
