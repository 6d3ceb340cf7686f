use thiserror::Error;

use super::model::REQUIRED_KEYS;

/// Errors emitted while loading or interpreting an input file.
#[derive(Debug, Error)]
pub(crate) enum InputError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("input JSON must be an object")]
    NotAnObject,
    #[error(
        "Missing keys in JSON file: {}. Required keys: {}",
        .missing.join(", "),
        REQUIRED_KEYS.join(", ")
    )]
    MissingKeys { missing: Vec<String> },
    #[error("field `{key}` must be {expected}")]
    InvalidField {
        key: &'static str,
        expected: &'static str,
    },
}
