use std::fs;
use std::path::Path;

use super::errors::InputError;
use super::model::{InputDocument, LoadedInput};

/// Read, parse and validate an input file.
pub(crate) fn load_input_file(path: &Path) -> Result<LoadedInput, InputError> {
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str::<serde_json::Value>(&data)?;
    let document = InputDocument::from_value(value)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(LoadedInput {
        file_name,
        document,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::load_input_file;
    use crate::widgets::input::errors::InputError;

    #[test]
    fn given_valid_file_when_loaded_then_name_and_document_are_returned() {
        let root = test_temp_dir("valid");
        let path = root.join("problem.json");
        fs::write(
            &path,
            r#"{"function": "cos(x)", "initial_guess": 0.5,
                "tolerance": 0.0001, "max_iterations": 100}"#,
        )
        .expect("input payload should be written");

        let loaded = load_input_file(&path).expect("input should load");

        assert_eq!(loaded.file_name, "problem.json");
        assert_eq!(loaded.document.fields().len(), 4);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_file_when_loaded_then_io_error() {
        let root = test_temp_dir("missing");

        let err = load_input_file(&root.join("absent.json"))
            .expect_err("missing file should fail");

        assert!(matches!(err, InputError::Io(_)));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_malformed_json_when_loaded_then_json_error() {
        let root = test_temp_dir("malformed");
        let path = root.join("broken.json");
        fs::write(&path, "{ \"function\": ")
            .expect("payload should be written");

        let err = load_input_file(&path).expect_err("parse should fail");

        assert!(matches!(err, InputError::Json(_)));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "fpi-input-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
