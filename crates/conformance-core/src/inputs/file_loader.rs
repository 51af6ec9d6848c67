//! File-based input loading
//!
//! Lets the action be driven locally from a JSON object of input name to value,
//! e.g. `{"functionType": "http", "cmd": "go run main.go"}`.

use super::{ActionInputs, InputName};
use crate::error::{ActionError, ActionResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Load inputs from a JSON file
pub fn load_from_file(path: &Path) -> ActionResult<ActionInputs> {
    let content = fs::read_to_string(path).map_err(|e| {
        ActionError::io_with_path(
            format!("failed to read inputs file: {e}"),
            path.display().to_string(),
        )
    })?;
    parse_inputs(&content).map_err(|e| match e {
        ActionError::Configuration { message, input } => ActionError::Configuration {
            message: format!("{} ({})", message, path.display()),
            input,
        },
        other => other,
    })
}

fn parse_inputs(content: &str) -> ActionResult<ActionInputs> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(content)
        .map_err(|e| ActionError::config(format!("inputs file is not a JSON object: {e}")))?;

    let mut inputs = ActionInputs::new();
    for (key, value) in raw {
        let name: InputName = key.parse()?;
        let value = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Null => String::new(),
            _ => {
                return Err(ActionError::invalid_input(
                    key,
                    "input values must be strings, booleans or numbers",
                ));
            }
        };
        inputs.set(name, value);
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_scalar_values() {
        let inputs = parse_inputs(
            r#"{"functionType": "http", "validateMapping": true, "startDelay": 5, "tag": null}"#,
        )
        .unwrap();

        assert_eq!(inputs.get(InputName::FunctionType), Some("http"));
        assert_eq!(inputs.get(InputName::ValidateMapping), Some("true"));
        assert_eq!(inputs.get(InputName::StartDelay), Some("5"));
        assert!(!inputs.is_set(InputName::Tag));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_inputs(r#"{"function_type": "http"}"#).unwrap_err();
        assert_eq!(err.input(), Some("function_type"));
    }

    #[test]
    fn test_nested_value_rejected() {
        let err = parse_inputs(r#"{"runtimeEnvs": {"A": "1"}}"#).unwrap_err();
        assert_eq!(err.input(), Some("runtimeEnvs"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"cmd": "go run main.go"}}"#).unwrap();

        let inputs = load_from_file(file.path()).unwrap();
        assert_eq!(inputs.get(InputName::Cmd), Some("go run main.go"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_from_file(Path::new("/nonexistent/inputs.json")).unwrap_err();
        assert_eq!(err.error_code(), "CONFORMANCE_IO");
    }
}
