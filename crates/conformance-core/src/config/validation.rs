//! Input validation, run before anything is spawned

use crate::error::{ActionError, ActionResult};
use crate::inputs::{ActionInputs, InputName};
use std::path::Path;

/// Function signatures understood by the conformance client
pub const FUNCTION_TYPES: [&str; 3] = ["http", "cloudevent", "legacyevent"];

const BOOLEAN_INPUTS: [InputName; 3] = [
    InputName::ValidateMapping,
    InputName::ValidateConcurrency,
    InputName::UseBuildpacks,
];

/// Checks action inputs for values the client would reject or the action cannot use
pub struct ConfigValidator<'a> {
    base_dir: &'a Path,
}

impl<'a> ConfigValidator<'a> {
    pub fn new(base_dir: &'a Path) -> Self {
        Self { base_dir }
    }

    /// Validate all inputs, returning the first problem found
    pub fn validate(&self, inputs: &ActionInputs) -> ActionResult<()> {
        self.validate_function_type(inputs)?;
        self.validate_booleans(inputs)?;
        self.validate_start_delay(inputs)?;
        self.validate_version(inputs)?;
        self.validate_working_directory(inputs)?;
        Ok(())
    }

    fn validate_function_type(&self, inputs: &ActionInputs) -> ActionResult<()> {
        if let Some(value) = inputs.get(InputName::FunctionType) {
            if !FUNCTION_TYPES.contains(&value) {
                return Err(ActionError::invalid_input(
                    InputName::FunctionType.as_str(),
                    format!(
                        "functionType must be one of {}, got '{}'",
                        FUNCTION_TYPES.join(", "),
                        value
                    ),
                ));
            }
        }
        Ok(())
    }

    fn validate_booleans(&self, inputs: &ActionInputs) -> ActionResult<()> {
        for name in BOOLEAN_INPUTS {
            if let Some(value) = inputs.get(name) {
                if value != "true" && value != "false" {
                    return Err(ActionError::invalid_input(
                        name.as_str(),
                        format!("{name} must be 'true' or 'false', got '{value}'"),
                    ));
                }
            }
        }
        Ok(())
    }

    fn validate_start_delay(&self, inputs: &ActionInputs) -> ActionResult<()> {
        if let Some(value) = inputs.get(InputName::StartDelay) {
            value.parse::<u64>().map_err(|_| {
                ActionError::invalid_input(
                    InputName::StartDelay.as_str(),
                    format!("startDelay must be a non-negative number of seconds, got '{value}'"),
                )
            })?;
        }
        Ok(())
    }

    /// The version reaches git as a bare ref argument
    fn validate_version(&self, inputs: &ActionInputs) -> ActionResult<()> {
        if let Some(value) = inputs.get(InputName::Version) {
            if value.starts_with('-') {
                return Err(ActionError::invalid_input(
                    InputName::Version.as_str(),
                    format!("version must be a tag name, got '{value}'"),
                ));
            }
        }
        Ok(())
    }

    fn validate_working_directory(&self, inputs: &ActionInputs) -> ActionResult<()> {
        if let Some(value) = inputs.get(InputName::WorkingDirectory) {
            let dir = self.base_dir.join(value);
            if !dir.is_dir() {
                return Err(ActionError::invalid_input(
                    InputName::WorkingDirectory.as_str(),
                    format!("workingDirectory '{}' is not a directory", dir.display()),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn validate(inputs: ActionInputs) -> ActionResult<()> {
        let dir = TempDir::new().unwrap();
        ConfigValidator::new(dir.path()).validate(&inputs)
    }

    #[test]
    fn test_accepts_known_function_types() {
        for function_type in FUNCTION_TYPES {
            let inputs = ActionInputs::new().with(InputName::FunctionType, function_type);
            assert!(validate(inputs).is_ok());
        }
    }

    #[test]
    fn test_rejects_unknown_function_type() {
        let err = validate(ActionInputs::new().with(InputName::FunctionType, "HTTP")).unwrap_err();
        assert_eq!(err.input(), Some("functionType"));
    }

    #[test]
    fn test_rejects_non_boolean_flags() {
        for name in BOOLEAN_INPUTS {
            let err = validate(ActionInputs::new().with(name, "yes")).unwrap_err();
            assert_eq!(err.input(), Some(name.as_str()));
        }
        assert!(validate(ActionInputs::new().with(InputName::UseBuildpacks, "false")).is_ok());
    }

    #[test]
    fn test_start_delay_must_be_number() {
        assert!(validate(ActionInputs::new().with(InputName::StartDelay, "5")).is_ok());

        let err = validate(ActionInputs::new().with(InputName::StartDelay, "-1")).unwrap_err();
        assert_eq!(err.input(), Some("startDelay"));
        assert!(validate(ActionInputs::new().with(InputName::StartDelay, "5s")).is_err());
    }

    #[test]
    fn test_version_cannot_look_like_an_option() {
        assert!(validate(ActionInputs::new().with(InputName::Version, "v1.8.0")).is_ok());

        let err = validate(ActionInputs::new().with(InputName::Version, "--upload-pack=evil"))
            .unwrap_err();
        assert_eq!(err.input(), Some("version"));
    }

    #[test]
    fn test_working_directory_must_exist() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("present")).unwrap();
        let validator = ConfigValidator::new(dir.path());

        assert!(
            validator
                .validate(&ActionInputs::new().with(InputName::WorkingDirectory, "present"))
                .is_ok()
        );
        let err = validator
            .validate(&ActionInputs::new().with(InputName::WorkingDirectory, "missing"))
            .unwrap_err();
        assert_eq!(err.input(), Some("workingDirectory"));
    }

    #[test]
    fn test_free_form_inputs_are_not_validated() {
        let inputs = ActionInputs::new()
            .with(InputName::DeclarativeType, "typed")
            .with(InputName::Cmd, "anything at all")
            .with(InputName::RuntimeEnvs, "A=1");
        assert!(validate(inputs).is_ok());
    }
}
