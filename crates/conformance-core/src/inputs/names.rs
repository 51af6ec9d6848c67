//! Declared input names

use crate::error::ActionError;
use std::fmt;
use std::str::FromStr;

/// Every input declared by the action
///
/// Variant order matches the order inputs are declared in `action.yml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputName {
    Version,
    OutputFile,
    FunctionType,
    DeclarativeType,
    ValidateMapping,
    ValidateConcurrency,
    Source,
    Target,
    Runtime,
    RuntimeVersion,
    Tag,
    UseBuildpacks,
    Cmd,
    StartDelay,
    WorkingDirectory,
    RuntimeEnvs,
}

impl InputName {
    pub const ALL: [InputName; 16] = [
        InputName::Version,
        InputName::OutputFile,
        InputName::FunctionType,
        InputName::DeclarativeType,
        InputName::ValidateMapping,
        InputName::ValidateConcurrency,
        InputName::Source,
        InputName::Target,
        InputName::Runtime,
        InputName::RuntimeVersion,
        InputName::Tag,
        InputName::UseBuildpacks,
        InputName::Cmd,
        InputName::StartDelay,
        InputName::WorkingDirectory,
        InputName::RuntimeEnvs,
    ];

    /// Name as declared in `action.yml`
    pub const fn as_str(self) -> &'static str {
        match self {
            InputName::Version => "version",
            InputName::OutputFile => "outputFile",
            InputName::FunctionType => "functionType",
            InputName::DeclarativeType => "declarativeType",
            InputName::ValidateMapping => "validateMapping",
            InputName::ValidateConcurrency => "validateConcurrency",
            InputName::Source => "source",
            InputName::Target => "target",
            InputName::Runtime => "runtime",
            InputName::RuntimeVersion => "runtimeVersion",
            InputName::Tag => "tag",
            InputName::UseBuildpacks => "useBuildpacks",
            InputName::Cmd => "cmd",
            InputName::StartDelay => "startDelay",
            InputName::WorkingDirectory => "workingDirectory",
            InputName::RuntimeEnvs => "runtimeEnvs",
        }
    }
}

impl fmt::Display for InputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputName {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ActionError::invalid_input(s, format!("unknown input '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_all_names() {
        for name in InputName::ALL {
            assert_eq!(name.as_str().parse::<InputName>().unwrap(), name);
        }
    }

    #[test]
    fn test_unknown_name_is_configuration_error() {
        let err = "functiontype".parse::<InputName>().unwrap_err();
        assert_eq!(err.error_code(), "CONFORMANCE_CONFIG");
        assert_eq!(err.input(), Some("functiontype"));
    }
}
