//! Mapping from action inputs to conformance client flags

use crate::inputs::{ActionInputs, InputName};

/// One client flag and the input it is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientFlag {
    pub input: InputName,
    pub flag: &'static str,
}

impl ClientFlag {
    const fn new(input: InputName, flag: &'static str) -> Self {
        Self { input, flag }
    }
}

/// Client flags in the order they are passed.
///
/// `version` and `workingDirectory` configure the action itself and have no flag.
pub const CLIENT_FLAGS: [ClientFlag; 14] = [
    ClientFlag::new(InputName::FunctionType, "-type"),
    ClientFlag::new(InputName::DeclarativeType, "-declarative-type"),
    ClientFlag::new(InputName::ValidateMapping, "-validate-mapping"),
    ClientFlag::new(InputName::ValidateConcurrency, "-validate-concurrency"),
    ClientFlag::new(InputName::Source, "-builder-source"),
    ClientFlag::new(InputName::Target, "-builder-target"),
    ClientFlag::new(InputName::Runtime, "-builder-runtime"),
    ClientFlag::new(InputName::RuntimeVersion, "-builder-runtime-version"),
    ClientFlag::new(InputName::Tag, "-builder-tag"),
    ClientFlag::new(InputName::UseBuildpacks, "-buildpacks"),
    ClientFlag::new(InputName::Cmd, "-cmd"),
    ClientFlag::new(InputName::StartDelay, "-start-delay"),
    ClientFlag::new(InputName::RuntimeEnvs, "-envs"),
    ClientFlag::new(InputName::OutputFile, "-output-file"),
];

/// Build the client argument vector: one `-flag=value` per non-empty input
pub fn client_flags(inputs: &ActionInputs) -> Vec<String> {
    CLIENT_FLAGS
        .iter()
        .filter_map(|f| inputs.get(f.input).map(|value| format!("{}={}", f.flag, value)))
        .collect()
}
