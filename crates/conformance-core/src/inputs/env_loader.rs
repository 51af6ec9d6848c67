//! Environment variable-based input loading
//!
//! The Actions runner exposes each declared input `name` to the process as
//! `INPUT_<NAME>`: upper-cased, with spaces replaced by underscores.

use super::{ActionInputs, InputName};
use std::env;

/// Environment variable the runner uses for an input
pub fn env_var_name(name: InputName) -> String {
    format!("INPUT_{}", name.as_str().replace(' ', "_").to_uppercase())
}

/// Load inputs from the process environment
pub fn load_from_env() -> ActionInputs {
    load_from_lookup(|key| env::var(key).ok())
}

/// Load inputs through an arbitrary variable lookup
pub fn load_from_lookup<F>(lookup: F) -> ActionInputs
where
    F: Fn(&str) -> Option<String>,
{
    let mut inputs = ActionInputs::new();
    for name in InputName::ALL {
        if let Some(value) = lookup(&env_var_name(name)) {
            inputs.set(name, value);
        }
    }
    tracing::debug!(count = inputs.len(), "loaded inputs from environment");
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_var_name() {
        assert_eq!(env_var_name(InputName::FunctionType), "INPUT_FUNCTIONTYPE");
        assert_eq!(env_var_name(InputName::RuntimeEnvs), "INPUT_RUNTIMEENVS");
    }

    #[test]
    fn test_load_from_lookup_trims_and_skips_empty() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("INPUT_FUNCTIONTYPE", " http "),
            ("INPUT_VALIDATEMAPPING", "true"),
            ("INPUT_TAG", ""),
            ("INPUT_UNRELATED", "ignored"),
        ]);

        let inputs = load_from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(inputs.get(InputName::FunctionType), Some("http"));
        assert_eq!(inputs.get(InputName::ValidateMapping), Some("true"));
        assert!(!inputs.is_set(InputName::Tag));
        assert_eq!(inputs.len(), 2);
    }
}
