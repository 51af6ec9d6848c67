//! Action inputs
//!
//! The action is driven entirely by named string inputs. [`ActionInputs`] is the
//! immutable map built once at startup; [`InputLoader`] layers the sources it is
//! built from.

mod env_loader;
mod file_loader;
mod loader;
mod names;

pub use env_loader::{env_var_name, load_from_env, load_from_lookup};
pub use file_loader::load_from_file;
pub use loader::{InputLoader, InputSource};
pub use names::InputName;

use std::collections::BTreeMap;

/// Immutable mapping of input name to non-empty string value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInputs {
    values: BTreeMap<InputName, String>,
}

impl ActionInputs {
    /// Create an empty set of inputs
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an input, returning the updated inputs
    ///
    /// Values are trimmed. An empty value removes the input, so it is treated as
    /// absent everywhere downstream.
    pub fn with(mut self, name: InputName, value: impl AsRef<str>) -> Self {
        self.set(name, value);
        self
    }

    pub(crate) fn set(&mut self, name: InputName, value: impl AsRef<str>) {
        let value = value.as_ref().trim();
        if value.is_empty() {
            self.values.remove(&name);
        } else {
            self.values.insert(name, value.to_string());
        }
    }

    /// Get the value of an input, `None` when absent or empty
    pub fn get(&self, name: InputName) -> Option<&str> {
        self.values.get(&name).map(String::as_str)
    }

    /// Check whether an input has a non-empty value
    pub fn is_set(&self, name: InputName) -> bool {
        self.values.contains_key(&name)
    }

    /// Number of inputs with a value
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no input has a value
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over set inputs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (InputName, &str)> {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Overlay another set of inputs on top of this one
    pub fn merge(&mut self, other: ActionInputs) {
        self.values.extend(other.values);
    }
}
