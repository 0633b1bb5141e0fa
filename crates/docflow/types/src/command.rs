//! Commands: caller intent passed into a state transition
//!
//! A command names the desired target state and carries named parameters.
//! The engine uses the target name to select a transition; guards and
//! actions read the parameters to authorize and apply it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller intent: a desired target state plus named parameters.
///
/// The desired state is fixed at construction and must not be empty.
/// Parameters accumulate builder-style via [`Command::with_param`];
/// storing a name twice silently replaces the prior value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Name of the state this command is asking to reach
    desired_state: String,
    /// Named parameters read by guards and actions
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    params: HashMap<String, serde_json::Value>,
}

impl Command {
    /// Create a command targeting the given state name
    pub fn new(desired_state: impl Into<String>) -> Self {
        Self {
            desired_state: desired_state.into(),
            params: HashMap::new(),
        }
    }

    /// Store a parameter under the given name, replacing any prior value
    pub fn with_param(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// The state name this command is asking to reach
    pub fn desired_state(&self) -> &str {
        &self.desired_state
    }

    /// Look up a parameter by name
    pub fn param(&self, name: &str) -> Option<&serde_json::Value> {
        self.params.get(name)
    }

    /// Look up a string parameter by name.
    ///
    /// Returns `None` when the parameter is absent or not a JSON string;
    /// type assumptions stay with the caller.
    pub fn param_str(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(|v| v.as_str())
    }

    /// Number of stored parameters
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}
