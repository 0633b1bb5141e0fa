//! Stock guards shared by workflow definitions
//!
//! The assembly DSL injects [`FromState`] on every declared transition.
//! [`Always`] backs the implicit self-transition and content edges, while
//! [`Never`] keeps content frozen in states without a content edge.
//! [`ContentPresent`] is the common business precondition for review
//! transitions.

use crate::{Command, Document, Guard};

// ── Constants ────────────────────────────────────────────────────────

/// Guard that authorizes every transition
#[derive(Clone, Copy, Debug, Default)]
pub struct Always;

impl<D> Guard<D> for Always {
    fn evaluate(&self, _state: &str, _document: &D, _command: &Command) -> bool {
        true
    }

    fn name(&self) -> &str {
        "always"
    }
}

/// Guard that refuses every transition
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl<D> Guard<D> for Never {
    fn evaluate(&self, _state: &str, _document: &D, _command: &Command) -> bool {
        false
    }

    fn name(&self) -> &str {
        "never"
    }
}

// ── Prior-state equality ─────────────────────────────────────────────

/// Guard that passes only when evaluated from a specific origin state.
///
/// The assembly DSL appends one of these to every declared transition so
/// that guard lists stay scoped to the origin that declared them, even
/// when several origins share a destination.
#[derive(Clone, Debug)]
pub struct FromState {
    state: String,
    label: String,
}

impl FromState {
    pub fn new(state: impl Into<String>) -> Self {
        let state = state.into();
        let label = format!("from({})", state);
        Self { state, label }
    }
}

impl<D> Guard<D> for FromState {
    fn evaluate(&self, state: &str, _document: &D, _command: &Command) -> bool {
        state == self.state
    }

    fn name(&self) -> &str {
        &self.label
    }
}

// ── Content presence ─────────────────────────────────────────────────

/// Guard that passes once the governed document has content assigned
#[derive(Clone, Copy, Debug, Default)]
pub struct ContentPresent;

impl<D: Document> Guard<D> for ContentPresent {
    fn evaluate(&self, _state: &str, document: &D, _command: &Command) -> bool {
        document.content_ref().map(|c| !c.is_empty()).unwrap_or(false)
    }

    fn name(&self) -> &str {
        "content-present"
    }
}
