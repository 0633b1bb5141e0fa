//! The governed-entity contract and actor identity
//!
//! The engine requires only two things of a governed document: a persisted
//! state-name it can read and stamp, and a content reference it can read
//! and overwrite. Richer fields (author, verifier, title) belong to
//! concrete document types and are touched only by workflow-specific
//! guards and actions.

use serde::{Deserialize, Serialize};

// ── Governed entity ──────────────────────────────────────────────────

/// Contract between the engine and the entity it governs.
///
/// The document owns its identity and payload; the engine stamps only the
/// state name and, on content edges, the content reference. Persistence
/// stays with the caller.
pub trait Document {
    /// The state name currently recorded on the document
    fn state_name(&self) -> &str;

    /// Record a new state name
    fn set_state_name(&mut self, name: &str);

    /// The content reference currently assigned, if any
    fn content_ref(&self) -> Option<&str>;

    /// Assign a content reference
    fn set_content_ref(&mut self, content_ref: &str);
}

// ── Actor Identifier ─────────────────────────────────────────────────

/// Unique identifier for an actor (author, verifier, publisher)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn short(&self) -> &str {
        &self.0[..8.min(self.0.len())]
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
