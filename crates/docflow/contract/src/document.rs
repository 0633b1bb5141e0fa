//! Contract documents: the entities governed by the lifecycle graph
//!
//! A ContractDocument carries everything the lifecycle reads and writes:
//! its current state name, an optional content revision reference, and
//! the author and verifier identities the guards compare.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docflow_types::{ActorId, Document};

// ── Document Identifier ──────────────────────────────────────────────

/// Unique identifier for a contract document
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
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

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Contract Document ────────────────────────────────────────────────

/// A contract moving through the document lifecycle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractDocument {
    /// Unique document identifier
    pub id: DocumentId,
    /// Who authored the document
    pub author: ActorId,
    /// Who verified the document, set by the verification transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifier: Option<ActorId>,
    /// Human readable title
    pub title: String,
    /// Reference to the current content revision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_ref: Option<String>,
    /// Current lifecycle state name, empty until governed
    pub state: String,
    /// When the document was created
    pub created_at: DateTime<Utc>,
    /// When the document was last updated
    pub updated_at: DateTime<Utc>,
}

impl ContractDocument {
    /// Create a new, not yet governed document
    pub fn new(author: ActorId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::generate(),
            author,
            verifier: None,
            title: title.into(),
            content_ref: None,
            state: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether any content revision has been attached
    pub fn has_content(&self) -> bool {
        self.content_ref.as_ref().map(|c| !c.is_empty()).unwrap_or(false)
    }
}

impl Document for ContractDocument {
    fn state_name(&self) -> &str {
        &self.state
    }

    fn set_state_name(&mut self, name: &str) {
        self.state = name.to_string();
        self.updated_at = Utc::now();
    }

    fn content_ref(&self) -> Option<&str> {
        self.content_ref.as_deref()
    }

    fn set_content_ref(&mut self, content: &str) {
        self.content_ref = Some(content.to_string());
        self.updated_at = Utc::now();
    }
}
