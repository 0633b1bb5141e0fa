//! Error types for the Docflow layer
//!
//! A refused transition is not an error: the engine returns the origin
//! state unchanged. Errors cover lookups by name, failed actions, and
//! store misses.

/// Errors that can occur in Docflow operations
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Unknown state: {0}")]
    UnknownState(String),

    #[error("Action '{action}' failed: {reason}")]
    ActionFailed { action: String, reason: String },

    #[error("Document not found: {0}")]
    DocumentNotFound(String),
}

/// Result type alias for docflow operations
pub type FlowResult<T> = Result<T, FlowError>;
