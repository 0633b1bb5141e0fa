//! Document store port
//!
//! Persistence of the governed document is the caller's concern: load a
//! document, recreate its state, transition, then save. The engine never
//! touches this port. Implementations live with the concrete document
//! types; an in-memory store ships with the contract workflow.

use crate::FlowResult;

/// Capability to load and save governed documents by id
pub trait DocumentStore<D>: Send + Sync {
    /// Fetch one document.
    ///
    /// Returns [`crate::FlowError::DocumentNotFound`] when the id is
    /// unknown.
    fn get_one(&self, id: &str) -> FlowResult<D>;

    /// Persist a document (upsert semantics)
    fn save(&self, document: &D) -> FlowResult<()>;
}
