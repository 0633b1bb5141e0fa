//! In-memory document store
//!
//! Keeps whole documents behind a read-write lock, keyed by id. Suited
//! to tests and demos; a deployment implements [`DocumentStore`] against
//! its own persistence instead.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use docflow_types::{DocumentStore, FlowError, FlowResult};

use crate::document::ContractDocument;

/// Thread-safe in-memory store for contract documents
pub struct MemoryStore {
    documents: RwLock<HashMap<String, ContractDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored documents
    pub fn count(&self) -> usize {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore<ContractDocument> for MemoryStore {
    fn get_one(&self, id: &str) -> FlowResult<ContractDocument> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| FlowError::DocumentNotFound(id.to_string()))
    }

    fn save(&self, document: &ContractDocument) -> FlowResult<()> {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(document.id.as_str().to_string(), document.clone());
        tracing::debug!(document_id = %document.id, state = %document.state, "Document saved");
        Ok(())
    }
}
