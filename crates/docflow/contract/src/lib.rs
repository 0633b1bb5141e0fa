//! Contract document lifecycle built on the docflow engine
//!
//! # Lifecycle
//!
//! ```text
//! draft ----verify----> verified ----publish----> published
//!   |                      |                          |
//!   |  (edits stay here)   |  (edits return to draft) |  (frozen)
//!   |                      |                          |
//!   +-------archive--------+---------archive----------+--> archived
//! ```
//!
//! Verification requires attached content and a verifier other than the
//! author, and records who verified. Landing on verified, published or
//! archived publishes a lifecycle event.
//!
//! # Key Concepts
//!
//! - **ContractDocument**: the governed entity, persistable as a whole
//! - **contract_lifecycle**: assembles the graph above against any
//!   [`docflow_types::EventSink`]
//! - **MemoryStore**: in-memory [`docflow_types::DocumentStore`] for
//!   tests and demos

#![deny(unsafe_code)]

mod actions;
mod document;
mod guards;
mod store;
mod workflow;

pub use actions::{AssignVerifier, EmitEvent};
pub use document::{ContractDocument, DocumentId};
pub use guards::VerifierIsNotAuthor;
pub use store::MemoryStore;
pub use workflow::{
    contract_lifecycle, ARCHIVED, DRAFT, EVENT_ARCHIVED, EVENT_PUBLISHED, EVENT_VERIFIED,
    PUBLISHED, VERIFIED, VERIFIER_PARAM,
};
