//! Docflow domain types
//!
//! The vocabulary shared by every docflow workflow: commands carrying
//! caller intent, guard and action capabilities, the governed-entity
//! contract, and the ports a workflow definition plugs into.
//!
//! # Key Concepts
//!
//! - **Command**: Caller intent, naming a desired target state plus named
//!   parameters used to select a transition and parameterize its actions.
//! - **Guard**: A side-effect-free predicate gating a transition.
//! - **Action**: A side-effecting operation run only after a transition is
//!   authorized, always on the destination state.
//! - **Document**: The governed-entity contract. The engine reads and
//!   stamps a state name and a content reference, nothing more.
//! - **EventSink / DocumentStore**: Ports consumed by actions and by
//!   application code; the engine itself never calls them.
//!
//! # Design Principles
//!
//! 1. Guards decide, actions act. A guard never mutates; an action never
//!    gates.
//! 2. Commands are pure value carriers with no failure modes.
//! 3. The engine owns no persistence. Application code loads, transitions,
//!    then saves.
//! 4. Refusal is an outcome, not an error. Errors are reserved for state
//!    data that no longer matches the graph and for failing actions.

#![deny(unsafe_code)]

mod capability;
mod command;
mod document;
mod errors;
mod events;
mod guards;
mod store;

pub use capability::*;
pub use command::*;
pub use document::*;
pub use errors::*;
pub use events::*;
pub use guards::*;
pub use store::*;
