//! Docflow state graph engine
//!
//! Assembles immutable state graphs from fluent declarations and drives
//! documents through them. A graph is declared once, then shared: every
//! document carries only its state name, and a cheap [`State`] cursor
//! re-attaches it to the graph.
//!
//! # Assembly Chain
//!
//! ```text
//! StateGraph::assemble()
//!     .begin_with("draft")                  initial state
//!     .when_content_changed().to("draft")   draft edits stay in draft
//!     .from("draft")
//!     .check(ContentPresent)                guard on the open transition
//!     .to("review")                         seal the edge
//!     .action(...)                          action on the destination
//!     .from("review").to("done")
//!     .build()
//! ```
//!
//! # Usage
//!
//! ```rust
//! use docflow_engine::StateGraph;
//! use docflow_types::{Command, ContentPresent, Document};
//!
//! struct Memo {
//!     state: String,
//!     body: Option<String>,
//! }
//!
//! impl Document for Memo {
//!     fn state_name(&self) -> &str {
//!         &self.state
//!     }
//!     fn set_state_name(&mut self, name: &str) {
//!         self.state = name.to_string();
//!     }
//!     fn content_ref(&self) -> Option<&str> {
//!         self.body.as_deref()
//!     }
//!     fn set_content_ref(&mut self, content: &str) {
//!         self.body = Some(content.to_string());
//!     }
//! }
//!
//! let graph = StateGraph::assemble()
//!     .begin_with("draft")
//!     .when_content_changed()
//!     .to("draft")
//!     .from("draft")
//!     .check(ContentPresent)
//!     .to("review")
//!     .from("review")
//!     .to("done")
//!     .build();
//!
//! let mut memo = Memo { state: String::new(), body: None };
//! let state = graph.begin(&mut memo);
//! let state = state.change_content(&mut memo, "first cut");
//! let state = state.change_state(&mut memo, &Command::new("review")).unwrap();
//! assert_eq!(state.name(), "review");
//! assert_eq!(memo.state, "review");
//! ```
//!
//! # Design Principles
//!
//! - **Refusal is not an error**: a command naming an unreachable state,
//!   or one a guard rejects, returns the origin cursor unchanged
//! - **Guards before effects**: actions run only after every guard on
//!   the taken edge has passed, and failures do not roll back
//! - **Share the graph, move the cursor**: [`StateGraph`] is immutable
//!   and `Send + Sync`, cursors are `Copy`

#![deny(unsafe_code)]

mod builder;
mod cursor;
mod graph;
mod node;

pub use builder::{ContentBuilder, EdgeBuilder, GraphBuilder, TransitionBuilder};
pub use cursor::{State, TransitionView};
pub use graph::StateGraph;
