//! Assembled state graph
//!
//! A [`StateGraph`] is immutable once built. It owns the node arena and a
//! name index, and hands out [`State`] cursors that borrow it. Share one
//! graph behind an `Arc` to govern any number of documents concurrently.

use std::collections::HashMap;
use std::fmt;

use docflow_types::{Document, FlowError, FlowResult};

use crate::builder::GraphBuilder;
use crate::cursor::State;
use crate::node::{StateId, StateNode};

/// Immutable graph of named states and guarded transitions
pub struct StateGraph<D> {
    pub(crate) nodes: Vec<StateNode<D>>,
    pub(crate) by_name: HashMap<String, StateId>,
    pub(crate) initial: StateId,
}

impl<D> StateGraph<D> {
    /// Start assembling a graph
    pub fn assemble() -> GraphBuilder<D> {
        GraphBuilder::new()
    }

    pub(crate) fn node(&self, id: StateId) -> &StateNode<D> {
        &self.nodes[id.0]
    }

    // ── Query methods ────────────────────────────────────────────────

    /// Number of states in the graph
    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    /// All state names, sorted
    pub fn state_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.nodes.iter().map(|node| node.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Whether a state with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Name of the initial state
    pub fn initial_name(&self) -> &str {
        &self.node(self.initial).name
    }
}

impl<D: Document> StateGraph<D> {
    /// Place a fresh document at the initial state.
    ///
    /// Stamps the initial state's name onto the document and returns the
    /// cursor pointing at it.
    pub fn begin<'g>(&'g self, document: &mut D) -> State<'g, D> {
        let name = self.initial_name();
        document.set_state_name(name);
        tracing::debug!(state = %name, "Document placed at initial state");
        State::new(self, self.initial)
    }

    /// Rebuild the cursor for a previously stamped document.
    ///
    /// Fails with [`FlowError::UnknownState`] when the stored name does
    /// not match any state in this graph.
    pub fn recreate<'g>(&'g self, document: &D) -> FlowResult<State<'g, D>> {
        let name = document.state_name();
        let id = self
            .by_name
            .get(name)
            .copied()
            .ok_or_else(|| FlowError::UnknownState(name.to_string()))?;
        Ok(State::new(self, id))
    }
}

impl<D> fmt::Debug for StateGraph<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateGraph")
            .field("states", &self.state_names())
            .field("initial", &self.initial_name())
            .finish()
    }
}
