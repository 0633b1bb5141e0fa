//! Arena storage for state nodes
//!
//! Nodes live in a flat arena owned by the graph and address each other
//! by [`StateId`]. Guards and actions are shared trait objects so one
//! assembled graph can drive any number of documents.

use std::sync::Arc;

use docflow_types::{Action, Always, Guard, Never};

// ── State Identifier ─────────────────────────────────────────────────

/// Arena index of a state node within its graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct StateId(pub(crate) usize);

// ── Transition ───────────────────────────────────────────────────────

/// One outgoing edge: the destination plus every guard protecting it
pub(crate) struct Transition<D> {
    pub(crate) to: StateId,
    pub(crate) guards: Vec<Arc<dyn Guard<D>>>,
}

// ── State Node ───────────────────────────────────────────────────────

/// A named state together with everything declared against it.
///
/// Each node carries at most one transition per destination. Actions are
/// owned by the destination node and run after a transition lands on it.
/// Content editing is closed until a content edge names a successor.
pub(crate) struct StateNode<D> {
    pub(crate) name: String,
    pub(crate) transitions: Vec<Transition<D>>,
    pub(crate) actions: Vec<Arc<dyn Action<D>>>,
    pub(crate) content_successor: Option<StateId>,
    pub(crate) content_guard: Arc<dyn Guard<D>>,
}

impl<D> StateNode<D> {
    /// Create a node with the implicit self transition already installed
    pub(crate) fn new(name: String, id: StateId) -> Self {
        let stay: Arc<dyn Guard<D>> = Arc::new(Always);
        let closed: Arc<dyn Guard<D>> = Arc::new(Never);
        Self {
            name,
            transitions: vec![Transition {
                to: id,
                guards: vec![stay],
            }],
            actions: Vec::new(),
            content_successor: None,
            content_guard: closed,
        }
    }

    /// Outgoing transition toward `to`, if one was declared
    pub(crate) fn transition_to(&self, to: StateId) -> Option<&Transition<D>> {
        self.transitions.iter().find(|transition| transition.to == to)
    }

    /// Merge `guards` into the edge toward `to`, creating it on first use.
    ///
    /// Declaring the same origin and destination twice accumulates guards
    /// on the existing edge rather than adding a parallel one.
    pub(crate) fn merge_guards(&mut self, to: StateId, guards: Vec<Arc<dyn Guard<D>>>) {
        match self.transitions.iter_mut().find(|transition| transition.to == to) {
            Some(transition) => transition.guards.extend(guards),
            None => self.transitions.push(Transition { to, guards }),
        }
    }
}
