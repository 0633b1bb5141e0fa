//! Staged graph assembly
//!
//! Declarations move through dedicated builder stages so only the legal
//! next steps are available: `begin_with` exists only on the entry
//! stage, `check` only while a transition is open, and a content edge
//! takes no explicit guards. An out-of-order chain fails to compile.
//!
//! States are interned by name on first mention. Declaring the same
//! origin and destination pair again accumulates guards on the one edge.

use std::collections::HashMap;
use std::sync::Arc;

use docflow_types::{Action, Always, FromState, Guard};

use crate::graph::StateGraph;
use crate::node::{StateId, StateNode};

// ── Assembly ─────────────────────────────────────────────────────────

/// Node arena shared by all builder stages
struct Assembly<D> {
    nodes: Vec<StateNode<D>>,
    by_name: HashMap<String, StateId>,
}

impl<D> Assembly<D> {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Look up a state by name, creating it on first mention
    fn intern(&mut self, name: String) -> StateId {
        match self.by_name.get(&name) {
            Some(id) => *id,
            None => {
                let id = StateId(self.nodes.len());
                self.by_name.insert(name.clone(), id);
                self.nodes.push(StateNode::new(name, id));
                id
            }
        }
    }

    fn node(&self, id: StateId) -> &StateNode<D> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: StateId) -> &mut StateNode<D> {
        &mut self.nodes[id.0]
    }
}

// ── Entry Stage ──────────────────────────────────────────────────────

/// Entry stage of graph assembly, obtained from [`StateGraph::assemble`]
pub struct GraphBuilder<D> {
    assembly: Assembly<D>,
}

impl<D> GraphBuilder<D> {
    pub fn new() -> Self {
        Self {
            assembly: Assembly::new(),
        }
    }

    /// Declare the initial state and open a transition from it
    pub fn begin_with(self, name: impl Into<String>) -> TransitionBuilder<D> {
        let mut assembly = self.assembly;
        let initial = assembly.intern(name.into());
        tracing::debug!(state = %assembly.node(initial).name, "Initial state declared");
        TransitionBuilder {
            assembly,
            initial,
            origin: initial,
            pending: Vec::new(),
        }
    }
}

impl<D> Default for GraphBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Transition Stage ─────────────────────────────────────────────────

/// An open transition: an origin plus guards collected so far.
///
/// Guards stay pending until `to` seals them onto an edge. Switching the
/// origin with `from`, or switching to a content edge, discards pending
/// guards.
pub struct TransitionBuilder<D> {
    assembly: Assembly<D>,
    initial: StateId,
    origin: StateId,
    pending: Vec<Arc<dyn Guard<D>>>,
}

impl<D> TransitionBuilder<D> {
    /// Add a guard to the transition being declared
    pub fn check(mut self, guard: impl Guard<D> + 'static) -> Self {
        self.pending.push(Arc::new(guard));
        self
    }

    /// Restart the declaration from a different origin
    pub fn from(self, name: impl Into<String>) -> TransitionBuilder<D> {
        let Self {
            mut assembly,
            initial,
            ..
        } = self;
        let origin = assembly.intern(name.into());
        TransitionBuilder {
            assembly,
            initial,
            origin,
            pending: Vec::new(),
        }
    }

    /// Switch this declaration to a content edge
    pub fn when_content_changed(self) -> ContentBuilder<D> {
        ContentBuilder {
            assembly: self.assembly,
            initial: self.initial,
            origin: self.origin,
        }
    }

    /// Seal the transition onto the edge toward `name`.
    ///
    /// A guard requiring the document to actually sit at the origin is
    /// appended after the declared guards, so an edge only fires from
    /// the origin it was declared against.
    pub fn to(self, name: impl Into<String>) -> EdgeBuilder<D> {
        let Self {
            mut assembly,
            initial,
            origin,
            mut pending,
        } = self;
        let destination = assembly.intern(name.into());
        let origin_name = assembly.node(origin).name.clone();
        let from_origin: Arc<dyn Guard<D>> = Arc::new(FromState::new(origin_name.clone()));
        pending.push(from_origin);
        tracing::debug!(
            from = %origin_name,
            to = %assembly.node(destination).name,
            guards = pending.len(),
            "Transition declared"
        );
        assembly.node_mut(origin).merge_guards(destination, pending);
        EdgeBuilder {
            assembly,
            initial,
            destination,
        }
    }
}

// ── Content Stage ────────────────────────────────────────────────────

/// A content edge declaration waiting for its destination
pub struct ContentBuilder<D> {
    assembly: Assembly<D>,
    initial: StateId,
    origin: StateId,
}

impl<D> ContentBuilder<D> {
    /// Declare where a content edit moves the document.
    ///
    /// Opens content editing on the destination: its content guard
    /// becomes always admitting.
    pub fn to(self, name: impl Into<String>) -> EdgeBuilder<D> {
        let Self {
            mut assembly,
            initial,
            origin,
        } = self;
        let destination = assembly.intern(name.into());
        let open: Arc<dyn Guard<D>> = Arc::new(Always);
        assembly.node_mut(origin).content_successor = Some(destination);
        assembly.node_mut(destination).content_guard = open;
        tracing::debug!(
            from = %assembly.node(origin).name,
            to = %assembly.node(destination).name,
            "Content edge declared"
        );
        EdgeBuilder {
            assembly,
            initial,
            destination,
        }
    }
}

// ── Edge Stage ───────────────────────────────────────────────────────

/// A sealed edge: actions may be attached, or assembly continues
pub struct EdgeBuilder<D> {
    assembly: Assembly<D>,
    initial: StateId,
    destination: StateId,
}

impl<D> EdgeBuilder<D> {
    /// Attach an action to the destination state.
    ///
    /// Actions belong to the state, not the edge: every transition
    /// landing on this destination runs them, in declaration order.
    pub fn action(mut self, action: impl Action<D> + 'static) -> Self {
        self.assembly
            .node_mut(self.destination)
            .actions
            .push(Arc::new(action));
        self
    }

    /// Open the next transition declaration
    pub fn from(self, name: impl Into<String>) -> TransitionBuilder<D> {
        let Self {
            mut assembly,
            initial,
            ..
        } = self;
        let origin = assembly.intern(name.into());
        TransitionBuilder {
            assembly,
            initial,
            origin,
            pending: Vec::new(),
        }
    }

    /// Finish assembly and produce the immutable graph
    pub fn build(self) -> StateGraph<D> {
        let Assembly { nodes, by_name } = self.assembly;
        let graph = StateGraph {
            nodes,
            by_name,
            initial: self.initial,
        };
        tracing::info!(
            states = graph.count(),
            initial = %graph.initial_name(),
            "State graph assembled"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docflow_types::guard_fn;

    struct Blank;

    #[test]
    fn test_states_interned_once_per_name() {
        let graph: StateGraph<Blank> = StateGraph::assemble()
            .begin_with("draft")
            .to("review")
            .from("review")
            .to("draft")
            .from("draft")
            .to("review")
            .build();

        assert_eq!(graph.count(), 2);
        assert_eq!(graph.state_names(), vec!["draft", "review"]);
    }

    #[test]
    fn test_initial_state_recorded() {
        let graph: StateGraph<Blank> = StateGraph::assemble()
            .begin_with("draft")
            .to("done")
            .build();

        assert_eq!(graph.initial_name(), "draft");
        assert_eq!(graph.by_name.get("draft"), Some(&graph.initial));
    }

    #[test]
    fn test_every_state_gets_a_self_edge() {
        let graph: StateGraph<Blank> = StateGraph::assemble()
            .begin_with("draft")
            .to("review")
            .from("review")
            .to("done")
            .build();

        for (index, node) in graph.nodes.iter().enumerate() {
            let own = node.transition_to(StateId(index)).unwrap();
            assert_eq!(own.guards[0].name(), "always");
        }
    }

    #[test]
    fn test_origin_guard_appended_after_declared_guards() {
        let graph: StateGraph<Blank> = StateGraph::assemble()
            .begin_with("draft")
            .check(guard_fn("first", |_, _: &Blank, _| true))
            .check(guard_fn("second", |_, _: &Blank, _| true))
            .to("review")
            .build();

        let draft = graph.node(*graph.by_name.get("draft").unwrap());
        let edge = draft
            .transition_to(*graph.by_name.get("review").unwrap())
            .unwrap();
        let names: Vec<&str> = edge.guards.iter().map(|guard| guard.name()).collect();

        assert_eq!(names, vec!["first", "second", "from(draft)"]);
    }

    #[test]
    fn test_pending_guards_dropped_when_origin_changes() {
        let graph: StateGraph<Blank> = StateGraph::assemble()
            .begin_with("draft")
            .check(guard_fn("orphan", |_, _: &Blank, _| true))
            .from("review")
            .to("done")
            .build();

        let review = graph.node(*graph.by_name.get("review").unwrap());
        let edge = review
            .transition_to(*graph.by_name.get("done").unwrap())
            .unwrap();
        let names: Vec<&str> = edge.guards.iter().map(|guard| guard.name()).collect();

        assert_eq!(names, vec!["from(review)"]);
    }

    #[test]
    fn test_content_edge_wires_successor_and_opens_guard() {
        let graph: StateGraph<Blank> = StateGraph::assemble()
            .begin_with("draft")
            .from("review")
            .when_content_changed()
            .to("draft")
            .build();

        let review_id = *graph.by_name.get("review").unwrap();
        let draft_id = *graph.by_name.get("draft").unwrap();

        assert_eq!(graph.node(review_id).content_successor, Some(draft_id));
        assert_eq!(graph.node(draft_id).content_guard.name(), "always");
        assert_eq!(graph.node(review_id).content_guard.name(), "never");
        assert!(graph.node(draft_id).content_successor.is_none());
    }

    #[test]
    fn test_actions_attach_to_destination_in_order() {
        use docflow_types::action_fn;

        let graph: StateGraph<Blank> = StateGraph::assemble()
            .begin_with("draft")
            .to("review")
            .action(action_fn("first", |_: &mut Blank, _| Ok(())))
            .action(action_fn("second", |_: &mut Blank, _| Ok(())))
            .build();

        let review = graph.node(*graph.by_name.get("review").unwrap());
        let names: Vec<&str> = review.actions.iter().map(|action| action.name()).collect();

        assert_eq!(names, vec!["first", "second"]);
    }
}
