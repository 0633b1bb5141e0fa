//! State cursor and transition runtime
//!
//! A [`State`] is a cheap copyable cursor into an assembled graph. All
//! runtime behavior lives here: resolving a command against the origin's
//! transitions, evaluating guards, stamping the document, and running the
//! destination's post-transition actions.
//!
//! A refused transition is not an error. When the desired state does not
//! exist, is not reachable from the origin, or a guard rejects, the
//! origin cursor is returned unchanged and the document is untouched. The
//! refusal is logged at debug level with the reason.

use std::fmt;

use docflow_types::{Command, Document, FlowResult};

use crate::graph::StateGraph;
use crate::node::StateId;

// ── State Cursor ─────────────────────────────────────────────────────

/// Position of a document within a state graph.
///
/// Copy semantics: holding an old cursor after a transition is allowed,
/// it simply still points at the old state.
pub struct State<'g, D> {
    graph: &'g StateGraph<D>,
    id: StateId,
}

impl<'g, D> State<'g, D> {
    pub(crate) fn new(graph: &'g StateGraph<D>, id: StateId) -> Self {
        Self { graph, id }
    }

    /// Name of the state this cursor points at
    pub fn name(&self) -> &'g str {
        self.graph.node(self.id).name.as_str()
    }

    // ── Introspection ────────────────────────────────────────────────

    /// Declared outgoing transitions, implicit self transition excluded
    pub fn transitions(&self) -> Vec<TransitionView> {
        let origin = self.graph.node(self.id);
        origin
            .transitions
            .iter()
            .filter(|transition| transition.to != self.id)
            .map(|transition| {
                let destination = self.graph.node(transition.to);
                TransitionView {
                    to: destination.name.clone(),
                    guards: transition
                        .guards
                        .iter()
                        .map(|guard| guard.name().to_string())
                        .collect(),
                    actions: destination
                        .actions
                        .iter()
                        .map(|action| action.name().to_string())
                        .collect(),
                }
            })
            .collect()
    }

    /// Whether this document's content may change while parked here
    pub fn content_editable(&self, document: &D) -> bool {
        let origin = self.graph.node(self.id);
        match origin.content_successor {
            Some(target) => {
                let successor = self.graph.node(target);
                let probe = Command::new(successor.name.clone());
                successor.content_guard.evaluate(&origin.name, document, &probe)
            }
            None => false,
        }
    }
}

impl<'g, D: Document> State<'g, D> {
    /// Attempt the transition a command asks for.
    ///
    /// On success the document carries the destination's name and every
    /// action declared on the destination has run, in declaration order.
    /// An action failure propagates after the state stamp, remaining
    /// actions are skipped and nothing is rolled back.
    pub fn change_state(&self, document: &mut D, command: &Command) -> FlowResult<Self> {
        let origin = self.graph.node(self.id);
        let desired = command.desired_state();

        let target = match self.graph.by_name.get(desired) {
            Some(id) => *id,
            None => {
                tracing::debug!(
                    from = %origin.name,
                    desired = %desired,
                    "Transition refused: no such state"
                );
                return Ok(*self);
            }
        };

        let transition = match origin.transition_to(target) {
            Some(transition) => transition,
            None => {
                tracing::debug!(
                    from = %origin.name,
                    desired = %desired,
                    "Transition refused: not reachable from here"
                );
                return Ok(*self);
            }
        };

        for guard in &transition.guards {
            if !guard.evaluate(&origin.name, document, command) {
                tracing::debug!(
                    from = %origin.name,
                    desired = %desired,
                    guard = %guard.name(),
                    "Transition refused: guard rejected"
                );
                return Ok(*self);
            }
        }

        let destination = self.graph.node(target);
        document.set_state_name(&destination.name);

        for action in &destination.actions {
            action.apply(document, command)?;
        }

        tracing::info!(from = %origin.name, to = %destination.name, "State changed");
        Ok(State::new(self.graph, target))
    }

    /// Replace the document's content, following the content edge.
    ///
    /// The cursor moves to the declared content successor when its guard
    /// admits the edit. Without a successor, or when the guard rejects,
    /// content is frozen and the document stays untouched. Content moves
    /// never run actions.
    pub fn change_content(&self, document: &mut D, content: &str) -> Self {
        let origin = self.graph.node(self.id);

        let target = match origin.content_successor {
            Some(target) => target,
            None => {
                tracing::debug!(state = %origin.name, "Content change refused: frozen here");
                return *self;
            }
        };

        let successor = self.graph.node(target);
        let probe = Command::new(successor.name.clone());
        if !successor.content_guard.evaluate(&origin.name, document, &probe) {
            tracing::debug!(
                from = %origin.name,
                to = %successor.name,
                guard = %successor.content_guard.name(),
                "Content change refused: guard rejected"
            );
            return *self;
        }

        document.set_state_name(&successor.name);
        document.set_content_ref(content);
        tracing::info!(from = %origin.name, to = %successor.name, "Content changed");
        State::new(self.graph, target)
    }
}

impl<D> Clone for State<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for State<'_, D> {}

impl<D> PartialEq for State<'_, D> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl<D> Eq for State<'_, D> {}

impl<D> fmt::Debug for State<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&self.name()).finish()
    }
}

impl<D> fmt::Display for State<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ── Transition View ──────────────────────────────────────────────────

/// Read-only description of one declared transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionView {
    /// Destination state name
    pub to: String,
    /// Guard names in evaluation order
    pub guards: Vec<String>,
    /// Action names the destination runs, in declaration order
    pub actions: Vec<String>,
}
