//! Guard and action capabilities
//!
//! Transitions are authorized by guards and finalized by actions. Both are
//! small capability objects selected by declaration order: no dispatch on
//! concrete types, no inheritance hierarchy. Closure adapters let workflow
//! definitions supply one-off predicates and effects without naming a
//! struct.

use crate::{Command, FlowResult};

// ── Guard ────────────────────────────────────────────────────────────

/// A side-effect-free predicate gating a transition.
///
/// `state` is the name of the node the transition is evaluated from.
/// Guards may read the governed document but must not mutate anything.
/// Every guard in a transition's list must pass (logical AND), and no
/// guard may depend on the evaluation order of its siblings.
pub trait Guard<D>: Send + Sync {
    /// Decide whether the transition is authorized
    fn evaluate(&self, state: &str, document: &D, command: &Command) -> bool;

    /// Name used in introspection reports and refusal logs
    fn name(&self) -> &str;
}

/// A guard built from a closure. See [`guard_fn`].
pub struct FnGuard<F> {
    name: String,
    predicate: F,
}

/// Wrap a closure as a named [`Guard`]
pub fn guard_fn<D, F>(name: impl Into<String>, predicate: F) -> FnGuard<F>
where
    F: Fn(&str, &D, &Command) -> bool + Send + Sync,
{
    FnGuard {
        name: name.into(),
        predicate,
    }
}

impl<D, F> Guard<D> for FnGuard<F>
where
    F: Fn(&str, &D, &Command) -> bool + Send + Sync,
{
    fn evaluate(&self, state: &str, document: &D, command: &Command) -> bool {
        (self.predicate)(state, document, command)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ── Action ───────────────────────────────────────────────────────────

/// A side-effecting operation run after a transition is authorized.
///
/// Actions run in declaration order on the destination state, each
/// receiving the governed document and the original command. A failing
/// action aborts the remaining actions and propagates to the caller; the
/// state name already stamped on the document stays in place, so callers
/// must not persist a document after an action error.
pub trait Action<D>: Send + Sync {
    /// Apply the effect to the governed document
    fn apply(&self, document: &mut D, command: &Command) -> FlowResult<()>;

    /// Name used in introspection reports
    fn name(&self) -> &str;
}

/// An action built from a closure. See [`action_fn`].
pub struct FnAction<F> {
    name: String,
    effect: F,
}

/// Wrap a closure as a named [`Action`]
pub fn action_fn<D, F>(name: impl Into<String>, effect: F) -> FnAction<F>
where
    F: Fn(&mut D, &Command) -> FlowResult<()> + Send + Sync,
{
    FnAction {
        name: name.into(),
        effect,
    }
}

impl<D, F> Action<D> for FnAction<F>
where
    F: Fn(&mut D, &Command) -> FlowResult<()> + Send + Sync,
{
    fn apply(&self, document: &mut D, command: &Command) -> FlowResult<()> {
        (self.effect)(document, command)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
