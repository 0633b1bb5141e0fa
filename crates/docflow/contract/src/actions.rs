//! Post-transition actions for the contract lifecycle

use std::sync::Arc;

use serde_json::json;

use docflow_types::{Action, ActorId, Command, EventSink, FlowError, FlowResult};

use crate::document::ContractDocument;
use crate::workflow::VERIFIER_PARAM;

// ── Assign Verifier ──────────────────────────────────────────────────

/// Records the command's verifier on the document
pub struct AssignVerifier;

impl Action<ContractDocument> for AssignVerifier {
    fn apply(&self, document: &mut ContractDocument, command: &Command) -> FlowResult<()> {
        let verifier = match command.param_str(VERIFIER_PARAM) {
            Some(verifier) => verifier,
            None => {
                return Err(FlowError::ActionFailed {
                    action: "assign-verifier".to_string(),
                    reason: format!("missing '{}' parameter", VERIFIER_PARAM),
                })
            }
        };
        document.verifier = Some(ActorId::new(verifier));
        tracing::debug!(document_id = %document.id, verifier = %verifier, "Verifier assigned");
        Ok(())
    }

    fn name(&self) -> &str {
        "assign-verifier"
    }
}

// ── Emit Event ───────────────────────────────────────────────────────

/// Publishes a lifecycle event carrying a document snapshot.
///
/// Runs after the state stamp, so the snapshot shows the destination
/// state.
pub struct EmitEvent {
    event: String,
    label: String,
    sink: Arc<dyn EventSink>,
}

impl EmitEvent {
    pub fn new(event: impl Into<String>, sink: Arc<dyn EventSink>) -> Self {
        let event = event.into();
        let label = format!("emit({})", event);
        Self { event, label, sink }
    }
}

impl Action<ContractDocument> for EmitEvent {
    fn apply(&self, document: &mut ContractDocument, _command: &Command) -> FlowResult<()> {
        let payload = json!({
            "document_id": document.id.as_str(),
            "state": document.state,
            "author": document.author.as_str(),
            "verifier": document.verifier.as_ref().map(|v| v.as_str()),
            "content_ref": document.content_ref,
        });
        self.sink.emit(&self.event, payload);
        tracing::debug!(document_id = %document.id, event = %self.event, "Lifecycle event emitted");
        Ok(())
    }

    fn name(&self) -> &str {
        &self.label
    }
}
