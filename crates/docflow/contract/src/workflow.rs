//! The contract lifecycle graph
//!
//! A document starts in draft, where its content may change freely. A
//! peer verification moves it to verified. Editing a verified document
//! sends it back to draft for a fresh verification. Publishing freezes
//! content for good, and archiving is allowed from any active state.

use std::sync::Arc;

use docflow_engine::StateGraph;
use docflow_types::{ContentPresent, EventSink};

use crate::actions::{AssignVerifier, EmitEvent};
use crate::document::ContractDocument;
use crate::guards::VerifierIsNotAuthor;

// ── Lifecycle Vocabulary ─────────────────────────────────────────────

pub const DRAFT: &str = "draft";
pub const VERIFIED: &str = "verified";
pub const PUBLISHED: &str = "published";
pub const ARCHIVED: &str = "archived";

/// Command parameter naming the verifying actor
pub const VERIFIER_PARAM: &str = "verifier";

pub const EVENT_VERIFIED: &str = "document.verified";
pub const EVENT_PUBLISHED: &str = "document.published";
pub const EVENT_ARCHIVED: &str = "document.archived";

// ── Assembly ─────────────────────────────────────────────────────────

/// Assemble the contract lifecycle graph.
///
/// Verification requires content and a verifier other than the author,
/// and records who verified. Landing on verified, published or archived
/// publishes the matching lifecycle event to `events`.
pub fn contract_lifecycle(events: Arc<dyn EventSink>) -> StateGraph<ContractDocument> {
    StateGraph::assemble()
        .begin_with(DRAFT)
        .when_content_changed()
        .to(DRAFT)
        .from(DRAFT)
        .check(ContentPresent)
        .check(VerifierIsNotAuthor)
        .to(VERIFIED)
        .action(AssignVerifier)
        .action(EmitEvent::new(EVENT_VERIFIED, Arc::clone(&events)))
        .from(VERIFIED)
        .when_content_changed()
        .to(DRAFT)
        .from(VERIFIED)
        .to(PUBLISHED)
        .action(EmitEvent::new(EVENT_PUBLISHED, Arc::clone(&events)))
        .from(DRAFT)
        .to(ARCHIVED)
        .from(VERIFIED)
        .to(ARCHIVED)
        .from(PUBLISHED)
        .to(ARCHIVED)
        .action(EmitEvent::new(EVENT_ARCHIVED, events))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docflow_types::{ActorId, Command, NullSink, RecordingSink};

    fn make_sink() -> Arc<RecordingSink> {
        Arc::new(RecordingSink::new())
    }

    fn make_document(author: &str) -> ContractDocument {
        ContractDocument::new(ActorId::new(author), "Master services agreement")
    }

    fn verify_command(verifier: &str) -> Command {
        Command::new(VERIFIED).with_param(VERIFIER_PARAM, verifier)
    }

    #[test]
    fn test_draft_to_published_happy_path() {
        let sink = make_sink();
        let graph = contract_lifecycle(sink.clone());
        let mut document = make_document("alice");

        let state = graph.begin(&mut document);
        assert_eq!(document.state, DRAFT);

        let state = state.change_content(&mut document, "rev-1");
        let state = state.change_state(&mut document, &verify_command("bob")).unwrap();
        assert_eq!(state.name(), VERIFIED);
        assert_eq!(document.verifier, Some(ActorId::new("bob")));

        let state = state.change_state(&mut document, &Command::new(PUBLISHED)).unwrap();
        assert_eq!(state.name(), PUBLISHED);

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event, EVENT_VERIFIED);
        assert_eq!(events[0].payload["state"], VERIFIED);
        assert_eq!(events[0].payload["verifier"], "bob");
        assert_eq!(events[1].event, EVENT_PUBLISHED);
        assert_eq!(events[1].payload["verifier"], "bob");
    }

    #[test]
    fn test_author_cannot_verify_own_document() {
        let sink = make_sink();
        let graph = contract_lifecycle(sink.clone());
        let mut document = make_document("alice");

        let state = graph.begin(&mut document);
        let state = state.change_content(&mut document, "rev-1");
        let after = state.change_state(&mut document, &verify_command("alice")).unwrap();

        assert_eq!(after.name(), DRAFT);
        assert_eq!(document.state, DRAFT);
        assert!(document.verifier.is_none());
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_verification_requires_content() {
        let sink = make_sink();
        let graph = contract_lifecycle(sink.clone());
        let mut document = make_document("alice");

        let state = graph.begin(&mut document);
        let after = state.change_state(&mut document, &verify_command("bob")).unwrap();

        assert_eq!(after.name(), DRAFT);
        assert!(document.verifier.is_none());
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_verification_requires_verifier_parameter() {
        let sink = make_sink();
        let graph = contract_lifecycle(sink.clone());
        let mut document = make_document("alice");

        let state = graph.begin(&mut document);
        let state = state.change_content(&mut document, "rev-1");
        let after = state.change_state(&mut document, &Command::new(VERIFIED)).unwrap();

        assert_eq!(after.name(), DRAFT);
        assert!(document.verifier.is_none());
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_editing_verified_returns_to_draft() {
        let sink = make_sink();
        let graph = contract_lifecycle(sink.clone());
        let mut document = make_document("alice");

        let state = graph.begin(&mut document);
        let state = state.change_content(&mut document, "rev-1");
        let state = state.change_state(&mut document, &verify_command("bob")).unwrap();

        let after = state.change_content(&mut document, "rev-2");

        assert_eq!(after.name(), DRAFT);
        assert_eq!(document.state, DRAFT);
        assert_eq!(document.content_ref.as_deref(), Some("rev-2"));
        assert_eq!(document.verifier, Some(ActorId::new("bob")));
        assert_eq!(sink.count(), 1);
    }

    #[test]
    fn test_rework_cycle_replaces_verifier() {
        let sink = make_sink();
        let graph = contract_lifecycle(sink.clone());
        let mut document = make_document("alice");

        let state = graph.begin(&mut document);
        let state = state.change_content(&mut document, "rev-1");
        let state = state.change_state(&mut document, &verify_command("bob")).unwrap();
        let state = state.change_content(&mut document, "rev-2");
        let state = state.change_state(&mut document, &verify_command("carol")).unwrap();

        assert_eq!(state.name(), VERIFIED);
        assert_eq!(document.verifier, Some(ActorId::new("carol")));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event, EVENT_VERIFIED);
        assert_eq!(events[1].event, EVENT_VERIFIED);
    }

    #[test]
    fn test_published_content_is_frozen() {
        let sink = make_sink();
        let graph = contract_lifecycle(sink.clone());
        let mut document = make_document("alice");

        let state = graph.begin(&mut document);
        let state = state.change_content(&mut document, "rev-1");
        let state = state.change_state(&mut document, &verify_command("bob")).unwrap();
        let state = state.change_state(&mut document, &Command::new(PUBLISHED)).unwrap();
        let recorded = sink.count();

        let after = state.change_content(&mut document, "tampered");

        assert_eq!(after.name(), PUBLISHED);
        assert_eq!(document.state, PUBLISHED);
        assert_eq!(document.content_ref.as_deref(), Some("rev-1"));
        assert_eq!(sink.count(), recorded);
    }

    #[test]
    fn test_archive_allowed_from_every_active_state() {
        let archive = Command::new(ARCHIVED);

        let sink = make_sink();
        let graph = contract_lifecycle(sink.clone());
        let mut document = make_document("alice");
        let state = graph.begin(&mut document);
        let state = state.change_state(&mut document, &archive).unwrap();
        assert_eq!(state.name(), ARCHIVED);
        assert_eq!(sink.events().last().unwrap().event, EVENT_ARCHIVED);

        let sink = make_sink();
        let graph = contract_lifecycle(sink.clone());
        let mut document = make_document("alice");
        let state = graph.begin(&mut document);
        let state = state.change_content(&mut document, "rev-1");
        let state = state.change_state(&mut document, &verify_command("bob")).unwrap();
        let state = state.change_state(&mut document, &archive).unwrap();
        assert_eq!(state.name(), ARCHIVED);
        assert_eq!(sink.events().last().unwrap().event, EVENT_ARCHIVED);

        let sink = make_sink();
        let graph = contract_lifecycle(sink.clone());
        let mut document = make_document("alice");
        let state = graph.begin(&mut document);
        let state = state.change_content(&mut document, "rev-1");
        let state = state.change_state(&mut document, &verify_command("bob")).unwrap();
        let state = state.change_state(&mut document, &Command::new(PUBLISHED)).unwrap();
        let state = state.change_state(&mut document, &archive).unwrap();
        assert_eq!(state.name(), ARCHIVED);
        assert_eq!(sink.events().last().unwrap().event, EVENT_ARCHIVED);
    }

    #[test]
    fn test_archived_is_terminal() {
        let graph = contract_lifecycle(Arc::new(NullSink));
        let mut document = make_document("alice");

        let state = graph.begin(&mut document);
        let state = state.change_state(&mut document, &Command::new(ARCHIVED)).unwrap();

        for command in [Command::new(DRAFT), verify_command("bob"), Command::new(PUBLISHED)] {
            let after = state.change_state(&mut document, &command).unwrap();
            assert_eq!(after.name(), ARCHIVED);
        }
        assert!(!state.content_editable(&document));
    }

    #[test]
    fn test_unknown_command_is_refused() {
        let sink = make_sink();
        let graph = contract_lifecycle(sink.clone());
        let mut document = make_document("alice");

        let state = graph.begin(&mut document);
        let after = state.change_state(&mut document, &Command::new("limbo")).unwrap();

        assert_eq!(after.name(), DRAFT);
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_content_editable_follows_lifecycle() {
        let graph = contract_lifecycle(Arc::new(NullSink));
        let mut document = make_document("alice");

        let state = graph.begin(&mut document);
        assert!(state.content_editable(&document));

        let state = state.change_content(&mut document, "rev-1");
        let state = state.change_state(&mut document, &verify_command("bob")).unwrap();
        assert!(state.content_editable(&document));

        let state = state.change_state(&mut document, &Command::new(PUBLISHED)).unwrap();
        assert!(!state.content_editable(&document));
    }

    #[test]
    fn test_draft_transitions_report() {
        let graph = contract_lifecycle(Arc::new(NullSink));
        let mut document = make_document("alice");

        let state = graph.begin(&mut document);
        let views = state.transitions();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].to, VERIFIED);
        assert_eq!(
            views[0].guards,
            vec!["content-present", "verifier-is-not-author", "from(draft)"]
        );
        assert_eq!(
            views[0].actions,
            vec!["assign-verifier", "emit(document.verified)"]
        );
        assert_eq!(views[1].to, ARCHIVED);
        assert_eq!(views[1].guards, vec!["from(draft)"]);
        assert_eq!(views[1].actions, vec!["emit(document.archived)"]);
    }

    #[test]
    fn test_recreate_resumes_mid_lifecycle() {
        let graph = contract_lifecycle(Arc::new(NullSink));
        let mut document = make_document("alice");

        {
            let state = graph.begin(&mut document);
            let state = state.change_content(&mut document, "rev-1");
            state.change_state(&mut document, &verify_command("bob")).unwrap();
        }

        let resumed = graph.recreate(&document).unwrap();
        assert_eq!(resumed.name(), VERIFIED);

        let state = resumed.change_state(&mut document, &Command::new(PUBLISHED)).unwrap();
        assert_eq!(state.name(), PUBLISHED);
    }
}
