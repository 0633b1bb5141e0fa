//! Docflow Demo: Contract Lifecycle
//!
//! Walks one contract document through the full lifecycle graph:
//!
//! 1. **Drafting**: content edits in place, premature commands refused
//! 2. **Peer Verification**: author rejected, a peer admitted and recorded
//! 3. **Rework**: editing a verified document sends it back to draft
//! 4. **Publish and Freeze**: published content can no longer change
//! 5. **Persistence**: save, reload and resume from an in-memory store
//! 6. **Event Trail**: every landing on a governed state was published

use std::sync::Arc;

use colored::Colorize;
use docflow_contract::{
    contract_lifecycle, ContractDocument, MemoryStore, ARCHIVED, PUBLISHED, VERIFIED,
    VERIFIER_PARAM,
};
use docflow_engine::{State, TransitionView};
use docflow_types::{ActorId, Command, DocumentStore, RecordingSink};

fn separator() {
    println!("{}", "━".repeat(72).dimmed());
}

fn header(title: &str) {
    println!();
    println!("{}", "═".repeat(72).cyan());
    println!("  {}", title.cyan().bold());
    println!("{}", "═".repeat(72).cyan());
}

fn show_state(label: &str, state: &State<'_, ContractDocument>, document: &ContractDocument) {
    println!(
        "  {} {} state: {}  content: {}  verifier: {}",
        "├".dimmed(),
        label,
        format!("{}", state).green().bold(),
        document.content_ref.as_deref().unwrap_or("-").yellow(),
        document
            .verifier
            .as_ref()
            .map(|v| v.as_str())
            .unwrap_or("-")
            .blue()
    );
}

fn show_transitions(views: &[TransitionView]) {
    for (i, view) in views.iter().enumerate() {
        let prefix = if i < views.len() - 1 { "├" } else { "└" };
        println!(
            "  {} -> {}  guards: {}  actions: {}",
            prefix.dimmed(),
            view.to.green(),
            format!("[{}]", view.guards.join(", ")).yellow(),
            format!("[{}]", view.actions.join(", ")).blue()
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .init();

    println!();
    println!("{}", "╔══════════════════════════════════════════════════════════════╗".cyan());
    println!("{}", "║    Docflow Demo: Contract Lifecycle                          ║".cyan().bold());
    println!("{}", "╚══════════════════════════════════════════════════════════════╝".cyan());

    let sink = Arc::new(RecordingSink::new());
    let graph = contract_lifecycle(sink.clone());
    let store = MemoryStore::new();

    // ── Part 1: Drafting ────────────────────────────────────────────
    header("Part 1: Drafting");

    let mut document = ContractDocument::new(ActorId::new("alice"), "Master services agreement");
    let document_id = document.id.clone();
    let state = graph.begin(&mut document);
    show_state("Fresh document,", &state, &document);

    // A draft cannot be published, the command is refused in place
    let state = state
        .change_state(&mut document, &Command::new(PUBLISHED))
        .unwrap();
    show_state("Premature publish refused,", &state, &document);

    let state = state.change_content(&mut document, "rev-1");
    let state = state.change_content(&mut document, "rev-2");
    show_state("Two edits later,", &state, &document);

    println!("  {} Transitions available from draft:", "└".dimmed());
    show_transitions(&state.transitions());

    // ── Part 2: Peer Verification ───────────────────────────────────
    header("Part 2: Peer Verification");

    // The author's own verification attempt bounces off the guard
    let verify_as_alice = Command::new(VERIFIED).with_param(VERIFIER_PARAM, "alice");
    let state = state.change_state(&mut document, &verify_as_alice).unwrap();
    show_state("Self verification refused,", &state, &document);

    let verify_as_bob = Command::new(VERIFIED).with_param(VERIFIER_PARAM, "bob");
    let state = state.change_state(&mut document, &verify_as_bob).unwrap();
    show_state("Bob verifies,", &state, &document);

    // ── Part 3: Rework ──────────────────────────────────────────────
    header("Part 3: Rework");

    let state = state.change_content(&mut document, "rev-3");
    show_state("Edit after verification,", &state, &document);

    let verify_as_carol = Command::new(VERIFIED).with_param(VERIFIER_PARAM, "carol");
    let state = state.change_state(&mut document, &verify_as_carol).unwrap();
    show_state("Carol re-verifies,", &state, &document);

    // ── Part 4: Publish and Freeze ──────────────────────────────────
    header("Part 4: Publish and Freeze");

    let state = state
        .change_state(&mut document, &Command::new(PUBLISHED))
        .unwrap();
    show_state("Published,", &state, &document);

    let state = state.change_content(&mut document, "tampered");
    show_state("Tamper attempt refused,", &state, &document);
    println!(
        "  {} Content editable here: {}",
        "└".dimmed(),
        format!("{}", state.content_editable(&document)).red()
    );

    // ── Part 5: Persistence ─────────────────────────────────────────
    header("Part 5: Persistence");

    store.save(&document).unwrap();
    tracing::info!(document_id = %document_id, "Document persisted");

    let mut loaded = store.get_one(document_id.as_str()).unwrap();
    let resumed = graph.recreate(&loaded).unwrap();
    show_state("Reloaded and resumed,", &resumed, &loaded);

    let resumed = resumed
        .change_state(&mut loaded, &Command::new(ARCHIVED))
        .unwrap();
    store.save(&loaded).unwrap();
    show_state("Archived and saved,", &resumed, &loaded);

    // A stored state name the graph does not know is a hard error
    let mut tampered = store.get_one(document_id.as_str()).unwrap();
    tampered.state = "limbo".to_string();
    match graph.recreate(&tampered) {
        Ok(_) => println!("  {} Tampered state accepted?!", "└".dimmed()),
        Err(err) => println!(
            "  {} Tampered state rejected: {}",
            "└".dimmed(),
            format!("{}", err).red()
        ),
    }

    separator();
    println!(
        "  {} Documents in store: {}",
        "└".dimmed(),
        format!("{}", store.count()).yellow()
    );

    // ── Part 6: Event Trail ─────────────────────────────────────────
    header("Part 6: Event Trail");

    let events = sink.events();
    for (i, event) in events.iter().enumerate() {
        let prefix = if i < events.len() - 1 { "├" } else { "└" };
        println!(
            "  {} {}  {}",
            prefix.dimmed(),
            event.event.green(),
            serde_json::to_string(&event.payload).unwrap().dimmed()
        );
    }

    // ── Summary ─────────────────────────────────────────────────────
    header("Summary");
    println!("  {} Final state:        {}", "├".dimmed(), loaded.state.green());
    println!(
        "  {} Final content:      {}",
        "├".dimmed(),
        loaded.content_ref.as_deref().unwrap_or("-").green()
    );
    println!(
        "  {} Verified by:        {}",
        "├".dimmed(),
        loaded
            .verifier
            .as_ref()
            .map(|v| v.as_str())
            .unwrap_or("-")
            .green()
    );
    println!(
        "  {} Lifecycle events:   {}",
        "├".dimmed(),
        format!("{}", events.len()).green()
    );
    println!(
        "  {} Refused attempts:   {}",
        "└".dimmed(),
        "premature publish, self verification, tampering".green()
    );
    println!();
}
