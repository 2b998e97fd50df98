mod common;

use common::utils::{disabled_leaf, expandable_leaf, file_edit_menu, leaf, menu, provider_from, separator};
use menu_mirror::menu::builder::{BuildPhase, MenuBuilder, TriggerOutcome};
use menu_mirror::menu::session::MenuSession;
use menu_mirror::trace::logger::TraceLogger;

// ============================================================================
// Activation
// ============================================================================

#[test]
fn trigger_activates_exact_path() {
    let provider = file_edit_menu();
    let mut session = MenuSession::new();

    let outcome = session.trigger(&provider, 0, "File→Open", &TraceLogger::disabled());

    assert_eq!(outcome, TriggerOutcome::Activated);
    assert_eq!(
        provider.activated_titles(),
        vec!["Open"],
        "The provider's activation lands on the matched element"
    );
}

#[test]
fn trigger_reaches_extra_leaf_level() {
    let provider = provider_from(vec![menu(
        "File",
        vec![expandable_leaf("Open Recent", vec![leaf("notes.txt")])],
    )]);
    let mut session = MenuSession::new();

    let outcome = session.trigger(
        &provider,
        0,
        "File→Open Recent→notes.txt",
        &TraceLogger::disabled(),
    );

    assert_eq!(outcome, TriggerOutcome::Activated);
    assert_eq!(provider.activated_titles(), vec!["notes.txt"]);
}

// ============================================================================
// Short-circuit
// ============================================================================

#[test]
fn trigger_short_circuits_the_walk() {
    let full = file_edit_menu();
    MenuBuilder::new(&full).build(0);
    let full_queries = full.children_query_count();

    let provider = file_edit_menu();
    let result = MenuBuilder::with_target(&provider, "File→Open").build(0);

    assert_eq!(result.trigger, Some(TriggerOutcome::Activated));
    assert_eq!(result.phase, BuildPhase::Triggered, "Match absorbs the walk");
    assert!(
        provider.children_query_count() < full_queries,
        "No further siblings or descent after the match ({} vs {})",
        provider.children_query_count(),
        full_queries
    );
    assert_eq!(provider.activation_count(), 1, "Exactly one activation, never retried");
    assert_eq!(
        result.tree.items.len(),
        1,
        "Only the partial surface up to the match is materialized"
    );
}

#[test]
fn failed_activation_still_terminates_the_walk() {
    let mut provider = file_edit_menu();
    provider.fail_activation("Open", -25205);

    let result = MenuBuilder::with_target(&provider, "File→Open").build(0);

    assert_eq!(result.trigger, Some(TriggerOutcome::ActivationFailed(-25205)));
    assert_eq!(result.phase, BuildPhase::Triggered);
    assert_eq!(provider.activation_count(), 1, "Failure is surfaced, not retried");
}

// ============================================================================
// Outcomes
// ============================================================================

#[test]
fn trigger_absent_path_reports_not_found() {
    let provider = file_edit_menu();
    let mut session = MenuSession::new();

    let outcome = session.trigger(&provider, 0, "File→Nope", &TraceLogger::disabled());

    assert_eq!(outcome, TriggerOutcome::NotFound);
    assert_eq!(provider.activation_count(), 0, "Nothing activates on a miss");
}

#[test]
fn trigger_disabled_item_reports_not_found() {
    let provider = file_edit_menu();
    let mut session = MenuSession::new();

    // "Save" is rendered but disabled, so it has no path label to match.
    let outcome = session.trigger(&provider, 0, "File→Save", &TraceLogger::disabled());

    assert_eq!(outcome, TriggerOutcome::NotFound);
    assert_eq!(provider.activation_count(), 0);
}

#[test]
fn trigger_failure_surfaces_provider_code() {
    let mut provider = provider_from(vec![menu(
        "File",
        vec![leaf("Open"), separator(), disabled_leaf("Save")],
    )]);
    provider.fail_activation("Open", 7);
    let mut session = MenuSession::new();

    let outcome = session.trigger(&provider, 0, "File→Open", &TraceLogger::disabled());

    assert_eq!(outcome, TriggerOutcome::ActivationFailed(7));
}

#[test]
fn every_indexed_path_triggers() {
    let built = MenuBuilder::new(&file_edit_menu()).build(0);

    for entry in built.index.entries() {
        let provider = file_edit_menu();
        let mut session = MenuSession::new();
        let outcome = session.trigger(&provider, 0, &entry.path, &TraceLogger::disabled());
        assert_ne!(
            outcome,
            TriggerOutcome::NotFound,
            "Indexed path {} must be reachable by trigger",
            entry.path
        );
    }
}
