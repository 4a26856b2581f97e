//! Search policy lock tests: dequeue budget and JSON configuration.

use ucs_search::{search_with_policy, SearchError, SearchPolicy, TerminationReason};

use lock_tests::fixtures::{diamond_graph, goals};
use lock_tests::init_tracing;

fn run(policy: &SearchPolicy) -> ucs_search::SearchReport {
    search_with_policy(&diamond_graph(), "A", &goals(&["D"]), policy).unwrap()
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: POLICY-DEQUEUE-BUDGET
// ---------------------------------------------------------------------------

#[test]
fn budget_caps_trace_length() {
    init_tracing();
    for limit in 1..6 {
        let report = run(&SearchPolicy::with_max_dequeues(limit));
        assert_eq!(report.trace.steps.len() as u64, limit);
        assert_eq!(
            report.trace.metadata.termination_reason,
            TerminationReason::DequeueBudgetExceeded { limit }
        );
    }
}

#[test]
fn budgeted_trace_is_prefix_of_unbounded_trace() {
    let full = run(&SearchPolicy::unbounded()).trace.steps;
    let capped = run(&SearchPolicy::with_max_dequeues(3)).trace.steps;
    assert_eq!(capped[..], full[..3]);
}

#[test]
fn goal_found_within_budget_is_returned() {
    let report = run(&SearchPolicy::with_max_dequeues(4));
    assert_eq!(report.outcome.as_ref().unwrap().cost, 3.0);
    assert!(report.is_goal_reached());

    let short = run(&SearchPolicy::with_max_dequeues(3));
    assert!(!short.is_goal_reached());
}

#[test]
fn generous_budget_changes_nothing_but_the_echo() {
    let unbounded = run(&SearchPolicy::unbounded());
    let generous = run(&SearchPolicy::with_max_dequeues(1_000));
    assert_eq!(unbounded.trace.steps, generous.trace.steps);
    assert_eq!(unbounded.outcome, generous.outcome);
    assert_eq!(
        generous.trace.metadata.termination_reason,
        TerminationReason::FrontierExhausted
    );
    assert_ne!(
        unbounded.trace.digest().unwrap(),
        generous.trace.digest().unwrap(),
        "policy is part of the trace"
    );
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: POLICY-CONFIG
// ---------------------------------------------------------------------------

#[test]
fn policy_loads_from_json() {
    let policy = SearchPolicy::from_json_str(r#"{"max_dequeues": 2}"#).unwrap();
    assert_eq!(run(&policy).trace.steps.len(), 2);
}

#[test]
fn invalid_policy_rejected_before_search() {
    let err = search_with_policy(
        &diamond_graph(),
        "A",
        &goals(&["D"]),
        &SearchPolicy::with_max_dequeues(0),
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::InvalidPolicy { .. }));
    assert!(SearchPolicy::from_json_str("not json").is_err());
}

#[test]
fn policy_echo_serializes_in_metadata() {
    let report = run(&SearchPolicy::with_max_dequeues(4));
    let json = serde_json::to_value(&report.trace.metadata).unwrap();
    assert_eq!(json["policy"], serde_json::json!({"max_dequeues": 4}));
    assert_eq!(
        json["termination_reason"],
        serde_json::json!({"type": "dequeue_budget_exceeded", "limit": 4})
    );
}
