//! In-process determinism: repeated runs and independent graph instances
//! produce byte-identical traces.

use std::sync::Arc;
use std::thread;

use ucs_graph::Graph;
use ucs_search::{search_with_policy, SearchPolicy};

use lock_tests::fixtures::{canonical_diamond_report, diamond_graph, goals};

// ---------------------------------------------------------------------------
// ACCEPTANCE: DETERMINISM-INPROC
// ---------------------------------------------------------------------------

#[test]
fn diamond_trace_bytes_stable_n10() {
    let first = canonical_diamond_report()
        .trace
        .to_canonical_json_bytes()
        .unwrap();
    for _ in 1..10 {
        let other = canonical_diamond_report()
            .trace
            .to_canonical_json_bytes()
            .unwrap();
        assert_eq!(first, other, "trace bytes differ across runs");
    }
}

#[test]
fn trace_digest_is_stable() {
    let a = canonical_diamond_report().trace.digest().unwrap();
    let b = canonical_diamond_report().trace.digest().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.algorithm(), "sha256");
}

#[test]
fn metadata_binds_graph_and_inputs() {
    let report = canonical_diamond_report();
    let meta = &report.trace.metadata;
    assert_eq!(meta.graph_digest, diamond_graph().digest().as_str());
    assert_eq!(meta.start, "A");
    assert_eq!(meta.goals, vec!["D"]);
    assert_eq!(meta.policy, SearchPolicy::default());
}

#[test]
fn input_key_order_does_not_change_trace() {
    let shuffled = Graph::from_json_str(
        r#"{"D": {"neighbors": {}, "value": "delta", "id": "D"},
            "C": {"neighbors": {"D": 1}, "value": "charlie", "id": "C"},
            "B": {"neighbors": {"D": 5, "C": 1}, "value": "bravo", "id": "B"},
            "A": {"neighbors": {"C": 4, "B": 1}, "value": "alpha", "id": "A"}}"#,
    )
    .unwrap();
    let report =
        search_with_policy(&shuffled, "A", &goals(&["D"]), &SearchPolicy::default()).unwrap();
    assert_eq!(
        report.trace.digest().unwrap(),
        canonical_diamond_report().trace.digest().unwrap()
    );
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: SHARED-GRAPH
// ---------------------------------------------------------------------------

#[test]
fn concurrent_searches_on_shared_graph_agree() {
    let graph = Arc::new(diamond_graph());
    let expected = canonical_diamond_report().trace.digest().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || {
                search_with_policy(&graph, "A", &goals(&["D"]), &SearchPolicy::default())
                    .unwrap()
                    .trace
                    .digest()
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
