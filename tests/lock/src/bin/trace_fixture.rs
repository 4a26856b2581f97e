//! Tiny binary that runs the canonical diamond search and prints
//! deterministic output lines for cross-process verification.
//!
//! Used by the cross-process determinism test to check that graph digest,
//! trace digest and step digests do not depend on cwd, locale or env.
//!
//! Usage: `trace_fixture`
//! Output: one `key=value` line each for
//!   `graph_digest`, `trace_digest`, `step_0_digest`, `step_final_digest`,
//!   `step_count`, `best_path`, `best_cost`, `replay_verdict`.

use lock_tests::fixtures::{canonical_diamond_report, diamond_graph};
use ucs_search::{replay_verify, ReplayVerdict};

fn main() {
    let report = canonical_diamond_report();
    let trace = &report.trace;

    let trace_digest = trace.digest().expect("trace hashes");
    let first = trace.steps.first().expect("diamond trace is non-empty");
    let last = trace.steps.last().expect("diamond trace is non-empty");
    let outcome = report.outcome.as_ref().expect("diamond search reaches D");

    let verdict = match replay_verify(&diamond_graph(), trace).expect("replay runs") {
        ReplayVerdict::Match => "Match".to_string(),
        ReplayVerdict::Divergence { step_index, .. } => format!("Divergence@{step_index}"),
    };

    println!("graph_digest={}", trace.metadata.graph_digest);
    println!("trace_digest={trace_digest}");
    println!("step_0_digest={}", first.digest().expect("step hashes"));
    println!("step_final_digest={}", last.digest().expect("step hashes"));
    println!("step_count={}", trace.steps.len());
    println!("best_path={}", outcome.path_ids().join(","));
    println!("best_cost={}", outcome.cost);
    println!("replay_verdict={verdict}");
}
