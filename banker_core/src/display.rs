use crate::safety::SafetyReport;
use crate::state::ResourceState;

/// Terminal-friendly rendering of the Allocation, Max, Need and Available
/// structures. Display only; takes no part in the decision.
pub fn describe_state(state: &ResourceState) -> String {
    let need = state.need();
    let mut out = String::new();

    out.push_str("Allocation:\n");
    for (i, row) in state.allocation().iter().enumerate() {
        out.push_str(&format!("  P{i}: {row:?}\n"));
    }

    out.push_str("Max:\n");
    for (i, row) in state.max_demand().iter().enumerate() {
        out.push_str(&format!("  P{i}: {row:?}\n"));
    }

    out.push_str("Need:\n");
    for (i, row) in need.iter().enumerate() {
        out.push_str(&format!("  P{i}: {row:?}\n"));
    }

    out.push_str(&format!("Available: {:?}\n", state.available()));
    out
}

/// Verdict, sequence and per-step lines of a finished report.
pub fn describe_report(report: &SafetyReport) -> String {
    let mut out = String::new();

    if report.is_safe {
        let seq: Vec<String> = report.safe_sequence.iter().map(|i| format!("P{i}")).collect();
        out.push_str("safe state\n");
        out.push_str(&format!("safe sequence: {}\n", seq.join(" -> ")));
    } else {
        out.push_str("unsafe state: no process could proceed\n");
    }

    for (idx, step) in report.trace.iter().enumerate() {
        out.push_str(&format!("step {idx}: {}\n", step.message()));
    }
    out
}
