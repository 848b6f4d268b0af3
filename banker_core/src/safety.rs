use serde::Deserialize;
use serde::Serialize;

use crate::state::ResourceState;
use crate::trace::TraceStep;

/// Outcome of one safety evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    pub is_safe: bool,
    /// Completion order found by the search; empty when the state is unsafe.
    pub safe_sequence: Vec<usize>,
    pub trace: Vec<TraceStep>,
}

/// Run the classical safety search over a snapshot.
///
/// Scans process indices in increasing order and admits the *first*
/// unfinished process whose need row fits into `work`, so the resulting
/// sequence is deterministic for a given input. Every admission restarts the
/// scan from index 0. A full scan that admits nobody terminates the search:
/// the state is unsafe and the partially built sequence is discarded.
///
/// All mutation happens on local working copies; the snapshot itself is
/// untouched. O(n^2 * m) worst case.
pub fn evaluate_safety(state: &ResourceState) -> SafetyReport {
    let n = state.process_count();
    let need = state.need();

    let mut work: Vec<u32> = state.available().to_vec();
    let mut finish = vec![false; n];
    let mut safe_sequence: Vec<usize> = Vec::with_capacity(n);
    let mut trace = vec![TraceStep::init(&work, &finish)];

    while safe_sequence.len() < n {
        let found = (0..n).find(|&i| !finish[i] && row_fits(&need[i], &work));
        let Some(i) = found else {
            // Nobody can proceed; the partial order is meaningless.
            return SafetyReport {
                is_safe: false,
                safe_sequence: Vec::new(),
                trace,
            };
        };

        let work_before = work.clone();
        for (w, &a) in work.iter_mut().zip(state.allocation_row(i)) {
            *w += a;
        }
        finish[i] = true;
        safe_sequence.push(i);
        trace.push(TraceStep::admitted(
            safe_sequence.len(),
            i,
            &need[i],
            &work_before,
            state.allocation_row(i),
            &work,
        ));
    }

    SafetyReport {
        is_safe: true,
        safe_sequence,
        trace,
    }
}

/// Componentwise `need <= work`. A negative need cell passes trivially.
fn row_fits(need: &[i64], work: &[u32]) -> bool {
    need.iter().zip(work).all(|(&n, &w)| n <= i64::from(w))
}
