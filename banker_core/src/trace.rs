use serde::Deserialize;
use serde::Serialize;

/// One entry in the evaluator's progress trace.
///
/// Fixed-shape variants rather than free-form maps, so a display layer can
/// rely on exactly which fields are present for each kind of entry. Every
/// variant carries a pre-formatted human-readable `message`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceStep {
    /// Work and finish vectors as they stood before the first scan.
    Init {
        work: Vec<u32>,
        finish: Vec<bool>,
        message: String,
    },
    /// A process passed the `need <= work` test and released its allocation.
    Admitted {
        step: usize,
        process: usize,
        need: Vec<i64>,
        work_before: Vec<u32>,
        allocation: Vec<u32>,
        work_after: Vec<u32>,
        message: String,
    },
}

impl TraceStep {
    pub(crate) fn init(work: &[u32], finish: &[bool]) -> Self {
        TraceStep::Init {
            work: work.to_vec(),
            finish: finish.to_vec(),
            message: "initialization: work = available, finish = [false, ...]".to_string(),
        }
    }

    pub(crate) fn admitted(
        step: usize,
        process: usize,
        need: &[i64],
        work_before: &[u32],
        allocation: &[u32],
        work_after: &[u32],
    ) -> Self {
        TraceStep::Admitted {
            step,
            process,
            need: need.to_vec(),
            work_before: work_before.to_vec(),
            allocation: allocation.to_vec(),
            work_after: work_after.to_vec(),
            message: format!(
                "process P{process} can run (need <= work); work = work + allocation[{process}]"
            ),
        }
    }

    /// The human-readable line for this entry.
    pub fn message(&self) -> &str {
        match self {
            TraceStep::Init { message, .. } | TraceStep::Admitted { message, .. } => message,
        }
    }
}
