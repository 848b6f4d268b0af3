use thiserror::Error;

/// Construction-time rejection of a malformed or inconsistent snapshot.
///
/// Shape problems are always rejected; `MaxBelowAllocation` only fires under
/// [`NeedPolicy::Strict`](crate::cfg::NeedPolicy).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("process count must be positive")]
    ZeroProcesses,

    #[error("resource type count must be positive")]
    ZeroResourceTypes,

    #[error("{matrix} matrix has {found} rows, expected {expected}")]
    RowCount {
        matrix: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{matrix} matrix row {row} has {found} entries, expected {expected}")]
    RowLength {
        matrix: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("available vector has {found} entries, expected {expected}")]
    AvailableLength { expected: usize, found: usize },

    #[error(
        "max demand {max_demand} is below allocation {allocation} \
         for process {process}, resource {resource}"
    )]
    MaxBelowAllocation {
        process: usize,
        resource: usize,
        max_demand: u32,
        allocation: u32,
    },
}
