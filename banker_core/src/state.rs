use crate::cfg::NeedPolicy;
use crate::error::InvalidStateError;

/// Immutable snapshot of a resource-allocation state.
///
/// Construction takes ownership of the matrices, so a caller cannot mutate
/// what an in-flight or finished evaluation sees. Read access goes through
/// accessors; there is no way to change a cell after `new` returns.
///
/// Non-negative inputs are enforced by the unsigned element type.
#[derive(Clone, Debug, serde::Serialize)]
pub struct ResourceState {
    process_count: usize,
    resource_type_count: usize,
    allocation: Vec<Vec<u32>>,
    max_demand: Vec<Vec<u32>>,
    available: Vec<u32>,
}

impl ResourceState {
    /// Validate and build a snapshot.
    ///
    /// Shape checks always run: positive counts, row counts, row lengths and
    /// the available-vector length. Whether a `max_demand` cell below its
    /// `allocation` cell is rejected is controlled by `policy`.
    pub fn new(
        process_count: usize,
        resource_type_count: usize,
        allocation: Vec<Vec<u32>>,
        max_demand: Vec<Vec<u32>>,
        available: Vec<u32>,
        policy: NeedPolicy,
    ) -> Result<Self, InvalidStateError> {
        if process_count == 0 {
            return Err(InvalidStateError::ZeroProcesses);
        }
        if resource_type_count == 0 {
            return Err(InvalidStateError::ZeroResourceTypes);
        }

        check_shape("allocation", &allocation, process_count, resource_type_count)?;
        check_shape("max demand", &max_demand, process_count, resource_type_count)?;
        if available.len() != resource_type_count {
            return Err(InvalidStateError::AvailableLength {
                expected: resource_type_count,
                found: available.len(),
            });
        }

        if policy == NeedPolicy::Strict {
            for (i, (max_row, alloc_row)) in max_demand.iter().zip(&allocation).enumerate() {
                for (j, (&m, &a)) in max_row.iter().zip(alloc_row).enumerate() {
                    if m < a {
                        return Err(InvalidStateError::MaxBelowAllocation {
                            process: i,
                            resource: j,
                            max_demand: m,
                            allocation: a,
                        });
                    }
                }
            }
        }

        Ok(Self {
            process_count,
            resource_type_count,
            allocation,
            max_demand,
            available,
        })
    }

    pub fn process_count(&self) -> usize {
        self.process_count
    }

    pub fn resource_type_count(&self) -> usize {
        self.resource_type_count
    }

    pub fn allocation(&self) -> &[Vec<u32>] {
        &self.allocation
    }

    pub fn max_demand(&self) -> &[Vec<u32>] {
        &self.max_demand
    }

    pub fn available(&self) -> &[u32] {
        &self.available
    }

    pub fn allocation_row(&self, process: usize) -> &[u32] {
        &self.allocation[process]
    }

    /// Need matrix: `max_demand - allocation`, recomputed on every call.
    ///
    /// Computed in `i64` so a permissive snapshot yields a negative cell
    /// instead of wrapping.
    pub fn need(&self) -> Vec<Vec<i64>> {
        self.max_demand
            .iter()
            .zip(&self.allocation)
            .map(|(max_row, alloc_row)| {
                max_row
                    .iter()
                    .zip(alloc_row)
                    .map(|(&m, &a)| i64::from(m) - i64::from(a))
                    .collect()
            })
            .collect()
    }
}

fn check_shape(
    matrix: &'static str,
    rows: &[Vec<u32>],
    expected_rows: usize,
    expected_cols: usize,
) -> Result<(), InvalidStateError> {
    if rows.len() != expected_rows {
        return Err(InvalidStateError::RowCount {
            matrix,
            expected: expected_rows,
            found: rows.len(),
        });
    }
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != expected_cols {
            return Err(InvalidStateError::RowLength {
                matrix,
                row,
                expected: expected_cols,
                found: cells.len(),
            });
        }
    }
    Ok(())
}
