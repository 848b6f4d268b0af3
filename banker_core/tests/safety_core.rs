use banker_core::*;

/// The classic five-process, three-resource example.
fn textbook_state() -> ResourceState {
    ResourceState::new(
        5,
        3,
        vec![
            vec![0, 1, 0],
            vec![2, 0, 0],
            vec![3, 0, 2],
            vec![2, 1, 1],
            vec![0, 0, 2],
        ],
        vec![
            vec![7, 5, 3],
            vec![3, 2, 2],
            vec![9, 0, 2],
            vec![2, 2, 2],
            vec![4, 3, 3],
        ],
        vec![3, 3, 2],
        NeedPolicy::Strict,
    )
    .expect("textbook state is well formed")
}

#[test]
fn need_matrix() {
    let state = textbook_state();
    assert_eq!(
        state.need(),
        vec![
            vec![7, 4, 3],
            vec![1, 2, 2],
            vec![6, 0, 0],
            vec![0, 1, 1],
            vec![4, 3, 1],
        ]
    );
}

#[test]
fn textbook_safe() {
    let report = evaluate_safety(&textbook_state());
    assert!(report.is_safe);
    // After P1 and P3 release, work is [7, 4, 3] and P0's need [7, 4, 3]
    // fits exactly, so the lowest-index rule admits P0 before P4.
    assert_eq!(report.safe_sequence, vec![1, 3, 0, 2, 4]);
    // init entry plus one admission per process
    assert_eq!(report.trace.len(), 6);
}

#[test]
fn trace_replays_cleanly() {
    let state = textbook_state();
    let report = evaluate_safety(&state);
    assert!(report.is_safe);

    // Replay the sequence against the recorded steps: need must fit the work
    // vector at the moment the process was chosen, and the work vectors must
    // chain from available through each admission.
    let mut expected_work: Vec<u32> = state.available().to_vec();
    let mut admissions = 0usize;

    for entry in &report.trace {
        match entry {
            TraceStep::Init { work, finish, .. } => {
                assert_eq!(work, &expected_work);
                assert!(finish.iter().all(|f| !f));
            }
            TraceStep::Admitted {
                step,
                process,
                need,
                work_before,
                allocation,
                work_after,
                ..
            } => {
                assert_eq!(work_before, &expected_work);
                assert!(need
                    .iter()
                    .zip(work_before)
                    .all(|(&n, &w)| n <= i64::from(w)));
                for (w, a) in expected_work.iter_mut().zip(allocation) {
                    *w += a;
                }
                assert_eq!(work_after, &expected_work);
                admissions += 1;
                assert_eq!(*step, admissions);
                assert_eq!(report.safe_sequence[admissions - 1], *process);
            }
        }
    }
    assert_eq!(admissions, state.process_count());
}

#[test]
fn unsafe_when_nothing_available() {
    let state = ResourceState::new(
        5,
        3,
        vec![
            vec![0, 1, 0],
            vec![2, 0, 0],
            vec![3, 0, 2],
            vec![2, 1, 1],
            vec![0, 0, 2],
        ],
        vec![
            vec![7, 5, 3],
            vec![3, 2, 2],
            vec![9, 0, 2],
            vec![2, 2, 2],
            vec![4, 3, 3],
        ],
        vec![0, 0, 0],
        NeedPolicy::Strict,
    )
    .expect("shape is valid");

    let report = evaluate_safety(&state);
    assert!(!report.is_safe);
    assert!(report.safe_sequence.is_empty());
    // No process has a zero need row, so nothing is admitted after init.
    assert_eq!(report.trace.len(), 1);
    assert!(matches!(report.trace[0], TraceStep::Init { .. }));
}

#[test]
fn unsafe_discards_partial_sequence() {
    // P0 is admitted in the first pass, then P1 (need 2 > work 0) sticks.
    let state = ResourceState::new(
        2,
        1,
        vec![vec![0], vec![1]],
        vec![vec![0], vec![3]],
        vec![0],
        NeedPolicy::Strict,
    )
    .expect("shape is valid");

    let report = evaluate_safety(&state);
    assert!(!report.is_safe);
    assert!(report.safe_sequence.is_empty());
    // The trace still shows the progress made before the search stuck.
    assert_eq!(report.trace.len(), 2);
    assert!(matches!(
        report.trace[1],
        TraceStep::Admitted { process: 0, .. }
    ));
}

#[test]
fn lowest_index_wins() {
    // Both orderings are valid here; the scan must still pick P0 first.
    let state = ResourceState::new(
        2,
        2,
        vec![vec![1, 0], vec![0, 1]],
        vec![vec![1, 0], vec![0, 1]],
        vec![0, 0],
        NeedPolicy::Strict,
    )
    .expect("shape is valid");

    let report = evaluate_safety(&state);
    assert!(report.is_safe);
    assert_eq!(report.safe_sequence, vec![0, 1]);
}

#[test]
fn all_zero_system_is_safe_in_index_order() {
    let state = ResourceState::new(
        4,
        2,
        vec![vec![0, 0]; 4],
        vec![vec![0, 0]; 4],
        vec![0, 0],
        NeedPolicy::Strict,
    )
    .expect("shape is valid");

    let report = evaluate_safety(&state);
    assert!(report.is_safe);
    assert_eq!(report.safe_sequence, vec![0, 1, 2, 3]);
}

#[test]
fn single_cell_boundary() {
    let state = ResourceState::new(
        1,
        1,
        vec![vec![0]],
        vec![vec![0]],
        vec![0],
        NeedPolicy::Strict,
    )
    .expect("shape is valid");

    let report = evaluate_safety(&state);
    assert!(report.is_safe);
    assert_eq!(report.safe_sequence, vec![0]);
}

#[test]
fn evaluation_is_idempotent() {
    let state = textbook_state();
    let first = evaluate_safety(&state);
    let second = evaluate_safety(&state);
    assert_eq!(first, second);
}

#[test]
fn strict_rejects_max_below_allocation() {
    let err = ResourceState::new(
        2,
        2,
        vec![vec![1, 2], vec![0, 0]],
        vec![vec![1, 1], vec![0, 0]],
        vec![1, 1],
        NeedPolicy::Strict,
    )
    .unwrap_err();

    assert_eq!(
        err,
        InvalidStateError::MaxBelowAllocation {
            process: 0,
            resource: 1,
            max_demand: 1,
            allocation: 2,
        }
    );
}

#[test]
fn permissive_negative_need_admits() {
    // max < allocation: need is -1, which fits any work vector.
    let state = ResourceState::new(
        1,
        1,
        vec![vec![2]],
        vec![vec![1]],
        vec![0],
        NeedPolicy::Permissive,
    )
    .expect("permissive accepts the inconsistency");

    assert_eq!(state.need(), vec![vec![-1]]);

    let report = evaluate_safety(&state);
    assert!(report.is_safe);
    assert_eq!(report.safe_sequence, vec![0]);
}

#[test]
fn rejects_zero_counts() {
    let err = ResourceState::new(0, 1, vec![], vec![], vec![0], NeedPolicy::Strict).unwrap_err();
    assert_eq!(err, InvalidStateError::ZeroProcesses);

    let err = ResourceState::new(1, 0, vec![vec![]], vec![vec![]], vec![], NeedPolicy::Strict)
        .unwrap_err();
    assert_eq!(err, InvalidStateError::ZeroResourceTypes);
}

#[test]
fn rejects_row_count_mismatch() {
    let err = ResourceState::new(
        2,
        1,
        vec![vec![0]],
        vec![vec![0], vec![0]],
        vec![0],
        NeedPolicy::Strict,
    )
    .unwrap_err();

    assert_eq!(
        err,
        InvalidStateError::RowCount {
            matrix: "allocation",
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn rejects_row_length_mismatch() {
    let err = ResourceState::new(
        2,
        2,
        vec![vec![0, 0], vec![0, 0]],
        vec![vec![0, 0], vec![0]],
        vec![0, 0],
        NeedPolicy::Strict,
    )
    .unwrap_err();

    assert_eq!(
        err,
        InvalidStateError::RowLength {
            matrix: "max demand",
            row: 1,
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn rejects_available_length_mismatch() {
    let err = ResourceState::new(
        1,
        2,
        vec![vec![0, 0]],
        vec![vec![0, 0]],
        vec![0],
        NeedPolicy::Strict,
    )
    .unwrap_err();

    assert_eq!(
        err,
        InvalidStateError::AvailableLength {
            expected: 2,
            found: 1,
        }
    );
}

#[test]
fn describe_helpers_render() {
    let state = textbook_state();
    let rendered = describe_state(&state);
    assert!(rendered.contains("Allocation:"));
    assert!(rendered.contains("Need:"));
    assert!(rendered.contains("Available: [3, 3, 2]"));

    let report = evaluate_safety(&state);
    let rendered = describe_report(&report);
    assert!(rendered.contains("safe sequence: P1 -> P3 -> P0 -> P2 -> P4"));
    assert!(rendered.contains("step 0: initialization"));
}
