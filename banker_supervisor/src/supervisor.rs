use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use banker_core::{evaluate_safety, EvaluatorCfg, InvalidStateError, ResourceState, TraceStep};

use crate::adapter::{decode_fields, DecodeError, FieldKeys, FieldSource, SimulationRequest};

/// Serializable result of one simulation run: the response body an API layer
/// returns verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub is_safe: bool,
    pub safe_sequence: Vec<usize>,
    pub need: Vec<Vec<i64>>,
    pub trace: Vec<TraceStep>,
}

/// Why a run was rejected before the evaluator produced a verdict.
///
/// Both variants are the caller's "bad request" class. An unsafe state is
/// not an error; it arrives as a normal [`SimulationOutcome`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
}

/// Stateless per-request runner around `banker_core`.
///
/// Holds only configuration. Every call builds its own `ResourceState` and
/// working vectors, so concurrent callers share nothing mutable and may keep
/// one supervisor for the lifetime of a service.
#[derive(Clone, Debug, Default)]
pub struct SimulationSupervisor {
    cfg: EvaluatorCfg,
    keys: FieldKeys,
}

impl SimulationSupervisor {
    pub fn new(cfg: EvaluatorCfg) -> Self {
        Self {
            cfg,
            keys: FieldKeys::default(),
        }
    }

    /// Override the key scheme used by [`run_fields`](Self::run_fields).
    pub fn with_field_keys(mut self, keys: FieldKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Run one simulation from a structured request.
    pub fn run(&self, req: &SimulationRequest) -> Result<SimulationOutcome, SimulationError> {
        let state = ResourceState::new(
            req.process_count,
            req.resource_type_count,
            req.allocation.clone(),
            req.max_demand.clone(),
            req.available.clone(),
            self.cfg.need_policy,
        )?;

        debug!(
            processes = state.process_count(),
            resource_types = state.resource_type_count(),
            "running safety evaluation"
        );

        let need = state.need();
        let report = evaluate_safety(&state);

        info!(
            is_safe = report.is_safe,
            admitted = report.safe_sequence.len(),
            "safety evaluation finished"
        );

        Ok(SimulationOutcome {
            is_safe: report.is_safe,
            safe_sequence: report.safe_sequence,
            need,
            trace: report.trace,
        })
    }

    /// Decode keyed text fields, then run.
    pub fn run_fields<S: FieldSource>(
        &self,
        fields: &S,
    ) -> Result<SimulationOutcome, SimulationError> {
        let req = decode_fields(fields, &self.keys)?;
        self.run(&req)
    }
}
