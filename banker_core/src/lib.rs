pub mod cfg;
pub mod error;
pub mod state;

pub mod trace;
pub mod safety;
pub mod display;

pub use cfg::{EvaluatorCfg, NeedPolicy};
pub use error::InvalidStateError;
pub use state::ResourceState;

pub use trace::TraceStep;
pub use safety::{evaluate_safety, SafetyReport};
pub use display::{describe_report, describe_state};
