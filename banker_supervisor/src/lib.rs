//! banker_supervisor
//!
//! Outside-world facing boundary layer for `banker_core`.
//!
//! Responsibilities:
//! - decode raw caller input (keyed text fields or a structured request)
//! - build a fresh `ResourceState` for every run
//! - invoke the core safety evaluation
//! - shape the serializable outcome an API layer returns verbatim
//!
//! Non-goals:
//! - no IO
//! - no async
//! - no algorithm logic (lives in core)

pub mod adapter;
pub mod supervisor;

pub use adapter::{
    SimulationRequest,
    DecodeError,
    FieldKeys,
    FieldSource,
    decode_fields,
};

pub use supervisor::{
    SimulationSupervisor,
    SimulationOutcome,
    SimulationError,
};
