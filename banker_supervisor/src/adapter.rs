//! Boundary adapter: convert raw caller input into core snapshot shapes.
//!
//! This module is intentionally policy-light:
//! - No IO
//! - No async
//! - Matrix and vector cells absent from a field set default to zero; the
//!   two counts never do.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// A fully structured simulation request, as an API layer would post it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub process_count: usize,
    pub resource_type_count: usize,
    pub allocation: Vec<Vec<u32>>,
    pub max_demand: Vec<Vec<u32>>,
    pub available: Vec<u32>,
}

/// Rejection of raw text input before any core type is built.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("field `{field}` is not a non-negative integer: `{value}`")]
    InvalidNumber { field: String, value: String },

    #[error("field `{0}` must be positive")]
    ZeroCount(String),
}

/// Key scheme for keyed text fields.
///
/// Matrix cells are looked up as `{prefix}_{process}_{resource}` and
/// available-vector cells as `{prefix}_{resource}`.
#[derive(Clone, Debug)]
pub struct FieldKeys {
    pub process_count: &'static str,
    pub resource_type_count: &'static str,
    pub allocation: &'static str,
    pub max_demand: &'static str,
    pub available: &'static str,
}

impl Default for FieldKeys {
    fn default() -> Self {
        Self {
            process_count: "process_count",
            resource_type_count: "resource_type_count",
            allocation: "allocation",
            max_demand: "max",
            available: "available",
        }
    }
}

/// Anything that can answer "what text was submitted under this key".
///
/// Form layers typically hand over a string map; other frontends can
/// implement this directly over their own request type.
pub trait FieldSource {
    fn field(&self, key: &str) -> Option<&str>;
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Decode a keyed field set into a structured request.
///
/// The two counts are required and must parse as positive integers. Matrix
/// and vector cells default to zero when absent or blank, matching how a
/// sparse form submission arrives; any other non-numeric text is rejected.
pub fn decode_fields<S: FieldSource>(
    fields: &S,
    keys: &FieldKeys,
) -> Result<SimulationRequest, DecodeError> {
    let process_count = required_count(fields, keys.process_count)?;
    let resource_type_count = required_count(fields, keys.resource_type_count)?;

    let allocation = decode_matrix(fields, keys.allocation, process_count, resource_type_count)?;
    let max_demand = decode_matrix(fields, keys.max_demand, process_count, resource_type_count)?;

    let mut available = Vec::with_capacity(resource_type_count);
    for j in 0..resource_type_count {
        available.push(cell(fields, &format!("{}_{}", keys.available, j))?);
    }

    Ok(SimulationRequest {
        process_count,
        resource_type_count,
        allocation,
        max_demand,
        available,
    })
}

fn required_count<S: FieldSource>(fields: &S, key: &str) -> Result<usize, DecodeError> {
    let raw = fields
        .field(key)
        .ok_or_else(|| DecodeError::MissingField(key.to_string()))?;
    let value: usize = raw.trim().parse().map_err(|_| DecodeError::InvalidNumber {
        field: key.to_string(),
        value: raw.to_string(),
    })?;
    if value == 0 {
        return Err(DecodeError::ZeroCount(key.to_string()));
    }
    Ok(value)
}

fn decode_matrix<S: FieldSource>(
    fields: &S,
    prefix: &str,
    rows: usize,
    cols: usize,
) -> Result<Vec<Vec<u32>>, DecodeError> {
    let mut matrix = Vec::with_capacity(rows);
    for i in 0..rows {
        let mut row = Vec::with_capacity(cols);
        for j in 0..cols {
            row.push(cell(fields, &format!("{prefix}_{i}_{j}"))?);
        }
        matrix.push(row);
    }
    Ok(matrix)
}

fn cell<S: FieldSource>(fields: &S, key: &str) -> Result<u32, DecodeError> {
    match fields.field(key) {
        None => Ok(0),
        Some(raw) if raw.trim().is_empty() => Ok(0),
        Some(raw) => raw.trim().parse().map_err(|_| DecodeError::InvalidNumber {
            field: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
