//! Errors raised by the order composition engine.
//!
//! Per-field input problems are coerced (bad quantity text becomes 0, an
//! unknown product prices at zero). Only conditions that must block submission
//! are reported here.

use thiserror::Error;

use backoffice_core::ValidationErrors;

/// A problem with one line that blocks submission.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    #[error("line {}: quantity must be at least 1", .index + 1)]
    ZeroQuantity { index: usize },

    #[error("line {}: select a product", .index + 1)]
    MissingProduct { index: usize },
}

impl LineError {
    /// Zero-based position of the offending line.
    pub fn index(&self) -> usize {
        match self {
            LineError::ZeroQuantity { index } | LineError::MissingProduct { index } => *index,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// A line index outside `0..len` was passed to a mutating call.
    #[error("line {index} is out of range (order has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },

    /// Submission was attempted with no lines.
    #[error("an order needs at least one item")]
    EmptyOrder,

    #[error("{}", join(.0))]
    InvalidLines(Vec<LineError>),

    #[error("invalid order details: {0}")]
    InvalidForm(ValidationErrors),
}

fn join(errors: &[LineError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ComposeError {
    /// Line errors attributed to `index`, for showing next to that line.
    pub fn errors_for_line(&self, index: usize) -> Vec<LineError> {
        match self {
            ComposeError::InvalidLines(errors) => errors
                .iter()
                .copied()
                .filter(|e| e.index() == index)
                .collect(),
            _ => Vec::new(),
        }
    }
}
