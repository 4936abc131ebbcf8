//! Error types for parameter validation.

use std::fmt;

use mug_types::ParameterKind;
use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;

/// Classification of a rejected write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input was not a finite number.
    Unparsable,
    /// Value breaks the standalone bound for its kind.
    OutOfRange,
    /// Value is fine alone but breaks an inter-parameter rule.
    ConstraintViolated,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A rejected write, attached to the field that caused it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{kind}: '{raw}' is not a valid number")]
    Unparsable { kind: ParameterKind, raw: String },

    #[error("{kind} must be greater than {min} mm and at most {max} mm, got {value} mm")]
    OutOfRange {
        kind: ParameterKind,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{kind} = {value} mm violates {constraint} (limit {limit} mm)")]
    ConstraintViolated {
        kind: ParameterKind,
        value: f64,
        constraint: Constraint,
        limit: f64,
    },
}

impl ValidationError {
    /// The field this error is attached to.
    pub fn kind(&self) -> ParameterKind {
        match self {
            ValidationError::Unparsable { kind, .. }
            | ValidationError::OutOfRange { kind, .. }
            | ValidationError::ConstraintViolated { kind, .. } => *kind,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::Unparsable { .. } => ErrorCode::Unparsable,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::ConstraintViolated { .. } => ErrorCode::ConstraintViolated,
        }
    }

    /// The attached field first, then any other field of a violated constraint.
    pub fn offending_kinds(&self) -> Vec<ParameterKind> {
        let kind = self.kind();
        let mut kinds = vec![kind];
        if let ValidationError::ConstraintViolated { constraint, .. } = self {
            kinds.extend(constraint.kinds().into_iter().filter(|k| *k != kind));
        }
        kinds
    }
}

/// Errors from constructing or configuring a store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("invalid constraint config: {reason}")]
    InvalidConfig { reason: String },

    #[error("initial preset rejected: {}", join_errors(.errors))]
    InitialPresetRejected { errors: Vec<ValidationError> },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
