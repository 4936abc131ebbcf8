use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mug_types::{MugParameters, ParameterKind, Preset};
use param_store::{ErrorCode, ValidationError};

/// Messages from the parameter form to the store.
/// Serialized as JSON, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToStore {
    /// The text of one field changed.
    SetField { kind: ParameterKind, text: String },
    /// One of the preset buttons was pressed.
    ApplyPreset { preset: Preset },
    /// The build button was pressed.
    RequestBuild,
    /// Ask for the full current state (values and per-field errors).
    QueryState,
}

/// Messages from the store back to the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StoreToUi {
    /// A field value was accepted.
    FieldAccepted {
        kind: ParameterKind,
        values: MugParameters,
    },

    /// A field value was rejected; the stored value is unchanged.
    FieldRejected { error: FieldError },

    PresetApplied {
        preset: Preset,
        values: MugParameters,
    },

    PresetRejected {
        preset: Preset,
        errors: Vec<FieldError>,
    },

    /// The validated set was handed to the builder.
    BuildSubmitted {
        build_id: Uuid,
        values: MugParameters,
    },

    /// The build was refused because some field is in error.
    BuildRejected {
        message: String,
        errors: Vec<FieldError>,
    },

    /// The builder ran and reported a failure.
    BuildFailed { build_id: Uuid, message: String },

    State {
        values: MugParameters,
        errors: Vec<FieldError>,
        valid: bool,
    },

    /// The incoming message could not be decoded.
    Error { message: String },
}

/// A validation error attributed to one field, ready for inline display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: ParameterKind,
    pub code: ErrorCode,
    pub message: String,
    /// Other fields involved in a violated constraint.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<ParameterKind>,
}

impl From<&ValidationError> for FieldError {
    fn from(err: &ValidationError) -> Self {
        Self {
            kind: err.kind(),
            code: err.code(),
            message: err.to_string(),
            related: err.offending_kinds().into_iter().skip(1).collect(),
        }
    }
}
