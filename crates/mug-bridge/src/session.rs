use mug_types::{MugParameters, ParameterKind, Preset};
use param_store::{ConstraintConfig, ParameterStore, StoreError, ValidationError};
use tracing::{info, warn};
use uuid::Uuid;

use crate::builder::{BuildError, MugBuilder};

/// Shown when a build is requested while any field is in error.
pub const FILL_ALL_PARAMETERS: &str = "Fill all required parameters correctly";

/// One editing session: the parameter store plus the build collaborator.
pub struct EditSession<B: MugBuilder> {
    /// The authoritative parameter set and its error annotations.
    pub store: ParameterStore,
    /// The CAD host the validated set is handed to.
    pub builder: B,
    /// Id of the last build that reached the builder.
    pub last_build: Option<Uuid>,
}

impl<B: MugBuilder> EditSession<B> {
    /// Session with default thresholds, seeded with the average preset.
    pub fn new(builder: B) -> Self {
        Self {
            store: ParameterStore::new(),
            builder,
            last_build: None,
        }
    }

    pub fn with_config(config: ConstraintConfig, builder: B) -> Result<Self, BridgeError> {
        Ok(Self {
            store: ParameterStore::with_config(config)?,
            builder,
            last_build: None,
        })
    }

    /// Route raw field text to the store.
    pub fn set_field(&mut self, kind: ParameterKind, text: &str) -> Result<(), BridgeError> {
        self.store.set_parameter_text(kind, text)?;
        Ok(())
    }

    pub fn apply_preset(&mut self, preset: Preset) -> Result<MugParameters, BridgeError> {
        self.store
            .apply_named_preset(preset)
            .map_err(|errors| BridgeError::PresetRejected { preset, errors })?;
        Ok(self.store.current_values())
    }

    /// Hand the current set to the builder if every field is valid.
    ///
    /// Any field in error rejects the whole request; the builder is not called.
    pub fn request_build(&mut self) -> Result<(Uuid, MugParameters), BridgeError> {
        let values = self.store.validated_values().map_err(|errors| {
            warn!(invalid_fields = errors.len(), "build refused");
            BridgeError::Incomplete {
                errors: errors.into_iter().map(|(_, e)| e).collect(),
            }
        })?;

        let build_id = Uuid::new_v4();
        info!(%build_id, "submitting build");
        self.last_build = Some(build_id);
        self.builder
            .build(build_id, &values)
            .map_err(|source| BridgeError::Build { build_id, source })?;
        Ok((build_id, values))
    }
}

/// Errors from the bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("preset {preset:?} rejected with {} error(s)", .errors.len())]
    PresetRejected {
        preset: Preset,
        errors: Vec<ValidationError>,
    },

    #[error("{}", FILL_ALL_PARAMETERS)]
    Incomplete { errors: Vec<ValidationError> },

    #[error("build {build_id} failed: {source}")]
    Build { build_id: Uuid, source: BuildError },

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
