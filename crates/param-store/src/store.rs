use std::collections::BTreeMap;

use mug_types::{MugParameters, ParameterKind, Preset};
use tracing::{debug, info, instrument, warn};

use crate::config::ConstraintConfig;
use crate::constraint::Constraint;
use crate::types::{StoreError, ValidationError};

/// Owner of the authoritative mug parameter set.
///
/// Every write is checked against the standalone bound for its kind and then
/// against every rule that relates it to the other, currently stored, kinds.
/// Rejected writes never touch the stored value; they only set the kind's
/// error annotation. Accepted writes clear it.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    config: ConstraintConfig,
    values: MugParameters,
    errors: BTreeMap<ParameterKind, ValidationError>,
}

impl ParameterStore {
    /// Store with the default thresholds, seeded with the average preset.
    pub fn new() -> Self {
        Self {
            config: ConstraintConfig::default(),
            values: Preset::default().values(),
            errors: BTreeMap::new(),
        }
    }

    /// Store with custom thresholds, seeded with the average preset.
    ///
    /// Fails if the config is malformed or rejects the average preset.
    pub fn with_config(config: ConstraintConfig) -> Result<Self, StoreError> {
        config.validate()?;
        let initial = Preset::default().values();
        let store = Self {
            config,
            values: initial,
            errors: BTreeMap::new(),
        };
        let rejected = store.check_batch(&initial);
        if !rejected.is_empty() {
            return Err(StoreError::InitialPresetRejected { errors: rejected });
        }
        Ok(store)
    }

    pub fn config(&self) -> &ConstraintConfig {
        &self.config
    }

    /// Validate and store one value.
    #[instrument(skip(self))]
    pub fn set_parameter_value(
        &mut self,
        kind: ParameterKind,
        value: f64,
    ) -> Result<(), ValidationError> {
        let result = self.check_value(kind, value, &self.values);
        self.record(kind, value, result)
    }

    /// Parse raw field text and store it.
    ///
    /// Accepts `.` or `,` as the decimal separator. Empty or garbage input is
    /// rejected as [`ValidationError::Unparsable`]; it is never coerced.
    #[instrument(skip(self))]
    pub fn set_parameter_text(&mut self, kind: ParameterKind, raw: &str) -> Result<(), ValidationError> {
        match parse_millimeters(kind, raw) {
            Ok(value) => self.set_parameter_value(kind, value),
            Err(err) => {
                warn!(%err, "unparsable input");
                self.errors.insert(kind, err.clone());
                Err(err)
            }
        }
    }

    /// True iff no kind currently carries an error. Does not re-validate.
    pub fn is_fully_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Last-accepted values, regardless of error annotations.
    pub fn current_values(&self) -> MugParameters {
        self.values
    }

    /// The snapshot to build from, or the errors blocking it.
    pub fn validated_values(&self) -> Result<MugParameters, Vec<(ParameterKind, ValidationError)>> {
        if self.is_fully_valid() {
            Ok(self.values)
        } else {
            Err(self.errors().map(|(k, e)| (k, e.clone())).collect())
        }
    }

    /// Apply five values as one batch.
    ///
    /// Each value is checked against the other values of the batch, not the
    /// stored ones, so moving between presets never trips over a half-applied
    /// state. Commits all five or nothing.
    #[instrument(skip(self))]
    pub fn apply_preset(&mut self, values: &MugParameters) -> Result<(), Vec<ValidationError>> {
        let rejected = self.check_batch(values);
        if !rejected.is_empty() {
            warn!(rejected = rejected.len(), "preset rejected");
            for err in &rejected {
                self.errors.insert(err.kind(), err.clone());
            }
            return Err(rejected);
        }
        self.values = *values;
        self.errors.clear();
        info!("preset applied");
        Ok(())
    }

    pub fn apply_named_preset(&mut self, preset: Preset) -> Result<(), Vec<ValidationError>> {
        self.apply_preset(&preset.values())
    }

    pub fn error(&self, kind: ParameterKind) -> Option<&ValidationError> {
        self.errors.get(&kind)
    }

    /// The error text for one kind; empty when the kind is valid.
    pub fn error_message(&self, kind: ParameterKind) -> String {
        self.error(kind).map(ToString::to_string).unwrap_or_default()
    }

    /// Current annotations in form order.
    pub fn errors(&self) -> impl Iterator<Item = (ParameterKind, &ValidationError)> {
        self.errors.iter().map(|(k, e)| (*k, e))
    }

    fn record(
        &mut self,
        kind: ParameterKind,
        value: f64,
        result: Result<(), ValidationError>,
    ) -> Result<(), ValidationError> {
        match result {
            Ok(()) => {
                self.values.set(kind, value);
                self.errors.remove(&kind);
                debug!(value, "value accepted");
                Ok(())
            }
            Err(err) => {
                warn!(%err, "value rejected");
                self.errors.insert(kind, err.clone());
                Err(err)
            }
        }
    }

    fn check_batch(&self, values: &MugParameters) -> Vec<ValidationError> {
        values
            .iter()
            .filter_map(|(kind, value)| self.check_value(kind, value, values).err())
            .collect()
    }

    /// Standalone range check, then every rule involving `kind` evaluated on
    /// `others` with `kind` replaced by `value`.
    fn check_value(
        &self,
        kind: ParameterKind,
        value: f64,
        others: &MugParameters,
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::Unparsable {
                kind,
                raw: value.to_string(),
            });
        }
        if value <= 0.0 || value > self.config.max_dimension {
            return Err(ValidationError::OutOfRange {
                kind,
                value,
                min: 0.0,
                max: self.config.max_dimension,
            });
        }

        let candidate = others.with(kind, value);
        for constraint in Constraint::involving(kind) {
            if let Some(limit) = constraint.violation(&candidate, &self.config, kind) {
                return Err(ValidationError::ConstraintViolated {
                    kind,
                    value,
                    constraint,
                    limit,
                });
            }
        }
        Ok(())
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse user text as a finite millimeter value.
pub fn parse_millimeters(kind: ParameterKind, raw: &str) -> Result<f64, ValidationError> {
    let unparsable = || ValidationError::Unparsable {
        kind,
        raw: raw.to_string(),
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(unparsable());
    }
    let normalized = if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        trimmed.replacen(',', ".", 1)
    };
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(unparsable()),
    }
}
