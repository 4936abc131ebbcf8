//! Thresholds for the mug parameter checks.

use serde::{Deserialize, Serialize};

use crate::types::StoreError;

/// Absolute bounds and inter-parameter ratios enforced by the store.
///
/// Defaults are loose enough that every built-in preset passes with margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintConfig {
    /// Upper bound for any single dimension (mm). The lower bound is always
    /// exclusive zero.
    pub max_dimension: f64,
    /// Wall thickness must stay strictly below `diameter * wall_thickness_ratio`.
    pub wall_thickness_ratio: f64,
    /// Minimum handle length as a fraction of height.
    pub handle_length_min_ratio: f64,
    /// Maximum handle length as a fraction of height.
    pub handle_length_max_ratio: f64,
    /// Maximum handle diameter as a fraction of height.
    pub handle_diameter_to_height_max: f64,
    /// Maximum handle diameter as a fraction of mug diameter.
    pub handle_diameter_to_diameter_max: f64,
}

impl Default for ConstraintConfig {
    fn default() -> Self {
        Self {
            max_dimension: 1000.0,
            wall_thickness_ratio: 0.5,
            handle_length_min_ratio: 0.2,
            handle_length_max_ratio: 0.5,
            handle_diameter_to_height_max: 1.0,
            handle_diameter_to_diameter_max: 1.0,
        }
    }
}

impl ConstraintConfig {
    /// Tight envelope around the preset proportions.
    pub fn strict() -> Self {
        Self {
            max_dimension: 300.0,
            handle_length_min_ratio: 0.3,
            handle_length_max_ratio: 0.4,
            handle_diameter_to_height_max: 0.8,
            handle_diameter_to_diameter_max: 0.9,
            ..Self::default()
        }
    }

    /// Only the absolute bound and the wall/diameter rule are meaningful.
    pub fn permissive() -> Self {
        Self {
            max_dimension: 10_000.0,
            handle_length_min_ratio: 0.0,
            handle_length_max_ratio: f64::MAX,
            handle_diameter_to_height_max: f64::MAX,
            handle_diameter_to_diameter_max: f64::MAX,
            ..Self::default()
        }
    }

    /// Parse a JSON document; missing keys fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let config: Self = serde_json::from_str(json).map_err(|e| StoreError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject thresholds that would make every input invalid or are not numbers.
    pub fn validate(&self) -> Result<(), StoreError> {
        let positive = [
            ("max_dimension", self.max_dimension),
            ("wall_thickness_ratio", self.wall_thickness_ratio),
            ("handle_length_max_ratio", self.handle_length_max_ratio),
            ("handle_diameter_to_height_max", self.handle_diameter_to_height_max),
            ("handle_diameter_to_diameter_max", self.handle_diameter_to_diameter_max),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(StoreError::InvalidConfig {
                    reason: format!("{name} must be positive, got {value}"),
                });
            }
        }
        if self.max_dimension.is_infinite() {
            return Err(StoreError::InvalidConfig {
                reason: "max_dimension must be finite".into(),
            });
        }
        if self.wall_thickness_ratio > 0.5 {
            return Err(StoreError::InvalidConfig {
                reason: format!(
                    "wall_thickness_ratio {} would let the wall close the interior",
                    self.wall_thickness_ratio
                ),
            });
        }
        if self.handle_length_min_ratio.is_nan() || self.handle_length_min_ratio < 0.0 {
            return Err(StoreError::InvalidConfig {
                reason: format!(
                    "handle_length_min_ratio must be non-negative, got {}",
                    self.handle_length_min_ratio
                ),
            });
        }
        if self.handle_length_min_ratio > self.handle_length_max_ratio {
            return Err(StoreError::InvalidConfig {
                reason: format!(
                    "handle length ratio range is empty: {} > {}",
                    self.handle_length_min_ratio, self.handle_length_max_ratio
                ),
            });
        }
        Ok(())
    }
}
