//! Inter-parameter rules for the mug body and handle.

use std::fmt;

use mug_types::{MugParameters, ParameterKind};
use serde::{Deserialize, Serialize};

use crate::config::ConstraintConfig;

/// A geometric rule spanning two parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constraint {
    /// The wall must leave room inside the diameter.
    WallThickness,
    /// Handle length within a band relative to height.
    HandleLengthToHeight,
    /// The handle loop must fit along the body.
    HandleDiameterToHeight,
    /// The handle loop must not dwarf the cup.
    HandleDiameterToDiameter,
}

impl Constraint {
    pub const ALL: [Constraint; 4] = [
        Constraint::WallThickness,
        Constraint::HandleLengthToHeight,
        Constraint::HandleDiameterToHeight,
        Constraint::HandleDiameterToDiameter,
    ];

    /// The two kinds this rule relates.
    pub fn kinds(self) -> [ParameterKind; 2] {
        match self {
            Constraint::WallThickness => [ParameterKind::Thickness, ParameterKind::Diameter],
            Constraint::HandleLengthToHeight => [ParameterKind::HandleLength, ParameterKind::Height],
            Constraint::HandleDiameterToHeight => {
                [ParameterKind::HandleDiameter, ParameterKind::Height]
            }
            Constraint::HandleDiameterToDiameter => {
                [ParameterKind::HandleDiameter, ParameterKind::Diameter]
            }
        }
    }

    pub fn involves(self, kind: ParameterKind) -> bool {
        self.kinds().contains(&kind)
    }

    /// Rules that must be re-checked when `kind` changes.
    pub fn involving(kind: ParameterKind) -> impl Iterator<Item = Constraint> {
        Self::ALL.into_iter().filter(move |c| c.involves(kind))
    }

    /// Check the rule on `params`.
    ///
    /// On violation returns the bound that `kind` crossed, expressed as a
    /// value of `kind` in millimeters. `kind` must be one of [`Self::kinds`].
    pub fn violation(
        self,
        params: &MugParameters,
        config: &ConstraintConfig,
        kind: ParameterKind,
    ) -> Option<f64> {
        match self {
            Constraint::WallThickness => {
                let ratio = config.wall_thickness_ratio;
                if params.thickness < params.diameter * ratio {
                    return None;
                }
                Some(match kind {
                    ParameterKind::Diameter => params.thickness / ratio,
                    _ => params.diameter * ratio,
                })
            }
            Constraint::HandleLengthToHeight => {
                let min = params.height * config.handle_length_min_ratio;
                let max = params.height * config.handle_length_max_ratio;
                if params.handle_length < min {
                    Some(match kind {
                        ParameterKind::Height => params.handle_length / config.handle_length_min_ratio,
                        _ => min,
                    })
                } else if params.handle_length > max {
                    Some(match kind {
                        ParameterKind::Height => params.handle_length / config.handle_length_max_ratio,
                        _ => max,
                    })
                } else {
                    None
                }
            }
            Constraint::HandleDiameterToHeight => {
                let ratio = config.handle_diameter_to_height_max;
                if params.handle_diameter <= params.height * ratio {
                    return None;
                }
                Some(match kind {
                    ParameterKind::Height => params.handle_diameter / ratio,
                    _ => params.height * ratio,
                })
            }
            Constraint::HandleDiameterToDiameter => {
                let ratio = config.handle_diameter_to_diameter_max;
                if params.handle_diameter <= params.diameter * ratio {
                    return None;
                }
                Some(match kind {
                    ParameterKind::Diameter => params.handle_diameter / ratio,
                    _ => params.diameter * ratio,
                })
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Constraint::WallThickness => "the wall thickness / diameter rule",
            Constraint::HandleLengthToHeight => "the handle length / height proportion",
            Constraint::HandleDiameterToHeight => "the handle diameter / height proportion",
            Constraint::HandleDiameterToDiameter => "the handle diameter / mug diameter proportion",
        };
        f.write_str(text)
    }
}
