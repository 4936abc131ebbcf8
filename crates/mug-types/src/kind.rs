use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five editable mug dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Outer diameter of the cup body.
    Diameter,
    /// Height of the cup body.
    Height,
    /// Wall thickness of the cup body.
    Thickness,
    /// Length of the handle cross-section.
    HandleLength,
    /// Outer diameter of the handle loop.
    HandleDiameter,
}

impl ParameterKind {
    /// All kinds in form order.
    pub const ALL: [ParameterKind; 5] = [
        ParameterKind::Diameter,
        ParameterKind::Height,
        ParameterKind::Thickness,
        ParameterKind::HandleLength,
        ParameterKind::HandleDiameter,
    ];

    /// Human-readable label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            ParameterKind::Diameter => "diameter",
            ParameterKind::Height => "height",
            ParameterKind::Thickness => "wall thickness",
            ParameterKind::HandleLength => "handle length",
            ParameterKind::HandleDiameter => "handle diameter",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
