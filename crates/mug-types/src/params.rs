use serde::{Deserialize, Serialize};

use crate::kind::ParameterKind;

/// The complete set of mug dimensions, in millimeters.
///
/// Every kind always has a value; there is no partially filled state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MugParameters {
    pub diameter: f64,
    pub height: f64,
    pub thickness: f64,
    pub handle_length: f64,
    pub handle_diameter: f64,
}

impl MugParameters {
    pub fn new(
        diameter: f64,
        height: f64,
        thickness: f64,
        handle_length: f64,
        handle_diameter: f64,
    ) -> Self {
        Self {
            diameter,
            height,
            thickness,
            handle_length,
            handle_diameter,
        }
    }

    /// Read the value for one kind.
    pub fn get(&self, kind: ParameterKind) -> f64 {
        match kind {
            ParameterKind::Diameter => self.diameter,
            ParameterKind::Height => self.height,
            ParameterKind::Thickness => self.thickness,
            ParameterKind::HandleLength => self.handle_length,
            ParameterKind::HandleDiameter => self.handle_diameter,
        }
    }

    /// Overwrite the value for one kind. No validation happens here.
    pub fn set(&mut self, kind: ParameterKind, value: f64) {
        let slot = match kind {
            ParameterKind::Diameter => &mut self.diameter,
            ParameterKind::Height => &mut self.height,
            ParameterKind::Thickness => &mut self.thickness,
            ParameterKind::HandleLength => &mut self.handle_length,
            ParameterKind::HandleDiameter => &mut self.handle_diameter,
        };
        *slot = value;
    }

    /// Copy of this set with one kind replaced.
    pub fn with(mut self, kind: ParameterKind, value: f64) -> Self {
        self.set(kind, value);
        self
    }

    /// Iterate `(kind, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKind, f64)> + '_ {
        ParameterKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }
}
