use serde::{Deserialize, Serialize};

use crate::params::MugParameters;

/// Named one-shot initializers offered next to the parameter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Preset {
    Minimum,
    /// Loaded when a session starts.
    #[default]
    Average,
    Maximum,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Minimum, Preset::Average, Preset::Maximum];

    /// Literal dimensions for this preset, in millimeters.
    ///
    /// Handle length is 0.35 and handle diameter 0.7 of the height in each.
    pub fn values(self) -> MugParameters {
        match self {
            Preset::Minimum => MugParameters::new(70.0, 85.0, 5.0, 29.75, 59.5),
            Preset::Average => MugParameters::new(87.0, 95.0, 7.0, 33.25, 66.5),
            Preset::Maximum => MugParameters::new(105.0, 130.0, 10.0, 45.5, 91.0),
        }
    }
}

impl From<Preset> for MugParameters {
    fn from(preset: Preset) -> Self {
        preset.values()
    }
}
