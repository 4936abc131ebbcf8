use mug_types::MugParameters;
use uuid::Uuid;

/// The host CAD application that turns a validated parameter set into geometry.
///
/// Only ever called with a set that passed every check.
pub trait MugBuilder {
    fn build(&mut self, build_id: Uuid, params: &MugParameters) -> Result<(), BuildError>;
}

/// Errors reported by a build collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    #[error("CAD host is not available: {reason}")]
    HostUnavailable { reason: String },

    #[error("geometry construction failed: {reason}")]
    ConstructionFailed { reason: String },
}
