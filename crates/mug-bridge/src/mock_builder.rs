//! RecordingBuilder — deterministic test double implementing MugBuilder.
//!
//! Remembers every submitted parameter set and can be told to fail the next
//! builds, so dispatch paths can be exercised without a CAD host.

use mug_types::MugParameters;
use uuid::Uuid;

use crate::builder::{BuildError, MugBuilder};

#[derive(Debug, Default)]
pub struct RecordingBuilder {
    /// Every build that reached the builder, in order, including failed ones.
    pub submitted: Vec<(Uuid, MugParameters)>,
    failure: Option<BuildError>,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every following build with `error` until [`Self::succeed`].
    pub fn fail_with(&mut self, error: BuildError) {
        self.failure = Some(error);
    }

    pub fn succeed(&mut self) {
        self.failure = None;
    }

    pub fn last(&self) -> Option<&MugParameters> {
        self.submitted.last().map(|(_, params)| params)
    }
}

impl MugBuilder for RecordingBuilder {
    fn build(&mut self, build_id: Uuid, params: &MugParameters) -> Result<(), BuildError> {
        self.submitted.push((build_id, *params));
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
