//! Validation and constraint model for mug dimensions.
//!
//! [`ParameterStore`] owns the current [`MugParameters`](mug_types::MugParameters),
//! checks every write against a standalone range and the inter-parameter
//! [`Constraint`]s, and keeps a per-kind error annotation so callers can ask
//! whether the whole set is buildable without re-running validation.

pub mod config;
pub mod constraint;
pub mod store;
pub mod types;

pub use config::ConstraintConfig;
pub use constraint::Constraint;
pub use store::{parse_millimeters, ParameterStore};
pub use types::*;
