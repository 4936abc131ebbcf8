//! Glue between a parameter form and the mug build collaborator.
//!
//! The UI sends [`UiToStore`] messages (one per edited field, preset button or
//! build request); [`dispatch`] routes them to the session's
//! [`ParameterStore`](param_store::ParameterStore) and answers with a
//! [`StoreToUi`] message. Builds only reach the [`MugBuilder`] when every field
//! is valid.

pub mod builder;
pub mod dispatch;
pub mod messages;
pub mod mock_builder;
pub mod session;

pub use builder::{BuildError, MugBuilder};
pub use dispatch::{dispatch, dispatch_json};
pub use messages::{FieldError, StoreToUi, UiToStore};
pub use mock_builder::RecordingBuilder;
pub use session::{BridgeError, EditSession, FILL_ALL_PARAMETERS};
