use tracing::instrument;

use crate::builder::MugBuilder;
use crate::messages::{FieldError, StoreToUi, UiToStore};
use crate::session::{BridgeError, EditSession, FILL_ALL_PARAMETERS};

/// Dispatch a form message to the session and return a response.
///
/// Never fails: every error becomes the matching response variant, so
/// validation problems stay attached to their field and never escape the UI
/// boundary.
#[instrument(skip(session))]
pub fn dispatch<B: MugBuilder>(session: &mut EditSession<B>, msg: UiToStore) -> StoreToUi {
    match handle_message(session, msg) {
        Ok(response) => response,
        Err(e) => error_response(e),
    }
}

/// Decode a JSON message, dispatch it and encode the response.
pub fn dispatch_json<B: MugBuilder>(session: &mut EditSession<B>, json: &str) -> String {
    let response = match serde_json::from_str::<UiToStore>(json) {
        Ok(msg) => dispatch(session, msg),
        Err(e) => error_response(BridgeError::Serialization {
            reason: e.to_string(),
        }),
    };
    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"type":"Error","message":"failed to encode response: {e}"}}"#)
    })
}

fn handle_message<B: MugBuilder>(
    session: &mut EditSession<B>,
    msg: UiToStore,
) -> Result<StoreToUi, BridgeError> {
    match msg {
        UiToStore::SetField { kind, text } => {
            session.set_field(kind, &text)?;
            Ok(StoreToUi::FieldAccepted {
                kind,
                values: session.store.current_values(),
            })
        }

        UiToStore::ApplyPreset { preset } => {
            let values = session.apply_preset(preset)?;
            Ok(StoreToUi::PresetApplied { preset, values })
        }

        UiToStore::RequestBuild => {
            let (build_id, values) = session.request_build()?;
            Ok(StoreToUi::BuildSubmitted { build_id, values })
        }

        UiToStore::QueryState => Ok(StoreToUi::State {
            values: session.store.current_values(),
            errors: session.store.errors().map(|(_, e)| FieldError::from(e)).collect(),
            valid: session.store.is_fully_valid(),
        }),
    }
}

fn error_response(err: BridgeError) -> StoreToUi {
    match err {
        BridgeError::Validation(e) => StoreToUi::FieldRejected {
            error: FieldError::from(&e),
        },
        BridgeError::PresetRejected { preset, errors } => StoreToUi::PresetRejected {
            preset,
            errors: errors.iter().map(FieldError::from).collect(),
        },
        BridgeError::Incomplete { errors } => StoreToUi::BuildRejected {
            message: FILL_ALL_PARAMETERS.to_string(),
            errors: errors.iter().map(FieldError::from).collect(),
        },
        BridgeError::Build { build_id, source } => StoreToUi::BuildFailed {
            build_id,
            message: source.to_string(),
        },
        other => StoreToUi::Error {
            message: other.to_string(),
        },
    }
}
