use crate::ports::profile::ProfileStore;
use crate::ports::push::PushSender;
use crate::state;
use crate::types::event::ChannelEvent;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use serde::Serialize;

use super::ErrorResponse;

const SIGNATURE_HEADER: &str = "x-signature";

#[derive(Serialize)]
pub(crate) struct WebhookResponse {
    pub(crate) success: bool,
}

/// Entry point of the fan-out pipeline. The signature check runs over the
/// raw body before anything is parsed; the response reflects authentication
/// and parsing only, never individual delivery outcomes.
pub(crate) async fn receive_event<P, S>(
    State(state): State<state::AppState<P, S>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookResponse>, (StatusCode, Json<ErrorResponse>)>
where
    P: ProfileStore,
    S: PushSender,
{
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());
    if !state.verifier.verify(&body, signature) {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Webhook signature invalid",
            }),
        ));
    }

    let event: ChannelEvent = serde_json::from_slice(&body).map_err(|err| {
        eprintln!("failed to parse webhook event: {err}");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Malformed webhook event",
            }),
        )
    })?;

    if let Err(err) = state.notifier.dispatch(&event).await {
        eprintln!("webhook processing failed: {err}");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error",
            }),
        ));
    }

    Ok(Json(WebhookResponse { success: true }))
}
