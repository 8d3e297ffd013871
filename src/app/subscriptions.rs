use crate::ports::profile::ProfileStore;
use crate::ports::push::PushSender;
use crate::state;
use crate::types::push::{PushSubscription, SubscriptionKeys};

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::ErrorResponse;

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterRequest {
    pub(crate) endpoint: String,
    pub(crate) keys: SubscriptionKeys,
    #[serde(rename = "userId")]
    pub(crate) user_id: Option<String>,
    #[serde(rename = "sessionId")]
    pub(crate) session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UnregisterRequest {
    pub(crate) endpoint: String,
    #[serde(rename = "userId")]
    pub(crate) user_id: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct MessageResponse {
    pub(crate) message: &'static str,
}

#[derive(Serialize)]
pub(crate) struct PublicKeyResponse {
    #[serde(rename = "publicKey")]
    pub(crate) public_key: String,
}

pub(crate) async fn register<P, S>(
    State(state): State<state::AppState<P, S>>,
    body: Bytes,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)>
where
    P: ProfileStore,
    S: PushSender,
{
    let Ok(request) = serde_json::from_slice::<RegisterRequest>(&body) else {
        return Err(missing_body());
    };
    let RegisterRequest {
        endpoint,
        keys,
        user_id,
        session_id,
    } = request;
    let (Some(user_id), Some(session_id)) = (user_id, session_id) else {
        return Err(unauthenticated());
    };

    let subscription = PushSubscription {
        endpoint,
        keys,
        session_id: None,
    };
    state
        .registry
        .register(&user_id, &session_id, subscription)
        .await
        .map_err(|err| {
            eprintln!("failed to save push subscription for '{user_id}': {err}");
            internal_error()
        })?;

    Ok(Json(MessageResponse {
        message: "Push subscription saved",
    }))
}

pub(crate) async fn unregister<P, S>(
    State(state): State<state::AppState<P, S>>,
    body: Bytes,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)>
where
    P: ProfileStore,
    S: PushSender,
{
    let Ok(request) = serde_json::from_slice::<UnregisterRequest>(&body) else {
        return Err(missing_body());
    };
    let Some(user_id) = request.user_id else {
        return Err(unauthenticated());
    };

    state
        .registry
        .unregister(&user_id, &request.endpoint)
        .await
        .map_err(|err| {
            eprintln!("failed to delete push subscription for '{user_id}': {err}");
            internal_error()
        })?;

    Ok(Json(MessageResponse {
        message: "Push subscription deleted",
    }))
}

/// Clients need the VAPID public key to create a browser subscription.
pub(crate) async fn public_key<P, S>(
    State(state): State<state::AppState<P, S>>,
) -> Json<PublicKeyResponse>
where
    P: ProfileStore,
    S: PushSender,
{
    Json(PublicKeyResponse {
        public_key: state.config.vapid.public_key.clone(),
    })
}

fn missing_body() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Missing push subscription in body",
        }),
    )
}

fn unauthenticated() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: "User not authenticated",
        }),
    )
}

fn internal_error() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error",
        }),
    )
}
