use crate::ports::profile::ProfileStore;
use crate::ports::push::PushSender;
use crate::state;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::ErrorResponse;

#[derive(Debug, Deserialize)]
pub(crate) struct TokenQuery {
    #[serde(rename = "userId")]
    pub(crate) user_id: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct TokenResponse {
    pub(crate) token: String,
}

pub(crate) async fn mint_token<P, S>(
    State(state): State<state::AppState<P, S>>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<TokenResponse>, (StatusCode, Json<ErrorResponse>)>
where
    P: ProfileStore,
    S: PushSender,
{
    let Some(user_id) = query
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "User not authenticated",
            }),
        ));
    };

    let token = state.tokens.issue(user_id).map_err(|err| {
        eprintln!("failed to issue chat token for '{user_id}': {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error",
            }),
        )
    })?;

    Ok(Json(TokenResponse { token }))
}
