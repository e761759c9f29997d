use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::{auth, error::AppError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/auth/session", post(provision_session))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

#[derive(Deserialize)]
struct ProvisionSessionRequest {
    tg_id: i64,
    username: String,
    secret_token: String,
}

/// Called by the bot after it has verified a Telegram user: exchanges the
/// shared secret for a bearer token that user's client can present.
async fn provision_session(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<ProvisionSessionRequest>, AppError>,
) -> Result<Json<Value>, AppError> {
    if input.tg_id == 0 {
        return Err(AppError::BadRequest("tg_id is required".into()));
    }
    let username = input.username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("username is required".into()));
    }
    if !state.config.shared_secret.matches(&input.secret_token) {
        return Err(AppError::BadRequest("wrong secret token!".into()));
    }

    let user_id = auth::upsert_user(&state, input.tg_id, username).await?;
    let token = auth::create_session(&state, user_id).await?;
    info!(tg_id = input.tg_id, "session provisioned");

    Ok(Json(json!({"token": token})))
}
