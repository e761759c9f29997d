use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde_json::{json, Value};
use tracing::info;

use crate::{
    auth::CurrentUser,
    error::AppError,
    models::{join::JoinRequest, trip::Trip},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/join_trip/req/:trip_id", post(forward_join_request))
        .route("/join_trip/res", post(receive_join_response))
}

/// First half of the handshake: relay an authenticated user's wish to join
/// a trip to the bot, which brings it to the trip admin.
async fn forward_join_request(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(trip_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user = current.require_user()?;
    let trip_id: i64 = trip_id
        .parse()
        .map_err(|err| AppError::BadRequest(format!("invalid trip id: {err}")))?;

    let trip = Trip::get_by_id(&state.db, trip_id).await?;
    let request = JoinRequest::outbound(&trip, user.tg_id, state.config.shared_secret.reveal());
    state.bot.send_join_request(&request).await?;

    Ok(Json(json!({"status": "ok"})))
}

/// Second half: the bot reports the admin's decision. Trust rests entirely
/// on the shared secret; the route is otherwise unauthenticated.
async fn receive_join_response(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<JoinRequest>, AppError>,
) -> Result<Json<Value>, AppError> {
    input.validate().map_err(AppError::BadRequest)?;
    if !state.config.shared_secret.matches(&input.secret_token) {
        return Err(AppError::BadRequest("wrong secret token!".into()));
    }

    if input.accepted {
        Trip::add_member(&state.db, input.trip_id, input.user_id).await?;
        info!(
            trip_id = input.trip_id,
            user_id = input.user_id,
            "join request accepted"
        );
    }

    Ok(Json(json!({"status": "ok"})))
}
