use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{auth::CurrentUser, error::AppError, models::trip::Trip, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_trip))
        .route("/:trip_id", get(trip_detail))
}

#[derive(Deserialize)]
struct CreateTripRequest {
    from_point: String,
    to_point: String,
    chosen_timestamp: DateTime<Utc>,
}

async fn create_trip(
    State(state): State<AppState>,
    current: CurrentUser,
    WithRejection(Json(input), _): WithRejection<Json<CreateTripRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = current.require_user()?;
    let from_point = input.from_point.trim();
    let to_point = input.to_point.trim();
    if from_point.is_empty() || to_point.is_empty() {
        return Err(AppError::BadRequest(
            "from_point and to_point are required".into(),
        ));
    }

    let trip = Trip::create(
        &state.db,
        user.tg_id,
        from_point,
        to_point,
        input.chosen_timestamp,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(trip)))
}

async fn trip_detail(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(trip_id): Path<String>,
) -> Result<Json<Trip>, AppError> {
    current.require_user()?;
    let trip_id: i64 = trip_id
        .parse()
        .map_err(|err| AppError::BadRequest(format!("invalid trip id: {err}")))?;

    let trip = match Trip::get_by_id(&state.db, trip_id).await {
        Ok(trip) => trip,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::NotFound),
        Err(err) => return Err(err.into()),
    };

    Ok(Json(trip))
}
