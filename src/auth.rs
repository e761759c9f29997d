#![allow(dead_code)]

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{session::Session, user::User},
    state::AppState,
};

const SESSION_TTL_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub tg_id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<AuthenticatedUser>);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .extract::<Option<TypedHeader<Authorization<Bearer>>>>()
            .await
            .unwrap_or(None);
        let Some(TypedHeader(Authorization(bearer))) = bearer else {
            return Ok(Self(None));
        };

        Ok(Self(resolve_session(state, bearer.token()).await?))
    }
}

impl CurrentUser {
    pub fn require_user(&self) -> Result<&AuthenticatedUser, AppError> {
        self.0.as_ref().ok_or(AppError::Unauthorized)
    }
}

pub async fn resolve_session(
    state: &AppState,
    token: &str,
) -> Result<Option<AuthenticatedUser>, AppError> {
    let Some(session) = sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = ?")
        .bind(token)
        .fetch_optional(&state.db)
        .await?
    else {
        return Ok(None);
    };

    if let Some(expires_at) = session.expires_at {
        if expires_at <= Utc::now() {
            return Ok(None);
        }
    }

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(session.user_id)
        .fetch_optional(&state.db)
        .await?;

    Ok(user.map(|user| AuthenticatedUser {
        id: user.id,
        tg_id: user.tg_id,
        username: user.username,
    }))
}

/// Inserts the user if the telegram id is new, otherwise refreshes the
/// username. Returns the row id either way.
pub async fn upsert_user(state: &AppState, tg_id: i64, username: &str) -> Result<i64, AppError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (tg_id, username, created_at) VALUES (?, ?, ?) \
         ON CONFLICT (tg_id) DO UPDATE SET username = excluded.username \
         RETURNING id",
    )
    .bind(tg_id)
    .bind(username)
    .bind(Utc::now())
    .fetch_one(&state.db)
    .await?;
    Ok(id)
}

pub async fn create_session(state: &AppState, user_id: i64) -> Result<String, AppError> {
    let token = Uuid::new_v4().to_string();
    let now = Utc::now();
    sqlx::query("INSERT INTO sessions (id, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)")
        .bind(&token)
        .bind(user_id)
        .bind(now)
        .bind(now + Duration::days(SESSION_TTL_DAYS))
        .execute(&state.db)
        .await?;
    Ok(token)
}
