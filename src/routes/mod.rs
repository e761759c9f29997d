pub mod public;
pub mod trip;
pub mod user;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(public::router())
        .nest("/trip", trip::router())
        .nest("/user", user::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
