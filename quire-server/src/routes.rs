//! Route definitions
//!
//! Endpoints:
//! - `GET /`             index page
//! - `GET /structure`    HTML structure outline
//! - `GET /chapter/{n}`  one chapter as HTML
//! - `GET /characters`   JSON confirmed-character list
//! - `GET /frequencies`  JSON ranked (name, count) pairs
//! - `GET /chapters`     JSON per-chapter profiles
//! - `GET /quire.css`    static stylesheet

use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the full application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/structure", get(handlers::structure))
        .route("/chapter/:number", get(handlers::chapter))
        .route("/characters", get(handlers::characters))
        .route("/frequencies", get(handlers::frequencies))
        .route("/chapters", get(handlers::chapter_profiles))
        .route("/quire.css", get(handlers::stylesheet))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
