pub mod config;
pub mod error;
pub mod state;
pub mod slug;
pub mod db;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let state: SharedState = Arc::new(AppState { pool });

    // Unknown paths and unsupported methods on known paths both answer 404.
    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.max_body_size))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                )),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
