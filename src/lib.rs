pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::ProjectStore;
use crate::routes::PROJECTS_BASE_PATH;
use crate::state::{AppState, SharedState};

pub fn build_app(store: Arc<dyn ProjectStore>, config: Config) -> Router {
    let state: SharedState = Arc::new(AppState { store, config });

    // Any origin is accepted; mirroring it keeps credentials usable.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(routes::home::status))
        .nest(PROJECTS_BASE_PATH, routes::project_routes().layer(cors))
        .fallback(routes::home::fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    middleware::errors::render_errors,
                )),
        )
        .with_state(state)
}
