pub mod home;
pub mod projects;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub const PROJECTS_BASE_PATH: &str = "/api/projects";

/// The project resource group, relative to `PROJECTS_BASE_PATH`.
pub fn project_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{id}",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
}
