pub mod memory;
pub mod projects;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::{NewProject, Project};

pub use memory::MemoryProjectStore;
pub use projects::PgProjectStore;

pub const PROJECT_RESOURCE: &str = "Project";

/// Data access for the `projects` table.
///
/// Every operation touches a single row (or, for `list_all`, reads the whole
/// table) and relies on the backend for atomicity.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All stored projects in ascending id order.
    async fn list_all(&self) -> Result<Vec<Project>, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Project, StoreError>;

    /// Persist a new row and return it with its assigned id.
    async fn create(&self, project: NewProject) -> Result<Project, StoreError>;

    /// Overwrite every field of an existing row except its id.
    async fn update(&self, id: i64, project: NewProject) -> Result<Project, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

pub(crate) fn not_found(id: i64) -> StoreError {
    StoreError::NotFound {
        resource: PROJECT_RESOURCE,
        field: "id",
        value: id.to_string(),
    }
}

/// Create the `projects` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS projects (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description VARCHAR(1000),
            tech_stack TEXT,
            github_url TEXT,
            live_demo_url TEXT
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
