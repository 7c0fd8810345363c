use async_trait::async_trait;
use sqlx::PgPool;

use super::{ProjectStore, not_found};
use crate::error::StoreError;
use crate::models::{NewProject, Project};

const COLUMNS: &str = "id, title, description, tech_stack, github_url, live_demo_url";

pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn list_all(&self) -> Result<Vec<Project>, StoreError> {
        let projects =
            sqlx::query_as::<_, Project>(&format!("SELECT {COLUMNS} FROM projects ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        Ok(projects)
    }

    async fn get_by_id(&self, id: i64) -> Result<Project, StoreError> {
        sqlx::query_as::<_, Project>(&format!("SELECT {COLUMNS} FROM projects WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, project: NewProject) -> Result<Project, StoreError> {
        let created = sqlx::query_as::<_, Project>(&format!(
            "INSERT INTO projects (title, description, tech_stack, github_url, live_demo_url)
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.tech_stack)
        .bind(&project.github_url)
        .bind(&project.live_demo_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(&self, id: i64, project: NewProject) -> Result<Project, StoreError> {
        sqlx::query_as::<_, Project>(&format!(
            "UPDATE projects
             SET title = $2, description = $3, tech_stack = $4, github_url = $5, live_demo_url = $6
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.tech_stack)
        .bind(&project.github_url)
        .bind(&project.live_demo_url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}
