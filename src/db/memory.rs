use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ProjectStore, not_found};
use crate::error::StoreError;
use crate::models::project::{DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use crate::models::{NewProject, Project};

/// Process-local store used when no database is configured.
///
/// Ids start at 1 and are never reused, even after deletes.
#[derive(Default)]
pub struct MemoryProjectStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, Project>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Same limits as the `title VARCHAR(255)` and `description VARCHAR(1000)`
/// columns.
fn check_constraints(project: &NewProject) -> Result<(), StoreError> {
    check_length("title", Some(&project.title), TITLE_MAX_LEN)?;
    check_length("description", project.description.as_deref(), DESCRIPTION_MAX_LEN)
}

fn check_length(column: &str, value: Option<&str>, max: usize) -> Result<(), StoreError> {
    let len = value.map_or(0, |v| v.chars().count());
    if len > max {
        return Err(StoreError::Constraint(format!(
            "value too long for column {column} ({len} > {max})"
        )));
    }
    Ok(())
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn list_all(&self) -> Result<Vec<Project>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Project, StoreError> {
        let inner = self.inner.read().await;
        inner.rows.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn create(&self, project: NewProject) -> Result<Project, StoreError> {
        check_constraints(&project)?;

        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let created = project.with_id(inner.last_id);
        inner.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, project: NewProject) -> Result<Project, StoreError> {
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&id).ok_or_else(|| not_found(id))?;
        check_constraints(&project)?;

        *row = project.with_id(id);
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.rows.remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }
}
