use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationErrors};

/// Column limits of the `projects` table, in characters.
pub const TITLE_MAX_LEN: usize = 255;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Storage shape: one row of the `projects` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub tech_stack: Option<String>,
    pub github_url: Option<String>,
    pub live_demo_url: Option<String>,
}

/// Storage shape of a project that has not been assigned an id yet. Used for
/// inserts and for the full overwrite performed by updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub tech_stack: Option<String>,
    pub github_url: Option<String>,
    pub live_demo_url: Option<String>,
}

impl NewProject {
    pub fn with_id(self, id: i64) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            tech_stack: self.tech_stack,
            github_url: self.github_url,
            live_demo_url: self.live_demo_url,
        }
    }
}

/// Wire shape used in request and response bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_demo_url: Option<String>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        ProjectDto {
            id: Some(project.id),
            title: Some(project.title),
            description: project.description,
            tech_stack: project.tech_stack,
            github_url: project.github_url,
            live_demo_url: project.live_demo_url,
        }
    }
}

/// Validates, then copies field for field; `title` is present once validated. An `id` in the body is dropped:
/// ids are assigned by storage and never taken from the client.
impl TryFrom<ProjectDto> for NewProject {
    type Error = ValidationErrors;

    fn try_from(dto: ProjectDto) -> Result<Self, Self::Error> {
        validation::validate_project(&dto)?;

        let ProjectDto {
            id: _,
            title,
            description,
            tech_stack,
            github_url,
            live_demo_url,
        } = dto;

        Ok(NewProject {
            title: title.unwrap_or_default(),
            description,
            tech_stack,
            github_url,
            live_demo_url,
        })
    }
}
