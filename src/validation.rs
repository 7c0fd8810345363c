use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::ProjectDto;

pub const TITLE_REQUIRED: &str = "Title is required";

/// Field name to message, as reported to clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Check an inbound project before it reaches storage.
///
/// Only `title` is constrained: it must be present and contain at least one
/// non-whitespace character. Every other field is accepted as sent.
pub fn validate_project(project: &ProjectDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if is_blank(project.title.as_deref()) {
        errors.add("title", TITLE_REQUIRED);
    }

    errors.into_result()
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}
