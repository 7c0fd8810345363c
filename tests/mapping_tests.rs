use portfolio::models::{NewProject, Project, ProjectDto};
use portfolio::validation::{TITLE_REQUIRED, validate_project};
use serde_json::json;

fn dto(title: Option<&str>) -> ProjectDto {
    ProjectDto {
        title: title.map(str::to_string),
        ..ProjectDto::default()
    }
}

#[test]
fn blank_titles_fail_validation_on_title() {
    for title in [None, Some(""), Some(" "), Some("\t\n ")] {
        let errors = validate_project(&dto(title)).unwrap_err();
        assert_eq!(errors.get("title"), Some(TITLE_REQUIRED), "title {title:?}");
    }
}

#[test]
fn other_fields_are_not_validated() {
    let project = ProjectDto {
        title: Some("x".to_string()),
        description: Some("d".repeat(5000)),
        github_url: Some("definitely not a url".to_string()),
        ..ProjectDto::default()
    };
    assert!(validate_project(&project).is_ok());
}

#[test]
fn wire_to_storage_copies_fields_and_drops_id() {
    let wire = ProjectDto {
        id: Some(12),
        title: Some("Blog".to_string()),
        description: Some("Static blog".to_string()),
        tech_stack: Some("Zola".to_string()),
        github_url: Some("https://github.com/x/blog".to_string()),
        live_demo_url: None,
    };

    let stored = NewProject::try_from(wire).unwrap();
    assert_eq!(
        stored,
        NewProject {
            title: "Blog".to_string(),
            description: Some("Static blog".to_string()),
            tech_stack: Some("Zola".to_string()),
            github_url: Some("https://github.com/x/blog".to_string()),
            live_demo_url: None,
        }
    );
}

#[test]
fn wire_to_storage_rejects_blank_title() {
    let errors = NewProject::try_from(dto(Some("  "))).unwrap_err();
    assert_eq!(errors.get("title"), Some(TITLE_REQUIRED));
}

#[test]
fn storage_to_wire_uses_camel_case_and_nulls() {
    let project = Project {
        id: 3,
        title: "CLI".to_string(),
        description: None,
        tech_stack: Some("Rust".to_string()),
        github_url: None,
        live_demo_url: Some("https://cli.example".to_string()),
    };

    let wire = serde_json::to_value(ProjectDto::from(project)).unwrap();
    assert_eq!(
        wire,
        json!({
            "id": 3,
            "title": "CLI",
            "description": null,
            "techStack": "Rust",
            "githubUrl": null,
            "liveDemoUrl": "https://cli.example",
        })
    );
}

#[test]
fn wire_shape_accepts_missing_and_null_fields() {
    let wire: ProjectDto =
        serde_json::from_value(json!({ "title": "Only title", "techStack": null })).unwrap();
    assert_eq!(wire, dto(Some("Only title")));
}
