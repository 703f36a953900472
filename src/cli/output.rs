use serde::Serialize;

use crate::model::Project;
use crate::ops::duration::format_duration;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProjectJson {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub duration: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentJson>,
}

#[derive(Serialize)]
pub struct AttachmentJson {
    pub file_name: String,
    pub media: String,
}

pub fn project_to_json(project: &Project) -> ProjectJson {
    ProjectJson {
        id: project.id.0,
        name: project.name.clone(),
        start_date: project.start_date.map(|d| d.to_string()),
        end_date: project.end_date.map(|d| d.to_string()),
        duration: format_duration(project.start_date, project.end_date),
        description: project.description.clone(),
        technologies: project
            .technologies
            .iter()
            .map(|t| t.slug().to_string())
            .collect(),
        attachment: project.attachment.as_ref().map(|a| AttachmentJson {
            file_name: a.file_name.clone(),
            media: a.media_kind().as_str().to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One-line list entry: `3  Portfolio Site  [react-js]  1 month(s) 2 day(s)`
pub fn format_project_row(project: &Project) -> String {
    let mut row = format!("{:>3}  {}", project.id, project.name);
    if !project.technologies.is_empty() {
        let slugs: Vec<&str> = project.technologies.iter().map(|t| t.slug()).collect();
        row.push_str(&format!("  [{}]", slugs.join(" ")));
    }
    row.push_str(&format!(
        "  {}",
        format_duration(project.start_date, project.end_date)
    ));
    row
}

/// Multi-line detail block for `fo show`
pub fn format_project_detail(project: &Project) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("{} {}", project.id, project.name));
    lines.push(format!(
        "duration: {}",
        format_duration(project.start_date, project.end_date)
    ));
    if let Some(start) = project.start_date {
        lines.push(format!("start: {}", start));
    }
    if let Some(end) = project.end_date {
        lines.push(format!("end: {}", end));
    }
    if !project.technologies.is_empty() {
        let labels: Vec<String> = project.technologies.iter().map(|t| t.label()).collect();
        lines.push(format!("technologies: {}", labels.join(", ")));
    }
    if let Some(attachment) = &project.attachment {
        lines.push(format!(
            "attachment: {} ({})",
            attachment.file_name,
            attachment.media_kind().as_str()
        ));
    }
    if !project.description.is_empty() {
        lines.push(String::new());
        lines.push(project.description.clone());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectDraft, ProjectId, Technology};

    fn sample() -> Project {
        ProjectDraft {
            name: "Portfolio Site".into(),
            start_date: Some("2024-01-01".parse().unwrap()),
            end_date: Some("2024-02-01".parse().unwrap()),
            description: "A personal site.".into(),
            technologies: vec![Technology::NextJs],
            ..Default::default()
        }
        .into_project(ProjectId(3))
    }

    #[test]
    fn row_carries_id_name_techs_duration() {
        let row = format_project_row(&sample());
        assert_eq!(row, "  3  Portfolio Site  [next-js]  1 month(s)");
    }

    #[test]
    fn detail_prettifies_technologies() {
        let lines = format_project_detail(&sample());
        assert!(lines.contains(&"technologies: NEXT.JS".to_string()));
        assert!(lines.contains(&"A personal site.".to_string()));
    }

    #[test]
    fn json_omits_empty_fields() {
        let project = ProjectDraft {
            name: "Bare".into(),
            ..Default::default()
        }
        .into_project(ProjectId(1));
        let value = serde_json::to_value(project_to_json(&project)).unwrap();
        assert_eq!(value["duration"], "Duration unknown");
        assert!(value.get("start_date").is_none());
        assert!(value.get("technologies").is_none());
        assert!(value.get("attachment").is_none());
    }
}
