use crate::model::{Portfolio, Project, ProjectDraft, ProjectId};

/// Error type for project mutations
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("project name required")]
    NameRequired,
    #[error("project not found: {0}")]
    NotFound(ProjectId),
}

/// Replace the record with `edit_id` if it still exists; otherwise append
/// under a fresh ID. A stale edit target (record deleted after the edit
/// began) therefore degrades to an append rather than failing.
///
/// Returns the ID the draft ended up under. The caller persists.
pub fn upsert(
    portfolio: &mut Portfolio,
    edit_id: Option<ProjectId>,
    draft: ProjectDraft,
) -> Result<ProjectId, ProjectError> {
    if draft.name.trim().is_empty() {
        return Err(ProjectError::NameRequired);
    }

    if let Some(id) = edit_id
        && let Some(existing) = portfolio.projects.iter_mut().find(|p| p.id == id)
    {
        *existing = draft.into_project(id);
        return Ok(id);
    }

    let id = portfolio.allocate_id();
    portfolio.projects.push(draft.into_project(id));
    Ok(id)
}

/// Remove a record by ID, preserving the relative order of the rest.
/// Returns the removed record.
pub fn remove(portfolio: &mut Portfolio, id: ProjectId) -> Result<Project, ProjectError> {
    let idx = portfolio
        .position_of(id)
        .ok_or(ProjectError::NotFound(id))?;
    Ok(portfolio.projects.remove(idx))
}
