use crate::model::{Portfolio, Project, ProjectDraft, ProjectId};
use crate::ops::project_ops;

/// A user intent, decoupled from any UI surface. Both the TUI and the CLI
/// funnel their mutations through here.
#[derive(Debug, Clone)]
pub enum Command {
    Create(ProjectDraft),
    Update(ProjectId, ProjectDraft),
    Delete(ProjectId),
    ShowDetail(ProjectId),
}

/// What a command did. Outcomes for which [`Outcome::mutated`] is true
/// require the caller to persist the portfolio.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created(ProjectId),
    Updated(ProjectId),
    /// The update target no longer existed; the draft was appended fresh.
    Appended(ProjectId),
    Deleted(Project),
    Detail(Project),
    Rejected(String),
}

impl Outcome {
    pub fn mutated(&self) -> bool {
        matches!(
            self,
            Outcome::Created(_) | Outcome::Updated(_) | Outcome::Appended(_) | Outcome::Deleted(_)
        )
    }
}

/// Apply a command to the portfolio. No rendering, no persistence — a
/// rejected command leaves the portfolio untouched.
pub fn apply(portfolio: &mut Portfolio, command: Command) -> Outcome {
    match command {
        Command::Create(draft) => match project_ops::upsert(portfolio, None, draft) {
            Ok(id) => Outcome::Created(id),
            Err(e) => Outcome::Rejected(e.to_string()),
        },
        Command::Update(id, draft) => {
            let existed = portfolio.get(id).is_some();
            match project_ops::upsert(portfolio, Some(id), draft) {
                Ok(got) if existed => Outcome::Updated(got),
                Ok(got) => Outcome::Appended(got),
                Err(e) => Outcome::Rejected(e.to_string()),
            }
        }
        Command::Delete(id) => match project_ops::remove(portfolio, id) {
            Ok(project) => Outcome::Deleted(project),
            Err(e) => Outcome::Rejected(e.to_string()),
        },
        Command::ShowDetail(id) => match portfolio.get(id) {
            Some(project) => Outcome::Detail(project.clone()),
            None => Outcome::Rejected(format!("project not found: {}", id)),
        },
    }
}
