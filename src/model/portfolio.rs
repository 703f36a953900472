use serde::{Deserialize, Serialize};

use super::project::{Project, ProjectId};

/// The persisted blob: every project plus the ID allocation counter.
///
/// The whole value is serialized and overwritten on every mutation — there is
/// no partial write. Canonical order is insertion/deletion order; sorted and
/// filtered views are never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default = "first_id")]
    pub next_id: u64,
    #[serde(default)]
    pub projects: Vec<Project>,
}

fn first_id() -> u64 {
    1
}

impl Default for Portfolio {
    fn default() -> Self {
        Portfolio {
            next_id: first_id(),
            projects: Vec::new(),
        }
    }
}

impl Portfolio {
    /// Hand out the next ID. IDs are never reused within a portfolio.
    pub fn allocate_id(&mut self) -> ProjectId {
        let id = ProjectId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn position_of(&self, id: ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Clamp `next_id` above every stored ID. A hand-edited blob may carry a
    /// counter behind its records; allocating from it would alias an ID.
    pub fn reconcile_next_id(&mut self) {
        let max = self.projects.iter().map(|p| p.id.0).max().unwrap_or(0);
        if self.next_id <= max {
            self.next_id = max + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::ProjectDraft;

    fn named(name: &str) -> ProjectDraft {
        ProjectDraft {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn ids_are_monotonic() {
        let mut portfolio = Portfolio::default();
        let a = portfolio.allocate_id();
        let b = portfolio.allocate_id();
        assert_eq!(a, ProjectId(1));
        assert_eq!(b, ProjectId(2));
    }

    #[test]
    fn reconcile_moves_counter_past_existing_ids() {
        let mut portfolio = Portfolio::default();
        portfolio
            .projects
            .push(named("a").into_project(ProjectId(9)));
        portfolio.next_id = 3;

        portfolio.reconcile_next_id();
        assert_eq!(portfolio.allocate_id(), ProjectId(10));
    }

    #[test]
    fn reconcile_keeps_counter_ahead_of_records() {
        let mut portfolio = Portfolio::default();
        portfolio
            .projects
            .push(named("a").into_project(ProjectId(1)));
        portfolio.next_id = 5;

        portfolio.reconcile_next_id();
        assert_eq!(portfolio.next_id, 5);
    }

    #[test]
    fn lookup_by_id_ignores_position() {
        let mut portfolio = Portfolio::default();
        for name in ["a", "b", "c"] {
            let id = portfolio.allocate_id();
            portfolio.projects.push(named(name).into_project(id));
        }
        portfolio.projects.swap(0, 2);

        assert_eq!(portfolio.get(ProjectId(1)).unwrap().name, "a");
        assert_eq!(portfolio.position_of(ProjectId(1)), Some(2));
        assert_eq!(portfolio.position_of(ProjectId(99)), None);
    }
}
