use chrono::NaiveDate;

use crate::model::{Project, Technology};

/// Display orderings for the project list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Start date descending
    Newest,
    /// Start date ascending
    Oldest,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Parse the CLI/UI token for a sort order
    pub fn parse(s: &str) -> Option<SortKey> {
        match s {
            "newest" => Some(SortKey::Newest),
            "oldest" => Some(SortKey::Oldest),
            "a-z" => Some(SortKey::NameAsc),
            "z-a" => Some(SortKey::NameDesc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::NameAsc => "a-z",
            SortKey::NameDesc => "z-a",
        }
    }

    /// The order the TUI cycles through on repeated presses
    pub fn next(self) -> SortKey {
        match self {
            SortKey::Newest => SortKey::Oldest,
            SortKey::Oldest => SortKey::NameAsc,
            SortKey::NameAsc => SortKey::NameDesc,
            SortKey::NameDesc => SortKey::Newest,
        }
    }
}

/// Technology filter; `All` is the identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TechFilter {
    #[default]
    All,
    Tech(Technology),
}

impl TechFilter {
    pub fn parse(s: &str) -> Option<TechFilter> {
        if s == "all" {
            return Some(TechFilter::All);
        }
        Technology::from_slug(s).map(TechFilter::Tech)
    }

    pub fn label(self) -> String {
        match self {
            TechFilter::All => "all".to_string(),
            TechFilter::Tech(t) => t.slug().to_string(),
        }
    }

    /// Cycle all → node-js → … → typescript → all
    pub fn next(self) -> TechFilter {
        match self {
            TechFilter::All => TechFilter::Tech(Technology::ALL[0]),
            TechFilter::Tech(t) => {
                let idx = Technology::ALL.iter().position(|c| *c == t).unwrap_or(0);
                match Technology::ALL.get(idx + 1) {
                    Some(next) => TechFilter::Tech(*next),
                    None => TechFilter::All,
                }
            }
        }
    }
}

/// Copy-and-sort for display. The stored order is never touched; the result
/// goes straight to rendering.
pub fn sort_projects(projects: &[Project], key: SortKey) -> Vec<Project> {
    let mut out = projects.to_vec();
    match key {
        SortKey::Newest => out.sort_by(|a, b| sort_date(b).cmp(&sort_date(a))),
        SortKey::Oldest => out.sort_by(|a, b| sort_date(a).cmp(&sort_date(b))),
        SortKey::NameAsc => out.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
        SortKey::NameDesc => out.sort_by(|a, b| name_key(b).cmp(&name_key(a))),
    }
    out
}

/// Missing start dates sort as the oldest possible date
fn sort_date(p: &Project) -> NaiveDate {
    p.start_date.unwrap_or(NaiveDate::MIN)
}

fn name_key(p: &Project) -> String {
    p.name.to_lowercase()
}

/// Keep records carrying the filtered technology, preserving relative order
pub fn filter_projects(projects: &[Project], filter: TechFilter) -> Vec<Project> {
    match filter {
        TechFilter::All => projects.to_vec(),
        TechFilter::Tech(t) => projects
            .iter()
            .filter(|p| p.technologies.contains(&t))
            .cloned()
            .collect(),
    }
}

/// The sorted/filtered view handed to rendering. `sort` of `None` keeps
/// insertion order.
pub fn visible_projects(
    projects: &[Project],
    sort: Option<SortKey>,
    filter: TechFilter,
) -> Vec<Project> {
    let filtered = filter_projects(projects, filter);
    match sort {
        Some(key) => sort_projects(&filtered, key),
        None => filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectDraft, ProjectId};

    fn project(id: u64, name: &str, start: Option<&str>, techs: &[Technology]) -> Project {
        ProjectDraft {
            name: name.into(),
            start_date: start.map(|s| s.parse().unwrap()),
            technologies: techs.to_vec(),
            ..Default::default()
        }
        .into_project(ProjectId(id))
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "Zebra", Some("2024-03-01"), &[Technology::ReactJs]),
            project(2, "alpha", None, &[Technology::NodeJs, Technology::ReactJs]),
            project(3, "Mango", Some("2023-06-15"), &[Technology::Typescript]),
        ]
    }

    #[test]
    fn newest_puts_missing_dates_last() {
        let sorted = sort_projects(&sample(), SortKey::Newest);
        let ids: Vec<u64> = sorted.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn oldest_puts_missing_dates_first() {
        let sorted = sort_projects(&sample(), SortKey::Oldest);
        let ids: Vec<u64> = sorted.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let sorted = sort_projects(&sample(), SortKey::NameAsc);
        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Mango", "Zebra"]);
    }

    #[test]
    fn a_z_reversed_equals_z_a_for_distinct_names() {
        let mut forward = sort_projects(&sample(), SortKey::NameAsc);
        forward.reverse();
        assert_eq!(forward, sort_projects(&sample(), SortKey::NameDesc));
    }

    #[test]
    fn sort_does_not_mutate_input() {
        let original = sample();
        let _ = sort_projects(&original, SortKey::NameDesc);
        assert_eq!(original, sample());
    }

    #[test]
    fn filter_all_is_identity() {
        assert_eq!(filter_projects(&sample(), TechFilter::All), sample());
    }

    #[test]
    fn filter_is_an_order_preserving_subsequence() {
        let filtered = filter_projects(&sample(), TechFilter::Tech(Technology::ReactJs));
        let ids: Vec<u64> = filtered.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(
            filtered
                .iter()
                .all(|p| p.technologies.contains(&Technology::ReactJs))
        );
    }

    #[test]
    fn filter_can_be_empty() {
        let none = filter_projects(
            &sample()[..1],
            TechFilter::Tech(Technology::NodeJs),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn sort_key_tokens_round_trip() {
        for key in [
            SortKey::Newest,
            SortKey::Oldest,
            SortKey::NameAsc,
            SortKey::NameDesc,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("sideways"), None);
    }

    #[test]
    fn filter_cycle_visits_every_technology() {
        let mut filter = TechFilter::All;
        let mut seen = Vec::new();
        for _ in 0..Technology::ALL.len() {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(seen.len(), Technology::ALL.len());
        assert_eq!(filter.next(), TechFilter::All);
    }

    #[test]
    fn visible_composes_filter_then_sort() {
        let visible = visible_projects(
            &sample(),
            Some(SortKey::NameAsc),
            TechFilter::Tech(Technology::ReactJs),
        );
        let names: Vec<&str> = visible.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Zebra"]);
    }
}
