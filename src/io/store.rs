use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Portfolio;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

/// Error type for portfolio persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize portfolio: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub fn portfolio_path(dir: &Path) -> PathBuf {
    dir.join(PORTFOLIO_FILE)
}

/// Load the portfolio blob from `dir`.
///
/// A missing file, an unreadable file, and malformed JSON all degrade to an
/// empty portfolio — corruption is never surfaced as a distinct error.
pub fn load_portfolio(dir: &Path) -> Portfolio {
    let path = portfolio_path(dir);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Portfolio::default(),
    };
    let mut portfolio: Portfolio = match serde_json::from_str(&content) {
        Ok(p) => p,
        Err(_) => return Portfolio::default(),
    };
    portfolio.reconcile_next_id();
    portfolio
}

/// Serialize the full portfolio and overwrite the blob. No merge; the last
/// writer wins.
pub fn save_portfolio(dir: &Path, portfolio: &Portfolio) -> Result<(), StoreError> {
    let path = portfolio_path(dir);
    let content = serde_json::to_string_pretty(portfolio)?;
    atomic_write(&path, content.as_bytes()).map_err(|e| StoreError::Write { path, source: e })
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectDraft, ProjectId, Technology};
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let portfolio = load_portfolio(dir.path());
        assert!(portfolio.is_empty());
        assert_eq!(portfolio.next_id, 1);
    }

    #[test]
    fn load_malformed_blob_is_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(portfolio_path(dir.path()), "not json {{{").unwrap();
        assert!(load_portfolio(dir.path()).is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut portfolio = Portfolio::default();
        let id = portfolio.allocate_id();
        portfolio.projects.push(
            ProjectDraft {
                name: "Portfolio Site".into(),
                description: "A personal site.".into(),
                technologies: vec![Technology::NextJs, Technology::Typescript],
                ..Default::default()
            }
            .into_project(id),
        );

        save_portfolio(dir.path(), &portfolio).unwrap();
        let loaded = load_portfolio(dir.path());
        assert_eq!(loaded, portfolio);
    }

    #[test]
    fn load_reconciles_stale_counter() {
        let dir = TempDir::new().unwrap();
        fs::write(
            portfolio_path(dir.path()),
            r#"{"next_id":1,"projects":[{"id":4,"name":"x"}]}"#,
        )
        .unwrap();
        let portfolio = load_portfolio(dir.path());
        assert_eq!(portfolio.next_id, 5);
        assert_eq!(portfolio.get(ProjectId(4)).unwrap().name, "x");
    }

    #[test]
    fn save_overwrites_previous_blob() {
        let dir = TempDir::new().unwrap();
        let mut portfolio = Portfolio::default();
        save_portfolio(dir.path(), &portfolio).unwrap();

        let id = portfolio.allocate_id();
        portfolio
            .projects
            .push(ProjectDraft::default().into_project(id));
        save_portfolio(dir.path(), &portfolio).unwrap();

        assert_eq!(load_portfolio(dir.path()).len(), 1);
    }
}
