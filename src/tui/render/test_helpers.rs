use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tempfile::TempDir;

use crate::model::{FolioConfig, Portfolio, ProjectDraft};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render the full app into an in-memory buffer and return plain text
/// (no styles), trailing blanks trimmed.
pub fn render_app_to_string(app: &mut App) -> String {
    let backend = TestBackend::new(TERM_W, TERM_H);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| super::render(frame, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app over a scratch directory, seeded with (name, start, end) records
pub fn sample_app(entries: &[(&str, Option<&str>, Option<&str>)]) -> (TempDir, App) {
    let dir = TempDir::new().unwrap();
    let mut portfolio = Portfolio::default();
    for (name, start, end) in entries {
        let id = portfolio.allocate_id();
        portfolio.projects.push(
            ProjectDraft {
                name: (*name).into(),
                start_date: start.map(|s| s.parse().unwrap()),
                end_date: end.map(|s| s.parse().unwrap()),
                ..Default::default()
            }
            .into_project(id),
        );
    }
    let app = App::new(dir.path().to_path_buf(), portfolio, FolioConfig::default());
    (dir, app)
}
