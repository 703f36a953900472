use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::attachment;
use crate::tui::app::{App, Mode};

pub(super) fn handle_detail(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Close without side effects
        (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Enter) => {
            app.detail = None;
            app.mode = Mode::Navigate;
        }

        // Save the attachment next to the portfolio file
        (KeyModifiers::NONE, KeyCode::Char('s')) => {
            let Some(project) = app.detail.and_then(|id| app.portfolio.get(id).cloned()) else {
                return;
            };
            match &project.attachment {
                Some(att) => match attachment::save_to_dir(att, &app.dir) {
                    Ok(path) => {
                        app.status_message = Some(format!("saved {}", path.display()));
                    }
                    Err(e) => {
                        app.status_message = Some(e.to_string());
                    }
                },
                None => {
                    app.status_message = Some("no file attached".to_string());
                }
            }
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attachment, FolioConfig, Portfolio, ProjectDraft};
    use tempfile::TempDir;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn app_with_attachment(attachment: Option<Attachment>) -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let mut portfolio = Portfolio::default();
        let id = portfolio.allocate_id();
        portfolio.projects.push(
            ProjectDraft {
                name: "Site".into(),
                attachment,
                ..Default::default()
            }
            .into_project(id),
        );
        let mut app = App::new(dir.path().to_path_buf(), portfolio, FolioConfig::default());
        app.open_detail();
        (dir, app)
    }

    #[test]
    fn esc_closes_without_side_effects() {
        let (_dir, mut app) = app_with_attachment(None);
        let before = app.portfolio.clone();
        handle_detail(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.detail.is_none());
        assert_eq!(app.portfolio, before);
    }

    #[test]
    fn s_writes_the_original_file_name() {
        let attachment = Attachment {
            file_name: "notes.txt".into(),
            data_uri: "data:text/plain;base64,aGVsbG8=".into(),
        };
        let (dir, mut app) = app_with_attachment(Some(attachment));
        handle_detail(&mut app, key('s'));

        let written = dir.path().join("notes.txt");
        assert_eq!(std::fs::read_to_string(written).unwrap(), "hello");
    }

    #[test]
    fn s_without_attachment_reports() {
        let (_dir, mut app) = app_with_attachment(None);
        handle_detail(&mut app, key('s'));
        assert_eq!(app.status_message.as_deref(), Some("no file attached"));
    }
}
