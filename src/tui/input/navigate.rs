use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            let count = app.visible().len();
            if count > 0 && app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            let count = app.visible().len();
            app.cursor = count.saturating_sub(1);
        }

        // Record actions
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('n')) => app.begin_create(),
        (KeyModifiers::NONE, KeyCode::Char('e')) => app.begin_edit(),
        (KeyModifiers::NONE, KeyCode::Char('d')) => app.request_delete(),
        (KeyModifiers::NONE, KeyCode::Enter) => app.open_detail(),

        // View controls
        (KeyModifiers::NONE, KeyCode::Char('s')) => app.cycle_sort(),
        (KeyModifiers::SHIFT, KeyCode::Char('S')) => app.clear_sort(),
        (KeyModifiers::NONE, KeyCode::Char('f')) => app.cycle_filter(),
        (KeyModifiers::SHIFT, KeyCode::Char('F')) => app.clear_filter(),
        (KeyModifiers::NONE, KeyCode::Char('t')) => app.toggle_theme(),
        (KeyModifiers::NONE, KeyCode::Char('v')) => app.toggle_layout(),

        _ => {}
    }
}
