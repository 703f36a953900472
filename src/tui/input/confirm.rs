use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::reducer::{Command, Outcome};
use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let state = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(state) = state {
                match app.dispatch(Command::Delete(state.id)) {
                    Outcome::Deleted(project) => {
                        app.status_message = Some(format!("deleted \"{}\"", project.name));
                    }
                    Outcome::Rejected(reason) => {
                        // Record vanished between the prompt and the answer
                        app.status_message = Some(reason);
                    }
                    other => unreachable!("delete produced {:?}", other),
                }
                app.clamp_cursor();
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
