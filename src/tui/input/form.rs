use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Technology;
use crate::tui::app::{App, FormField, FormState, Mode};

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Leave the form; the pending edit is dropped with it
        (_, KeyCode::Esc) => {
            app.form = FormState::default();
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Tab) | (_, KeyCode::Down) => {
            app.form.field = app.form.field.next();
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            app.form.field = app.form.field.prev();
        }

        (_, KeyCode::Enter) => app.submit_form(),

        // Technologies row: space toggles, left/right move between boxes
        (_, KeyCode::Char(' ')) if app.form.field == FormField::Technologies => {
            app.form.toggle_tech();
        }
        (_, KeyCode::Left) if app.form.field == FormField::Technologies => {
            let len = Technology::ALL.len();
            app.form.tech_cursor = (app.form.tech_cursor + len - 1) % len;
        }
        (_, KeyCode::Right) if app.form.field == FormField::Technologies => {
            app.form.tech_cursor = (app.form.tech_cursor + 1) % Technology::ALL.len();
        }

        // Text entry
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if let Some(buffer) = app.form.active_buffer_mut() {
                buffer.push(c);
            }
        }
        (_, KeyCode::Backspace) => {
            if let Some(buffer) = app.form.active_buffer_mut() {
                buffer.pop();
            }
        }

        _ => {}
    }
}
