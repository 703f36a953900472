use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

/// Bottom row: status message or key hints on the left, view state on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let left = match &app.status_message {
        Some(msg) => msg.clone(),
        None => hints(app.mode).to_string(),
    };

    let sort_label = match app.sort {
        Some(key) => key.as_str(),
        None => "stored",
    };
    let count = app.visible().len();
    let right = format!(
        "sort: {} · filter: {} · {} project(s)",
        sort_label,
        app.filter.label(),
        count
    );

    let width = area.width as usize;
    let right_width = display_width(&right);
    let left_budget = width.saturating_sub(right_width + 2);
    let left = truncate_to_width(&left, left_budget);
    let padding = width.saturating_sub(display_width(&left) + right_width);

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(theme.text).bg(bg)),
        Span::styled(" ".repeat(padding), Style::default().bg(bg)),
        Span::styled(right, Style::default().fg(theme.dim).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

fn hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add · e edit · d delete · ⏎ detail · s sort · f filter · t theme · v layout · q quit",
        Mode::Form => "⏎ save · esc cancel · tab next field · space toggle tech",
        Mode::Confirm => "y delete · n cancel",
        Mode::Detail => "s save file · esc close",
    }
}
