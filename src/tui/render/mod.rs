mod cards;
mod confirm_popup;
mod detail_popup;
mod form_view;
mod helpers;
mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::util::unicode::display_width;

use super::app::{App, Mode};

/// Top-level render: header, main area (cards or form), status row, overlays
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    helpers::fill_background(frame, area, app.theme.background);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, app, chunks[0]);

    match app.mode {
        Mode::Form => form_view::render_form(frame, app, chunks[1]),
        _ => cards::render_cards(frame, app, chunks[1]),
    }

    status_row::render_status_row(frame, app, chunks[2]);

    if app.mode == Mode::Detail {
        detail_popup::render_detail_popup(frame, app, chunks[1]);
    }
    if app.mode == Mode::Confirm {
        confirm_popup::render_confirm_popup(frame, app, chunks[1]);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let left = "[#] folio";
    let subtitle = " — project portfolio";
    let right = format!("{} · {}", app.theme_kind.as_str(), app.layout.as_str());

    let used = display_width(left) + display_width(subtitle) + display_width(&right);
    let padding = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(
            left,
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(subtitle, Style::default().fg(theme.dim).bg(bg)),
        Span::styled(" ".repeat(padding), Style::default().bg(bg)),
        Span::styled(right, Style::default().fg(theme.dim).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
