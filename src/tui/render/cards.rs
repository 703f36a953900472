use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::model::{MediaKind, Project};
use crate::ops::duration::format_duration;
use crate::tui::app::{App, CardLayout};
use crate::tui::theme::Theme;
use crate::util::unicode::{preview, truncate_to_width};

const CARD_HEIGHT: u16 = 9;
/// Characters of description shown on a card
const PREVIEW_CHARS: usize = 100;

/// Render the card grid for the current visible list
pub fn render_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.visible();
    if visible.is_empty() {
        let message = Paragraph::new("No projects yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background))
            .alignment(Alignment::Center);
        frame.render_widget(message, area);
        return;
    }

    let columns: usize = match app.layout {
        CardLayout::Grid if area.width >= 64 => 2,
        _ => 1,
    };
    let col_width = area.width / columns as u16;
    let rows_on_screen = (area.height / CARD_HEIGHT).max(1) as usize;
    let total_rows = visible.len().div_ceil(columns);

    // Keep the selected card on screen
    let cursor_row = app.cursor / columns;
    if cursor_row < app.scroll_offset {
        app.scroll_offset = cursor_row;
    } else if cursor_row >= app.scroll_offset + rows_on_screen {
        app.scroll_offset = cursor_row + 1 - rows_on_screen;
    }
    app.scroll_offset = app.scroll_offset.min(total_rows.saturating_sub(1));

    for (idx, project) in visible.iter().enumerate() {
        let row = idx / columns;
        if row < app.scroll_offset || row >= app.scroll_offset + rows_on_screen {
            continue;
        }
        let y = area.y + (row - app.scroll_offset) as u16 * CARD_HEIGHT;
        let rect = Rect {
            x: area.x + (idx % columns) as u16 * col_width,
            y,
            width: col_width,
            height: CARD_HEIGHT.min(area.bottom().saturating_sub(y)),
        };
        render_card(frame, &app.theme, rect, project, idx, idx == app.cursor);
    }
}

fn render_card(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    project: &Project,
    position: usize,
    selected: bool,
) {
    if area.height < 3 || area.width < 4 {
        return;
    }
    let bg = theme.background;
    let border = if selected {
        theme.selection_border
    } else {
        theme.card_border
    };
    let block = Block::bordered()
        .border_style(Style::default().fg(border).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(banner_line(theme, project, position, width));

    lines.push(Line::from(Span::styled(
        truncate_to_width(&project.name, width),
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));

    lines.push(Line::from(Span::styled(
        truncate_to_width(
            &format!(
                "Duration: {}",
                format_duration(project.start_date, project.end_date)
            ),
            width,
        ),
        Style::default().fg(theme.text).bg(bg),
    )));

    // First 100 characters of the description; the record keeps the rest
    for line in wrap_to_lines(&preview(&project.description, PREVIEW_CHARS), width, 2) {
        lines.push(Line::from(Span::styled(
            line,
            Style::default().fg(theme.dim).bg(bg),
        )));
    }
    while lines.len() < 5 {
        lines.push(Line::from(""));
    }

    if !project.technologies.is_empty() {
        let slugs: Vec<&str> = project.technologies.iter().map(|t| t.slug()).collect();
        lines.push(Line::from(Span::styled(
            truncate_to_width(&slugs.join(" · "), width),
            Style::default().fg(theme.cyan).bg(bg),
        )));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), inner);
}

/// Attachment preview keyed by media kind, or a placeholder strip whose color
/// is picked deterministically from the card's position.
fn banner_line(theme: &Theme, project: &Project, position: usize, width: usize) -> Line<'static> {
    let bg = theme.background;
    match &project.attachment {
        Some(att) => {
            let (marker, color) = match att.media_kind() {
                MediaKind::Image => ("▞ img", theme.green),
                MediaKind::Pdf => ("▤ pdf", theme.red),
                MediaKind::Document => ("▥ doc", theme.yellow),
            };
            Line::from(Span::styled(
                truncate_to_width(&format!("{}  {}", marker, att.file_name), width),
                Style::default().fg(color).bg(bg),
            ))
        }
        None => {
            let color = theme.placeholder[position % theme.placeholder.len()];
            Line::from(Span::styled(
                "▒".repeat(width),
                Style::default().fg(color).bg(bg),
            ))
        }
    }
}

/// Break text into at most `max_lines` width-limited lines. Overflow beyond
/// the last line is dropped; the preview ellipsis has already been applied.
fn wrap_to_lines(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut cells = 0;
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if cells + gw > width {
            lines.push(std::mem::take(&mut current));
            cells = 0;
            if lines.len() == max_lines {
                return lines;
            }
        }
        current.push_str(grapheme);
        cells += gw;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_splits_at_width() {
        let lines = wrap_to_lines("abcdef", 3, 2);
        assert_eq!(lines, vec!["abc", "def"]);
    }

    #[test]
    fn wrap_drops_overflow_past_max_lines() {
        let lines = wrap_to_lines("abcdefghi", 3, 2);
        assert_eq!(lines, vec!["abc", "def"]);
    }

    #[test]
    fn wrap_empty_is_empty() {
        assert!(wrap_to_lines("", 10, 2).is_empty());
    }
}
