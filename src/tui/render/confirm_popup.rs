use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

/// Small centered y/n prompt for a pending delete
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(confirm) = &app.confirm else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.background;

    let width = (area.width.saturating_sub(4)).min(50);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height / 2).saturating_sub(2),
        width,
        height: 4,
    };
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_style(Style::default().fg(theme.red).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let question = truncate_to_width(
        &format!("Delete \"{}\"?", confirm.name),
        inner.width as usize,
    );
    let lines = vec![
        Line::from(Span::styled(
            question,
            Style::default().fg(theme.text_bright).bg(bg),
        )),
        Line::from(Span::styled(
            "y delete · n cancel",
            Style::default().fg(theme.dim).bg(bg),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(bg))
            .alignment(Alignment::Center),
        inner,
    );
}
