use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::model::Technology;
use crate::tui::app::{App, FormField};
use crate::util::unicode::truncate_to_width;

/// Render the add/edit form in the main area
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let title = match app.form.pending_edit {
        Some(id) => format!(" Edit project {} ", id),
        None => " Add project ".to_string(),
    };
    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(theme.card_border).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(""));
    lines.push(text_field(app, FormField::Name, "name", &app.form.name));
    lines.push(text_field(
        app,
        FormField::StartDate,
        "start date",
        &app.form.start_date,
    ));
    lines.push(text_field(
        app,
        FormField::EndDate,
        "end date",
        &app.form.end_date,
    ));
    lines.push(text_field(
        app,
        FormField::Description,
        "description",
        &app.form.description,
    ));
    lines.push(tech_row(app));
    lines.push(attachment_field(app));

    let para = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(para, inner);
}

fn marker(app: &App, field: FormField) -> Span<'static> {
    let style = Style::default()
        .fg(app.theme.highlight)
        .bg(app.theme.background);
    if app.form.field == field {
        Span::styled("› ", style)
    } else {
        Span::styled("  ", style)
    }
}

fn text_field(app: &App, field: FormField, label: &str, value: &str) -> Line<'static> {
    let theme = &app.theme;
    let bg = theme.background;
    let focused = app.form.field == field;
    let value_style = if focused {
        Style::default().fg(theme.text_bright).bg(bg)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    let mut spans = vec![
        marker(app, field),
        Span::styled(
            format!("{:<12}", format!("{}:", label)),
            Style::default().fg(theme.dim).bg(bg),
        ),
        Span::styled(value.to_string(), value_style),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.highlight).bg(bg)));
    }
    Line::from(spans)
}

fn tech_row(app: &App) -> Line<'static> {
    let theme = &app.theme;
    let bg = theme.background;
    let focused_row = app.form.field == FormField::Technologies;

    let mut spans = vec![
        marker(app, FormField::Technologies),
        Span::styled(
            format!("{:<12}", "tech:"),
            Style::default().fg(theme.dim).bg(bg),
        ),
    ];
    for (idx, tech) in Technology::ALL.into_iter().enumerate() {
        let checked = app.form.technologies.contains(&tech);
        let box_str = if checked { "[x] " } else { "[ ] " };
        let mut style = Style::default().fg(theme.text).bg(bg);
        if checked {
            style = style.fg(theme.cyan);
        }
        if focused_row && idx == app.form.tech_cursor % Technology::ALL.len() {
            style = style.add_modifier(Modifier::UNDERLINED).fg(theme.text_bright);
        }
        spans.push(Span::styled(
            format!("{}{}  ", box_str, tech.label()),
            style,
        ));
    }
    Line::from(spans)
}

fn attachment_field(app: &App) -> Line<'static> {
    let theme = &app.theme;
    let bg = theme.background;
    let mut line = text_field(
        app,
        FormField::Attachment,
        "file",
        &app.form.attachment_path,
    );
    // Show what an untouched field keeps
    if app.form.attachment_path.is_empty()
        && let Some(att) = &app.form.pending_attachment
    {
        line.spans.push(Span::styled(
            truncate_to_width(&format!("(keeping {})", att.file_name), 40),
            Style::default().fg(theme.dim).bg(bg),
        ));
    }
    Line::from(line.spans)
}
