use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::model::MediaKind;
use crate::ops::duration::format_duration;
use crate::tui::app::App;

use super::helpers::centered_rect;

/// Render the detail popup over the card grid. The full description and the
/// full technology list are shown here, untruncated.
pub fn render_detail_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(project) = app.detail.and_then(|id| app.portfolio.get(id)) else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.background;

    let popup = centered_rect(80, 80, area);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(format!(" {} ", project.name))
        .title_style(
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let text_style = Style::default().fg(theme.text).bg(bg);
    let dim_style = Style::default().fg(theme.dim).bg(bg);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Duration: {}",
            format_duration(project.start_date, project.end_date)
        ),
        text_style,
    )));

    let tech_text = if project.technologies.is_empty() {
        "(none)".to_string()
    } else {
        let labels: Vec<String> = project.technologies.iter().map(|t| t.label()).collect();
        labels.join(", ")
    };
    lines.push(Line::from(Span::styled(
        format!("Technologies: {}", tech_text),
        text_style,
    )));

    match &project.attachment {
        Some(att) => {
            let (marker, color) = match att.media_kind() {
                MediaKind::Image => ("▞ img", theme.green),
                MediaKind::Pdf => ("▤ pdf", theme.red),
                MediaKind::Document => ("▥ doc", theme.yellow),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}  {}  ", marker, att.file_name),
                    Style::default().fg(color).bg(bg),
                ),
                Span::styled("(s to save)", dim_style),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled("No file attached.", dim_style)));
        }
    }

    if !project.description.is_empty() {
        lines.push(Line::from(""));
        for raw in project.description.lines() {
            lines.push(Line::from(Span::styled(raw.to_string(), text_style)));
        }
    }

    let para = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
