use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::core::fetch::FetchState;
use crate::core::render::{resume_lines, LineKind, TextStyle};
use crate::domain::model::Resume;

use super::super::state::App;
use super::layout::centered_rect;
use super::{to_color, SPINNER_FRAMES};

/// Render whichever of spinner, error or resume card applies.
pub(super) fn render_content(app: &mut App, frame: &mut ratatui::Frame, area: Rect) {
    match &app.fetch {
        FetchState::Loading => render_spinner(app, frame, area),
        FetchState::Failed(message) => render_error(frame, area, message),
        FetchState::Loaded(_) => render_card(app, frame, area),
    }
}

fn render_spinner(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let rect = centered_rect(100, 1, area);
    let glyph = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let spinner = Paragraph::new(Line::from(vec![
        Span::styled(glyph, Style::default().fg(Color::White)),
        Span::styled(" Loading resume...", Style::default().fg(Color::White)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(spinner, rect);
}

fn render_error(frame: &mut ratatui::Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_card(app: &mut App, frame: &mut ratatui::Frame, area: Rect) {
    let Some(resume) = app.fetch.resume() else {
        return;
    };
    let lines = styled_lines(resume, &app.style);

    // Inside the border.
    app.viewport_rows = area.height.saturating_sub(2);
    app.clamp_scroll();

    let background = to_color(app.style.background);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray).bg(background))
        .style(Style::default().bg(background));

    let card = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(card, area);
}

/// Resume lines in the card's colors, with spacing scaled by the font size.
pub fn styled_lines(resume: &Resume, style: &TextStyle) -> Vec<Line<'static>> {
    let body = Style::default()
        .fg(to_color(style.font_color))
        .bg(to_color(style.background));
    let heading = body.add_modifier(Modifier::BOLD);
    let body_gap = style.font_size.line_gap();
    let heading_gap = style.font_size.heading_gap();

    let mut lines = Vec::new();
    for line in resume_lines(resume) {
        // The heading and its rule stay together; the gap follows the rule.
        let (span_style, gap) = match line.kind {
            LineKind::Heading => (heading, 0),
            LineKind::Rule => (heading, heading_gap),
            LineKind::Body => (body, body_gap),
            LineKind::Spacer => {
                lines.push(Line::raw(""));
                continue;
            }
        };
        lines.push(Line::from(Span::styled(line.text, span_style)));
        lines.extend(std::iter::repeat(Line::raw("")).take(gap));
    }
    lines
}
