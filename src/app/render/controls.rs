use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, LineGauge, Paragraph};

use crate::core::palette::PALETTE;
use crate::core::picker::{PickerKind, PICKER_COLUMNS};

use super::super::state::App;
use super::to_color;

const STRIP_BG: Color = Color::Rgb(0x12, 0x12, 0x12);

fn picker_rows() -> u16 {
    PALETTE.len().div_ceil(PICKER_COLUMNS) as u16
}

/// Rows the control strip needs: top border, size label, gauge, buttons,
/// plus the picker title and grid when one is open.
pub(super) fn height(app: &App) -> u16 {
    let base = 4;
    if app.pickers.active().is_some() {
        base + 1 + picker_rows()
    } else {
        base
    }
}

pub(super) fn render_controls(app: &App, frame: &mut ratatui::Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(STRIP_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let picker_height = if app.pickers.active().is_some() {
        1 + picker_rows()
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(picker_height),
            Constraint::Length(1),
        ])
        .split(inner);

    let label = Paragraph::new(Line::from(Span::styled(
        app.style.font_size.to_string(),
        Style::default().fg(Color::Gray),
    )));
    frame.render_widget(label, chunks[0]);

    let gauge = LineGauge::default()
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray))
        .line_set(symbols::line::THICK)
        .label("")
        .ratio(app.style.font_size.ratio());
    frame.render_widget(gauge, chunks[1]);

    if let Some(kind) = app.pickers.active() {
        render_picker(app, kind, frame, chunks[2]);
    }

    frame.render_widget(Paragraph::new(button_line(app)), chunks[3]);
}

fn button_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, kind) in [PickerKind::Font, PickerKind::Background].iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if app.pickers.is_open(*kind) {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };
        let key = match kind {
            PickerKind::Font => 'f',
            PickerKind::Background => 'b',
        };
        spans.push(Span::styled(
            format!(" {} ({}) ", kind.button_label(), key),
            style,
        ));
    }
    Line::from(spans)
}

fn render_picker(app: &App, kind: PickerKind, frame: &mut ratatui::Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        kind.title(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];

    for (row_idx, swatches) in PALETTE.chunks(PICKER_COLUMNS).enumerate() {
        let mut spans = Vec::new();
        for (col_idx, swatch) in swatches.iter().enumerate() {
            let idx = row_idx * PICKER_COLUMNS + col_idx;
            let (open, close) = if idx == app.pickers.cursor() {
                ("[", "]")
            } else {
                (" ", " ")
            };
            spans.push(Span::styled(open, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                "    ",
                Style::default().bg(to_color(swatch.color)),
            ));
            spans.push(Span::styled(close, Style::default().fg(Color::White)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
