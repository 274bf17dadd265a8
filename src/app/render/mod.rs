//! UI rendering.
//!
//! The screen is a resume area on top and a control strip at the bottom:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ resume card / spinner / error│
//! ├──────────────────────────────┤
//! │ Font Size: 16sp              │
//! │ ━━━━━━━━━━───────────────────│
//! │ (open picker grid)           │
//! │ [ Font Color ] [ Bg Color ]  │
//! └──────────────────────────────┘
//! ```

mod card;
mod controls;
mod layout;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::core::palette::Rgb;

use super::state::App;

pub use card::styled_lines;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the whole screen.
pub fn render(app: &mut App, frame: &mut ratatui::Frame) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(controls::height(app)),
        ])
        .split(area);

    card::render_content(app, frame, layout::inset_horizontal(chunks[0], 1));
    controls::render_controls(app, frame, chunks[1]);
}

pub(crate) fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
