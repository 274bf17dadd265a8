//! Application state.
//!
//! Every piece of screen state is an explicit field here. Nothing mutates
//! it except `update::update`, apart from the renderer recording how many
//! card rows fit on screen.

use crate::core::fetch::FetchState;
use crate::core::picker::Pickers;
use crate::core::render::TextStyle;

use super::render::styled_lines;

pub struct App {
    pub fetch: FetchState,
    pub style: TextStyle,
    pub pickers: Pickers,
    /// First visible row of the resume card.
    pub scroll: u16,
    /// Card rows visible at the last draw. Zero before the first draw.
    pub viewport_rows: u16,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(style: TextStyle) -> Self {
        Self {
            fetch: FetchState::Loading,
            style,
            pickers: Pickers::default(),
            scroll: 0,
            viewport_rows: 0,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Rows the resume card needs at the current style. Zero until loaded.
    pub fn content_rows(&self) -> usize {
        self.fetch
            .resume()
            .map(|resume| styled_lines(resume, &self.style).len())
            .unwrap_or(0)
    }

    /// Largest scroll offset that still shows the end of the card.
    pub fn max_scroll(&self) -> u16 {
        let rows = u16::try_from(self.content_rows()).unwrap_or(u16::MAX);
        rows.saturating_sub(self.viewport_rows.max(1))
    }

    pub fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(TextStyle::default())
    }
}
