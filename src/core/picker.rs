use crate::core::palette::{Swatch, PALETTE};

/// Swatches per row in the picker grid.
pub const PICKER_COLUMNS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Font,
    Background,
}

impl PickerKind {
    pub fn title(&self) -> &'static str {
        match self {
            PickerKind::Font => "Choose Font Color",
            PickerKind::Background => "Choose Background Color",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            PickerKind::Font => "Font Color",
            PickerKind::Background => "Bg Color",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

/// The two color pickers. At most one is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pickers {
    active: Option<PickerKind>,
    cursor: usize,
}

impl Pickers {
    pub fn active(&self) -> Option<PickerKind> {
        self.active
    }

    pub fn is_open(&self, kind: PickerKind) -> bool {
        self.active == Some(kind)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Open `kind`, closing the other picker, or close it if already open.
    pub fn toggle(&mut self, kind: PickerKind) {
        if self.is_open(kind) {
            self.active = None;
        } else {
            self.active = Some(kind);
            self.cursor = 0;
        }
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn move_cursor(&mut self, direction: CursorMove) {
        if self.active.is_none() {
            return;
        }
        let len = PALETTE.len();
        self.cursor = match direction {
            CursorMove::Left => (self.cursor + len - 1) % len,
            CursorMove::Right => (self.cursor + 1) % len,
            CursorMove::Up => (self.cursor + len - PICKER_COLUMNS) % len,
            CursorMove::Down => (self.cursor + PICKER_COLUMNS) % len,
        };
    }

    /// Pick a swatch from the open picker and close it.
    pub fn select(&mut self, index: usize) -> Option<(PickerKind, Swatch)> {
        let kind = self.active?;
        let swatch = *PALETTE.get(index)?;
        self.active = None;
        Some((kind, swatch))
    }

    pub fn select_highlighted(&mut self) -> Option<(PickerKind, Swatch)> {
        self.select(self.cursor)
    }
}
