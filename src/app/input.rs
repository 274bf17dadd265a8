//! Keyboard handling.
//!
//! Keys are translated to `Message`s; arrows drive the picker cursor while a
//! picker is open and scroll the resume otherwise.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::font_size::{DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::core::picker::{CursorMove, PickerKind};

use super::state::App;
use super::update::Message;

const PAGE_ROWS: u16 = 10;

pub fn message_for_key(app: &App, key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    let picker_open = app.pickers.active().is_some();
    let message = match key.code {
        KeyCode::Char('q') => Message::Quit,
        KeyCode::Char('f') => Message::TogglePicker(PickerKind::Font),
        KeyCode::Char('b') => Message::TogglePicker(PickerKind::Background),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char(']') => Message::IncreaseFont,
        KeyCode::Char('-') | KeyCode::Char('[') => Message::DecreaseFont,
        KeyCode::Char('0') => Message::SetFontSize(DEFAULT_FONT_SIZE),
        KeyCode::Char('<') => Message::SetFontSize(MIN_FONT_SIZE),
        KeyCode::Char('>') => Message::SetFontSize(MAX_FONT_SIZE),
        KeyCode::Esc if picker_open => Message::ClosePicker,
        KeyCode::Enter if picker_open => Message::SelectHighlighted,
        KeyCode::Left if picker_open => Message::MoveCursor(CursorMove::Left),
        KeyCode::Right if picker_open => Message::MoveCursor(CursorMove::Right),
        KeyCode::Up if picker_open => Message::MoveCursor(CursorMove::Up),
        KeyCode::Down if picker_open => Message::MoveCursor(CursorMove::Down),
        KeyCode::Up => Message::ScrollUp(1),
        KeyCode::Down => Message::ScrollDown(1),
        KeyCode::PageUp => Message::ScrollUp(PAGE_ROWS),
        KeyCode::PageDown => Message::ScrollDown(PAGE_ROWS),
        KeyCode::Home => Message::ScrollUp(u16::MAX),
        KeyCode::End => Message::ScrollDown(u16::MAX),
        _ => return None,
    };
    Some(message)
}
