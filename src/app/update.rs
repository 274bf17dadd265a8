//! Messages and the state transition function.

use crate::core::palette::Swatch;
use crate::core::picker::{CursorMove, PickerKind};
use crate::domain::model::Resume;
use crate::utils::error::Result;

use super::render::SPINNER_FRAMES;
use super::state::App;

#[derive(Debug)]
pub enum Message {
    FetchCompleted(Result<Resume>),
    TogglePicker(PickerKind),
    MoveCursor(CursorMove),
    SelectColor(usize),
    SelectHighlighted,
    ClosePicker,
    IncreaseFont,
    DecreaseFont,
    SetFontSize(f32),
    ScrollUp(u16),
    ScrollDown(u16),
    Tick,
    Quit,
}

pub fn update(app: &mut App, message: Message) {
    match message {
        Message::FetchCompleted(result) => {
            app.fetch.complete(result);
        }
        Message::TogglePicker(kind) => app.pickers.toggle(kind),
        Message::MoveCursor(direction) => app.pickers.move_cursor(direction),
        Message::SelectColor(index) => {
            let picked = app.pickers.select(index);
            apply_pick(app, picked);
        }
        Message::SelectHighlighted => {
            let picked = app.pickers.select_highlighted();
            apply_pick(app, picked);
        }
        Message::ClosePicker => app.pickers.close(),
        Message::IncreaseFont => app.style.font_size.increase(),
        Message::DecreaseFont => app.style.font_size.decrease(),
        Message::SetFontSize(value) => app.style.font_size.set(value),
        Message::ScrollUp(rows) => app.scroll = app.scroll.saturating_sub(rows),
        Message::ScrollDown(rows) => app.scroll = app.scroll.saturating_add(rows),
        Message::Tick => {
            if app.fetch.is_loading() {
                app.spinner_frame = (app.spinner_frame + 1) % SPINNER_FRAMES.len();
            }
        }
        Message::Quit => app.should_quit = true,
    }
    // Font size changes the card height, so re-check after every message.
    app.clamp_scroll();
}

fn apply_pick(app: &mut App, picked: Option<(PickerKind, Swatch)>) {
    let Some((kind, swatch)) = picked else {
        return;
    };
    tracing::debug!("Picked {} for {:?}", swatch.name, kind);
    match kind {
        PickerKind::Font => app.style.font_color = swatch.color,
        PickerKind::Background => app.style.background = swatch.color,
    }
}
