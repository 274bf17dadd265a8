//! Events delivered to the main loop.
//!
//! The input thread and the fetch task both send through one mpsc channel;
//! the loop handles them in arrival order.

use crossterm::event::KeyEvent;

use crate::domain::model::Resume;
use crate::utils::error::Result;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Resize,
    FetchCompleted(Result<Resume>),
}
