//! Terminal UI.
//!
//! Model-view-update: `App` holds every piece of screen state, `update`
//! applies one `Message` at a time, and `render` draws from `App` alone.
//!
//! Submodules:
//! - state: App struct
//! - update: messages and the transition function
//! - input: keyboard to message mapping
//! - render: drawing
//! - events: channel payloads for the main loop
//! - runner: terminal setup and main loop

mod events;
mod input;
mod render;
mod runner;
mod state;
mod update;

pub use events::AppEvent;
pub use input::message_for_key;
pub use render::{render, styled_lines, SPINNER_FRAMES};
pub use runner::{handle_event, run};
pub use state::App;
pub use update::{update, Message};
