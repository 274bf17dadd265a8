//! Terminal setup/teardown and the main event loop.
//!
//! Input arrives from a dedicated thread, the fetch result from a tokio task.
//! Both are funnelled through one mpsc channel into `update`.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::runtime::Handle;

use crate::adapters::http::HttpResumeApi;
use crate::config::Settings;
use crate::core::fetch::ResumeLoader;
use crate::core::ConfigProvider;

use super::events::AppEvent;
use super::input::message_for_key;
use super::state::App;
use super::update::{update, Message};

const TICK: Duration = Duration::from_millis(100);

/// Entry point: set up the terminal, run the loop, restore the terminal.
pub fn run(settings: &Settings, runtime: &Handle) -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, settings, runtime);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
    runtime: &Handle,
) -> io::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_input_thread(event_tx.clone());
    spawn_fetch(settings, runtime, event_tx);

    let mut app = App::new(settings.style);
    terminal.clear()?;

    while !app.should_quit {
        terminal.draw(|frame| super::render::render(&mut app, frame))?;

        match event_rx.recv_timeout(TICK) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => update(&mut app, Message::Tick),
            Err(RecvTimeoutError::Disconnected) => break,
        }
        // Drain any pending events before redraw
        while let Ok(event) = event_rx.try_recv() {
            handle_event(&mut app, event);
        }
    }
    tracing::info!("Quitting");
    Ok(())
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => {
            if let Some(message) = message_for_key(app, key) {
                update(app, message);
            }
        }
        AppEvent::Resize => {}
        AppEvent::FetchCompleted(result) => update(app, Message::FetchCompleted(result)),
    }
}

/// Start the single resume request. The outcome is always posted back, so the
/// loop never waits on the spinner forever.
fn spawn_fetch(settings: &Settings, runtime: &Handle, sender: Sender<AppEvent>) {
    let api = match HttpResumeApi::from_config(settings) {
        Ok(api) => api,
        Err(e) => {
            let _ = sender.send(AppEvent::FetchCompleted(Err(e)));
            return;
        }
    };
    let loader = ResumeLoader::new(api, settings.resume_name());
    runtime.spawn(async move {
        let result = loader.fetch().await;
        let _ = sender.send(AppEvent::FetchCompleted(result));
    });
}

/// Spawn a thread to read terminal input events.
fn spawn_input_thread(sender: Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                if sender.send(AppEvent::Input(key)).is_err() {
                    break;
                }
            }
            Ok(Event::Resize(_, _)) => {
                if sender.send(AppEvent::Resize).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ResumeError;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_handle_event_routes_keys() {
        let mut app = App::default();
        handle_event(
            &mut app,
            AppEvent::Input(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE)),
        );
        assert!(app.pickers.active().is_some());

        handle_event(
            &mut app,
            AppEvent::Input(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_bad_base_url_posts_failure() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let settings = Settings {
            base_url: "not a url".to_string(),
            ..Settings::default()
        };
        let (tx, rx) = mpsc::channel();

        spawn_fetch(&settings, runtime.handle(), tx);

        match rx.recv_timeout(Duration::from_secs(1)).unwrap() {
            AppEvent::FetchCompleted(Err(ResumeError::UrlError(_))) => {}
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
