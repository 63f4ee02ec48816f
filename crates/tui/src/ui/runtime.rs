//! Runtime: terminal lifecycle and the async event loop.
//!
//! Responsibilities
//! - Own the terminal lifecycle (raw mode, alternate screen, mouse capture).
//! - Read terminal input from the crossterm `EventStream`. Ctrl+C arrives
//!   there as a key event while raw mode is on.
//! - Run the one-time menu load in the background and feed its outcome back
//!   into the view state as a message.
//! - Re-render after every handled event.
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::{StreamExt, stream::FuturesUnordered};
use menubar_store::{LOAD_FAILURE_MESSAGE, LoadError, MenuDataStore};
use menubar_types::{Effect, MenuCollection, Msg};
use ratatui::{Terminal, prelude::*};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::app::App;
use crate::ui::shell::NavigationShell;

type CrosstermTerminal = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut CrosstermTerminal, app: &mut App, shell: &mut NavigationShell) -> Result<()> {
    terminal.draw(|frame| shell.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, shell: &mut NavigationShell, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => shell.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) if mouse_event.kind == MouseEventKind::Moved => Vec::new(),
        Event::Mouse(mouse_event) => shell.handle_mouse_events(app, mouse_event),
        Event::Resize(..) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Translates the load outcome into the message the view state reacts to.
fn load_outcome_msg(outcome: Result<Result<MenuCollection, LoadError>, tokio::task::JoinError>) -> Msg {
    match outcome {
        Ok(Ok(collection)) => Msg::MenusLoaded(Box::new(collection)),
        Ok(Err(load_error)) => Msg::MenusFailed(load_error.user_message().to_string()),
        // Unreachable in release builds, where panics abort the process.
        Err(join_error) => {
            error!(error = %join_error, "Menu load task failed");
            Msg::MenusFailed(LOAD_FAILURE_MESSAGE.to_string())
        }
    }
}

/// Runs effects; returns `true` when the session should end.
fn process_effects(
    effects: Vec<Effect>,
    store: &MenuDataStore,
    pending_loads: &mut FuturesUnordered<JoinHandle<Result<MenuCollection, LoadError>>>,
) -> bool {
    for effect in effects {
        match effect {
            Effect::LoadMenus => {
                let store = store.clone();
                pending_loads.push(tokio::spawn(async move { store.load().await }));
            }
            Effect::Quit => return true,
        }
    }
    false
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal on every exit path.
pub async fn run_app(store: MenuDataStore) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, store).await;
    if let Err(e) = cleanup_terminal(&mut terminal) {
        warn!("Failed to restore terminal: {}", e);
    }
    result
}

async fn event_loop(terminal: &mut CrosstermTerminal, store: MenuDataStore) -> Result<()> {
    let mut events = EventStream::new();
    let mut app = App::new();
    let mut shell = NavigationShell::new();
    let mut pending_loads = FuturesUnordered::new();

    if process_effects(shell.start(), &store, &mut pending_loads) {
        return Ok(());
    }
    render(terminal, &mut app, &mut shell)?;

    loop {
        let effects = tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => handle_input_event(&mut app, &mut shell, event),
                    Some(Err(e)) => {
                        warn!("Failed to read terminal event: {}", e);
                        Vec::new()
                    }
                    None => {
                        info!("Terminal event stream closed");
                        break;
                    }
                }
            }
            Some(joined) = pending_loads.next(), if !pending_loads.is_empty() => {
                app.update(&load_outcome_msg(joined));
                Vec::new()
            }
        };

        if process_effects(effects, &store, &mut pending_loads) {
            break;
        }
        render(terminal, &mut app, &mut shell)?;
    }

    info!("Navigator shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use menubar_store::FileSource;
    use menubar_types::{MenuDocument, MenuLocations};

    fn collection() -> MenuCollection {
        let document: MenuDocument = serde_json::from_str(r#"{ "title": "A" }"#).expect("fixture");
        MenuCollection::new(document.clone(), document.clone(), document)
    }

    #[test]
    fn successful_load_becomes_loaded_message() {
        let msg = load_outcome_msg(Ok(Ok(collection())));
        assert!(matches!(msg, Msg::MenusLoaded(_)));
    }

    #[test]
    fn failed_load_becomes_user_facing_message() {
        let load_error = LoadError::Io {
            location: "menu1-data.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(load_outcome_msg(Ok(Err(load_error))), Msg::MenusFailed(LOAD_FAILURE_MESSAGE.to_string()));
    }

    #[test]
    fn ctrl_c_arrives_as_a_key_and_quits() {
        let mut app = App::new();
        let mut shell = NavigationShell::new();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let effects = handle_input_event(&mut app, &mut shell, ctrl_c);
        assert_eq!(effects, vec![Effect::Quit]);

        let store = MenuDataStore::new(Arc::new(FileSource::new(".", MenuLocations::default())));
        let mut pending_loads = FuturesUnordered::new();
        assert!(process_effects(effects, &store, &mut pending_loads));
        assert!(pending_loads.is_empty());
    }

    #[test]
    fn mouse_moves_are_ignored() {
        let mut app = App::new();
        let mut shell = NavigationShell::new();
        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert!(handle_input_event(&mut app, &mut shell, moved).is_empty());
    }

    #[tokio::test]
    async fn panicking_load_task_becomes_failure_message() {
        let outcome = tokio::spawn(async {
            if true {
                panic!("boom");
            }
            Ok::<_, LoadError>(collection())
        })
        .await;
        assert!(outcome.is_err());
        assert_eq!(load_outcome_msg(outcome), Msg::MenusFailed(LOAD_FAILURE_MESSAGE.to_string()));
    }
}
