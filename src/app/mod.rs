//! Application runtime, event loop, and keyboard handling.

pub mod dispatch;
pub mod editor;
pub mod events;
pub mod state;

use crate::app::events::{WorkerMessage, spawn_load_catalogue, spawn_run_query};
use crate::app::state::AppState;
use crate::catalogue::Catalogue;
use crate::domain::{Route, StoreId};
#[cfg(feature = "harness")]
use crate::fixtures;
use crate::ui;
use anyhow::Context;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Runtime configuration provided by CLI flags and the config file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalogue: Option<PathBuf>,
    pub query: Option<String>,
    pub breakpoint: u16,
    #[cfg(feature = "harness")]
    pub demo: bool,
}

/// Shared runtime context for the event loop.
struct Runtime {
    catalogue: Option<Arc<Catalogue>>,
    /// Startup `--query` waiting for the catalogue to finish loading.
    pending_query: Option<String>,
}

/// Runs the interactive TUI application.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<WorkerMessage>();

    let (width, _) = crossterm::terminal::size().context("failed to query terminal size")?;
    let mut state = AppState::new(width, config.breakpoint);
    let mut runtime = Runtime {
        catalogue: None,
        pending_query: config.query.clone(),
    };

    #[cfg(feature = "harness")]
    if config.demo {
        let catalogue = fixtures::demo_catalogue();
        state.set_catalogue_label(format!("demo ({} products)", catalogue.len()));
        runtime.catalogue = Some(Arc::new(catalogue));
    }

    let needs_load = runtime.catalogue.is_none();
    if needs_load {
        let path = config
            .catalogue
            .clone()
            .context("no catalogue snapshot given; pass --catalogue <path>")?;
        state.begin_operation("Loading catalogue");
        spawn_load_catalogue(tx.clone(), path);
    } else if let Some(term) = runtime.pending_query.take() {
        dispatch_search_term(&mut state, &runtime, &tx, &term);
    }

    let mut terminal = setup_terminal()?;
    let result = run_event_loop(&mut terminal, &mut state, &mut runtime, &tx, &mut rx).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
    runtime: &mut Runtime,
    tx: &UnboundedSender<WorkerMessage>,
    rx: &mut UnboundedReceiver<WorkerMessage>,
) -> anyhow::Result<()> {
    loop {
        state.advance_spinner();

        while let Ok(message) = rx.try_recv() {
            process_worker_message(state, runtime, tx, message);
        }

        terminal.draw(|frame| ui::render(frame, state))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(60))? {
            match event::read()? {
                Event::Key(key_event) => {
                    if key_event.kind == KeyEventKind::Press {
                        handle_key_event(state, runtime, tx, key_event);
                    }
                }
                Event::Resize(width, _) => {
                    state.handle_resize(width);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn process_worker_message(
    state: &mut AppState,
    runtime: &mut Runtime,
    tx: &UnboundedSender<WorkerMessage>,
    message: WorkerMessage,
) {
    match message {
        WorkerMessage::CatalogueLoaded { label, result } => {
            state.end_operation();

            match result {
                Ok(catalogue) => {
                    state.error_message = None;
                    state.set_catalogue_label(format!("{label} ({} products)", catalogue.len()));
                    runtime.catalogue = Some(Arc::new(catalogue));

                    if let Some(term) = runtime.pending_query.take() {
                        dispatch_search_term(state, runtime, tx, &term);
                    }
                }
                Err(error) => {
                    state.set_catalogue_label(label);
                    state.error_message = Some(error);
                }
            }
        }
        WorkerMessage::QueryCompleted { path, results } => {
            state.end_operation();
            state.error_message = None;

            if let Some(screen) = state.results.as_mut()
                && screen.path == path
            {
                screen.set_results(results);
                state.route = Route::Results;
                return;
            }

            state.open_results(path, results);
        }
    }
}

fn handle_key_event(
    state: &mut AppState,
    runtime: &Runtime,
    tx: &UnboundedSender<WorkerMessage>,
    key: KeyEvent,
) {
    if state.is_search_focused() {
        handle_search_input_key_event(state, runtime, tx, key);
        return;
    }

    match state.route {
        Route::Home => handle_home_key_event(state, runtime, tx, key),
        Route::Results => handle_results_key_event(state, runtime, tx, key),
    }
}

fn handle_search_input_key_event(
    state: &mut AppState,
    runtime: &Runtime,
    tx: &UnboundedSender<WorkerMessage>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => state.blur_search(),
        KeyCode::Backspace => state.search_input.backspace(),
        KeyCode::Enter => {
            let raw = state.search_query().to_owned();
            state.blur_search();
            dispatch_search_term(state, runtime, tx, &raw);
        }
        KeyCode::Char(ch) => {
            if !ch.is_control() {
                state.search_input.push_char(ch);
            }
        }
        _ => {}
    }
}

fn handle_home_key_event(
    state: &mut AppState,
    runtime: &Runtime,
    tx: &UnboundedSender<WorkerMessage>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
        }
        KeyCode::Char('s') | KeyCode::Char('/') => state.focus_search(),
        KeyCode::Enter => {
            let raw = state.search_query().to_owned();
            dispatch_search_term(state, runtime, tx, &raw);
        }
        _ => {}
    }
}

fn handle_results_key_event(
    state: &mut AppState,
    runtime: &Runtime,
    tx: &UnboundedSender<WorkerMessage>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
        }
        KeyCode::Char('b') | KeyCode::Esc => state.back_to_home(),
        KeyCode::Char('s') | KeyCode::Char('/') => state.focus_search(),
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(screen) = state.results.as_mut() {
                screen.move_down();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(screen) = state.results.as_mut() {
                screen.move_up();
            }
        }
        KeyCode::Enter => {
            let raw = state.search_query().to_owned();
            dispatch_search_term(state, runtime, tx, &raw);
        }
        KeyCode::Char('r') => {
            if state.is_busy() {
                return;
            }

            let Some(screen) = state.results.as_ref() else {
                return;
            };
            let (term, path) = (screen.display_term.clone(), screen.path.clone());

            let Some(catalogue) = runtime.catalogue.clone() else {
                return;
            };
            state.error_message = None;
            state.begin_operation(format!("Refreshing \"{term}\""));
            spawn_run_query(tx.clone(), catalogue, term, path);
        }
        KeyCode::Char(ch) => {
            if let Some(store) = store_for_key(ch)
                && let Some(screen) = state.results.as_mut()
            {
                screen.toggle_store(store);
            }
        }
        _ => {}
    }
}

/// Trims, encodes, and dispatches a search term. Empty-after-trim input is
/// silently ignored.
fn dispatch_search_term(
    state: &mut AppState,
    runtime: &Runtime,
    tx: &UnboundedSender<WorkerMessage>,
    raw: &str,
) {
    if state.is_busy() {
        return;
    }

    let Some(path) = dispatch::search_path(raw) else {
        return;
    };
    let Some(catalogue) = runtime.catalogue.clone() else {
        return;
    };

    let term = raw.trim().to_owned();
    state.error_message = None;
    state.begin_operation(format!("Searching for \"{term}\""));
    spawn_run_query(tx.clone(), catalogue, term, path);
}

fn store_for_key(ch: char) -> Option<StoreId> {
    let index = ch.to_digit(10)? as usize;
    if index == 0 {
        return None;
    }
    StoreId::ALL.get(index - 1).copied()
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;

    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(out);
    let terminal = Terminal::new(backend).context("failed to create ratatui terminal")?;

    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("failed to leave alternate screen")?;

    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::store_for_key;
    use crate::domain::StoreId;

    #[test]
    fn number_keys_map_to_stores_in_order() {
        assert_eq!(store_for_key('1'), Some(StoreId::SuperValu));
        assert_eq!(store_for_key('5'), Some(StoreId::DunnesStores));
        assert_eq!(store_for_key('0'), None);
        assert_eq!(store_for_key('6'), None);
        assert_eq!(store_for_key('x'), None);
    }
}
