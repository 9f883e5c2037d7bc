// TUI module - Terminal User Interface
//
// Manages the terminal with ratatui: setup and cleanup, the event loop
// (keyboard input, timer ticks), and rendering. Frames are drawn only
// when something requested a redraw - model change listeners, input
// handlers, and terminal resizes all set the App's redraw flag.

pub mod app;
pub mod components;
pub mod theme;
pub mod traits;
pub mod views;

use anyhow::{Context as _, Result};
use app::{App, View};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use traits::{Handled, Interactive};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done - including when the loop returns an error.
pub async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on keyboard input and a periodic tick at once.
/// A frame is drawn at the top of each iteration only when the redraw
/// flag is set; the quiz model's change notifications set it, so a
/// mutation is always followed by a fresh frame.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        if app.take_redraw() {
            terminal
                .draw(|f| views::draw(f, app))
                .context("Failed to draw terminal")?;
        }

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Resize(_, _)) => app.request_redraw(),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick keeps the loop responsive to redraw requests
            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: global keys first, then the focused component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    // Help view absorbs everything else; any key returns to the quiz
    if app.view == View::Help {
        app.toggle_help();
        return;
    }

    if app.quiz.handle_key(key_event) == Handled::Yes {
        app.request_redraw();
    }
}

/// Handle global keys - returns true if handled.
/// These work the same regardless of current view.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            true
        }
        // Question navigation
        KeyCode::Right | KeyCode::Char('n') => {
            app.next_question();
            true
        }
        KeyCode::Left | KeyCode::Char('p') => {
            app.prev_question();
            true
        }
        // Theme cycling
        KeyCode::Char('t') => {
            app.next_theme();
            true
        }
        // Help
        KeyCode::Char('?') => {
            app.toggle_help();
            true
        }
        _ => false,
    }
}
