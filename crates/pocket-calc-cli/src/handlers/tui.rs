//! `pocketcalc tui`: the interactive keypad calculator

use std::io;

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocket_calc::tui::{render, CalculatorApp, InputHandler};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};

use crate::error::{CliError, CliResult};

/// Runs a cleanup closure when dropped, whichever way the scope is left
struct RestoreOnDrop<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreOnDrop<F> {
    const fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Leaves raw mode, the alternate screen, and mouse capture.
///
/// Each step runs even if an earlier one fails.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "cannot disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
        tracing::warn!(error = %e, "cannot leave alternate screen");
    }
}

/// Runs the calculator until the user quits, restoring the terminal after
pub fn execute_tui() -> CliResult<()> {
    enable_raw_mode().map_err(|e| CliError::terminal(format!("cannot enable raw mode: {e}")))?;
    let _restore = RestoreOnDrop::new(restore_terminal);

    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| CliError::terminal(format!("cannot enter alternate screen: {e}")))?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    tracing::info!("calculator started");

    let mut app = CalculatorApp::new();
    let result = run_app(&mut terminal, &mut app, event::read);

    tracing::info!(display = app.state().display(), "calculator closed");
    result
}

/// Event loop: draw, read one event, apply it, until quit.
///
/// `next_event` is `crossterm::event::read` in production and a scripted
/// source in tests.
pub fn run_app<B, F>(terminal: &mut Terminal<B>, app: &mut CalculatorApp, mut next_event: F) -> CliResult<()>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        let mut frame_area = Rect::default();
        terminal.draw(|f| {
            frame_area = f.area();
            render(app, f);
        })?;

        match next_event()? {
            Event::Key(key) => app.apply_action(input_handler.handle_key(key)),
            Event::Mouse(mouse) => {
                app.handle_mouse(mouse, frame_area);
            }
            Event::Resize(width, height) => {
                tracing::trace!(width, height, "resized");
            }
            _ => {}
        }
    }

    Ok(())
}
