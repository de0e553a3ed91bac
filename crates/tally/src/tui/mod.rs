use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tally_core::TaskListStore;
use tracing::{Dispatch, info};

use crate::config::Config;

pub mod constants;
mod handlers;
mod input;
mod view;
mod visible;
mod widgets;

use self::constants::TUI_TICK_RATE_MS;
use self::view::Ui;

/// Launch the interactive TUI.
///
/// `dispatch` receives every tracing event emitted while the terminal is in
/// raw mode; stderr output would corrupt the screen.
pub fn run(config: &Config, dispatch: Dispatch) -> Result<()> {
    let time_format = config.display.time_format()?;
    let store = TaskListStore::with_filter(config.display.default_filter);
    let ui = Ui::new(store, config.tui.keybindings.clone(), time_format);

    let mut terminal = enter_terminal()?;
    let result = tracing::dispatcher::with_default(&dispatch, || {
        info!("tui started");
        let result = run_event_loop(&mut terminal, ui);
        info!(ok = result.is_ok(), "tui stopped");
        result
    });
    let restored = restore_terminal(&mut terminal);

    result.and(restored)
}

type Term = Terminal<CrosstermBackend<Stdout>>;

fn enter_terminal() -> Result<Term> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let entered = setup_terminal();
    if entered.is_err() {
        execute!(io::stdout(), LeaveAlternateScreen).ok();
        disable_raw_mode().ok();
    }
    entered
}

fn setup_terminal() -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Runs every teardown step even when an earlier one fails.
fn restore_terminal(terminal: &mut Term) -> Result<()> {
    let raw = disable_raw_mode().context("failed to disable raw mode");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen");
    let cursor = terminal.show_cursor().context("failed to show cursor");
    first_error([raw, screen, cursor])
}

fn first_error(steps: impl IntoIterator<Item = Result<()>>) -> Result<()> {
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

fn run_event_loop(terminal: &mut Term, mut ui: Ui) -> Result<()> {
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(TUI_TICK_RATE_MS);

    loop {
        terminal.draw(|f| ui.draw(f))?;
        if ui.should_quit {
            break;
        }

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();

        if event::poll(timeout)?
            && let CrosstermEvent::Key(key) = event::read()?
        {
            ui.handle_key(key);
        }

        if last_tick.elapsed() >= tick_rate {
            ui.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
