//! Terminal User Interface (TUI) for flowtime.
//!
//! Shows the running session and noise controls, and keeps the terminal
//! title in step with the timer. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, InputMode};
pub use event::{handle_key, Action};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use crate::cli::args::TuiArgs;
use crate::config::Config;
use crate::core::Clock;
use crate::error::FlowtimeError;
use crate::features::flowtime::{SessionClock, APP_TITLE};
use crate::features::noise::{open_default_sink, NoiseGenerator};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(args: &TuiArgs, config: &Config) -> Result<(), FlowtimeError> {
    let mut app = App::new(
        SessionClock::system(),
        NoiseGenerator::new(open_default_sink(config.noise.sample_rate)),
    );
    prepare(&mut app, args, config);

    enable_raw_mode()
        .map_err(|e| FlowtimeError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FlowtimeError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FlowtimeError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, &mut app);

    app.stop_noise();
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, SetTitle(APP_TITLE)).ok();
    terminal.show_cursor().ok();

    result
}

/// Apply startup options: volume, noise and an initial task.
fn prepare<C: Clock>(app: &mut App<C>, args: &TuiArgs, config: &Config) {
    if let Err(e) = app.set_volume(config.noise.volume) {
        app.message = Some(e.to_string());
    }

    if let Some(kind) = args.noise.or(config.noise.default_kind) {
        if let Err(e) = app.play_noise(kind) {
            warn!(error = %e, "startup noise unavailable");
            app.message = Some(e.to_string());
        }
    }

    if let Some(task) = &args.task {
        if let Err(e) = app.start_work(task) {
            app.message = Some(e.to_string());
        }
    }
}

/// Run the main application loop.
fn run_app<B, C>(terminal: &mut Terminal<B>, app: &mut App<C>) -> Result<(), FlowtimeError>
where
    B: Backend + io::Write,
    C: Clock,
{
    info!("tui started");
    let mut shown_title = String::new();

    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FlowtimeError::Terminal(format!("Failed to draw: {e}")))?;

        let title = app.display().title.clone();
        if title != shown_title {
            execute!(terminal.backend_mut(), SetTitle(&title))
                .map_err(|e| FlowtimeError::Terminal(format!("Failed to set title: {e}")))?;
            shown_title = title;
        }

        if let Some(action) = event::handle_events(app)? {
            dispatch(app, action);
        }
        app.poll_tick();
    }

    info!("tui closed");
    Ok(())
}

/// Apply an action to the app.
pub fn dispatch<C: Clock>(app: &mut App<C>, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::StartEditing => app.begin_editing(),
        Action::Submit => app.submit_task(),
        Action::CancelEditing => app.cancel_editing(),
        Action::Break => app.take_break(),
        Action::Stop => app.stop_timer(),
        Action::ToggleNoise(kind) => app.toggle_noise(kind),
        Action::Silence => app.stop_noise(),
        Action::Volume(delta) => app.change_volume(delta),
    }
}
