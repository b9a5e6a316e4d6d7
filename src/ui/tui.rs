// src/ui/tui.rs
//! Terminal setup and the frame loop. The loop doubles as the visualizer's
//! frame scheduler; quitting tears down the surface and the loop with it.

use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;

/// Frame budget: ~30 fps keeps the spectrum fluid without hogging the
/// terminal.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

pub fn run(paths: Vec<PathBuf>) -> Result<()> {
    // Build the app before touching the terminal so a startup error can't
    // leave the caller's shell in raw mode.
    let app = App::new(paths)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    let mut last_frame = Instant::now();
    let mut last_second = Instant::now();

    loop {
        terminal.draw(|f| app.draw(f))?;

        let timeout = FRAME_INTERVAL
            .checked_sub(last_frame.elapsed())
            .unwrap_or_default();
        if event::poll(timeout)? {
            if let CEvent::Key(key) = event::read()? {
                if app.on_key(key) {
                    return Ok(());
                }
            }
        }

        if last_frame.elapsed() >= FRAME_INTERVAL {
            last_frame = Instant::now();
            app.tick();
        }
        if last_second.elapsed() >= Duration::from_secs(1) {
            last_second = Instant::now();
            app.tick_elapsed();
        }
    }
}
