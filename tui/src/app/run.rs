use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use model::Artifact;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::state::form::{self, Action, FormState};
use crate::ui::draw;

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the dashboard event loop.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails, or if the
/// artifact rejects a prediction. The guard restores the terminal before
/// the error reaches the caller.
pub fn run(artifact: Artifact) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut state = FormState::new(artifact);

    loop {
        terminal.draw(|f| draw::draw(f, &state))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match form::handle_key(&mut state, k.code)? {
                    Action::Quit => break,
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
