//! Application : terminal et boucle principale.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;

use crate::error::Result;
use crate::git::BranchBackend;
use crate::handler::EventHandler;
use crate::state::{AppState, ExitReason};

/// Application interactive de sélection de branches.
pub struct App {
    handler: EventHandler,
}

impl App {
    /// Prépare l'application ; le chargement des branches démarre avec `run`.
    pub fn new(backend: Arc<dyn BranchBackend>, repo_path: String) -> Self {
        let state = AppState::new(repo_path);
        Self {
            handler: EventHandler::new(state, backend),
        }
    }

    /// Lance la boucle principale dans l'écran alternatif.
    pub fn run(&mut self) -> Result<ExitReason> {
        let mut terminal = setup_terminal()?;

        let result = self.handler.run(&mut terminal);

        restore_terminal(&mut terminal)?;
        result
    }
}

/// Configure le terminal en mode raw + alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restaure le terminal à son état normal.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
