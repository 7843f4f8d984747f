//! Gestionnaires d'événements et d'actions.
//!
//! Chaque handler spécialisé gère un domaine fonctionnel ; le dispatcher route
//! les actions produites par le clavier et par la fin des tâches backend.

pub mod branch;
pub mod completion;
pub mod dispatcher;
pub mod edit;
pub mod filter;
pub mod navigation;
pub mod traits;

#[cfg(test)]
mod tests;

pub use branch::BranchHandler;
pub use completion::CompletionHandler;
pub use dispatcher::ActionDispatcher;
pub use edit::EditHandler;
pub use filter::FilterHandler;
pub use navigation::NavigationHandler;
pub use traits::{ActionHandler, HandlerContext};

use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;

use crate::error::Result;
use crate::git::BranchBackend;
use crate::state::{AppAction, AppState, ExitReason};
use crate::task::{TaskResult, TaskRunner};
use crate::ui;
use crate::ui::input::handle_input_with_timeout;

/// Gestionnaire principal de la boucle événementielle.
pub struct EventHandler {
    state: AppState,
    dispatcher: ActionDispatcher,
    runner: TaskRunner,
    results: Receiver<TaskResult>,
}

impl EventHandler {
    /// Crée un nouveau gestionnaire d'événements.
    pub fn new(state: AppState, backend: Arc<dyn BranchBackend>) -> Self {
        let (runner, results) = TaskRunner::new(backend);
        Self {
            state,
            dispatcher: ActionDispatcher::new(),
            runner,
            results,
        }
    }

    /// Lance la boucle événementielle principale.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<ExitReason> {
        let size = terminal.size()?;
        self.state.resize(size.width, size.height);

        // Chargement initial ; l'entrée de création est seule en attendant.
        self.state.request_reload();
        self.spawn_pending();

        loop {
            terminal.draw(|frame| {
                ui::render(frame, &self.state);
            })?;

            // Rafraîchir plus souvent quand un résultat est attendu.
            let timeout_ms = if self.state.flash_message.is_some() || self.state.is_busy() {
                50
            } else {
                100
            };

            if let Some(action) = handle_input_with_timeout(&self.state, timeout_ms)? {
                self.dispatcher.dispatch(&mut self.state, action)?;
            }

            self.drain_results()?;
            self.spawn_pending();
            self.state.check_flash_expired();

            if let Some(reason) = self.state.exit.take() {
                return Ok(reason);
            }
        }
    }

    /// Transmet à la machine à états les résultats arrivés depuis le dernier tour.
    fn drain_results(&mut self) -> Result<()> {
        loop {
            match self.results.try_recv() {
                Ok(result) => {
                    self.dispatcher
                        .dispatch(&mut self.state, AppAction::TaskCompleted(result))?;
                }
                // Le runner garde un émetteur : le canal ne se ferme pas ici.
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }
    }

    fn spawn_pending(&mut self) {
        for task in self.state.take_tasks() {
            self.runner.spawn(task);
        }
    }
}
