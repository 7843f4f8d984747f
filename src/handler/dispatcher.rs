//! Dispatcher principal pour router les actions vers les handlers appropriés.

use crate::error::Result;
use crate::state::{AppAction, AppState, ExitReason};

use super::branch::BranchHandler;
use super::completion::CompletionHandler;
use super::edit::EditHandler;
use super::filter::FilterHandler;
use super::navigation::NavigationHandler;
use super::traits::{ActionHandler, HandlerContext};

/// Dispatcher qui route les actions vers les handlers appropriés.
pub struct ActionDispatcher {
    navigation: NavigationHandler,
    filter: FilterHandler,
    edit: EditHandler,
    branch: BranchHandler,
    completion: CompletionHandler,
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionDispatcher {
    /// Crée un nouveau dispatcher avec tous les handlers initialisés.
    pub fn new() -> Self {
        Self {
            navigation: NavigationHandler,
            filter: FilterHandler,
            edit: EditHandler,
            branch: BranchHandler,
            completion: CompletionHandler,
        }
    }

    /// Dispatche une action vers le handler approprié.
    pub fn dispatch(&mut self, state: &mut AppState, action: AppAction) -> Result<()> {
        let mut ctx = HandlerContext { state };

        match action {
            AppAction::Navigation(nav) => self.navigation.handle(&mut ctx, nav),
            AppAction::Filter(filter) => self.filter.handle(&mut ctx, filter),
            AppAction::Edit(edit) => self.edit.handle(&mut ctx, edit),
            AppAction::Branch(branch) => self.branch.handle(&mut ctx, branch),
            AppAction::TaskCompleted(result) => self.completion.handle(&mut ctx, result),

            AppAction::Quit => {
                ctx.state.quit(ExitReason::Quit);
                Ok(())
            }

            AppAction::Resize(width, height) => {
                ctx.state.resize(width, height);
                Ok(())
            }
        }
    }
}
