//! Handler pour la navigation dans la liste.

use super::traits::{ActionHandler, HandlerContext};
use crate::error::Result;
use crate::state::action::NavigationAction;
use crate::state::AppState;

/// Handler pour les déplacements de la sélection.
pub struct NavigationHandler;

impl ActionHandler for NavigationHandler {
    type Action = NavigationAction;

    /// La sélection est figée pendant la saisie et la confirmation.
    fn can_handle(&self, state: &AppState, _action: &NavigationAction) -> bool {
        state.mode.is_browsing()
    }

    fn handle(&mut self, ctx: &mut HandlerContext, action: NavigationAction) -> Result<()> {
        if !self.can_handle(ctx.state, &action) {
            return Ok(());
        }

        let list = &mut ctx.state.list;
        match action {
            NavigationAction::MoveUp => list.select_previous(),
            NavigationAction::MoveDown => list.select_next(),
            NavigationAction::PageUp => list.page_up(),
            NavigationAction::PageDown => list.page_down(),
            NavigationAction::GoTop => list.select_first(),
            NavigationAction::GoBottom => list.select_last(),
        }
        Ok(())
    }
}
