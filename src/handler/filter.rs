//! Handler pour le filtre de la liste.

use super::traits::{ActionHandler, HandlerContext};
use crate::error::Result;
use crate::state::action::FilterAction;
use crate::state::AppState;

/// Handler pour les opérations de filtrage.
pub struct FilterHandler;

impl ActionHandler for FilterHandler {
    type Action = FilterAction;

    fn can_handle(&self, state: &AppState, _action: &FilterAction) -> bool {
        state.mode.is_browsing()
    }

    fn handle(&mut self, ctx: &mut HandlerContext, action: FilterAction) -> Result<()> {
        if !self.can_handle(ctx.state, &action) {
            return Ok(());
        }

        let list = &mut ctx.state.list;
        match action {
            FilterAction::Open => list.open_filter(),
            FilterAction::InsertChar(c) => list.filter_insert(c),
            FilterAction::DeleteChar => list.filter_delete(),
            FilterAction::Clear => list.clear_filter(),
        }
        Ok(())
    }
}
