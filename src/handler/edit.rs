//! Handler pour les actions d'édition de texte.

use super::traits::{ActionHandler, HandlerContext};
use crate::error::Result;
use crate::state::action::EditAction;
use crate::state::AppState;

/// Handler pour la saisie du nom de la nouvelle branche.
///
/// Le libellé de l'entrée de création suit la saisie : il est dérivé du champ
/// par `AppState::entry_label`.
pub struct EditHandler;

impl ActionHandler for EditHandler {
    type Action = EditAction;

    fn handle(&mut self, ctx: &mut HandlerContext, action: EditAction) -> Result<()> {
        let Some(input) = ctx.state.mode.input_mut() else {
            return Ok(());
        };

        match action {
            EditAction::InsertChar(c) => input.insert(c),
            EditAction::DeleteCharBefore => input.delete_before(),
            EditAction::DeleteCharAfter => input.delete_after(),
            EditAction::CursorLeft => input.move_left(),
            EditAction::CursorRight => input.move_right(),
            EditAction::CursorHome => input.move_home(),
            EditAction::CursorEnd => input.move_end(),
        }

        // La sélection reste sur l'entrée de création.
        ctx.state.list.select_first();
        Ok(())
    }
}
