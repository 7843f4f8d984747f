use ratatui::{layout::Rect, Frame};

use crate::state::{AppState, Mode};
use crate::ui::common::help_bar::bindings::*;
use crate::ui::common::{HelpBar, KeyBinding};

/// Rend la barre d'aide persistante, contextuelle au mode.
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    HelpBar::new(bindings_for(state)).render(frame, area);
}

/// Raccourcis utiles dans l'état courant.
pub fn bindings_for(state: &AppState) -> &'static [KeyBinding] {
    match &state.mode {
        Mode::Editing { .. } => &[CREATE, CANCEL],
        Mode::ConfirmingDelete {
            force_requested: false,
            ..
        } => &[CONFIRM, CANCEL],
        Mode::ConfirmingDelete {
            force_requested: true,
            ..
        } => &[FORCE, CANCEL],
        Mode::Browsing if state.list.is_filtering() => &[NAVIGATE, APPLY_FILTER, CLEAR_FILTER],
        Mode::Browsing => &[NAVIGATE, SELECT, NEW, DELETE, FILTER, RELOAD, QUIT],
    }
}
