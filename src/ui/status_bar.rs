use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::AppState;
use crate::ui::common::style::{dim_style, flash_style};

/// Rend la ligne de statut : message flash, sinon compteurs.
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let line = match state.flash_text() {
        Some(msg) => Line::from(Span::styled(msg.to_string(), flash_style())),
        None => Line::from(Span::styled(status_text(state), dim_style())),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Compteurs affichés quand aucun message n'est actif.
pub fn status_text(state: &AppState) -> String {
    let total = state.list.branch_count();
    let mut text = if state.list.filter().query().is_some() {
        // L'entrée de création est toujours visible, elle ne compte pas.
        let shown = state.list.visible_len().saturating_sub(1);
        format!("{}/{} branches", shown, total)
    } else if total == 1 {
        "1 branche".to_string()
    } else {
        format!("{} branches", total)
    };

    if state.is_busy() {
        text.push_str(" · en cours…");
    }
    text
}
