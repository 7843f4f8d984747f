pub mod branch_list;
pub mod common;
pub mod help_bar;
pub mod input;
pub mod layout;
pub mod status_bar;
pub mod theme;


use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::state::{AppState, FilterState};
use common::style::{border_style, dim_style, title_style};

/// Point d'entrée du rendu : cadre, titre, liste, statut, aide.
pub fn render(frame: &mut Frame, state: &AppState) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style());
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let layout = layout::build_layout(inner);

    render_title(frame, state, layout.title);
    branch_list::render(frame, state, layout.list);
    status_bar::render(frame, state, layout.status);
    help_bar::render(frame, state, layout.help);
}

/// Titre, remplacé par l'invite du filtre pendant sa saisie.
fn render_title(frame: &mut Frame, state: &AppState, area: Rect) {
    let line = match state.list.filter() {
        FilterState::Filtering { query } => {
            let line = Line::from(vec![
                Span::styled("Filtre : ", title_style()),
                Span::raw(query.clone()),
            ]);
            let cursor_x = area
                .x
                .saturating_add(u16::try_from(line.width()).unwrap_or(u16::MAX));
            if cursor_x < area.right() {
                frame.set_cursor_position((cursor_x, area.y));
            }
            line
        }
        FilterState::Applied { query } => Line::from(vec![
            Span::styled("Branches Git", title_style()),
            Span::styled(format!("  filtre : {}", query), dim_style()),
        ]),
        FilterState::Unfiltered => Line::from(vec![
            Span::styled("Branches Git", title_style()),
            Span::styled(format!("  {}", state.repo_path), dim_style()),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
