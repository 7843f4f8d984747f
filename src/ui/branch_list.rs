//! Rendu de la liste : deux lignes par entrée (libellé, description).

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, Entry, ROW_HEIGHT};
use crate::ui::common::style::{
    annotation_style, dim_style, highlight_style, normal_style, selection_bar_style,
};
use crate::ui::common::{display_width, truncate};

/// Largeur du préfixe de sélection ("│ ").
const GUTTER: u16 = 2;

/// Rend la page visible de la liste.
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let selected = state.list.selected_index();
    let label_width = usize::from(area.width.saturating_sub(GUTTER));

    for (row, (index, entry)) in state.list.page().enumerate() {
        let Ok(row) = u16::try_from(row) else {
            break;
        };
        let y = area.y.saturating_add(row.saturating_mul(ROW_HEIGHT));
        if y >= area.bottom() {
            break;
        }
        let height = (area.bottom() - y).min(ROW_HEIGHT - 1);
        let row_area = Rect::new(area.x, y, area.width, height);
        let is_selected = selected == Some(index);

        let editing_prompt = entry.is_create_prompt() && state.mode.is_editing();
        let label = if editing_prompt {
            render_input_label(frame, state, row_area)
        } else {
            truncate(&state.entry_label(entry), label_width)
        };

        let gutter = if is_selected {
            Span::styled("│ ", selection_bar_style())
        } else {
            Span::raw("  ")
        };
        let label_style = if is_selected {
            highlight_style()
        } else {
            normal_style()
        };

        let lines = vec![
            Line::from(vec![gutter.clone(), Span::styled(label, label_style)]),
            Line::from(vec![
                gutter,
                Span::styled(
                    truncate(entry.description(), label_width),
                    description_style(entry),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), row_area);
    }
}

/// Fenêtre visible du champ de saisie ; place le curseur du terminal.
fn render_input_label(frame: &mut Frame, state: &AppState, row_area: Rect) -> String {
    let Some(input) = state.mode.input() else {
        return String::new();
    };
    let width = state
        .viewport
        .input_width
        .min(row_area.width.saturating_sub(GUTTER + 1));
    let (text, cursor) = input.visible_window(usize::from(width));

    let before_cursor: String = text.chars().take(cursor).collect();
    let cursor_x = display_width(&before_cursor).saturating_add(row_area.x + GUTTER);
    if cursor_x < row_area.right() {
        frame.set_cursor_position(Position::new(cursor_x, row_area.y));
    }
    text
}

fn description_style(entry: &Entry) -> Style {
    match entry {
        Entry::CreatePrompt => dim_style(),
        Entry::Branch { annotation, .. } => annotation_style(*annotation),
    }
}
