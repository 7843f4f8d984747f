//! Styles communs pour l'interface.

use ratatui::style::{Modifier, Style};

use crate::state::Annotation;
use crate::ui::theme::current_theme;

/// Style du cadre principal.
pub fn border_style() -> Style {
    Style::default().fg(current_theme().border)
}

/// Style pour le libellé de l'élément sélectionné.
pub fn highlight_style() -> Style {
    let theme = current_theme();
    Style::default()
        .fg(theme.selection_fg)
        .add_modifier(Modifier::BOLD)
}

/// Style de la barre verticale devant l'élément sélectionné.
pub fn selection_bar_style() -> Style {
    Style::default().fg(current_theme().selection_bar)
}

/// Style pour les titres.
pub fn title_style() -> Style {
    let theme = current_theme();
    Style::default()
        .fg(theme.primary)
        .add_modifier(Modifier::BOLD)
}

/// Style pour le texte normal.
pub fn normal_style() -> Style {
    Style::default().fg(current_theme().text_normal)
}

/// Style pour le texte désactivé/secondaire.
pub fn dim_style() -> Style {
    Style::default().fg(current_theme().text_secondary)
}

/// Style pour les messages flash.
pub fn flash_style() -> Style {
    let theme = current_theme();
    Style::default()
        .fg(theme.secondary)
        .add_modifier(Modifier::BOLD)
}

/// Style de la description d'une branche selon son annotation.
pub fn annotation_style(annotation: Annotation) -> Style {
    let theme = current_theme();
    match annotation {
        Annotation::Local => dim_style(),
        Annotation::Active => Style::default().fg(theme.success),
        Annotation::ConfirmDelete => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        Annotation::ConfirmForce => Style::default()
            .fg(theme.warning)
            .add_modifier(Modifier::BOLD),
    }
}
