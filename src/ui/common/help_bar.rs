//! Barre d'aide configurable.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::style::dim_style;
use crate::ui::theme::current_theme;

/// Un raccourci clavier à afficher.
pub struct KeyBinding {
    pub key: &'static str,
    pub description: &'static str,
}

impl KeyBinding {
    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }
}

/// Configuration de la barre d'aide.
pub struct HelpBar<'a> {
    bindings: &'a [KeyBinding],
    separator: &'a str,
}

impl<'a> HelpBar<'a> {
    /// Crée une nouvelle barre d'aide.
    pub fn new(bindings: &'a [KeyBinding]) -> Self {
        Self {
            bindings,
            separator: " • ",
        }
    }

    /// Définit le séparateur entre les bindings.
    pub fn separator(mut self, sep: &'a str) -> Self {
        self.separator = sep;
        self
    }

    /// Construit la ligne d'aide.
    pub fn line(&self) -> Line<'a> {
        let mut spans = Vec::with_capacity(self.bindings.len() * 3);

        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.separator, dim_style()));
            }
            spans.push(Span::styled(
                binding.key,
                Style::default().fg(current_theme().key),
            ));
            spans.push(Span::styled(format!(" {}", binding.description), dim_style()));
        }

        Line::from(spans)
    }

    /// Rend la barre d'aide.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}

// Bindings par mode
pub mod bindings {
    use super::KeyBinding;

    pub const NAVIGATE: KeyBinding = KeyBinding::new("↑/↓", "naviguer");
    pub const SELECT: KeyBinding = KeyBinding::new("Entrée", "checkout");
    pub const NEW: KeyBinding = KeyBinding::new("n", "nouvelle");
    pub const DELETE: KeyBinding = KeyBinding::new("d", "supprimer");
    pub const FILTER: KeyBinding = KeyBinding::new("/", "filtrer");
    pub const RELOAD: KeyBinding = KeyBinding::new("r", "recharger");
    pub const QUIT: KeyBinding = KeyBinding::new("q", "quitter");

    pub const CREATE: KeyBinding = KeyBinding::new("Entrée", "créer");
    pub const CANCEL: KeyBinding = KeyBinding::new("Échap", "annuler");

    pub const APPLY_FILTER: KeyBinding = KeyBinding::new("Entrée", "choisir");
    pub const CLEAR_FILTER: KeyBinding = KeyBinding::new("Échap", "effacer le filtre");

    pub const CONFIRM: KeyBinding = KeyBinding::new("Entrée", "confirmer");
    pub const FORCE: KeyBinding = KeyBinding::new("Entrée", "forcer");
}
