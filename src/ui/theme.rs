//! Configuration des thèmes et couleurs.

use ratatui::style::Color;

/// Thème de couleurs pour l'application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Couleur primaire (cadre, titre)
    pub primary: Color,
    /// Couleur secondaire (messages flash)
    pub secondary: Color,
    /// Couleur de la barre de sélection
    pub selection_bar: Color,
    /// Couleur du texte sélectionné
    pub selection_fg: Color,
    /// Couleur des bordures
    pub border: Color,
    /// Couleur des touches dans la barre d'aide
    pub key: Color,
    /// Couleur des messages d'erreur et des invites de suppression
    pub error: Color,
    /// Couleur de la branche active
    pub success: Color,
    /// Couleur des avertissements (suppression forcée)
    pub warning: Color,
    /// Couleur du texte normal
    pub text_normal: Color,
    /// Couleur du texte secondaire (descriptions, compteurs)
    pub text_secondary: Color,
}

impl Theme {
    /// Thème sombre (défaut).
    pub fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Magenta,
            selection_bar: Color::Magenta,
            selection_fg: Color::LightMagenta,
            border: Color::Gray,
            key: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            text_normal: Color::White,
            text_secondary: Color::Gray,
        }
    }

    /// Thème clair.
    pub fn light() -> Self {
        Self {
            primary: Color::Blue,
            secondary: Color::Magenta,
            selection_bar: Color::Magenta,
            selection_fg: Color::Magenta,
            border: Color::DarkGray,
            key: Color::Blue,
            error: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            text_normal: Color::Black,
            text_secondary: Color::DarkGray,
        }
    }
}

/// Détecte automatiquement le thème du terminal au démarrage.
fn detect_theme() -> Theme {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.5 => Theme::light(),
        _ => Theme::dark(),
    }
}

/// Thème global de l'application (détection automatique).
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(detect_theme);

/// Retourne le thème actuel.
pub fn current_theme() -> &'static Theme {
    &THEME
}
