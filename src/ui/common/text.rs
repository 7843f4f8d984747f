//! Utilitaires de manipulation de texte Unicode-safe.

use ratatui::text::Span;

/// Tronque une chaîne à `max_len` caractères, avec "…" si elle est coupée.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 1 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 1).collect();
    format!("{}…", truncated)
}

/// Largeur affichée en colonnes de terminal (caractères larges comptés double).
pub fn display_width(s: &str) -> u16 {
    u16::try_from(Span::raw(s).width()).unwrap_or(u16::MAX)
}
