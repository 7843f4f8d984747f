use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Zones de l'écran à l'intérieur du cadre.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub title: Rect,
    pub list: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Construit le layout principal à partir de l'intérieur du cadre.
///
/// Disposition :
/// ╭───────────────────────────╮
/// │ Titre / filtre            │
/// │                           │
/// │ Liste (3 lignes / entrée) │
/// │ Statut                    │
/// │ Aide                      │
/// ╰───────────────────────────╯
pub fn build_layout(inner: Rect) -> AppLayout {
    let content = inner.inner(Margin {
        horizontal: 1,
        vertical: 0,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(content);

    AppLayout {
        title: chunks[0],
        list: chunks[2],
        status: chunks[3],
        help: chunks[4],
    }
}
