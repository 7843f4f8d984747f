//! Actions de navigation dans la liste des branches.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Monter d'un élément
    MoveUp,
    /// Descendre d'un élément
    MoveDown,
    /// Remonter d'une page
    PageUp,
    /// Descendre d'une page
    PageDown,
    /// Aller au premier élément
    GoTop,
    /// Aller au dernier élément
    GoBottom,
}
