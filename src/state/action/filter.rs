//! Actions du filtre de la liste.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    /// Ouvrir la saisie du filtre.
    Open,
    /// Insérer un caractère dans la requête.
    InsertChar(char),
    /// Supprimer le dernier caractère de la requête.
    DeleteChar,
    /// Effacer le filtre.
    Clear,
}
