//! Actions de l'application organisées par domaine.

mod branch;
mod edit;
mod filter;
mod navigation;

pub use branch::BranchAction;
pub use edit::EditAction;
pub use filter::FilterAction;
pub use navigation::NavigationAction;

use crate::task::TaskResult;

/// Action principale de l'application.
///
/// Produite par le mapping des touches (`ui::input`) ou par la fin d'une tâche
/// backend, puis routée par le dispatcher vers le handler du domaine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Quitter l'application
    Quit,

    /// Navigation dans la liste
    Navigation(NavigationAction),

    /// Filtre de la liste
    Filter(FilterAction),

    /// Édition du nom de la nouvelle branche
    Edit(EditAction),

    /// Opérations sur les branches
    Branch(BranchAction),

    /// Le terminal a été redimensionné (largeur, hauteur)
    Resize(u16, u16),

    /// Une tâche backend s'est terminée
    TaskCompleted(TaskResult),
}
