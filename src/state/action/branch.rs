//! Actions sur les branches.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchAction {
    /// Recharger la liste depuis le backend
    Reload,
    /// Activer l'élément sélectionné (Entrée) : création ou checkout
    Select,
    /// Démarrer la saisie d'une nouvelle branche
    StartCreate,
    /// Valider la saisie : créer puis checkout
    ConfirmCreate,
    /// Abandonner la saisie
    CancelCreate,
    /// Demander confirmation avant suppression
    RequestDelete,
    /// Confirmer la suppression (ou la suppression forcée)
    ConfirmDelete,
    /// Annuler la suppression
    CancelDelete,
}
