use thiserror::Error;

/// Erreurs principales de git_bp.
#[derive(Debug, Error)]
pub enum GitBpError {
    #[error("Erreur git : {0}")]
    Git(#[from] git2::Error),

    #[error("Erreur I/O : {0}")]
    Io(#[from] std::io::Error),

    #[error("Nom de branche requis")]
    EmptyBranchName,

    /// Formulation identique à celle de `git branch -d`.
    #[error("error: the branch '{name}' is not fully merged")]
    NotFullyMerged { name: String },

    #[error("Branche '{name}' non trouvée")]
    BranchNotFound { name: String },

    #[error("{0}")]
    Other(String),
}

/// Alias pratique pour Result avec GitBpError.
pub type Result<T> = std::result::Result<T, GitBpError>;

/// Indique si le texte d'une erreur de suppression signale une branche non fusionnée.
///
/// C'est la seule classification d'erreur qui change le comportement de l'interface :
/// toutes les autres erreurs sont simplement affichées.
pub fn is_unmerged_error(message: &str) -> bool {
    message.to_lowercase().contains("fully merged")
}
