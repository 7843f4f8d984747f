//! Éléments de la liste des branches.

/// Libellé de l'entrée synthétique de création.
pub const CREATE_PROMPT_LABEL: &str = "[+] Créer une nouvelle branche";

/// Description de l'entrée synthétique de création.
pub const CREATE_PROMPT_HINT: &str = "Saisir le nom de la nouvelle branche";

/// Description affichée sous une branche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// Branche locale ordinaire.
    Local,
    /// Branche courante du repository.
    Active,
    /// Demande de confirmation de suppression.
    ConfirmDelete,
    /// La suppression simple a échoué : branche non fusionnée.
    ConfirmForce,
}

impl Annotation {
    /// Annotation par défaut d'une branche selon la branche courante.
    pub fn for_branch(name: &str, current_branch: Option<&str>) -> Self {
        if current_branch == Some(name) {
            Self::Active
        } else {
            Self::Local
        }
    }

    /// Texte affiché.
    pub fn text(self) -> &'static str {
        match self {
            Self::Local => "branche locale",
            Self::Active => "Active",
            Self::ConfirmDelete => "Supprimer ? Entrée : Oui   Échap : Non",
            Self::ConfirmForce => {
                "Non fusionnée. Entrée pour FORCER la suppression, Échap pour annuler"
            }
        }
    }
}

/// Élément de la liste : l'entrée de création (toujours en tête) ou une branche.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    CreatePrompt,
    Branch { name: String, annotation: Annotation },
}

impl Entry {
    /// Construit une entrée de branche avec son annotation par défaut.
    pub fn branch(name: impl Into<String>, current_branch: Option<&str>) -> Self {
        let name = name.into();
        let annotation = Annotation::for_branch(&name, current_branch);
        Self::Branch { name, annotation }
    }

    /// Nom de la branche, `None` pour l'entrée de création.
    pub fn branch_name(&self) -> Option<&str> {
        match self {
            Self::CreatePrompt => None,
            Self::Branch { name, .. } => Some(name),
        }
    }

    pub fn is_create_prompt(&self) -> bool {
        matches!(self, Self::CreatePrompt)
    }

    /// Description affichée sous le libellé.
    pub fn description(&self) -> &'static str {
        match self {
            Self::CreatePrompt => CREATE_PROMPT_HINT,
            Self::Branch { annotation, .. } => annotation.text(),
        }
    }
}
