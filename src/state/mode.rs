//! Mode d'interaction de la machine à états.

use super::input::TextInput;

/// Mode actif ; exactement un à la fois.
///
/// Le filtrage n'est pas un mode : il est porté par la liste et ne se superpose
/// qu'à `Browsing`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation dans la liste.
    #[default]
    Browsing,
    /// Saisie du nom d'une nouvelle branche sur l'entrée de création.
    Editing { input: TextInput },
    /// Confirmation de suppression de `target`.
    ConfirmingDelete {
        target: String,
        /// Vrai après un échec "non fusionnée" de la suppression simple.
        force_requested: bool,
    },
}

impl Mode {
    pub fn is_browsing(&self) -> bool {
        matches!(self, Self::Browsing)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Champ de saisie si le mode est `Editing`.
    pub fn input(&self) -> Option<&TextInput> {
        match self {
            Self::Editing { input } => Some(input),
            _ => None,
        }
    }

    pub fn input_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            Self::Editing { input } => Some(input),
            _ => None,
        }
    }

    /// Branche ciblée par la confirmation de suppression en cours.
    pub fn delete_target(&self) -> Option<&str> {
        match self {
            Self::ConfirmingDelete { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Nom court pour les logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::Editing { .. } => "editing",
            Self::ConfirmingDelete {
                force_requested: false,
                ..
            } => "confirming-delete",
            Self::ConfirmingDelete {
                force_requested: true,
                ..
            } => "confirming-force-delete",
        }
    }
}
