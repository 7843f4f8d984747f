//! État et logique de filtrage de la liste des branches.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::entry::Entry;

/// État du filtre de la liste.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterState {
    /// Aucun filtre.
    #[default]
    Unfiltered,
    /// Saisie de la requête en cours : les touches texte vont au filtre.
    Filtering { query: String },
    /// Filtre figé, la navigation reprend sur le sous-ensemble.
    Applied { query: String },
}

impl FilterState {
    /// Requête active, quel que soit l'état.
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Unfiltered => None,
            Self::Filtering { query } | Self::Applied { query } => Some(query),
        }
    }

    pub fn is_filtering(&self) -> bool {
        matches!(self, Self::Filtering { .. })
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Indices des entrées visibles pour une requête.
///
/// L'entrée de création reste toujours en tête. Les branches sont triées par
/// score décroissant, à score égal dans l'ordre du backend.
pub fn visible_indices(entries: &[Entry], query: Option<&str>) -> Vec<usize> {
    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let Some(query) = query else {
        return (0..entries.len()).collect();
    };

    let matcher = SkimMatcherV2::default();
    let mut pinned = Vec::new();
    let mut scored: Vec<(i64, usize)> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        match entry.branch_name() {
            None => pinned.push(index),
            Some(name) => {
                if let Some(score) = matcher.fuzzy_match(name, query) {
                    scored.push((score, index));
                }
            }
        }
    }

    // Tri stable : l'ordre du backend départage les scores égaux.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    pinned
        .into_iter()
        .chain(scored.into_iter().map(|(_, index)| index))
        .collect()
}
