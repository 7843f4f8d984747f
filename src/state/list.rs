//! Liste des branches avec sélection, scroll et filtre.

use super::entry::Entry;
use super::filter::{visible_indices, FilterState};

/// Liste sélectionnable affichée à l'écran.
///
/// `entries` contient toujours l'entrée de création en tête. La sélection et le
/// scroll portent sur les positions du sous-ensemble visible (`visible`), qui
/// référence des indices de `entries`.
#[derive(Debug, Clone)]
pub struct BranchList {
    entries: Vec<Entry>,
    filter: FilterState,
    visible: Vec<usize>,
    selected: usize,
    scroll_offset: usize,
    visible_height: usize,
}

impl Default for BranchList {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchList {
    /// Crée une liste contenant uniquement l'entrée de création.
    pub fn new() -> Self {
        Self {
            entries: vec![Entry::CreatePrompt],
            filter: FilterState::Unfiltered,
            visible: vec![0],
            selected: 0,
            scroll_offset: 0,
            visible_height: 10, // Valeur par défaut
        }
    }

    /// Remplace toutes les branches ; l'entrée de création est ajoutée en tête.
    ///
    /// La position de sélection est conservée (bornée à la nouvelle taille).
    pub fn set_branches(&mut self, branches: impl IntoIterator<Item = Entry>) {
        self.entries = std::iter::once(Entry::CreatePrompt)
            .chain(branches.into_iter().filter(|e| !e.is_create_prompt()))
            .collect();
        self.refresh_visible();
        self.clamp_selection();
    }

    /// Toutes les entrées, dans l'ordre du backend.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    /// Indice (dans `entries`) de l'entrée sélectionnée.
    pub fn selected_index(&self) -> Option<usize> {
        self.visible.get(self.selected).copied()
    }

    /// Entrée actuellement sélectionnée.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected_index().and_then(|i| self.entries.get(i))
    }

    /// Position de la sélection dans le sous-ensemble visible.
    pub fn selected_position(&self) -> usize {
        self.selected
    }

    /// Nombre d'entrées visibles.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Nombre de branches réelles (hors entrée de création).
    pub fn branch_count(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Offset de scroll actuel.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Définit le nombre d'éléments visibles par page.
    pub fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height.max(1);
        self.adjust_scroll();
    }

    pub fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Itère sur la page visible : (indice dans `entries`, entrée).
    pub fn page(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.visible
            .iter()
            .skip(self.scroll_offset)
            .take(self.visible_height)
            .map(|&i| (i, &self.entries[i]))
    }

    /// Sélectionne l'entrée d'indice `index` si elle est visible.
    pub fn select_entry(&mut self, index: usize) -> bool {
        match self.visible.iter().position(|&i| i == index) {
            Some(position) => {
                self.selected = position;
                self.adjust_scroll();
                true
            }
            None => false,
        }
    }

    /// Indice de la branche `name` dans `entries`.
    pub fn find_branch(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.branch_name() == Some(name))
    }

    /// Sélectionne l'élément précédent.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.adjust_scroll();
        }
    }

    /// Sélectionne l'élément suivant.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
            self.adjust_scroll();
        }
    }

    /// Remonte d'une page.
    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Descend d'une page.
    pub fn page_down(&mut self) {
        self.selected =
            (self.selected + self.visible_height).min(self.visible.len().saturating_sub(1));
        self.adjust_scroll();
    }

    /// Va au premier élément.
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Va au dernier élément.
    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
        self.adjust_scroll();
    }

    // ═══════════════════════════════════════════════════
    // Filtre
    // ═══════════════════════════════════════════════════

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// La saisie du filtre est-elle en cours ?
    pub fn is_filtering(&self) -> bool {
        self.filter.is_filtering()
    }

    /// Ouvre la saisie du filtre avec une requête vide.
    pub fn open_filter(&mut self) {
        self.filter = FilterState::Filtering {
            query: String::new(),
        };
        self.on_query_changed();
    }

    /// Ajoute un caractère à la requête en cours de saisie.
    pub fn filter_insert(&mut self, c: char) {
        if let FilterState::Filtering { query } = &mut self.filter {
            query.push(c);
            self.on_query_changed();
        }
    }

    /// Retire le dernier caractère de la requête en cours de saisie.
    pub fn filter_delete(&mut self) {
        if let FilterState::Filtering { query } = &mut self.filter {
            if query.pop().is_some() {
                self.on_query_changed();
            }
        }
    }

    /// Fige la requête ; une requête vide désactive le filtre.
    pub fn apply_filter(&mut self) {
        let next = match &self.filter {
            FilterState::Filtering { query } if query.trim().is_empty() => FilterState::Unfiltered,
            FilterState::Filtering { query } => FilterState::Applied {
                query: query.clone(),
            },
            _ => return,
        };
        self.filter = next;
    }

    /// Supprime le filtre en gardant l'entrée sélectionnée.
    pub fn clear_filter(&mut self) {
        if self.filter == FilterState::Unfiltered {
            return;
        }
        let selected = self.selected_index();
        self.filter = FilterState::Unfiltered;
        self.refresh_visible();
        self.selected = 0;
        self.scroll_offset = 0;
        if let Some(index) = selected {
            self.select_entry(index);
        }
    }

    /// Après une modification de la requête : sélection sur la meilleure branche.
    fn on_query_changed(&mut self) {
        self.refresh_visible();
        self.selected = if self.filter.query().is_some_and(|q| !q.trim().is_empty())
            && self.visible.len() > 1
        {
            1
        } else {
            0
        };
        self.scroll_offset = 0;
        self.adjust_scroll();
    }

    fn refresh_visible(&mut self) {
        self.visible = visible_indices(&self.entries, self.filter.query());
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
        self.adjust_scroll();
    }

    /// Ajuste le scroll pour garder la sélection visible.
    fn adjust_scroll(&mut self) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }
        if self.selected >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.selected + 1 - self.visible_height;
        }
    }
}
