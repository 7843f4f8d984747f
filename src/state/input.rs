//! Champ de saisie sur une ligne, curseur compté en caractères.

/// Longueur maximale d'un nom de branche saisi.
pub const BRANCH_NAME_LIMIT: usize = 64;

/// Champ de saisie de texte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Position du curseur, en caractères.
    cursor: usize,
    char_limit: usize,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new(BRANCH_NAME_LIMIT)
    }
}

impl TextInput {
    /// Crée un champ vide limité à `char_limit` caractères.
    pub fn new(char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Valeur sans espaces en début et fin.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insère un caractère au curseur ; ignoré au-delà de la limite.
    pub fn insert(&mut self, c: char) {
        if c.is_control() || self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Supprime le caractère avant le curseur (Backspace).
    pub fn delete_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// Supprime le caractère sous le curseur (Suppr).
    pub fn delete_after(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Fenêtre visible de `width` caractères gardant le curseur à l'écran.
    ///
    /// Retourne le texte visible et la position du curseur dans ce texte.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        let width = width.max(1);
        let start = (self.cursor + 1).saturating_sub(width);
        let text: String = self.value.chars().skip(start).take(width).collect();
        (text, self.cursor - start)
    }
}
