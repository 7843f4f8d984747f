//! État global de l'application.

pub mod action;
pub mod entry;
pub mod filter;
pub mod input;
pub mod list;
pub mod mode;

pub use action::AppAction;
pub use entry::{Annotation, Entry, CREATE_PROMPT_LABEL};
pub use filter::FilterState;
pub use input::TextInput;
pub use list::BranchList;
pub use mode::Mode;

use std::borrow::Cow;
use std::time::{Duration, Instant};

use crate::git::BranchInfo;
use crate::task::{Task, TaskRequest, Ticket};

/// Durée d'affichage d'un message flash.
pub const FLASH_DURATION: Duration = Duration::from_secs(3);

/// Largeur minimale du champ de saisie.
const MIN_INPUT_WIDTH: u16 = 10;

/// Hauteur d'une ligne de la liste : libellé, description, espacement.
pub const ROW_HEIGHT: u16 = 3;

/// Lignes occupées autour de la liste : titre + marge, statut, aide.
const LIST_CHROME_HEIGHT: u16 = 4;

/// Raison de la sortie de l'application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// Sortie demandée par l'utilisateur.
    Quit,
    /// Checkout réussi sur cette branche : le travail de l'outil est fait.
    SwitchedTo(String),
}

/// Dimensions dérivées de la taille du terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub list_width: u16,
    pub list_height: u16,
    pub input_width: u16,
}

impl Viewport {
    /// Calcule les dimensions pour un terminal de `width` x `height`.
    pub fn from_terminal(width: u16, height: u16) -> Self {
        let list_width = width.saturating_sub(4);
        let list_height = height.saturating_sub(2);
        let input_width = list_width.saturating_sub(6).max(MIN_INPUT_WIDTH);
        Self {
            list_width,
            list_height,
            input_width,
        }
    }

    /// Nombre de branches affichables par page.
    pub fn rows(&self) -> usize {
        usize::from(self.list_height.saturating_sub(LIST_CHROME_HEIGHT) / ROW_HEIGHT).max(1)
    }
}

/// État principal de l'application.
#[derive(Debug)]
pub struct AppState {
    // ═══════════════════════════════════════════════════
    // Core
    // ═══════════════════════════════════════════════════
    /// Chemin du repository (affichage).
    pub repo_path: String,

    /// Branche courante selon le dernier chargement réussi.
    pub current_branch: Option<String>,

    /// Mode d'interaction actif.
    pub mode: Mode,

    /// Liste affichée : entrée de création + branches.
    pub list: BranchList,

    // ═══════════════════════════════════════════════════
    // Interface
    // ═══════════════════════════════════════════════════
    /// Dimensions calculées au dernier redimensionnement.
    pub viewport: Viewport,

    /// Message flash avec timestamp.
    pub flash_message: Option<(String, Instant)>,

    /// Raison de sortie, si l'application doit quitter.
    pub exit: Option<ExitReason>,

    // ═══════════════════════════════════════════════════
    // Tâches backend
    // ═══════════════════════════════════════════════════
    next_ticket: u64,
    /// Dernier chargement demandé ; les résultats plus anciens sont ignorés.
    latest_load: Option<Ticket>,
    /// Opération modifiante en cours (création, checkout, suppression).
    in_flight: Option<Ticket>,
    /// Tâches à lancer par la boucle d'événements.
    outbox: Vec<Task>,
}

impl AppState {
    /// Crée l'état initial ; aucune tâche n'est encore demandée.
    pub fn new(repo_path: impl Into<String>) -> Self {
        Self {
            repo_path: repo_path.into(),
            current_branch: None,
            mode: Mode::Browsing,
            list: BranchList::new(),
            viewport: Viewport::default(),
            flash_message: None,
            exit: None,
            next_ticket: 0,
            latest_load: None,
            in_flight: None,
            outbox: Vec::new(),
        }
    }

    // ═══════════════════════════════════════════════════
    // Tâches
    // ═══════════════════════════════════════════════════

    /// Demande une opération au backend.
    ///
    /// Une opération modifiante est refusée tant qu'une autre est en cours.
    pub fn request(&mut self, request: TaskRequest) -> Option<Ticket> {
        if request.is_mutating() && self.in_flight.is_some() {
            self.set_flash_message("Opération en cours, patientez…".to_string());
            return None;
        }

        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        if request.is_mutating() {
            self.in_flight = Some(ticket);
        } else {
            self.latest_load = Some(ticket);
        }
        tracing::debug!(ticket = ticket.0, ?request, mode = self.mode.name(), "tâche demandée");
        self.outbox.push(Task { ticket, request });
        Some(ticket)
    }

    /// Recharge la liste des branches.
    pub fn request_reload(&mut self) {
        self.request(TaskRequest::LoadBranches);
    }

    /// Récupère les tâches en attente de lancement.
    pub fn take_tasks(&mut self) -> Vec<Task> {
        std::mem::take(&mut self.outbox)
    }

    /// Une opération modifiante est-elle en cours ?
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Le résultat de chargement `ticket` est-il le plus récent demandé ?
    pub fn is_latest_load(&self, ticket: Ticket) -> bool {
        self.latest_load == Some(ticket)
    }

    /// Libère l'opération modifiante `ticket` ; faux si elle n'était pas en cours.
    pub fn finish_in_flight(&mut self, ticket: Ticket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    // ═══════════════════════════════════════════════════
    // Liste
    // ═══════════════════════════════════════════════════

    /// Reconstruit la liste à partir d'un chargement réussi.
    pub fn apply_branches(&mut self, branches: Vec<BranchInfo>) {
        self.current_branch = branches
            .iter()
            .find(|b| b.is_head)
            .map(|b| b.name.clone());
        let current = self.current_branch.as_deref();
        let entries: Vec<Entry> = branches
            .into_iter()
            .map(|b| Entry::branch(b.name, current))
            .collect();
        self.list.set_branches(entries);
    }

    /// Libellé affiché pour une entrée.
    ///
    /// L'entrée de création montre la saisie en cours pendant l'édition, même vide.
    pub fn entry_label<'a>(&'a self, entry: &'a Entry) -> Cow<'a, str> {
        match (entry, &self.mode) {
            (Entry::CreatePrompt, Mode::Editing { input }) => Cow::Borrowed(input.trimmed()),
            (Entry::CreatePrompt, _) => Cow::Borrowed(CREATE_PROMPT_LABEL),
            (Entry::Branch { name, .. }, _) => Cow::Borrowed(name),
        }
    }

    /// Change l'annotation de la branche `name`.
    pub fn set_annotation(&mut self, name: &str, annotation: Annotation) {
        if let Some(index) = self.list.find_branch(name) {
            if let Some(Entry::Branch { annotation: a, .. }) = self.list.entry_mut(index) {
                *a = annotation;
            }
        }
    }

    /// Rétablit l'annotation par défaut de la branche `name`.
    pub fn restore_annotation(&mut self, name: &str) {
        let annotation = Annotation::for_branch(name, self.current_branch.as_deref());
        self.set_annotation(name, annotation);
    }

    /// Annule la confirmation de suppression en cours et restaure l'annotation.
    pub fn abort_delete(&mut self) {
        if let Mode::ConfirmingDelete { target, .. } = std::mem::take(&mut self.mode) {
            self.restore_annotation(&target);
        }
    }

    // ═══════════════════════════════════════════════════
    // Interface
    // ═══════════════════════════════════════════════════

    /// Recalcule les dimensions après un redimensionnement.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::from_terminal(width, height);
        self.list.set_visible_height(self.viewport.rows());
    }

    /// Définit un message flash qui s'affichera pendant 3 secondes.
    pub fn set_flash_message(&mut self, message: String) {
        tracing::debug!("flash : {message}");
        self.flash_message = Some((message, Instant::now()));
    }

    /// Vérifie si le message flash a expiré et le supprime le cas échéant.
    pub fn check_flash_expired(&mut self) {
        if let Some((_, timestamp)) = &self.flash_message {
            if timestamp.elapsed() > FLASH_DURATION {
                self.flash_message = None;
            }
        }
    }

    /// Texte du message flash courant.
    pub fn flash_text(&self) -> Option<&str> {
        self.flash_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Demande la sortie de l'application.
    pub fn quit(&mut self, reason: ExitReason) {
        tracing::info!(?reason, "sortie demandée");
        self.exit = Some(reason);
    }

    pub fn should_quit(&self) -> bool {
        self.exit.is_some()
    }
}
