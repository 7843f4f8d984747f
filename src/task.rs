//! Tâches backend exécutées hors de la boucle d'événements.
//!
//! Chaque tâche tourne dans son propre thread et renvoie exactement un
//! `TaskResult` sur le canal lu par la boucle principale. Aucune annulation :
//! un résultat arrive toujours, même si l'utilisateur a changé de mode entre-temps.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::git::{BranchBackend, BranchInfo};

/// Identifiant croissant attribué à chaque tâche envoyée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

/// Opération demandée au backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRequest {
    LoadBranches,
    /// Création puis checkout, séquentiels dans la même tâche.
    CreateAndCheckout { name: String },
    Checkout { name: String },
    Delete { name: String, force: bool },
}

impl TaskRequest {
    /// Les opérations qui modifient le repository ne se chevauchent jamais.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::LoadBranches)
    }
}

/// Tâche prête à être exécutée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub ticket: Ticket,
    pub request: TaskRequest,
}

/// Étape en échec d'un create-then-checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateStage {
    Create,
    Checkout,
}

/// Échec d'un create-then-checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFailure {
    pub stage: CreateStage,
    pub message: String,
}

/// Résultat brut d'une opération ; les erreurs sont déjà converties en texte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    Loaded(Result<Vec<BranchInfo>, String>),
    Created(Result<(), CreateFailure>),
    CheckedOut(Result<(), String>),
    Deleted(Result<(), String>),
}

/// Événement de fin de tâche consommé par la machine à états.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResult {
    pub ticket: Ticket,
    pub request: TaskRequest,
    pub outcome: TaskOutcome,
}

/// Exécute une tâche de façon synchrone.
pub fn execute(backend: &dyn BranchBackend, task: Task) -> TaskResult {
    let outcome = match &task.request {
        TaskRequest::LoadBranches => {
            TaskOutcome::Loaded(backend.list_branches().map_err(|e| e.to_string()))
        }
        TaskRequest::CreateAndCheckout { name } => {
            let result = backend
                .create_branch(name)
                .map_err(|e| CreateFailure {
                    stage: CreateStage::Create,
                    message: e.to_string(),
                })
                .and_then(|()| {
                    backend.checkout(name).map_err(|e| CreateFailure {
                        stage: CreateStage::Checkout,
                        message: e.to_string(),
                    })
                });
            TaskOutcome::Created(result)
        }
        TaskRequest::Checkout { name } => {
            TaskOutcome::CheckedOut(backend.checkout(name).map_err(|e| e.to_string()))
        }
        TaskRequest::Delete { name, force } => TaskOutcome::Deleted(
            backend
                .delete_branch(name, *force)
                .map_err(|e| e.to_string()),
        ),
    };

    if let Some(err) = outcome_error(&outcome) {
        tracing::warn!(ticket = task.ticket.0, request = ?task.request, "tâche en échec : {err}");
    }

    TaskResult {
        ticket: task.ticket,
        request: task.request,
        outcome,
    }
}

/// Résultat en échec pour une tâche interrompue avant d'avoir répondu.
fn failed(task: Task, message: String) -> TaskResult {
    let outcome = match &task.request {
        TaskRequest::LoadBranches => TaskOutcome::Loaded(Err(message)),
        TaskRequest::CreateAndCheckout { .. } => TaskOutcome::Created(Err(CreateFailure {
            stage: CreateStage::Create,
            message,
        })),
        TaskRequest::Checkout { .. } => TaskOutcome::CheckedOut(Err(message)),
        TaskRequest::Delete { .. } => TaskOutcome::Deleted(Err(message)),
    };
    TaskResult {
        ticket: task.ticket,
        request: task.request,
        outcome,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "erreur interne".to_string())
}

fn outcome_error(outcome: &TaskOutcome) -> Option<&str> {
    match outcome {
        TaskOutcome::Loaded(Err(e))
        | TaskOutcome::CheckedOut(Err(e))
        | TaskOutcome::Deleted(Err(e)) => Some(e),
        TaskOutcome::Created(Err(failure)) => Some(&failure.message),
        _ => None,
    }
}

/// Lance les tâches dans des threads détachés.
pub struct TaskRunner {
    backend: Arc<dyn BranchBackend>,
    sender: Sender<TaskResult>,
}

impl TaskRunner {
    /// Crée le runner et le récepteur des résultats.
    pub fn new(backend: Arc<dyn BranchBackend>) -> (Self, Receiver<TaskResult>) {
        let (sender, receiver) = mpsc::channel();
        (Self { backend, sender }, receiver)
    }

    /// Démarre une tâche ; son résultat arrivera plus tard sur le canal.
    pub fn spawn(&self, task: Task) {
        tracing::debug!(ticket = task.ticket.0, request = ?task.request, "tâche lancée");
        let backend = Arc::clone(&self.backend);
        let sender = self.sender.clone();
        thread::spawn(move || {
            // Un thread qui panique doit quand même répondre, sinon `in_flight` reste pris.
            let fallback = task.clone();
            let result = panic::catch_unwind(AssertUnwindSafe(|| execute(backend.as_ref(), task)))
                .unwrap_or_else(|payload| {
                    let message = panic_message(payload.as_ref());
                    tracing::error!(ticket = fallback.ticket.0, "tâche interrompue : {message}");
                    failed(fallback, format!("tâche interrompue : {}", message))
                });
            // Le récepteur disparaît quand l'application quitte : rien à faire.
            let _ = sender.send(result);
        });
    }
}
