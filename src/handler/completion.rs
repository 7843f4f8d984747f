//! Handler pour les résultats des tâches backend.
//!
//! Un résultat peut arriver après que l'utilisateur a changé de mode. Les
//! chargements périmés sont ignorés ; une opération modifiante dont le mode
//! d'origine n'est plus actif est réconciliée : succès → rechargement,
//! échec → simplement journalisé.

use super::traits::{ActionHandler, HandlerContext};
use crate::error::{is_unmerged_error, Result};
use crate::git::BranchInfo;
use crate::state::{Annotation, AppState, ExitReason, Mode};
use crate::task::{CreateFailure, CreateStage, TaskOutcome, TaskRequest, TaskResult, Ticket};

/// Handler pour les fins de tâches.
pub struct CompletionHandler;

impl ActionHandler for CompletionHandler {
    type Action = TaskResult;

    fn handle(&mut self, ctx: &mut HandlerContext, result: TaskResult) -> Result<()> {
        let TaskResult {
            ticket,
            request,
            outcome,
        } = result;

        match (request, outcome) {
            (TaskRequest::LoadBranches, TaskOutcome::Loaded(result)) => {
                on_loaded(ctx.state, ticket, result)
            }
            (TaskRequest::CreateAndCheckout { name }, TaskOutcome::Created(result)) => {
                ctx.state.finish_in_flight(ticket);
                on_created(ctx.state, name, result)
            }
            (TaskRequest::Checkout { name }, TaskOutcome::CheckedOut(result)) => {
                ctx.state.finish_in_flight(ticket);
                on_checked_out(ctx.state, name, result)
            }
            (TaskRequest::Delete { name, force }, TaskOutcome::Deleted(result)) => {
                ctx.state.finish_in_flight(ticket);
                on_deleted(ctx.state, name, force, result)
            }
            (request, outcome) => {
                tracing::warn!(?request, ?outcome, "résultat sans rapport avec la requête");
                ctx.state.finish_in_flight(ticket);
            }
        }
        Ok(())
    }
}

fn on_loaded(state: &mut AppState, ticket: Ticket, result: std::result::Result<Vec<BranchInfo>, String>) {
    if !state.is_latest_load(ticket) {
        tracing::debug!(ticket = ticket.0, "chargement périmé ignoré");
        return;
    }

    let branches = match result {
        Ok(branches) => branches,
        Err(e) => {
            state.set_flash_message(format!("Erreur : {}", e));
            return;
        }
    };

    state.apply_branches(branches);
    tracing::debug!(
        branches = state.list.branch_count(),
        current = ?state.current_branch,
        "liste reconstruite"
    );

    match state.mode.clone() {
        Mode::Browsing => {}
        Mode::Editing { .. } => state.list.select_first(),
        Mode::ConfirmingDelete {
            target,
            force_requested,
        } => {
            // La liste est neuve : retrouver la cible et remettre l'invite.
            match state.list.find_branch(&target) {
                Some(index) if state.list.select_entry(index) => {
                    let prompt = if force_requested {
                        Annotation::ConfirmForce
                    } else {
                        Annotation::ConfirmDelete
                    };
                    state.set_annotation(&target, prompt);
                }
                _ => {
                    tracing::debug!(%target, "cible de suppression disparue");
                    state.mode = Mode::Browsing;
                }
            }
        }
    }
}

fn on_created(state: &mut AppState, name: String, result: std::result::Result<(), CreateFailure>) {
    let still_editing = state.mode.is_editing();

    match result {
        Ok(()) if still_editing => {
            state.quit(ExitReason::SwitchedTo(name));
        }
        Ok(()) => {
            // Saisie abandonnée entre-temps : la branche existe et HEAD a bougé.
            state.set_flash_message(format!("Branche '{}' créée et check-out ✓", name));
            state.request_reload();
        }
        Err(failure) if !still_editing => {
            tracing::debug!(%name, message = %failure.message, "échec de création périmé");
            if failure.stage == CreateStage::Checkout {
                // La branche a tout de même été créée.
                state.set_flash_message(format!(
                    "Branche '{}' créée, checkout impossible : {}",
                    name, failure.message
                ));
                state.request_reload();
            }
        }
        Err(CreateFailure {
            stage: CreateStage::Create,
            message,
        }) => {
            // Saisie conservée pour corriger le nom.
            state.set_flash_message(format!("Erreur : {}", message));
        }
        Err(CreateFailure {
            stage: CreateStage::Checkout,
            message,
        }) => {
            // Pas de rollback : la branche existe mais n'est pas check-out.
            state.mode = Mode::Browsing;
            state.list.select_first();
            state.set_flash_message(format!(
                "Branche '{}' créée, checkout impossible : {}",
                name, message
            ));
            state.request_reload();
        }
    }
}

fn on_checked_out(state: &mut AppState, name: String, result: std::result::Result<(), String>) {
    match result {
        Ok(()) => state.quit(ExitReason::SwitchedTo(name)),
        Err(e) => state.set_flash_message(format!("Erreur checkout : {}", e)),
    }
}

fn on_deleted(state: &mut AppState, name: String, force: bool, result: std::result::Result<(), String>) {
    let applies = matches!(
        &state.mode,
        Mode::ConfirmingDelete { target, force_requested }
            if *target == name && *force_requested == force
    );

    if !applies {
        match result {
            Ok(()) => {
                state.set_flash_message(format!("Branche '{}' supprimée", name));
                state.request_reload();
            }
            Err(e) => tracing::debug!(%name, "échec de suppression périmé : {e}"),
        }
        return;
    }

    match result {
        Ok(()) => {
            state.mode = Mode::Browsing;
            state.set_flash_message(format!("Branche '{}' supprimée", name));
            state.request_reload();
        }
        Err(e) if force => {
            state.abort_delete();
            state.set_flash_message(format!("Échec de la suppression forcée : {}", e));
        }
        Err(e) if is_unmerged_error(&e) => {
            // Escalade : rien n'a été modifié, on propose la suppression forcée.
            state.mode = Mode::ConfirmingDelete {
                target: name.clone(),
                force_requested: true,
            };
            state.set_annotation(&name, Annotation::ConfirmForce);
        }
        Err(e) => {
            state.abort_delete();
            state.set_flash_message(format!("Échec de la suppression : {}", e));
        }
    }
}
