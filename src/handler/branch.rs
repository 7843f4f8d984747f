//! Handler pour les actions sur les branches.
//!
//! Les opérations backend ne sont jamais exécutées ici : elles sont demandées via
//! `AppState::request` et leur résultat revient par `handler::completion`.

use super::traits::{ActionHandler, HandlerContext};
use crate::error::Result;
use crate::state::action::BranchAction;
use crate::state::{Annotation, AppState, Entry, Mode, TextInput};
use crate::task::TaskRequest;

/// Handler pour les opérations sur les branches.
pub struct BranchHandler;

impl ActionHandler for BranchHandler {
    type Action = BranchAction;

    fn handle(&mut self, ctx: &mut HandlerContext, action: BranchAction) -> Result<()> {
        match action {
            BranchAction::Reload => handle_reload(ctx.state),
            BranchAction::Select => handle_select(ctx.state),
            BranchAction::StartCreate => handle_start_create(ctx.state),
            BranchAction::ConfirmCreate => handle_confirm_create(ctx.state),
            BranchAction::CancelCreate => handle_cancel_create(ctx.state),
            BranchAction::RequestDelete => handle_request_delete(ctx.state),
            BranchAction::ConfirmDelete => handle_confirm_delete(ctx.state),
            BranchAction::CancelDelete => handle_cancel_delete(ctx.state),
        }
    }
}

fn handle_reload(state: &mut AppState) -> Result<()> {
    if state.mode.is_browsing() {
        state.request_reload();
    }
    Ok(())
}

/// Entrée sur l'élément sélectionné, en navigation ou pendant la saisie du filtre.
fn handle_select(state: &mut AppState) -> Result<()> {
    if !state.mode.is_browsing() {
        return Ok(());
    }

    if state.list.is_filtering() {
        state.list.apply_filter();
    }

    match state.list.selected_entry().cloned() {
        Some(Entry::CreatePrompt) => enter_editing(state),
        Some(Entry::Branch { name, .. }) => {
            state.request(TaskRequest::Checkout { name });
        }
        None => {}
    }
    Ok(())
}

fn handle_start_create(state: &mut AppState) -> Result<()> {
    if state.mode.is_browsing() {
        enter_editing(state);
    }
    Ok(())
}

/// Passe en saisie : filtre retiré, sélection sur l'entrée de création.
fn enter_editing(state: &mut AppState) {
    state.list.clear_filter();
    state.list.select_first();
    state.mode = Mode::Editing {
        input: TextInput::default(),
    };
    tracing::debug!("saisie d'une nouvelle branche");
}

fn handle_confirm_create(state: &mut AppState) -> Result<()> {
    let Some(input) = state.mode.input() else {
        return Ok(());
    };
    let name = input.trimmed().to_string();
    if name.is_empty() {
        return Ok(());
    }
    // Le mode reste Editing jusqu'au résultat.
    state.request(TaskRequest::CreateAndCheckout { name });
    Ok(())
}

fn handle_cancel_create(state: &mut AppState) -> Result<()> {
    if state.mode.is_editing() {
        state.mode = Mode::Browsing;
        state.list.select_first();
    }
    Ok(())
}

fn handle_request_delete(state: &mut AppState) -> Result<()> {
    if !state.mode.is_browsing() {
        return Ok(());
    }
    let Some(name) = state
        .list
        .selected_entry()
        .and_then(Entry::branch_name)
        .map(String::from)
    else {
        // L'entrée de création ne se supprime pas.
        return Ok(());
    };

    state.set_annotation(&name, Annotation::ConfirmDelete);
    state.mode = Mode::ConfirmingDelete {
        target: name,
        force_requested: false,
    };
    Ok(())
}

fn handle_confirm_delete(state: &mut AppState) -> Result<()> {
    let Mode::ConfirmingDelete {
        target,
        force_requested,
    } = &state.mode
    else {
        return Ok(());
    };
    let (target, force) = (target.clone(), *force_requested);

    let selected_is_prompt = state
        .list
        .selected_entry()
        .map_or(true, Entry::is_create_prompt);
    if selected_is_prompt {
        state.abort_delete();
        return Ok(());
    }

    if state.current_branch.as_deref() == Some(target.as_str()) {
        state.abort_delete();
        state.set_flash_message("Impossible de supprimer la branche courante".to_string());
        return Ok(());
    }

    // Le mode reste ConfirmingDelete jusqu'au résultat.
    state.request(TaskRequest::Delete {
        name: target,
        force,
    });
    Ok(())
}

fn handle_cancel_delete(state: &mut AppState) -> Result<()> {
    state.abort_delete();
    Ok(())
}
