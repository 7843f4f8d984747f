use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::state::action::{BranchAction, EditAction, FilterAction, NavigationAction};
use crate::state::{AppAction, AppState, Mode};

/// Poll un événement terminal avec un timeout et retourne l'action correspondante.
pub fn handle_input_with_timeout(
    state: &AppState,
    timeout_ms: u64,
) -> std::io::Result<Option<AppAction>> {
    if event::poll(Duration::from_millis(timeout_ms))? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, state),
            Event::Resize(width, height) => Some(AppAction::Resize(width, height)),
            _ => None,
        });
    }
    Ok(None)
}

/// Mappe un événement clavier à une action selon le mode actif.
pub fn map_key(key: KeyEvent, state: &AppState) -> Option<AppAction> {
    // Ctrl+C quitte toujours.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppAction::Quit);
    }

    match &state.mode {
        Mode::Editing { .. } => map_editing_key(key),
        Mode::ConfirmingDelete { .. } => map_confirm_key(key),
        Mode::Browsing if state.list.is_filtering() => map_filter_key(key),
        Mode::Browsing => map_browsing_key(key, state),
    }
}

/// Saisie du nom de branche : toutes les touches vont au champ.
fn map_editing_key(key: KeyEvent) -> Option<AppAction> {
    let action = match key.code {
        KeyCode::Enter => return Some(AppAction::Branch(BranchAction::ConfirmCreate)),
        KeyCode::Esc => return Some(AppAction::Branch(BranchAction::CancelCreate)),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => return None,
        KeyCode::Char(c) => EditAction::InsertChar(c),
        KeyCode::Backspace => EditAction::DeleteCharBefore,
        KeyCode::Delete => EditAction::DeleteCharAfter,
        KeyCode::Left => EditAction::CursorLeft,
        KeyCode::Right => EditAction::CursorRight,
        KeyCode::Home => EditAction::CursorHome,
        KeyCode::End => EditAction::CursorEnd,
        _ => return None,
    };
    Some(AppAction::Edit(action))
}

/// Confirmation de suppression : seules Entrée et Échap comptent.
fn map_confirm_key(key: KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Enter => Some(AppAction::Branch(BranchAction::ConfirmDelete)),
        KeyCode::Esc => Some(AppAction::Branch(BranchAction::CancelDelete)),
        _ => None,
    }
}

/// Saisie du filtre : les raccourcis sont désactivés, seule Entrée est interceptée.
fn map_filter_key(key: KeyEvent) -> Option<AppAction> {
    match key.code {
        KeyCode::Enter => Some(AppAction::Branch(BranchAction::Select)),
        KeyCode::Esc => Some(AppAction::Filter(FilterAction::Clear)),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => Some(AppAction::Filter(FilterAction::InsertChar(c))),
        KeyCode::Backspace => Some(AppAction::Filter(FilterAction::DeleteChar)),
        KeyCode::Down => Some(AppAction::Navigation(NavigationAction::MoveDown)),
        KeyCode::Up => Some(AppAction::Navigation(NavigationAction::MoveUp)),
        KeyCode::PageDown => Some(AppAction::Navigation(NavigationAction::PageDown)),
        KeyCode::PageUp => Some(AppAction::Navigation(NavigationAction::PageUp)),
        _ => None,
    }
}

fn map_browsing_key(key: KeyEvent, state: &AppState) -> Option<AppAction> {
    // Ctrl+d / Ctrl+u pour page down/up
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('d') => Some(AppAction::Navigation(NavigationAction::PageDown)),
            KeyCode::Char('u') => Some(AppAction::Navigation(NavigationAction::PageUp)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(AppAction::Quit),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            Some(AppAction::Navigation(NavigationAction::MoveDown))
        }
        KeyCode::Char('k') | KeyCode::Up => Some(AppAction::Navigation(NavigationAction::MoveUp)),
        KeyCode::Char('g') | KeyCode::Home => Some(AppAction::Navigation(NavigationAction::GoTop)),
        KeyCode::Char('G') | KeyCode::End => {
            Some(AppAction::Navigation(NavigationAction::GoBottom))
        }
        KeyCode::PageUp => Some(AppAction::Navigation(NavigationAction::PageUp)),
        KeyCode::PageDown => Some(AppAction::Navigation(NavigationAction::PageDown)),

        // Branches
        KeyCode::Enter => Some(AppAction::Branch(BranchAction::Select)),
        KeyCode::Char('n') => Some(AppAction::Branch(BranchAction::StartCreate)),
        KeyCode::Char('d') => Some(AppAction::Branch(BranchAction::RequestDelete)),
        KeyCode::Char('r') => Some(AppAction::Branch(BranchAction::Reload)),

        // Filtre
        KeyCode::Char('/') => Some(AppAction::Filter(FilterAction::Open)),
        KeyCode::Esc if state.list.filter().is_applied() => {
            Some(AppAction::Filter(FilterAction::Clear))
        }

        _ => None,
    }
}
