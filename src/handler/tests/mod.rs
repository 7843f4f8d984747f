//! Scénarios de la machine à états pilotés au clavier contre le mock.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::git::BranchInfo;
use crate::state::{Annotation, AppAction, ExitReason, FilterState, Mode, CREATE_PROMPT_LABEL};
use crate::task::{TaskOutcome, TaskRequest, TaskResult};
use crate::test_utils::{MockBackend, TestApp};
use crate::{assert_flash_contains, assert_mode, assert_no_flash};

/// main (courante), dev (fusionnée), feature (non fusionnée).
fn backend() -> MockBackend {
    MockBackend::new()
        .with_branch("main", true)
        .with_branch("dev", false)
        .with_unmerged_branch("feature")
}

fn select(app: &mut TestApp, name: &str) {
    app.press(KeyCode::Home);
    for _ in 0..app.state.list.visible_len() {
        if app.selected_name().as_deref() == Some(name) {
            return;
        }
        app.press(KeyCode::Down);
    }
    panic!("branche '{}' introuvable", name);
}

fn calls(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ═══════════════════════════════════════════════════
// Chargement
// ═══════════════════════════════════════════════════

#[test]
fn test_prompt_alone_before_first_load() {
    let app = TestApp::new(backend());
    assert_eq!(app.labels(), vec![CREATE_PROMPT_LABEL.to_string()]);
    assert_eq!(app.state.list.selected_position(), 0);
    assert!(app.backend.calls().is_empty());
}

#[test]
fn test_load_builds_list_in_backend_order() {
    let app = TestApp::loaded(backend());

    assert_eq!(
        app.labels(),
        vec![CREATE_PROMPT_LABEL, "main", "dev", "feature"]
    );
    assert_eq!(app.state.current_branch.as_deref(), Some("main"));
    assert_eq!(app.description_of("main"), Some("Active"));
    assert_eq!(app.description_of("dev"), Some("branche locale"));
    assert_eq!(app.backend.calls(), calls(&["list"]));
    assert_no_flash!(app.state);
}

#[test]
fn test_load_failure_keeps_list() {
    let app = TestApp::loaded(MockBackend::new().failing_list("not a git repository"));

    assert_flash_contains!(app.state, "not a git repository");
    assert_eq!(app.labels(), vec![CREATE_PROMPT_LABEL.to_string()]);
    assert_mode!(app.state, Mode::Browsing);
}

#[test]
fn test_failed_reload_keeps_loaded_list() {
    let mut app = TestApp::loaded(backend());
    let before = app.labels();
    app.state.request_reload();
    let tasks = app.take_pending();

    app.complete(TaskResult {
        ticket: tasks[0].ticket,
        request: TaskRequest::LoadBranches,
        outcome: TaskOutcome::Loaded(Err("boom".to_string())),
    });

    assert_eq!(app.labels(), before);
    assert_eq!(before.len(), 4);
    assert_eq!(app.state.current_branch.as_deref(), Some("main"));
    assert_flash_contains!(app.state, "Erreur : boom");
}

#[test]
fn test_reload_key() {
    let mut app = TestApp::loaded(backend());
    app.backend.insert_branch_first("hotfix");
    app.press(KeyCode::Char('r')).settle();

    assert!(app.state.list.find_branch("hotfix").is_some());
    assert_eq!(app.backend.calls(), calls(&["list", "list"]));
}

// ═══════════════════════════════════════════════════
// Création
// ═══════════════════════════════════════════════════

#[test]
fn test_create_then_checkout_exits() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('n'));
    assert_mode!(app.state, Mode::Editing { .. });
    assert_eq!(app.labels()[0], "");

    app.type_text("feature-x");
    assert_eq!(app.labels()[0], "feature-x");

    app.press(KeyCode::Enter);
    // Le mode reste Editing jusqu'au résultat.
    assert_mode!(app.state, Mode::Editing { .. });
    app.settle();

    assert_eq!(
        app.state.exit,
        Some(ExitReason::SwitchedTo("feature-x".to_string()))
    );
    assert_eq!(app.backend.current_branch().as_deref(), Some("feature-x"));
    assert_eq!(
        app.backend.calls(),
        calls(&["list", "create feature-x", "checkout feature-x"])
    );
}

#[test]
fn test_create_name_is_trimmed() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('n')).type_text("  spaced  ");
    assert_eq!(app.labels()[0], "spaced");

    app.press(KeyCode::Enter).settle();
    assert_eq!(
        app.state.exit,
        Some(ExitReason::SwitchedTo("spaced".to_string()))
    );
}

#[test]
fn test_enter_on_prompt_starts_editing() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Enter);
    assert_mode!(app.state, Mode::Editing { .. });
    assert!(app.take_pending().is_empty());
}

#[test]
fn test_empty_name_is_a_no_op() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('n')).type_text("   ");
    app.press(KeyCode::Enter);

    assert!(app.take_pending().is_empty());
    assert_mode!(app.state, Mode::Editing { .. });
    assert_eq!(app.backend.calls(), calls(&["list"]));
}

#[test]
fn test_escape_restores_placeholder() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('n')).type_text("abc");
    app.press(KeyCode::Esc);

    assert_mode!(app.state, Mode::Browsing);
    assert_eq!(app.labels()[0], CREATE_PROMPT_LABEL);
    assert_eq!(app.backend.calls(), calls(&["list"]));
}

#[test]
fn test_shortcuts_are_text_while_editing() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('n')).type_text("qdr/");

    assert_eq!(app.state.exit, None);
    assert_eq!(app.labels()[0], "qdr/");
    assert_eq!(app.backend.calls(), calls(&["list"]));
}

#[test]
fn test_ctrl_c_quits_while_editing() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('n')).type_text("wip");
    app.press_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert_eq!(app.state.exit, Some(ExitReason::Quit));
}

#[test]
fn test_create_failure_keeps_buffer() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('n')).type_text("dev");
    app.press(KeyCode::Enter).settle();

    assert_flash_contains!(app.state, "already exists");
    assert_eq!(app.state.exit, None);
    assert_eq!(app.state.mode.input().map(|i| i.value()), Some("dev"));
    assert_eq!(app.backend.calls(), calls(&["list", "create dev"]));
}

#[test]
fn test_checkout_failure_after_create_does_not_roll_back() {
    let mut app = TestApp::loaded(backend().failing_checkout("uncommitted changes"));
    app.press(KeyCode::Char('n')).type_text("wip");
    app.press(KeyCode::Enter).settle();

    assert_eq!(app.state.exit, None);
    assert_mode!(app.state, Mode::Browsing);
    assert_flash_contains!(app.state, "uncommitted changes");
    assert!(app.backend.has_branch("wip"));
    assert!(app.state.list.find_branch("wip").is_some());
    assert_eq!(app.state.current_branch.as_deref(), Some("main"));
}

// ═══════════════════════════════════════════════════
// Checkout
// ═══════════════════════════════════════════════════

#[test]
fn test_checkout_existing_branch_exits() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "dev");
    app.press(KeyCode::Enter).settle();

    assert_eq!(app.state.exit, Some(ExitReason::SwitchedTo("dev".to_string())));
    assert_eq!(app.backend.calls(), calls(&["list", "checkout dev"]));
}

#[test]
fn test_checkout_failure_is_surfaced() {
    let mut app = TestApp::loaded(backend().failing_checkout("would be overwritten"));
    select(&mut app, "dev");
    app.press(KeyCode::Enter).settle();

    assert_eq!(app.state.exit, None);
    assert_flash_contains!(app.state, "Erreur checkout");
    assert_flash_contains!(app.state, "would be overwritten");
    assert_mode!(app.state, Mode::Browsing);
}

#[test]
fn test_quit_key() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('q'));
    assert_eq!(app.state.exit, Some(ExitReason::Quit));
}

// ═══════════════════════════════════════════════════
// Suppression
// ═══════════════════════════════════════════════════

#[test]
fn test_delete_on_prompt_is_a_no_op() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('d'));
    assert_mode!(app.state, Mode::Browsing);
}

#[test]
fn test_delete_merged_branch() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "dev");
    app.press(KeyCode::Char('d'));

    assert_mode!(
        app.state,
        Mode::ConfirmingDelete {
            force_requested: false,
            ..
        }
    );
    assert_eq!(app.state.mode.delete_target(), Some("dev"));
    assert_eq!(app.description_of("dev"), Some(Annotation::ConfirmDelete.text()));

    app.press(KeyCode::Enter).settle();

    assert_mode!(app.state, Mode::Browsing);
    assert_flash_contains!(app.state, "Branche 'dev' supprimée");
    assert!(app.state.list.find_branch("dev").is_none());
    assert_eq!(app.backend.calls(), calls(&["list", "delete dev", "list"]));
}

#[test]
fn test_escape_restores_annotation() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "dev");
    app.press(KeyCode::Char('d')).press(KeyCode::Esc);

    assert_mode!(app.state, Mode::Browsing);
    assert_eq!(app.description_of("dev"), Some("branche locale"));
    assert_eq!(app.backend.calls(), calls(&["list"]));
}

#[test]
fn test_confirmation_swallows_other_keys() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "dev");
    app.press(KeyCode::Char('d'));
    app.press(KeyCode::Down)
        .press(KeyCode::Char('k'))
        .press(KeyCode::Char('q'))
        .press(KeyCode::Char('n'));

    assert_eq!(app.selected_name().as_deref(), Some("dev"));
    assert_eq!(app.state.exit, None);
    assert_mode!(app.state, Mode::ConfirmingDelete { .. });
}

#[test]
fn test_current_branch_is_protected() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "main");
    app.press(KeyCode::Char('d')).press(KeyCode::Enter);

    assert!(app.take_pending().is_empty());
    assert_mode!(app.state, Mode::Browsing);
    assert_flash_contains!(app.state, "Impossible de supprimer la branche courante");
    assert_eq!(app.description_of("main"), Some("Active"));
    assert_eq!(app.backend.calls(), calls(&["list"]));
}

#[test]
fn test_unmerged_branch_escalates_to_force() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "feature");
    app.press(KeyCode::Char('d')).press(KeyCode::Enter).settle();

    // Rien n'a été supprimé : on propose la suppression forcée.
    assert_mode!(
        app.state,
        Mode::ConfirmingDelete {
            force_requested: true,
            ..
        }
    );
    assert_eq!(app.description_of("feature"), Some(Annotation::ConfirmForce.text()));
    assert!(app.backend.has_branch("feature"));
    assert_no_flash!(app.state);

    app.press(KeyCode::Enter).settle();

    assert_mode!(app.state, Mode::Browsing);
    assert_flash_contains!(app.state, "Branche 'feature' supprimée");
    assert!(!app.backend.has_branch("feature"));
    assert_eq!(
        app.backend.calls(),
        calls(&["list", "delete feature", "delete --force feature", "list"])
    );
}

#[test]
fn test_escape_cancels_force_prompt() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "feature");
    app.press(KeyCode::Char('d')).press(KeyCode::Enter).settle();
    app.press(KeyCode::Esc);

    assert_mode!(app.state, Mode::Browsing);
    assert_eq!(app.description_of("feature"), Some("branche locale"));
    assert!(app.backend.has_branch("feature"));
}

#[test]
fn test_forced_delete_failure_aborts() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "feature");
    app.press(KeyCode::Char('d')).press(KeyCode::Enter).settle();

    app.backend.remove_branch("feature");
    app.press(KeyCode::Enter).settle();

    assert_mode!(app.state, Mode::Browsing);
    assert_flash_contains!(app.state, "Échec de la suppression forcée");
    assert_eq!(app.description_of("feature"), Some("branche locale"));
}

#[test]
fn test_other_delete_failure_aborts() {
    let mut app = TestApp::loaded(backend().failing_delete("permission denied"));
    select(&mut app, "dev");
    app.press(KeyCode::Char('d')).press(KeyCode::Enter).settle();

    assert_mode!(app.state, Mode::Browsing);
    assert_flash_contains!(app.state, "Échec de la suppression : permission denied");
    assert_eq!(app.description_of("dev"), Some("branche locale"));
}

// ═══════════════════════════════════════════════════
// Filtre
// ═══════════════════════════════════════════════════

#[test]
fn test_filter_enter_checks_out_best_match() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('/')).type_text("feat");
    assert_eq!(app.selected_name().as_deref(), Some("feature"));

    app.press(KeyCode::Enter);
    let pending = app.take_pending();
    assert_eq!(pending.len(), 1);
    assert_eq!(
        pending[0].request,
        TaskRequest::Checkout {
            name: "feature".to_string()
        }
    );
}

#[test]
fn test_filter_enter_on_prompt_starts_editing() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('/')).type_text("zzz");
    assert_eq!(app.labels(), vec![CREATE_PROMPT_LABEL.to_string()]);

    app.press(KeyCode::Enter);
    assert_mode!(app.state, Mode::Editing { .. });
    assert_eq!(app.state.list.filter(), &FilterState::Unfiltered);
    assert_eq!(app.state.list.visible_len(), 4);
}

#[test]
fn test_filter_suppresses_shortcuts() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('/')).type_text("qdn");

    assert_eq!(app.state.exit, None);
    assert_mode!(app.state, Mode::Browsing);
    assert!(app.state.list.is_filtering());
    assert_eq!(app.state.list.filter().query(), Some("qdn"));
}

#[test]
fn test_escape_clears_filter() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('/')).type_text("dev");
    app.press(KeyCode::Esc);

    assert_eq!(app.state.list.filter(), &FilterState::Unfiltered);
    assert_eq!(app.state.list.visible_len(), 4);
    assert_eq!(app.selected_name().as_deref(), Some("dev"));
}

// ═══════════════════════════════════════════════════
// Résultats périmés
// ═══════════════════════════════════════════════════

#[test]
fn test_stale_load_is_ignored() {
    let mut app = TestApp::loaded(backend());
    app.state.request_reload();
    app.state.request_reload();
    let tasks = app.take_pending();
    assert_eq!(tasks.len(), 2);

    let fresh = app.run(tasks[1].clone());
    app.complete(fresh);

    app.complete(TaskResult {
        ticket: tasks[0].ticket,
        request: TaskRequest::LoadBranches,
        outcome: TaskOutcome::Loaded(Ok(vec![BranchInfo::local("ghost", true)])),
    });

    assert!(app.state.list.find_branch("ghost").is_none());
    assert_eq!(app.state.current_branch.as_deref(), Some("main"));
    assert_eq!(app.state.list.branch_count(), 3);
}

#[test]
fn test_load_during_confirmation_follows_target() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "feature");
    app.press(KeyCode::Char('d'));

    app.backend.insert_branch_first("aaa");
    app.state.request_reload();
    app.settle();

    assert_eq!(app.state.mode.delete_target(), Some("feature"));
    assert_eq!(app.selected_name().as_deref(), Some("feature"));
    assert_eq!(app.description_of("feature"), Some(Annotation::ConfirmDelete.text()));
}

#[test]
fn test_load_during_confirmation_aborts_when_target_vanished() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "dev");
    app.press(KeyCode::Char('d'));

    app.backend.remove_branch("dev");
    app.state.request_reload();
    app.settle();

    assert_mode!(app.state, Mode::Browsing);
    assert!(app.state.list.find_branch("dev").is_none());
}

#[test]
fn test_delete_result_after_escape_reloads() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "dev");
    app.press(KeyCode::Char('d')).press(KeyCode::Enter);
    // Échap avant que la suppression ne réponde.
    app.press(KeyCode::Esc);
    assert_mode!(app.state, Mode::Browsing);

    app.settle();

    assert_mode!(app.state, Mode::Browsing);
    assert_flash_contains!(app.state, "Branche 'dev' supprimée");
    assert!(app.state.list.find_branch("dev").is_none());
}

#[test]
fn test_failed_delete_after_escape_is_dropped() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "feature");
    app.press(KeyCode::Char('d')).press(KeyCode::Enter);
    app.press(KeyCode::Esc);
    app.settle();

    assert_mode!(app.state, Mode::Browsing);
    assert_no_flash!(app.state);
    assert_eq!(app.description_of("feature"), Some("branche locale"));
    assert_eq!(app.backend.calls(), calls(&["list", "delete feature"]));
}

#[test]
fn test_create_result_after_escape_reloads() {
    let mut app = TestApp::loaded(backend());
    app.press(KeyCode::Char('n')).type_text("late");
    app.press(KeyCode::Enter).press(KeyCode::Esc);
    app.settle();

    assert_eq!(app.state.exit, None);
    assert_flash_contains!(app.state, "late");
    assert_eq!(app.state.current_branch.as_deref(), Some("late"));
}

#[test]
fn test_checkout_failure_after_escape_is_reported() {
    let mut app = TestApp::loaded(backend().failing_checkout("uncommitted changes"));
    app.press(KeyCode::Char('n')).type_text("late");
    app.press(KeyCode::Enter).press(KeyCode::Esc);
    app.settle();

    assert_mode!(app.state, Mode::Browsing);
    assert!(app.backend.has_branch("late"));
    assert!(app.state.list.find_branch("late").is_some());
    assert_flash_contains!(app.state, "créée, checkout impossible");
    assert_flash_contains!(app.state, "uncommitted changes");
    assert_eq!(app.state.current_branch.as_deref(), Some("main"));
}

#[test]
fn test_second_mutation_refused_while_busy() {
    let mut app = TestApp::loaded(backend());
    select(&mut app, "dev");
    app.press(KeyCode::Char('d')).press(KeyCode::Enter);
    app.press(KeyCode::Esc);
    app.press(KeyCode::Char('d')).press(KeyCode::Enter);

    assert_flash_contains!(app.state, "Opération en cours");
    let pending = app.take_pending();
    assert_eq!(pending.len(), 1);
}

#[test]
fn test_resize_updates_viewport() {
    let mut app = TestApp::loaded(backend());
    app.dispatch(AppAction::Resize(100, 40));

    assert_eq!(app.state.viewport.list_width, 96);
    assert_eq!(app.state.viewport.list_height, 38);
    assert_eq!(app.state.list.visible_height(), 11);
    assert_mode!(app.state, Mode::Browsing);
}
