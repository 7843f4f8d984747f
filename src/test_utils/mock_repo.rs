//! Backend en mémoire pour tester la machine à états sans filesystem.

use std::sync::{Mutex, MutexGuard};

use crate::error::{GitBpError, Result};
use crate::git::{BranchBackend, BranchInfo};

struct MockBranch {
    name: String,
    merged: bool,
}

#[derive(Default)]
struct MockState {
    branches: Vec<MockBranch>,
    current: Option<String>,
    calls: Vec<String>,
    list_error: Option<String>,
    create_error: Option<String>,
    checkout_error: Option<String>,
    delete_error: Option<String>,
}

/// Mock du backend git : branches en mémoire et journal des appels.
///
/// Les branches créées ou ajoutées avec `with_branch` sont fusionnées ;
/// `with_unmerged_branch` simule une branche qui refuse la suppression simple.
#[derive(Default)]
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn with_branch(self, name: &str, is_head: bool) -> Self {
        self.push_branch(name, true, is_head);
        self
    }

    pub fn with_unmerged_branch(self, name: &str) -> Self {
        self.push_branch(name, false, false);
        self
    }

    pub fn failing_list(self, message: &str) -> Self {
        self.lock().list_error = Some(message.to_string());
        self
    }

    pub fn failing_create(self, message: &str) -> Self {
        self.lock().create_error = Some(message.to_string());
        self
    }

    pub fn failing_checkout(self, message: &str) -> Self {
        self.lock().checkout_error = Some(message.to_string());
        self
    }

    pub fn failing_delete(self, message: &str) -> Self {
        self.lock().delete_error = Some(message.to_string());
        self
    }

    fn push_branch(&self, name: &str, merged: bool, is_head: bool) {
        let mut state = self.lock();
        state.branches.push(MockBranch {
            name: name.to_string(),
            merged,
        });
        if is_head {
            state.current = Some(name.to_string());
        }
    }

    /// Ajoute une branche en tête de liste, comme un changement extérieur.
    pub fn insert_branch_first(&self, name: &str) {
        self.lock().branches.insert(
            0,
            MockBranch {
                name: name.to_string(),
                merged: true,
            },
        );
    }

    /// Supprime une branche sans passer par le trait (changement extérieur).
    pub fn remove_branch(&self, name: &str) {
        self.lock().branches.retain(|b| b.name != name);
    }

    /// Appels reçus, dans l'ordre ("list", "create x", "delete --force y"...).
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn has_branch(&self, name: &str) -> bool {
        self.lock().branches.iter().any(|b| b.name == name)
    }

    pub fn current_branch(&self) -> Option<String> {
        self.lock().current.clone()
    }
}

impl BranchBackend for MockBackend {
    fn list_branches(&self) -> Result<Vec<BranchInfo>> {
        let mut state = self.lock();
        state.calls.push("list".to_string());
        if let Some(message) = &state.list_error {
            return Err(GitBpError::Other(message.clone()));
        }
        let current = state.current.as_deref();
        Ok(state
            .branches
            .iter()
            .map(|b| BranchInfo::local(b.name.as_str(), current == Some(b.name.as_str())))
            .collect())
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(format!("create {}", name));
        if let Some(message) = &state.create_error {
            return Err(GitBpError::Other(message.clone()));
        }
        if name.trim().is_empty() {
            return Err(GitBpError::EmptyBranchName);
        }
        if state.branches.iter().any(|b| b.name == name) {
            return Err(GitBpError::Other(format!(
                "a branch named '{}' already exists",
                name
            )));
        }
        state.branches.push(MockBranch {
            name: name.to_string(),
            merged: true,
        });
        Ok(())
    }

    fn checkout(&self, name: &str) -> Result<()> {
        let mut state = self.lock();
        state.calls.push(format!("checkout {}", name));
        if let Some(message) = &state.checkout_error {
            return Err(GitBpError::Other(message.clone()));
        }
        if !state.branches.iter().any(|b| b.name == name) {
            return Err(GitBpError::BranchNotFound {
                name: name.to_string(),
            });
        }
        state.current = Some(name.to_string());
        Ok(())
    }

    fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        let mut state = self.lock();
        if force {
            state.calls.push(format!("delete --force {}", name));
        } else {
            state.calls.push(format!("delete {}", name));
        }
        if let Some(message) = &state.delete_error {
            return Err(GitBpError::Other(message.clone()));
        }

        let Some(position) = state.branches.iter().position(|b| b.name == name) else {
            return Err(GitBpError::BranchNotFound {
                name: name.to_string(),
            });
        };
        if state.current.as_deref() == Some(name) {
            return Err(GitBpError::Other(format!(
                "cannot delete branch '{}' checked out",
                name
            )));
        }
        if !force && !state.branches[position].merged {
            return Err(GitBpError::NotFullyMerged {
                name: name.to_string(),
            });
        }
        state.branches.remove(position);
        Ok(())
    }
}
