//! Service de branches consommé par la machine à états.
//!
//! L'interface ne dépend que de ce trait : les opérations sont exécutées dans des
//! threads de travail, d'où les bornes `Send + Sync`.

use std::path::PathBuf;

use super::branch::BranchInfo;
use super::repo::GitRepo;
use crate::error::Result;

/// Opérations sur les branches locales d'un repository.
pub trait BranchBackend: Send + Sync {
    /// Liste les branches dans l'ordre d'affichage ; une seule est marquée courante.
    fn list_branches(&self) -> Result<Vec<BranchInfo>>;

    /// Crée une branche depuis le point de checkout actuel.
    fn create_branch(&self, name: &str) -> Result<()>;

    /// Bascule sur une branche existante.
    fn checkout(&self, name: &str) -> Result<()>;

    /// Supprime une branche ; sans `force`, échoue si elle n'est pas fusionnée.
    fn delete_branch(&self, name: &str, force: bool) -> Result<()>;
}

/// Backend git basé sur libgit2.
///
/// `git2::Repository` n'est pas `Sync` : le repository est rouvert à chaque
/// opération, dans le thread qui l'exécute.
#[derive(Debug, Clone)]
pub struct GitBackend {
    path: PathBuf,
}

impl GitBackend {
    /// Vérifie que `path` est dans un repository git et mémorise sa racine.
    pub fn discover(path: impl Into<PathBuf>) -> Result<Self> {
        let repo = GitRepo::open(path.into())?;
        Ok(Self { path: repo.root() })
    }

    fn open(&self) -> Result<GitRepo> {
        GitRepo::open(&self.path)
    }
}

impl BranchBackend for GitBackend {
    fn list_branches(&self) -> Result<Vec<BranchInfo>> {
        self.open()?.branches()
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        self.open()?.create_branch(name)
    }

    fn checkout(&self, name: &str) -> Result<()> {
        self.open()?.checkout_branch(name)
    }

    fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        self.open()?.delete_branch(name, force)
    }
}
