use std::path::{Path, PathBuf};

use git2::Repository;

use super::branch::BranchInfo;
use crate::error::Result;

/// Wrapper haut-niveau autour de git2::Repository.
pub struct GitRepo {
    pub repo: Repository,
}

impl GitRepo {
    /// Ouvre le repository git contenant le répertoire donné.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Self { repo })
    }

    /// Répertoire racine du repository (ou le répertoire `.git` pour un repo bare).
    pub fn root(&self) -> PathBuf {
        self.repo
            .workdir()
            .unwrap_or_else(|| self.repo.path())
            .to_path_buf()
    }

    /// Retourne la liste des branches locales, par activité récente.
    pub fn branches(&self) -> Result<Vec<BranchInfo>> {
        super::branch::list_branches(&self.repo)
    }

    /// Crée une branche à partir de HEAD.
    pub fn create_branch(&self, name: &str) -> Result<()> {
        super::branch::create_branch(&self.repo, name)
    }

    /// Checkout une branche existante.
    pub fn checkout_branch(&self, name: &str) -> Result<()> {
        super::branch::checkout_branch(&self.repo, name)
    }

    /// Supprime une branche locale.
    pub fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        super::branch::delete_branch(&self.repo, name, force)
    }
}
