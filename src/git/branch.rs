use git2::{BranchType, ErrorCode, Oid, Repository};

use crate::error::{GitBpError, Result};

/// Informations sur une branche locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    pub name: String,
    pub is_head: bool,
    /// Upstream configuré en forme courte (ex: "origin/main").
    pub upstream: Option<String>,
    /// Date du commit pointé par la branche (secondes depuis l'epoch).
    pub last_commit: i64,
}

impl BranchInfo {
    /// Construit une branche sans upstream, pratique pour les tests et les mocks.
    pub fn local(name: &str, is_head: bool) -> Self {
        Self {
            name: name.to_string(),
            is_head,
            upstream: None,
            last_commit: 0,
        }
    }
}

/// Liste les branches locales, les plus récemment modifiées en premier.
pub fn list_branches(repo: &Repository) -> Result<Vec<BranchInfo>> {
    let mut branches = Vec::new();

    for branch_result in repo.branches(Some(BranchType::Local))? {
        let (branch, _branch_type) = branch_result?;
        let Some(name) = branch.name()?.map(String::from) else {
            // Nom non UTF-8 : impossible à afficher ni à passer au backend.
            continue;
        };

        let upstream = branch
            .upstream()
            .ok()
            .and_then(|u| u.name().ok().flatten().map(String::from));

        let last_commit = branch
            .get()
            .peel_to_commit()
            .map(|c| c.time().seconds())
            .unwrap_or(0);

        branches.push(BranchInfo {
            is_head: branch.is_head(),
            name,
            upstream,
            last_commit,
        });
    }

    branches.sort_by(|a, b| {
        b.last_commit
            .cmp(&a.last_commit)
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(branches)
}

/// Crée une nouvelle branche à partir de HEAD.
pub fn create_branch(repo: &Repository, name: &str) -> Result<()> {
    require_name(name)?;
    let head = repo.head()?;
    let commit = head.peel_to_commit()?;
    repo.branch(name, &commit, false)?;
    Ok(())
}

/// Checkout une branche existante.
///
/// Le checkout est "safe" : il échoue si des modifications locales seraient écrasées.
pub fn checkout_branch(repo: &Repository, name: &str) -> Result<()> {
    require_name(name)?;
    let branch = find_local(repo, name)?;
    let refname = branch
        .get()
        .name()
        .ok_or_else(|| GitBpError::Other(format!("Référence invalide pour '{}'", name)))?
        .to_string();

    let obj = branch.get().peel(git2::ObjectType::Commit)?;
    repo.checkout_tree(&obj, None)?;
    repo.set_head(&refname)?;
    Ok(())
}

/// Supprime une branche locale.
///
/// Sans `force`, la suppression est refusée si la branche contient des commits
/// absents de sa référence de fusion (upstream, sinon HEAD).
pub fn delete_branch(repo: &Repository, name: &str, force: bool) -> Result<()> {
    require_name(name)?;
    let mut branch = find_local(repo, name)?;

    if !force {
        let tip = branch.get().peel_to_commit()?.id();
        let merge_base = merge_reference(repo, &branch)?;
        if !is_merged(repo, tip, merge_base)? {
            return Err(GitBpError::NotFullyMerged {
                name: name.to_string(),
            });
        }
    }

    branch.delete()?;
    Ok(())
}

/// Indique si `tip` est contenu dans l'historique de `target`.
pub fn is_merged(repo: &Repository, tip: Oid, target: Option<Oid>) -> Result<bool> {
    match target {
        Some(target) if target == tip => Ok(true),
        Some(target) => Ok(repo.graph_descendant_of(target, tip)?),
        // HEAD sans commit : rien ne peut être fusionné.
        None => Ok(false),
    }
}

/// Commit contre lequel vérifier la fusion : l'upstream s'il existe, sinon HEAD.
fn merge_reference(repo: &Repository, branch: &git2::Branch<'_>) -> Result<Option<Oid>> {
    if let Ok(upstream) = branch.upstream() {
        return Ok(Some(upstream.get().peel_to_commit()?.id()));
    }
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_commit()?.id())),
        Err(e) if e.code() == ErrorCode::UnbornBranch => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn find_local<'r>(repo: &'r Repository, name: &str) -> Result<git2::Branch<'r>> {
    repo.find_branch(name, BranchType::Local).map_err(|e| {
        if e.code() == ErrorCode::NotFound {
            GitBpError::BranchNotFound {
                name: name.to_string(),
            }
        } else {
            e.into()
        }
    })
}

fn require_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GitBpError::EmptyBranchName);
    }
    Ok(())
}
