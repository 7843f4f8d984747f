//! Sélecteur interactif de branches git.
//!
//! La machine à états (`state`, `handler`) ne parle au repository qu'à travers
//! le trait `git::BranchBackend`, exécuté hors de la boucle d'événements (`task`).

pub mod app;
pub mod error;
pub mod git;
pub mod handler;
pub mod logging;
pub mod state;
pub mod task;
pub mod ui;
pub mod utils;
