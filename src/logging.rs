//! Journalisation dans un fichier, jamais sur le terminal occupé par l'interface.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Variable d'environnement qui remplace le niveau passé en ligne de commande.
pub const LOG_ENV: &str = "GIT_BP_LOG";

const LOG_FILE_PREFIX: &str = "git_bp.log";

/// Répertoire des logs : `<data local>/git_bp`, ou le répertoire temporaire.
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("git_bp")
}

/// Construit le filtre : `GIT_BP_LOG` s'il est défini, sinon `git_bp=<level>`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(format!("git_bp={}", level)))
}

/// Installe le subscriber global avec un fichier roulé chaque jour.
///
/// Le guard retourné doit vivre jusqu'à la fin du programme pour vider le buffer.
pub fn init(level: &str) -> std::io::Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(build_filter(level))
        .init();

    Ok(guard)
}
