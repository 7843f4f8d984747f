use std::sync::Arc;

use clap::{Parser, Subcommand};

use git_bp::app::App;
use git_bp::git::{BranchBackend, GitBackend};
use git_bp::logging;
use git_bp::state::ExitReason;
use git_bp::utils::format_relative_time;

#[derive(Parser)]
#[command(name = "git_bp")]
#[command(about = "Choisissez, créez et supprimez vos branches git depuis le terminal")]
#[command(version)]
struct Cli {
    /// Chemin du repository (défaut : répertoire courant)
    #[arg(short, long, default_value = ".")]
    path: String,

    /// Niveau de log écrit dans le fichier (remplacé par GIT_BP_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Affiche les branches locales (non-interactif)
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(&cli.log_level)?;
    tracing::info!(path = %cli.path, "git_bp démarre");

    let backend = GitBackend::discover(&cli.path)?;

    match cli.command {
        Some(Commands::List) => {
            // Mode non-interactif : affiche les branches.
            print_branches(&backend)?;
        }
        None => {
            // Mode par défaut : lance la TUI interactive.
            let mut app = App::new(Arc::new(backend), cli.path);
            match app.run()? {
                ExitReason::SwitchedTo(name) => println!("Switched to branch '{}'", name),
                ExitReason::Quit => {}
            }
        }
    }

    tracing::info!("git_bp terminé");
    Ok(())
}

/// Affiche les branches locales en mode non-interactif.
fn print_branches(backend: &GitBackend) -> anyhow::Result<()> {
    for branch in backend.list_branches()? {
        let marker = if branch.is_head { "*" } else { " " };
        let upstream = branch
            .upstream
            .as_deref()
            .map(|u| format!(" \x1b[36m[{}]\x1b[0m", u))
            .unwrap_or_default();

        println!(
            "{} {}{} \x1b[90m{}\x1b[0m",
            marker,
            branch.name,
            upstream,
            format_relative_time(branch.last_commit),
        );
    }

    Ok(())
}
