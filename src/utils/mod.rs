//! Utilitaires divers pour l'application.

pub mod time;

pub use time::format_relative_time;
