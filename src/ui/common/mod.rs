//! Widgets et utilitaires UI réutilisables.

pub mod help_bar;
pub mod style;
pub mod text;

pub use help_bar::{HelpBar, KeyBinding};
pub use text::{display_width, truncate};
