//! Helpers shared by the menubar CLI and TUI: configuration loading, path
//! expansion, and the category display-name table.

pub mod config;
mod labels;
mod path_processing;

pub use config::{ConfigError, DocumentRoot, MenubarConfig};
pub use labels::{CATEGORY_LABELS, category_label};
pub use path_processing::expand_tilde;
