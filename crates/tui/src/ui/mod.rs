pub mod components;
pub mod layout;
pub mod runtime;
pub mod shell;
pub mod theme;
