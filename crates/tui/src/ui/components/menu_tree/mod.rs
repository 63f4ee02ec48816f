mod menu_tree_component;
mod state;

pub use menu_tree_component::MenuTreeComponent;
pub use state::{MenuTreeState, VisibleRow};
