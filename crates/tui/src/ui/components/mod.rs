//! UI components: tab bar, category bar, menu tree, intro block, footer.

pub mod button_bar;
pub mod category_bar;
pub mod component;
pub mod footer;
pub mod intro;
pub mod menu_tree;
pub mod tab_bar;

pub use category_bar::CategoryBarComponent;
pub use component::*;
pub use footer::FooterComponent;
pub use intro::IntroComponent;
pub use menu_tree::MenuTreeComponent;
pub use tab_bar::TabBarComponent;
