mod tab_bar_component;

pub use tab_bar_component::TabBarComponent;
