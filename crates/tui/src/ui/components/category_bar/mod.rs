mod category_bar_component;

pub use category_bar_component::CategoryBarComponent;
