mod component;
mod theme_menu;

pub use component::SettingsPanel;
pub use theme_menu::ThemeMenu;
