pub mod graph_view;
pub mod panel;
pub mod settings;
