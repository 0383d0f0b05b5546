//! Draggable and click-to-expand panels.

mod component;
pub mod drag;
pub mod expand;

pub use component::{DragPanel, ExpandSection, InteractionContext, use_interaction};
pub use drag::PanelDrag;
pub use expand::{ExpandCap, ExpandState, Expansion};
