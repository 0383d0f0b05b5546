//! Force-directed history graph drawn on a 2D canvas.

mod component;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use render::{Frame, FrameRequest, Marker, Segment, build_frame};
pub use state::{GraphState, ViewTransform};
pub use types::{GraphData, GraphLink, GraphNode, Key};
