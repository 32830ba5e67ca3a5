//! Rendering boundary
//!
//! The simulation never draws. Each frame is captured into a `FrameSnapshot`
//! and turned into colored triangles for whatever GPU backend the host runs.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{FrameSnapshot, ParallaxOffsets, PickupView, PlayerView, PopupView};
pub use shapes::frame_vertices;
pub use vertex::Vertex;
