//! Canvas rendering
//!
//! Scenes turn demo state into a [`DrawList`]; on the web the list is
//! replayed onto a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod commands;
pub mod dynamics;
pub mod mesh;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use commands::{DrawCommand, DrawList, Stroke};
pub use dynamics::{DynamicsScene, ForcePlot, ResponsePlot};
pub use mesh::{MeshScene, MeshStyle};
