//! Demo math
//!
//! Everything here is pure: state in, numbers out. No DOM, no canvas, no
//! clocks. Time is always passed in by the caller.

pub mod controls;
pub mod mesh;
pub mod oscillator;

pub use mesh::{MeshGeometry, MeshLayout, MeshParams, is_highlighted, stress};
pub use oscillator::{AnimationParameters, Parameter, damping_ratio, natural_frequency};
