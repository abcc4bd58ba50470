//! Browser bindings
//!
//! Everything that touches `web_sys` lives here. The page logic itself is
//! in `sim`, `renderer` and `ui`, which build and test natively.

pub mod animation;
pub mod app;
pub mod demos;
pub mod dom;
pub mod form;
pub mod modal;
pub mod nav;

pub use animation::{AnimationDriver, FrameControl};
pub use modal::ModalController;
