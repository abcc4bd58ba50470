//! Mech Portfolio - interactive engineering demos for a portfolio site
//!
//! Core modules:
//! - `sim`: Demo math (stress field, mesh layout, mass-spring-damper)
//! - `renderer`: Scenes as draw lists, Canvas 2D playback on the web
//! - `ui`: Modal session, article catalogue, form and navbar rules
//! - `platform`: Browser bindings and the exported JS functions
//! - `config`: Page-level tunables

pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod ui;

pub use config::{ConfigError, SiteConfig};
