//! Site tunables
//!
//! Compiled-in defaults, optionally overridden by a JSON block in the page:
//!
//! ```html
//! <script type="application/json" id="site-config">{ "form_send_delay_ms": 1500 }</script>
//! ```
//!
//! Missing keys keep their defaults; unknown keys are ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::mesh::{DENSITY_DEFAULT, DENSITY_MAX, DENSITY_MIN};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid site config value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // === Modal ===
    /// Delay between injecting article markup and starting its demo
    pub modal_settle_ms: u32,

    // === Contact form ===
    /// Length of the simulated send
    pub form_send_delay_ms: u32,

    // === Navigation ===
    /// Scroll offset (px) past which the navbar turns opaque
    pub navbar_scroll_threshold: f64,

    // === Reveal on scroll ===
    pub reveal_selector: String,
    /// Visible fraction that counts as "entered"
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,

    // === Hero canvas ===
    pub hero_mesh_density: u32,
    /// Draw the landing page mesh once instead of animating it
    pub reduced_motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            modal_settle_ms: 100,

            form_send_delay_ms: 2000,

            navbar_scroll_threshold: 100.0,

            reveal_selector: ".timeline-item, .blog-card".to_owned(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),

            hero_mesh_density: DENSITY_DEFAULT,
            reduced_motion: false,
        }
    }
}

impl SiteConfig {
    /// Element holding page-level overrides
    pub const ELEMENT_ID: &'static str = "site-config";

    /// Parse overrides on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::InvalidValue(format!(
                "reveal_threshold {} outside 0..=1",
                self.reveal_threshold
            )));
        }
        if !(DENSITY_MIN..=DENSITY_MAX).contains(&self.hero_mesh_density) {
            return Err(ConfigError::InvalidValue(format!(
                "hero_mesh_density {} outside {DENSITY_MIN}..={DENSITY_MAX}",
                self.hero_mesh_density
            )));
        }
        if !self.navbar_scroll_threshold.is_finite() {
            return Err(ConfigError::InvalidValue("navbar_scroll_threshold".to_owned()));
        }
        Ok(())
    }

    /// Load overrides from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(json) = json else {
            log::info!("Using default site config");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded site config overrides");
                config
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{ "form_send_delay_ms": 1500, "unknown": 1 }"#).unwrap();
        assert_eq!(config.form_send_delay_ms, 1500);
        assert_eq!(config.modal_settle_ms, 100);
        assert_eq!(config.reveal_selector, ".timeline-item, .blog-card");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(SiteConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            SiteConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{ "hero_mesh_density": 0 }"#),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_native_load_is_default() {
        #[cfg(not(target_arch = "wasm32"))]
        assert_eq!(SiteConfig::load(), SiteConfig::default());
    }
}
