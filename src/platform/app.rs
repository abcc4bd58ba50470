//! Page startup and the functions exported to JavaScript
//!
//! `start` runs when the module loads. Page markup calls the exported
//! `loadFEAArticle()` etc. from `onclick` attributes.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Event;

use super::demos::{self, DemoResource, HERO_MESH};
use super::modal::ModalController;
use super::{dom, form, nav};
use crate::config::SiteConfig;
use crate::ui::articles::Article;

struct App {
    config: SiteConfig,
    modal: Option<Rc<ModalController>>,
    /// Page-lifetime canvas drivers
    hero: Vec<DemoResource>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }

    if let Err(e) = run() {
        log::error!("Startup failed: {e:?}");
    }
}

/// Initialise now, or once the document has been parsed
pub fn run() -> Result<(), JsValue> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_: Event| init_page())?;
    } else {
        init_page();
    }
    Ok(())
}

/// Each feature is independent; one failing doesn't stop the rest
fn init_page() {
    let config = SiteConfig::load();
    log::info!("Initialising page");

    let modal = ModalController::new(config.modal_settle_ms)
        .inspect_err(|e| log::error!("Modal unavailable: {e:?}"))
        .ok();

    if let Err(e) = nav::init_navigation(&config) {
        log::error!("Navigation init failed: {e:?}");
    }
    if let Err(e) = nav::init_reveal(&config) {
        log::error!("Reveal init failed: {e:?}");
    }
    if let Err(e) = form::init_contact_form(config.form_send_delay_ms) {
        log::error!("Contact form init failed: {e:?}");
    }
    if let Err(e) = demos::init_hero_controls() {
        log::error!("Hero controls init failed: {e:?}");
    }

    let hero = demos::start_mesh(&HERO_MESH, config.hero_mesh_density, !config.reduced_motion)
        .unwrap_or_else(|e| {
            log::error!("Hero mesh init failed: {e:?}");
            Vec::new()
        });

    APP.with(|app| {
        *app.borrow_mut() = Some(App { config, modal, hero });
    });
    log::info!("Page ready");
}

fn modal() -> Result<Rc<ModalController>, JsValue> {
    APP.with(|app| {
        app.borrow()
            .as_ref()
            .and_then(|app| app.modal.clone())
            .ok_or_else(|| JsValue::from_str("modal not initialised"))
    })
}

#[wasm_bindgen(js_name = showModal)]
pub fn show_modal(content: &str) -> Result<(), JsValue> {
    modal()?.open(content)
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() -> Result<(), JsValue> {
    modal()?.close()
}

fn show_article(article: Article) -> Result<(), JsValue> {
    log::info!("Opening article: {}", article.title());
    show_modal(article.markup())
}

#[wasm_bindgen(js_name = loadFEAArticle)]
pub fn load_fea_article() -> Result<(), JsValue> {
    show_article(Article::Fea)
}

#[wasm_bindgen(js_name = loadCOMSOLArticle)]
pub fn load_comsol_article() -> Result<(), JsValue> {
    show_article(Article::Comsol)
}

#[wasm_bindgen(js_name = loadDynamicsArticle)]
pub fn load_dynamics_article() -> Result<(), JsValue> {
    show_article(Article::Dynamics)
}

#[wasm_bindgen(js_name = loadFlexureArticle)]
pub fn load_flexure_article() -> Result<(), JsValue> {
    show_article(Article::Flexure)
}

/// Active config, for debugging from the console
#[wasm_bindgen(js_name = siteConfig)]
pub fn site_config() -> Result<String, JsValue> {
    APP.with(|app| {
        let app = app.borrow();
        let config = app.as_ref().map(|a| &a.config).cloned().unwrap_or_default();
        serde_json::to_string(&config).map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Number of hero drivers still animating
#[wasm_bindgen(js_name = heroAnimationsRunning)]
pub fn hero_animations_running() -> usize {
    APP.with(|app| {
        app.borrow().as_ref().map_or(0, |app| {
            app.hero
                .iter()
                .filter(|r| matches!(r, DemoResource::Animation(d) if d.is_running()))
                .count()
        })
    })
}
