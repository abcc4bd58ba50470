//! Menu toggle, smooth scrolling, navbar restyle and reveal-on-scroll

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom;
use crate::config::SiteConfig;
use crate::ui::nav::{NavbarStyle, anchor_selector};

fn remove_active(elements: &[Element]) {
    for el in elements {
        let _ = el.class_list().remove_1("active");
    }
}

pub fn init_navigation(config: &SiteConfig) -> Result<(), JsValue> {
    let menu: Vec<Element> = [dom::query(".hamburger"), dom::query(".nav-menu")]
        .into_iter()
        .flatten()
        .collect();

    if let [hamburger, nav_menu] = menu.as_slice() {
        let toggled = [hamburger.clone(), nav_menu.clone()];
        dom::listen(hamburger, "click", move |_: Event| {
            for el in &toggled {
                let _ = el.class_list().toggle("active");
            }
        })?;
    }

    for link in dom::query_all(".nav-link") {
        let menu = menu.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        dom::listen(&link, "click", move |event: Event| {
            remove_active(&menu);
            let Some(selector) = anchor_selector(&href) else {
                return;
            };
            event.prevent_default();
            if let Some(section) = dom::query(selector) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }

    let threshold = config.navbar_scroll_threshold;
    let window = dom::window()?;
    let scroll_window = window.clone();
    dom::listen(&window, "scroll", move |_: Event| {
        let Some(navbar) = dom::query(".navbar") else {
            return;
        };
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        let style = NavbarStyle::for_scroll(scroll_y, threshold);
        let _ = dom::set_style(&navbar, "background", style.background);
        let _ = dom::set_style(&navbar, "box-shadow", style.box_shadow);
    })?;

    log::debug!("Navigation ready ({} menu elements)", menu.len());
    Ok(())
}

/// Fade elements in the first time they scroll into view
pub fn init_reveal(config: &SiteConfig) -> Result<(), JsValue> {
    let elements = dom::query_all(&config.reveal_selector);
    if elements.is_empty() {
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("loaded");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in &elements {
        el.class_list().add_1("loading")?;
        observer.observe(el);
    }
    log::debug!("Observing {} elements for reveal", elements.len());
    Ok(())
}
