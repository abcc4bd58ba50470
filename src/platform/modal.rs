//! Article modal bound to the DOM
//!
//! One overlay element is created (or adopted from the page) on start and
//! reused for every article. It is attached to `<body>` while open and
//! detached on close.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, KeyboardEvent};

use super::demos::{self, DemoResource};
use super::dom;
use crate::ui::modal::{ContentGeneration, Dismissal, ModalSession};

pub const OVERLAY_ID: &str = "modal-overlay";
const CLOSE_ID: &str = "modal-close";
const BODY_ID: &str = "modal-body";

const OVERLAY_MARKUP: &str = r#"
    <div class="modal-container">
        <div class="modal-header">
            <button class="modal-close" id="modal-close">&times;</button>
        </div>
        <div class="modal-body" id="modal-body"></div>
    </div>"#;

pub struct ModalController {
    overlay: Element,
    body: Element,
    session: RefCell<ModalSession<DemoResource>>,
    /// Delay before demos in fresh content are started
    settle_ms: u32,
}

impl ModalController {
    pub fn new(settle_ms: u32) -> Result<Rc<Self>, JsValue> {
        let document = dom::document()?;
        let overlay = match document.get_element_by_id(OVERLAY_ID) {
            Some(existing) => existing,
            None => {
                let overlay = document.create_element("div")?;
                overlay.set_id(OVERLAY_ID);
                overlay.set_class_name("modal-overlay");
                overlay.set_inner_html(OVERLAY_MARKUP);
                overlay
            }
        };
        // Looked up through the overlay, which may not be in the document yet
        let body = overlay
            .query_selector(&format!("#{BODY_ID}"))?
            .ok_or("modal overlay has no body region")?;
        let close_button = overlay.query_selector(&format!("#{CLOSE_ID}"))?;

        let controller = Rc::new(Self {
            overlay,
            body,
            session: RefCell::new(ModalSession::new()),
            settle_ms,
        });
        controller.bind_dismissal(close_button)?;
        Ok(controller)
    }

    /// Listeners live for the page and hold only a weak handle
    fn bind_dismissal(self: &Rc<Self>, close_button: Option<Element>) -> Result<(), JsValue> {
        if let Some(button) = close_button {
            let weak = Rc::downgrade(self);
            dom::listen(&button, "click", move |_: Event| {
                if let Some(modal) = weak.upgrade() {
                    modal.dismiss(Dismissal::CloseButton);
                }
            })?;
        }

        let weak = Rc::downgrade(self);
        dom::listen(&self.overlay, "click", move |event: Event| {
            let on_backdrop = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el.id() == OVERLAY_ID);
            if on_backdrop {
                if let Some(modal) = weak.upgrade() {
                    modal.dismiss(Dismissal::Backdrop);
                }
            }
        })?;

        let weak = Rc::downgrade(self);
        dom::listen(&dom::document()?, "keydown", move |event: Event| {
            let Some(reason) = event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|e| Dismissal::from_key(&e.key()))
            else {
                return;
            };
            if let Some(modal) = weak.upgrade() {
                if modal.is_open() {
                    modal.dismiss(reason);
                }
            }
        })?;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.session.borrow().is_open()
    }

    /// Show `content`, replacing whatever was shown before
    pub fn open(self: &Rc<Self>, content: &str) -> Result<(), JsValue> {
        let page = dom::body()?;
        let style = page.style();
        let overflow = style.get_property_value("overflow")?;
        let generation = self.session.borrow_mut().open(&overflow);

        if !self.overlay.is_connected() {
            page.append_child(&self.overlay)?;
        }
        self.body.set_inner_html(content);
        self.overlay.class_list().add_1("active")?;
        style.set_property("overflow", "hidden")?;
        log::info!("Modal opened");

        let weak = Rc::downgrade(self);
        dom::set_timeout(self.settle_ms, move || {
            if let Some(modal) = weak.upgrade() {
                modal.start_demos(generation);
            }
        })?;
        Ok(())
    }

    fn start_demos(&self, generation: ContentGeneration) {
        if !self.session.borrow().is_current(generation) {
            log::debug!("Modal content changed before demos started, skipping");
            return;
        }
        let resources = match demos::start_article_demos() {
            Ok(resources) => resources,
            Err(e) => {
                log::error!("Failed to start article demos: {e:?}");
                return;
            }
        };

        let mut session = self.session.borrow_mut();
        for resource in resources {
            // Cannot fail: the generation was checked above and nothing ran since
            let _ = session.adopt(generation, resource);
        }
        log::debug!("Modal owns {} demo resources", session.resource_count());
    }

    /// Hide the overlay and release the content's demos. No-op when closed.
    pub fn close(&self) -> Result<(), JsValue> {
        let Some(overflow) = self.session.borrow_mut().close() else {
            return Ok(());
        };

        self.overlay.class_list().remove_1("active")?;
        self.body.set_inner_html("");
        self.overlay.remove();

        let style = dom::body()?.style();
        if overflow.is_empty() {
            style.remove_property("overflow")?;
        } else {
            style.set_property("overflow", &overflow)?;
        }
        log::info!("Modal closed");
        Ok(())
    }

    fn dismiss(&self, reason: Dismissal) {
        log::debug!("Modal dismissed: {reason:?}");
        if let Err(e) = self.close() {
            log::error!("Failed to close modal: {e:?}");
        }
    }
}
