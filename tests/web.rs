#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlButtonElement, HtmlCanvasElement};

use mech_portfolio::platform::animation::{AnimationDriver, FrameControl};
use mech_portfolio::platform::dom::{self, EventListener};
use mech_portfolio::platform::modal::{ModalController, OVERLAY_ID};
use mech_portfolio::renderer::{CanvasPainter, MeshScene, MeshStyle};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn modal_restores_overflow_and_detaches() {
    let body = dom::body().unwrap();
    body.style().set_property("overflow", "scroll").unwrap();

    let modal = ModalController::new(0).unwrap();
    modal.open("<p id=\"modal-test-content\">hello</p>").unwrap();
    assert!(modal.is_open());
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");
    assert!(dom::by_id::<web_sys::Element>("modal-test-content").is_some());

    // Replacing content keeps the overflow captured on first open
    modal.open("<p>second</p>").unwrap();
    assert!(dom::by_id::<web_sys::Element>("modal-test-content").is_none());

    modal.close().unwrap();
    assert!(!modal.is_open());
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "scroll");
    assert!(dom::by_id::<web_sys::Element>(OVERLAY_ID).is_none());

    // Second close is a no-op
    modal.close().unwrap();
    body.style().remove_property("overflow").unwrap();
}

#[wasm_bindgen_test]
fn painter_draws_mesh_frame() {
    let canvas: HtmlCanvasElement = dom::document()
        .unwrap()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(300);
    canvas.set_height(200);

    let painter = CanvasPainter::new(canvas).unwrap();
    assert_eq!(painter.size(), (300.0, 200.0));
    assert!(!painter.is_connected());

    let scene = MeshScene::new(MeshStyle::DEMO, 300.0, 200.0);
    painter.paint(&scene.render(1.5)).unwrap();
}

#[wasm_bindgen_test]
fn driver_stops_explicitly() {
    let driver = AnimationDriver::start("test", |_| FrameControl::Continue).unwrap();
    assert!(driver.is_running());
    driver.stop();
    assert!(!driver.is_running());
    driver.stop();
}

#[wasm_bindgen_test]
fn listener_detaches_on_drop() {
    let button: HtmlButtonElement = dom::document()
        .unwrap()
        .create_element("button")
        .unwrap()
        .dyn_into()
        .unwrap();
    let clicks = Rc::new(Cell::new(0));

    let counter = clicks.clone();
    let listener = EventListener::new(&button, "click", move |_: Event| {
        counter.set(counter.get() + 1);
    })
    .unwrap();

    button.click();
    assert_eq!(clicks.get(), 1);

    drop(listener);
    button.click();
    assert_eq!(clicks.get(), 1);
}
