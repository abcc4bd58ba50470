//! Interactive demos: canvas animations and slider-driven illustrations
//!
//! Every initialiser looks its elements up by id and quietly returns
//! nothing when the page doesn't have them. What it starts is handed back
//! as [`DemoResource`]s; dropping those stops the animation and detaches
//! the slider listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlCanvasElement, HtmlInputElement};

use super::animation::{AnimationDriver, FrameControl};
use super::dom::{self, EventListener};
use crate::renderer::{CanvasPainter, DynamicsScene, ForcePlot, MeshScene, MeshStyle, ResponsePlot};
use crate::sim::controls;
use crate::sim::mesh::MeshParams;
use crate::sim::oscillator::Parameter;
use crate::ui::articles::{self, DemoKind, ids};

/// Something a demo keeps alive
pub enum DemoResource {
    Animation(AnimationDriver),
    Listener(EventListener),
}

/// Element ids for one mesh canvas and its density slider
pub struct MeshBinding {
    pub label: &'static str,
    pub canvas_id: &'static str,
    pub slider_id: &'static str,
    pub value_id: &'static str,
    pub style: MeshStyle,
}

pub const HERO_MESH: MeshBinding = MeshBinding {
    label: "hero mesh",
    canvas_id: "feaCanvas",
    slider_id: "mesh-density",
    value_id: "mesh-value",
    style: MeshStyle::HERO,
};

pub const ARTICLE_MESH: MeshBinding = MeshBinding {
    label: "article mesh",
    canvas_id: ids::DEMO_CANVAS,
    slider_id: ids::DEMO_MESH_DENSITY,
    value_id: ids::DEMO_MESH_VALUE,
    style: MeshStyle::DEMO,
};

/// Wall-clock seconds, the stress field's time base
fn wall_seconds() -> f64 {
    js_sys::Date::now() * 0.001
}

fn input_value(event: &Event) -> Option<String> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    Some(input.value())
}

/// Start a mesh canvas. With `animate` false a single frame is drawn.
pub fn start_mesh(
    binding: &MeshBinding,
    density: u32,
    animate: bool,
) -> Result<Vec<DemoResource>, JsValue> {
    let Some(canvas) = dom::by_id::<HtmlCanvasElement>(binding.canvas_id) else {
        log::debug!("{}: #{} not found, skipping", binding.label, binding.canvas_id);
        return Ok(Vec::new());
    };
    let painter = Rc::new(CanvasPainter::new(canvas)?);
    let (width, height) = painter.size();

    let mut scene = MeshScene::new(binding.style, width, height);
    scene.params = MeshParams::new(density);
    let scene = Rc::new(Cell::new(scene));
    let mut resources = Vec::new();

    if let Some(slider) = dom::by_id::<HtmlInputElement>(binding.slider_id) {
        slider.set_value(&scene.get().params.density.to_string());
        dom::set_text(binding.value_id, &scene.get().params.density.to_string());

        let scene = scene.clone();
        let value_id = binding.value_id;
        let painter = (!animate).then(|| painter.clone());
        let listener = EventListener::new(&slider, "input", move |event: Event| {
            let Some(raw) = input_value(&event) else {
                return;
            };
            let mut current = scene.get();
            if let Some(density) = current.params.set_from_input(&raw) {
                scene.set(current);
                dom::set_text(value_id, &density.to_string());
                // Static canvases redraw on change instead of every frame
                if let Some(painter) = &painter {
                    let _ = painter.paint(&current.render(wall_seconds()));
                }
            }
        })?;
        resources.push(DemoResource::Listener(listener));
    }

    if !animate {
        painter.paint(&scene.get().render(wall_seconds()))?;
        log::info!("{}: drawn once", binding.label);
        return Ok(resources);
    }

    let label = binding.label;
    let driver = AnimationDriver::start(label, move |_| {
        if !painter.is_connected() {
            return FrameControl::Stop;
        }
        match painter.paint(&scene.get().render(wall_seconds())) {
            Ok(()) => FrameControl::Continue,
            Err(e) => {
                log::warn!("{label}: paint failed: {e:?}");
                FrameControl::Stop
            }
        }
    })?;
    resources.push(DemoResource::Animation(driver));
    Ok(resources)
}

/// Optional side canvas by id
fn side_painter(id: &str) -> Result<Option<CanvasPainter>, JsValue> {
    dom::by_id::<HtmlCanvasElement>(id)
        .map(CanvasPainter::new)
        .transpose()
}

/// Start the mass-spring-damper demo
pub fn start_oscillator() -> Result<Vec<DemoResource>, JsValue> {
    let Some(canvas) = dom::by_id::<HtmlCanvasElement>(ids::DYNAMICS_CANVAS) else {
        log::debug!("oscillator: #{} not found, skipping", ids::DYNAMICS_CANVAS);
        return Ok(Vec::new());
    };
    let painter = CanvasPainter::new(canvas)?;
    let (width, height) = painter.size();
    let scene = Rc::new(RefCell::new(DynamicsScene::new(width, height)));
    let mut resources = Vec::new();

    for param in Parameter::ALL {
        let value = scene.borrow().params.get(param);
        dom::set_text(articles::label_id(param), &param.format(value));

        let Some(slider) = dom::by_id::<HtmlInputElement>(articles::slider_id(param)) else {
            continue;
        };
        // Fresh state on every open, so the slider follows it
        slider.set_value(&value.to_string());

        let scene = scene.clone();
        let listener = EventListener::new(&slider, "input", move |event: Event| {
            let Some(raw) = input_value(&event) else {
                return;
            };
            if let Some(stored) = scene.borrow_mut().params.set_from_input(param, &raw) {
                dom::set_text(articles::label_id(param), &param.format(stored));
            }
        })?;
        resources.push(DemoResource::Listener(listener));
    }

    let force = side_painter(ids::TIME_CANVAS)?.map(|p| {
        let (w, h) = p.size();
        (p, ForcePlot::new(w, h))
    });
    let response = side_painter(ids::FREQ_CANVAS)?.map(|p| {
        let (w, h) = p.size();
        (p, ResponsePlot::new(w, h))
    });

    let driver = AnimationDriver::start("oscillator", move |_| {
        if !painter.is_connected() {
            return FrameControl::Stop;
        }
        let mut scene = scene.borrow_mut();
        let mut result = painter.paint(&scene.render());
        if let Some((p, plot)) = &force {
            result = result.and_then(|_| p.paint(&plot.render(&scene.params, scene.time)));
        }
        if let Some((p, plot)) = &response {
            result = result.and_then(|_| p.paint(&plot.render(&scene.params)));
        }
        scene.advance();

        match result {
            Ok(()) => FrameControl::Continue,
            Err(e) => {
                log::warn!("oscillator: paint failed: {e:?}");
                FrameControl::Stop
            }
        }
    })?;
    resources.push(DemoResource::Animation(driver));
    Ok(resources)
}

/// Article thermal slider restyling `.heat-map`
pub fn start_thermal() -> Result<Vec<DemoResource>, JsValue> {
    let Some(slider) = dom::by_id::<HtmlInputElement>(ids::DEMO_TEMP_SLIDER) else {
        return Ok(Vec::new());
    };
    let listener = EventListener::new(&slider, "input", move |event: Event| {
        let Some(temperature) = input_value(&event).and_then(|v| v.parse::<f64>().ok()) else {
            return;
        };
        dom::set_text(ids::DEMO_TEMP_VALUE, &controls::temperature_label(temperature));
        if let Some(heat_map) = dom::query(".heat-map") {
            let _ = dom::set_style(&heat_map, "background", &controls::heat_map_gradient(temperature));
        }
    })?;
    Ok(vec![DemoResource::Listener(listener)])
}

/// Start whatever demos the current modal content holds
pub fn start_article_demos() -> Result<Vec<DemoResource>, JsValue> {
    let mut resources = Vec::new();
    for kind in [DemoKind::Mesh, DemoKind::Thermal, DemoKind::Oscillator] {
        let started = match kind {
            DemoKind::Mesh => start_mesh(&ARTICLE_MESH, crate::sim::mesh::DENSITY_DEFAULT, true)?,
            DemoKind::Thermal => start_thermal()?,
            DemoKind::Oscillator => start_oscillator()?,
        };
        if !started.is_empty() {
            log::info!("Started {kind:?} demo");
        }
        resources.extend(started);
    }
    Ok(resources)
}

/// Landing page sliders that restyle CSS illustrations. Page lifetime.
pub fn init_hero_controls() -> Result<(), JsValue> {
    if let Some(slider) = dom::by_id::<HtmlInputElement>("temperature") {
        dom::listen(&slider, "input", |event: Event| {
            let Some(t) = input_value(&event).and_then(|v| v.parse::<f64>().ok()) else {
                return;
            };
            dom::set_text("temp-value", &controls::temperature_label(t));
            if let Some(el) = dom::query(".heat-distribution") {
                let _ = dom::set_style(&el, "filter", &controls::heat_filter(t));
            }
        })?;
    }

    if let Some(slider) = dom::by_id::<HtmlInputElement>("frequency") {
        dom::listen(&slider, "input", |event: Event| {
            let Some(hz) = input_value(&event).and_then(|v| v.parse::<f64>().ok()) else {
                return;
            };
            dom::set_text("freq-value", &controls::frequency_label(hz));
            let duration = format!("{}s", controls::trim_number(controls::spring_animation_secs(hz)));
            for selector in [".spring", ".mass"] {
                if let Some(el) = dom::query(selector) {
                    let _ = dom::set_style(&el, "animation-duration", &duration);
                }
            }
        })?;
    }

    if let Some(slider) = dom::by_id::<HtmlInputElement>("deflection") {
        dom::listen(&slider, "input", |event: Event| {
            let Some(mm) = input_value(&event).and_then(|v| v.parse::<f64>().ok()) else {
                return;
            };
            dom::set_text("def-value", &controls::deflection_label(mm));
            if let Some(el) = dom::query(".flexure-beam") {
                let _ = dom::set_style(&el, "transform", &controls::flexure_transform(mm));
            }
        })?;
    }

    Ok(())
}
