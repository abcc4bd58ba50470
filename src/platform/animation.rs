//! requestAnimationFrame loops with explicit ownership
//!
//! An [`AnimationDriver`] owns its frame callback and the token of the frame
//! currently scheduled. `stop()` cancels that frame; dropping the driver
//! stops it and frees the callback.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::dom;

/// Returned by a frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    /// End the loop, e.g. because the canvas left the document
    Stop,
}

struct DriverInner {
    label: &'static str,
    running: Cell<bool>,
    /// Token of the pending frame request
    token: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl DriverInner {
    fn schedule(&self) -> Result<(), JsValue> {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let token = dom::window()?.request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.token.set(Some(token));
        Ok(())
    }

    fn cancel(&self) {
        self.running.set(false);
        if let Some(token) = self.token.take() {
            if let Ok(window) = dom::window() {
                let _ = window.cancel_animation_frame(token);
            }
        }
    }
}

/// One animation loop
pub struct AnimationDriver {
    inner: Rc<DriverInner>,
}

impl AnimationDriver {
    /// Start calling `frame` once per display refresh with the frame
    /// timestamp (ms).
    pub fn start<F>(label: &'static str, mut frame: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) -> FrameControl + 'static,
    {
        let inner = Rc::new(DriverInner {
            label,
            running: Cell::new(true),
            token: Cell::new(None),
            callback: RefCell::new(None),
        });

        // Weak: the callback lives inside `inner`
        let weak: Weak<DriverInner> = Rc::downgrade(&inner);
        let callback = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.token.set(None);
            if !inner.running.get() {
                return;
            }
            match frame(time) {
                FrameControl::Continue => {
                    if let Err(e) = inner.schedule() {
                        log::warn!("{}: could not schedule frame: {:?}", inner.label, e);
                        inner.running.set(false);
                    }
                }
                FrameControl::Stop => {
                    log::debug!("{}: animation finished", inner.label);
                    inner.running.set(false);
                }
            }
        });
        *inner.callback.borrow_mut() = Some(callback);

        inner.schedule()?;
        log::debug!("{label}: animation started");
        Ok(Self { inner })
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Cancel the pending frame. Idempotent.
    pub fn stop(&self) {
        if self.inner.running.get() || self.inner.token.get().is_some() {
            log::debug!("{}: animation stopped", self.inner.label);
        }
        self.inner.cancel();
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
