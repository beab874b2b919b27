use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};
use yew::prelude::*;

use super::scroll::ScrollSubscription;

pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

pub fn translate3d(offset: f64) -> String {
    format!("translate3d(0, {}px, 0)", offset)
}

/// Coalesces scroll events so at most one animation frame is pending.
#[derive(Default)]
pub struct FrameGate {
    scheduled: Cell<bool>,
    pending: Cell<Option<i32>>,
}

impl FrameGate {
    /// True if the caller should request a frame; false if one is already queued.
    pub fn try_schedule(&self) -> bool {
        !self.scheduled.replace(true)
    }

    pub fn set_pending(&self, handle: i32) {
        self.pending.set(Some(handle));
    }

    /// Called from the frame callback, or when the request failed.
    pub fn release(&self) {
        self.scheduled.set(false);
        self.pending.set(None);
    }

    pub fn take_pending(&self) -> Option<i32> {
        self.scheduled.set(false);
        self.pending.take()
    }
}

struct ParallaxBinding {
    window: Window,
    gate: Rc<FrameGate>,
    _subscription: ScrollSubscription,
    _frame: Rc<Closure<dyn FnMut()>>,
}

impl ParallaxBinding {
    fn attach(window: Window, node: NodeRef, factor: f64) -> Option<Self> {
        let gate = Rc::new(FrameGate::default());

        let update = {
            let gate = gate.clone();
            let window = window.clone();
            move || {
                gate.release();
                let y = parallax_offset(window.scroll_y().unwrap_or(0.0), factor);
                if let Some(element) = node.cast::<HtmlElement>() {
                    let _ = element.style().set_property("transform", &translate3d(y));
                }
            }
        };

        // Initial position
        update();

        let frame = Rc::new(Closure::wrap(Box::new(update) as Box<dyn FnMut()>));

        let on_scroll = {
            let gate = gate.clone();
            let window = window.clone();
            let frame = frame.clone();
            move || {
                if !gate.try_schedule() {
                    return;
                }
                let callback: &Closure<dyn FnMut()> = &frame;
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(handle) => gate.set_pending(handle),
                    Err(_) => gate.release(),
                }
            }
        };

        let subscription = ScrollSubscription::new(window.clone(), on_scroll)
            .map_err(|err| warn!("Parallax scroll listener failed: {:?}", err))
            .ok()?;

        Some(Self {
            window,
            gate,
            _subscription: subscription,
            _frame: frame,
        })
    }
}

impl Drop for ParallaxBinding {
    fn drop(&mut self) {
        if let Some(handle) = self.gate.take_pending() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

/// Translates `node` vertically by `scrollY * factor`, written once per frame.
#[hook]
pub fn use_parallax(node: NodeRef, factor: f64) {
    use_effect_with_deps(
        move |(node, factor)| {
            let binding = web_sys::window()
                .and_then(|window| ParallaxBinding::attach(window, node.clone(), *factor));
            move || drop(binding)
        },
        (node, factor),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_linear_in_scroll() {
        for &(scroll_y, factor) in &[(0.0, 0.15), (120.0, 0.1), (640.0, 0.25), (1e6, 0.15), (300.0, -0.5)] {
            assert_eq!(parallax_offset(scroll_y, factor), scroll_y * factor);
        }
    }

    #[test]
    fn transform_string() {
        assert_eq!(translate3d(12.5), "translate3d(0, 12.5px, 0)");
        assert_eq!(translate3d(0.0), "translate3d(0, 0px, 0)");
    }

    #[test]
    fn gate_admits_one_frame_until_released() {
        let gate = FrameGate::default();
        assert!(gate.try_schedule());
        gate.set_pending(7);
        assert!(!gate.try_schedule());
        assert!(!gate.try_schedule());
        gate.release();
        assert_eq!(gate.take_pending(), None);
        assert!(gate.try_schedule());
    }

    #[test]
    fn take_pending_hands_back_the_frame_once() {
        let gate = FrameGate::default();
        assert!(gate.try_schedule());
        gate.set_pending(3);
        assert_eq!(gate.take_pending(), Some(3));
        assert_eq!(gate.take_pending(), None);
        assert!(gate.try_schedule());
    }
}
