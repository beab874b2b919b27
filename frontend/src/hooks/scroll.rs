use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Window};
use yew::prelude::*;

/// A passive window scroll listener, removed when dropped.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn new(window: Window, handler: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    /// How far through the page the viewport is, in `0.0..=1.0`.
    pub progress: f64,
}

pub fn scroll_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

impl ScrollMetrics {
    pub fn measure(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            progress: scroll_progress(offset, scroll_height, viewport_height),
        }
    }
}

fn read_metrics(window: &Window) -> ScrollMetrics {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    ScrollMetrics::measure(offset, scroll_height, viewport_height)
}

/// Re-renders only when the measured metrics actually change.
#[hook]
pub fn use_scroll_metrics() -> ScrollMetrics {
    let metrics = use_state_eq(ScrollMetrics::default);

    {
        let metrics = metrics.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window().and_then(|window| {
                    metrics.set(read_metrics(&window));
                    let reader = window.clone();
                    ScrollSubscription::new(window, move || metrics.set(read_metrics(&reader)))
                        .map_err(|err| warn!("Could not track scroll position: {:?}", err))
                        .ok()
                });
                move || drop(subscription)
            },
            (),
        );
    }

    *metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_ratio_of_scrollable_distance() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2600.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn repeated_readings_compare_equal() {
        let first = ScrollMetrics::measure(420.0, 3000.0, 1000.0);
        assert_eq!(first, ScrollMetrics::measure(420.0, 3000.0, 1000.0));
        assert_ne!(first, ScrollMetrics::measure(421.0, 3000.0, 1000.0));
        // a taller page at the same offset is a different reading
        assert_ne!(first, ScrollMetrics::measure(420.0, 4000.0, 1000.0));
        assert_eq!(ScrollMetrics::measure(0.0, 800.0, 1000.0), ScrollMetrics::default());
    }

    #[test]
    fn short_page_has_no_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }
}
