use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEALED_CLASS: &str = "in";
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// One-way visibility flag: once set it stays set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection sample. Returns true only on the transition to visible.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

fn reveal_entry(entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
    let target = entry.target();
    let classes = target.class_list();
    let mut latch = RevealLatch::new(classes.contains(REVEALED_CLASS));
    if latch.observe(entry.is_intersecting()) {
        let _ = classes.add_1(REVEALED_CLASS);
        observer.unobserve(&target);
    }
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn observe_all(selector: &str) -> Result<Option<Self>, JsValue> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Ok(None);
        };
        let targets = document.query_selector_all(selector)?;
        if targets.length() == 0 {
            return Ok(None);
        }

        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                reveal_entry(&entry.unchecked_into(), &observer);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        for i in 0..targets.length() {
            if let Some(element) = targets.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }
        debug!("Observing {} elements for reveal", targets.length());

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Adds `in` to every `.reveal` element the first time it scrolls into view.
/// Elements present at mount are observed; the observer lives until unmount.
#[hook]
pub fn use_reveal() {
    use_effect_with_deps(
        move |_| {
            let observer = RevealObserver::observe_all(REVEAL_SELECTOR).unwrap_or_else(|err| {
                warn!("Reveal-on-scroll unavailable: {:?}", err);
                None
            });
            move || drop(observer)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_starts_hidden() {
        assert!(!RevealLatch::default().is_visible());
    }

    #[test]
    fn latch_flips_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_visible());
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_visible());
    }

    #[test]
    fn latch_never_reverts_over_any_sequence() {
        let samples = [false, true, false, false, true, true, false];
        let mut latch = RevealLatch::default();
        let mut transitions = 0;
        let mut seen_visible = false;
        for &sample in &samples {
            if latch.observe(sample) {
                transitions += 1;
            }
            if seen_visible {
                assert!(latch.is_visible());
            }
            seen_visible |= latch.is_visible();
        }
        assert_eq!(transitions, 1);
    }

    #[test]
    fn already_revealed_element_does_not_transition() {
        let mut latch = RevealLatch::new(true);
        assert!(!latch.observe(true));
    }
}
