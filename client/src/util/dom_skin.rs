//! Browser side of the skin pipeline: DOM element handles, the marker scan
//! and the child-list watcher.
//!
//! ARCHITECTURE
//! ============
//! `skin` is framework agnostic and sees elements only through
//! [`ClassTarget`]. [`DomElement`] adapts `web_sys::Element` to it,
//! [`DomScope`] builds a fresh [`MarkerRegistry`] from one view root per
//! pass, and [`MutationWatcher`] re-runs a pass on every structural change
//! under that root until it is dropped.

use skin::{ApplyReport, ClassTarget, MARKER_ATTR, MarkerRegistry, StyleAssignment, any_marker_selector, apply_assignments};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, MutationObserver, MutationObserverInit};

/// A marked element as seen by the applicator.
#[derive(Clone, Debug)]
pub struct DomElement(Element);

impl ClassTarget for DomElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            log::debug!("skin: classList.add({class}) rejected: {e:?}");
        }
    }
}

/// The subtree a view owns.
#[derive(Clone, Debug)]
pub struct DomScope {
    root: Element,
}

impl DomScope {
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Index every marked element under (and including) the root.
    #[must_use]
    pub fn registry(&self) -> MarkerRegistry<DomElement> {
        let mut registry = MarkerRegistry::new();
        if let Some(marker) = self.root.get_attribute(MARKER_ATTR) {
            registry.insert_raw(&marker, DomElement(self.root.clone()));
        }
        let nodes = match self.root.query_selector_all(&any_marker_selector()) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("skin: marker scan failed: {e:?}");
                return registry;
            }
        };
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if let Some(marker) = element.get_attribute(MARKER_ATTR) {
                registry.insert_raw(&marker, DomElement(element));
            }
        }
        registry
    }

    /// Scan and apply in one pass.
    pub fn apply(&self, assignments: &[StyleAssignment]) -> ApplyReport {
        apply_assignments(&self.registry(), assignments)
    }
}

/// Child-list observer over a subtree. Disconnects on drop.
pub struct MutationWatcher {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl MutationWatcher {
    /// Call `on_change` after every batch of child-list mutations under `root`.
    ///
    /// # Errors
    ///
    /// Returns the browser error when the observer cannot be created or
    /// attached.
    pub fn observe(root: &Element, mut on_change: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
            move |_records: js_sys::Array, _observer: MutationObserver| on_change(),
        );
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer.observe_with_options(root, &init)?;
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for MutationWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
