//! Browser tests for the DOM side of the skin pipeline.
//!
//! Run with `wasm-pack test --headless --firefox client --features csr`.
#![cfg(all(target_arch = "wasm32", feature = "csr"))]

use std::cell::Cell;
use std::rc::Rc;

use client::util::dom_skin::{DomScope, MutationWatcher};
use skin::StyleAssignment;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

// =============================================================
// Helpers
// =============================================================

fn document() -> Document {
    web_sys::window().and_then(|w| w.document()).unwrap()
}

fn element(tag: &str, marker: Option<&str>) -> Element {
    let el = document().create_element(tag).unwrap();
    if let Some(marker) = marker {
        el.set_attribute("data-style-id", marker).unwrap();
    }
    el
}

/// A view root mounted under `<body>`.
fn mounted_root(marker: Option<&str>) -> Element {
    let root = element("div", marker);
    document().body().unwrap().append_child(&root).unwrap();
    root
}

fn assignment(marker: &str, style: &str) -> StyleAssignment {
    StyleAssignment {
        id: "1".to_owned(),
        user_name: None,
        role_id: None,
        role_name: None,
        style_name: style.to_owned(),
        ui_element_class_name: marker.to_owned(),
        component_name: "PageOne".to_owned(),
    }
}

/// Let pending microtasks (mutation records) and one macrotask run.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

// =============================================================
// Registry scan
// =============================================================

#[wasm_bindgen_test]
fn registry_includes_root_and_descendants() {
    let root = mounted_root(Some("s4"));
    let child = element("input", Some("s1"));
    let nested = element("span", Some("s1"));
    let unmarked = element("p", None);
    child.append_child(&nested).unwrap();
    root.append_child(&child).unwrap();
    root.append_child(&unmarked).unwrap();

    let registry = DomScope::new(root.clone()).registry();
    assert_eq!(registry.targets("s4").len(), 1);
    assert_eq!(registry.targets("s1").len(), 2);
    assert_eq!(registry.len(), 3);
    root.remove();
}

#[wasm_bindgen_test]
fn registry_ignores_markers_outside_root() {
    let outside = mounted_root(Some("s1"));
    let root = mounted_root(None);
    assert!(DomScope::new(root.clone()).registry().is_empty());
    outside.remove();
    root.remove();
}

#[wasm_bindgen_test]
fn apply_adds_classes_without_touching_existing_ones() {
    let root = mounted_root(None);
    let input = element("input", Some("s1"));
    input.set_class_name("field__input");
    root.append_child(&input).unwrap();

    let scope = DomScope::new(root.clone());
    let list = vec![assignment("s1", "highlight"), assignment("s1", "bold")];
    let first = scope.apply(&list);
    let second = scope.apply(&list);

    assert_eq!(first.added, 2);
    assert!(second.is_noop());
    let classes = input.class_list();
    assert!(classes.contains("field__input"));
    assert!(classes.contains("highlight"));
    assert!(classes.contains("bold"));
    root.remove();
}

// =============================================================
// Watcher
// =============================================================

#[wasm_bindgen_test]
async fn watcher_reapplies_to_inserted_rows() {
    let root = mounted_root(None);
    let scope = DomScope::new(root.clone());
    let list = vec![assignment("s3", "row-highlight")];
    scope.apply(&list);

    let rescan = scope.clone();
    let watcher = MutationWatcher::observe(scope.root(), move || {
        rescan.apply(&list);
    })
    .unwrap();

    let table = element("table", None);
    let row = element("tr", Some("s3"));
    table.append_child(&row).unwrap();
    root.append_child(&table).unwrap();
    settle().await;

    assert!(row.class_list().contains("row-highlight"));
    drop(watcher);
    root.remove();
}

#[wasm_bindgen_test]
async fn dropped_watcher_stops_observing() {
    let root = mounted_root(None);
    let calls = Rc::new(Cell::new(0_u32));
    let seen = Rc::clone(&calls);
    let watcher = MutationWatcher::observe(&root, move || seen.set(seen.get() + 1)).unwrap();

    root.append_child(&element("div", None)).unwrap();
    settle().await;
    assert_eq!(calls.get(), 1);

    drop(watcher);
    root.append_child(&element("div", None)).unwrap();
    settle().await;
    assert_eq!(calls.get(), 1);
    root.remove();
}

#[wasm_bindgen_test]
async fn attribute_changes_do_not_trigger_watcher() {
    let root = mounted_root(None);
    let marked = element("div", Some("s1"));
    root.append_child(&marked).unwrap();
    let calls = Rc::new(Cell::new(0_u32));
    let seen = Rc::clone(&calls);
    let _watcher = MutationWatcher::observe(&root, move || seen.set(seen.get() + 1)).unwrap();

    marked.class_list().add_1("highlight").unwrap();
    marked.set_attribute("title", "x").unwrap();
    settle().await;
    assert_eq!(calls.get(), 0);
    root.remove();
}
