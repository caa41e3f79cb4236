use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use super::*;
use crate::marker::Marker;

// =============================================================
// Helpers
// =============================================================

#[derive(Clone, Default)]
struct FakeElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl FakeElement {
    fn with_classes(classes: &[&str]) -> Self {
        let el = Self::default();
        el.classes.borrow_mut().extend(classes.iter().map(|c| (*c).to_owned()));
        el
    }

    fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ClassTarget for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }
}

fn assignment(marker: &str, style: &str) -> StyleAssignment {
    StyleAssignment {
        id: format!("{marker}:{style}"),
        user_name: Some("admin@example.com".to_owned()),
        role_id: Some("r-1".to_owned()),
        role_name: Some("Admin".to_owned()),
        style_name: style.to_owned(),
        ui_element_class_name: marker.to_owned(),
        component_name: "PageOne".to_owned(),
    }
}

fn registry(elements: &[(&str, &FakeElement)]) -> MarkerRegistry<FakeElement> {
    elements
        .iter()
        .map(|(m, el)| (Marker::new(*m).unwrap(), (*el).clone()))
        .collect()
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn single_assignment_adds_class_to_unstyled_element() {
    let input = FakeElement::default();
    let reg = registry(&[("s1", &input)]);
    let report = apply_assignments(&reg, &[assignment("s1", "highlight")]);
    assert_eq!(input.classes(), vec!["highlight"]);
    assert_eq!(report.added, 1);
}

#[test]
fn existing_classes_are_kept() {
    let input = FakeElement::with_classes(&["border", "p-2"]);
    let reg = registry(&[("s1", &input)]);
    apply_assignments(&reg, &[assignment("s1", "highlight")]);
    assert_eq!(input.classes(), vec!["border", "highlight", "p-2"]);
}

#[test]
fn reapplying_is_idempotent() {
    let a = FakeElement::default();
    let b = FakeElement::with_classes(&["x"]);
    let reg = registry(&[("s1", &a), ("s2", &b)]);
    let list = [assignment("s1", "highlight"), assignment("s2", "muted")];

    let first = apply_assignments(&reg, &list);
    let after_first = (a.classes(), b.classes());
    let second = apply_assignments(&reg, &list);

    assert_eq!((a.classes(), b.classes()), after_first);
    assert_eq!(first.added, 2);
    assert!(second.is_noop());
    assert_eq!(second.already_present, 2);
}

#[test]
fn assignments_sharing_a_marker_accumulate() {
    let input = FakeElement::default();
    let reg = registry(&[("s1", &input)]);
    apply_assignments(&reg, &[assignment("s1", "highlight"), assignment("s1", "bold"), assignment("s1", "rounded")]);
    assert_eq!(input.classes(), vec!["bold", "highlight", "rounded"]);
}

#[test]
fn every_element_sharing_a_marker_is_styled() {
    let row1 = FakeElement::default();
    let row2 = FakeElement::default();
    let reg = registry(&[("s3", &row1), ("s3", &row2)]);
    let report = apply_assignments(&reg, &[assignment("s3", "striped")]);
    assert_eq!(row1.classes(), vec!["striped"]);
    assert_eq!(row2.classes(), vec!["striped"]);
    assert_eq!(report.added, 2);
}

#[test]
fn missing_marker_is_skipped_without_side_effects() {
    let input = FakeElement::with_classes(&["base"]);
    let reg = registry(&[("s1", &input)]);
    let report = apply_assignments(&reg, &[assignment("s9", "highlight")]);
    assert_eq!(input.classes(), vec!["base"]);
    assert_eq!(report.missing_markers, 1);
    assert!(report.is_noop());
}

#[test]
fn empty_registry_and_empty_list_are_noops() {
    let reg = MarkerRegistry::<FakeElement>::new();
    assert_eq!(apply_assignments(&reg, &[assignment("s1", "x")]).missing_markers, 1);
    let input = FakeElement::default();
    let reg = registry(&[("s1", &input)]);
    assert_eq!(apply_assignments(&reg, &[]), ApplyReport::default());
    assert!(input.classes().is_empty());
}

#[test]
fn unusable_class_names_are_skipped() {
    let input = FakeElement::default();
    let reg = registry(&[("s1", &input)]);
    let report = apply_assignments(&reg, &[assignment("s1", ""), assignment("s1", "two words"), assignment("", "x")]);
    assert!(input.classes().is_empty());
    assert_eq!(report.skipped, 3);
}

#[test]
fn surrounding_whitespace_in_style_name_is_trimmed() {
    let input = FakeElement::default();
    let reg = registry(&[("s1", &input)]);
    apply_assignments(&reg, &[assignment("s1", " highlight ")]);
    assert_eq!(input.classes(), vec!["highlight"]);
}

#[test]
fn class_token_rules() {
    assert!(is_class_token("bg-red-500"));
    assert!(!is_class_token(""));
    assert!(!is_class_token("a b"));
    assert!(!is_class_token("a\tb"));
}

#[test]
fn report_display_lists_counts() {
    let report = ApplyReport { added: 2, already_present: 1, missing_markers: 3, skipped: 0 };
    assert_eq!(report.to_string(), "added=2 present=1 missing=3 skipped=0");
}
