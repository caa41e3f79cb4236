//! Additive class application.
//!
//! Each assignment adds its `style_name` to every element registered under
//! its marker. Classes are only ever added, so applying a list twice leaves
//! the same class state as applying it once, and several assignments on one
//! marker accumulate instead of overwriting each other. A marker with no
//! elements is skipped silently: a view may render only some of its marked
//! elements at a time.

#[cfg(test)]
#[path = "apply_test.rs"]
mod apply_test;

use std::fmt;

use crate::assignment::StyleAssignment;
use crate::registry::{ClassTarget, MarkerRegistry};

/// Outcome counts for one application pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Classes newly added to an element.
    pub added: usize,
    /// Element/class pairs that already carried the class.
    pub already_present: usize,
    /// Assignments whose marker matched no element.
    pub missing_markers: usize,
    /// Assignments with a blank marker or an unusable class name.
    pub skipped: usize,
}

impl ApplyReport {
    /// True when the pass changed no element.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.added == 0
    }
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "added={} present={} missing={} skipped={}",
            self.added, self.already_present, self.missing_markers, self.skipped
        )
    }
}

/// A single CSS class token: non-empty with no whitespace.
#[must_use]
pub fn is_class_token(class: &str) -> bool {
    !class.is_empty() && !class.chars().any(char::is_whitespace)
}

/// Apply `assignments` in input order to the elements in `registry`.
pub fn apply_assignments<T: ClassTarget>(registry: &MarkerRegistry<T>, assignments: &[StyleAssignment]) -> ApplyReport {
    let mut report = ApplyReport::default();
    for assignment in assignments {
        let class = assignment.style_name.trim();
        let marker = assignment.ui_element_class_name.as_str();
        if marker.trim().is_empty() || !is_class_token(class) {
            log::debug!("skin: skipping assignment {} ({marker:?} -> {class:?})", assignment.id);
            report.skipped += 1;
            continue;
        }

        let targets = registry.targets(marker);
        if targets.is_empty() {
            log::debug!("skin: no element carries marker {marker:?}");
            report.missing_markers += 1;
            continue;
        }

        for target in targets {
            if target.has_class(class) {
                report.already_present += 1;
            } else {
                target.add_class(class);
                report.added += 1;
            }
        }
    }
    report
}
