//! Dynamic skin core: per-view style assignments and their application.
//!
//! This crate is UI-framework agnostic. The browser client supplies element
//! handles through [`registry::ClassTarget`]; everything here compiles and
//! tests natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`assignment`] | Wire models fetched from the `UserComponent` service |
//! | [`marker`] | The `data-style-id` marker convention |
//! | [`registry`] | Marker → element handle index |
//! | [`apply`] | Additive, idempotent class application |
//! | [`session`] | Fetch/apply/reapply sequencing for one mounted view |

pub mod apply;
pub mod assignment;
pub mod marker;
pub mod registry;
pub mod session;

pub use apply::{ApplyReport, apply_assignments};
pub use assignment::{Component, Role, Style, StyleAssignment, StylePointer, SubjectStyleAssignment, retarget_subject};
pub use marker::{MARKER_ATTR, Marker, MarkerError, any_marker_selector};
pub use registry::{ClassTarget, MarkerRegistry};
pub use session::{FetchOutcome, StyleSession};
