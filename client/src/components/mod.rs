//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, tables and the route guard while reading
//! shared session state from Leptos context.

pub mod assignment_table;
pub mod error_banner;
pub mod page_header;
pub mod patient_table;
pub mod protected;
