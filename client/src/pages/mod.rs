//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (service calls, skin lifecycle)
//! and delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod patients;
pub mod style_admin;
