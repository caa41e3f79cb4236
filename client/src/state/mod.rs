//! Client-side state models.
//!
//! DESIGN
//! ======
//! Plain structs shared through `RwSignal` context or held per page; all
//! browser effects live in `util` and `pages`.

pub mod patients;
pub mod session;
pub mod style_admin;
