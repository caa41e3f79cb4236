//! Wire DTOs for the auth endpoint and the styling service.
//!
//! DESIGN
//! ======
//! Styling payloads are owned by the `skin` crate and re-exported here so
//! pages import every wire type from one place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use skin::{Component, Role, Style, StyleAssignment, StylePointer, SubjectStyleAssignment};

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// The signed-in user as decoded from the bearer token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl User {
    /// Name shown in the page header.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.email.is_empty() { &self.id } else { &self.email }
    }
}
