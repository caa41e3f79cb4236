//! State for the role/style mapping page.
//!
//! DESIGN
//! ======
//! Server acknowledgment comes first: [`StyleAdminState::update_request`]
//! validates a picker change without touching local data, and
//! [`StyleAdminState::confirm_update`] merges it only after the service
//! accepted the update. A failed update therefore leaves the previous
//! pointer in place.

#[cfg(test)]
#[path = "style_admin_test.rs"]
mod style_admin_test;

use skin::retarget_subject;

use crate::net::types::{Component, Role, Style, SubjectStyleAssignment};

pub const SELECT_BOTH: &str = "Please select both Component and Role";
pub const INITIAL_LOAD_FAILED: &str = "Failed to fetch initial data";
pub const CONFIGS_LOAD_FAILED: &str = "Failed to fetch style configurations";
pub const UPDATE_FAILED: &str = "Failed to update style configuration";
pub const NULL_STYLE: &str = "Cannot update null style configuration";
pub const STYLE_REQUIRED: &str = "Select a style to apply";

/// A validated picker change, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateRequest {
    pub subject_id: String,
    pub pointer_id: String,
    pub style_id: String,
}

#[derive(Clone, Debug, Default)]
pub struct StyleAdminState {
    pub components: Vec<Component>,
    pub roles: Vec<Role>,
    pub styles: Vec<Style>,
    pub selected_component: String,
    pub selected_role: String,
    pub assignments: Vec<SubjectStyleAssignment>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StyleAdminState {
    /// Component and role ids for the configs query.
    ///
    /// # Errors
    ///
    /// Returns [`SELECT_BOTH`] unless both selections are non-blank.
    pub fn selection(&self) -> Result<(String, String), &'static str> {
        let component = self.selected_component.trim();
        let role = self.selected_role.trim();
        if component.is_empty() || role.is_empty() {
            return Err(SELECT_BOTH);
        }
        Ok((component.to_owned(), role.to_owned()))
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Stop loading and surface `message`.
    pub fn fail(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_owned());
    }

    pub fn finish_catalogs(&mut self, (components, roles, styles): (Vec<Component>, Vec<Role>, Vec<Style>)) {
        self.components = components;
        self.roles = roles;
        self.styles = styles;
        self.loading = false;
    }

    pub fn finish_assignments(&mut self, assignments: Vec<SubjectStyleAssignment>) {
        self.assignments = assignments;
        self.loading = false;
    }

    /// Validate a picker change for `subject_id`.
    ///
    /// # Errors
    ///
    /// Returns [`STYLE_REQUIRED`] for a blank style and [`NULL_STYLE`] when
    /// the subject is unknown or has no style pointer to update.
    pub fn update_request(&self, subject_id: &str, style_id: &str) -> Result<UpdateRequest, &'static str> {
        let style_id = style_id.trim();
        if style_id.is_empty() {
            return Err(STYLE_REQUIRED);
        }
        let pointer = self
            .assignments
            .iter()
            .find(|a| a.subject_id == subject_id)
            .and_then(|a| a.style.as_ref())
            .ok_or(NULL_STYLE)?;
        Ok(UpdateRequest {
            subject_id: subject_id.to_owned(),
            pointer_id: pointer.subject_style_id.clone(),
            style_id: style_id.to_owned(),
        })
    }

    /// Merge an acknowledged update into the local list.
    pub fn confirm_update(&mut self, request: &UpdateRequest) -> bool {
        self.error = None;
        retarget_subject(&mut self.assignments, &request.subject_id, &request.style_id, &self.styles)
    }
}
