//! Patient page state: the entry form draft and the local patient list.
//!
//! There is no patient endpoint; rows live only as long as the page.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

pub const NAME_REQUIRED: &str = "Name is required";

/// Dropdown choice on the entry form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    Option1,
    Option2,
    Option3,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Option1, Self::Option2, Self::Option3];

    /// Value used in the `<option>` element.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Option1 => "option1",
            Self::Option2 => "option2",
            Self::Option3 => "option3",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Option1 => "Option 1",
            Self::Option2 => "Option 2",
            Self::Option3 => "Option 3",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

/// Unsaved form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientDraft {
    pub text_one: String,
    pub text_two: String,
    pub category: Category,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientRow {
    pub id: u32,
    pub name: String,
    pub note: String,
    pub category: Category,
    pub active: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PatientsState {
    pub draft: PatientDraft,
    pub rows: Vec<PatientRow>,
    pub error: Option<String>,
    next_id: u32,
}

impl PatientsState {
    /// Turn the draft into a row and reset the form.
    ///
    /// # Errors
    ///
    /// Returns [`NAME_REQUIRED`] when the name is blank; the draft is kept.
    pub fn add_from_draft(&mut self) -> Result<u32, &'static str> {
        let name = self.draft.text_one.trim();
        if name.is_empty() {
            self.error = Some(NAME_REQUIRED.to_owned());
            return Err(NAME_REQUIRED);
        }
        self.next_id += 1;
        let id = self.next_id;
        let draft = std::mem::take(&mut self.draft);
        self.rows.push(PatientRow {
            id,
            name: draft.text_one.trim().to_owned(),
            note: draft.text_two.trim().to_owned(),
            category: draft.category,
            active: draft.active,
        });
        self.error = None;
        Ok(id)
    }

    /// Drop the row with `id`. Returns whether a row was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() != before
    }
}
