//! Style assignment models mirrored from the `UserComponent` service.
//!
//! DESIGN
//! ======
//! Identifiers arrive as JSON numbers for components, styles and subjects and
//! as strings for roles. Every id is normalized to `String` on decode so
//! selection values, URL segments and comparisons stay uniform.

#[cfg(test)]
#[path = "assignment_test.rs"]
mod assignment_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One (marker → class) assignment for a named view and the current user/role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAssignment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub role_id: Option<String>,
    #[serde(default)]
    pub role_name: Option<String>,
    /// CSS class added to every matching element.
    pub style_name: String,
    /// Marker value matched against `data-style-id`.
    pub ui_element_class_name: String,
    #[serde(default)]
    pub component_name: String,
}

/// Persisted link between a subject and the style currently selected for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePointer {
    #[serde(deserialize_with = "deserialize_id")]
    pub subject_style_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub style_id: String,
    pub style_name: String,
    #[serde(default)]
    pub style_description: Option<String>,
}

/// A styleable subject of one component for one role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStyleAssignment {
    #[serde(deserialize_with = "deserialize_id")]
    pub subject_id: String,
    #[serde(default)]
    pub subject_name: String,
    pub ui_element_class_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent until a style has been chosen and persisted for the subject.
    #[serde(default)]
    pub style: Option<StylePointer>,
}

impl SubjectStyleAssignment {
    /// Point the existing pointer at `style_id`, copying name and description
    /// from the catalog entry when one exists.
    ///
    /// Returns `false` when the subject has no pointer to retarget.
    pub fn retarget(&mut self, style_id: &str, catalog: &[Style]) -> bool {
        let Some(pointer) = self.style.as_mut() else {
            return false;
        };
        let entry = catalog.iter().find(|s| s.id == style_id);
        pointer.style_id = style_id.to_owned();
        pointer.style_name = entry.map(|s| s.name.clone()).unwrap_or_default();
        pointer.style_description = entry.and_then(|s| s.description.clone());
        true
    }
}

/// Catalog entry for a selectable style.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Catalog entry for a component (view) that owns styleable subjects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

/// Catalog entry for a role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

/// Retarget the subject with `subject_id` within a fetched batch.
///
/// Returns `false` when no subject matches or the match has no pointer.
pub fn retarget_subject(
    assignments: &mut [SubjectStyleAssignment],
    subject_id: &str,
    style_id: &str,
    catalog: &[Style],
) -> bool {
    assignments
        .iter_mut()
        .find(|a| a.subject_id == subject_id)
        .is_some_and(|a| a.retarget(style_id, catalog))
}

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        _ => Err(E::custom("expected string or integer id")),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(value)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value => id_from_value(value).map(Some),
    }
}
