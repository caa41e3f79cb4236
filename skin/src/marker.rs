//! The style marker convention.
//!
//! Elements opt into dynamic styling by carrying `data-style-id="<marker>"`.
//! Markers are independent of the element's CSS classes and are not unique:
//! every element sharing a marker receives the marker's styles.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

use std::fmt;

/// Attribute that carries an element's marker.
pub const MARKER_ATTR: &str = "data-style-id";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    #[error("marker is empty")]
    Empty,
}

/// A validated, non-blank marker value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Marker(String);

impl Marker {
    /// # Errors
    ///
    /// Returns [`MarkerError::Empty`] when `raw` is empty or only whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, MarkerError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(MarkerError::Empty);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS attribute selector matching elements that carry this marker.
    #[must_use]
    pub fn selector(&self) -> String {
        let mut escaped = String::with_capacity(self.0.len());
        for ch in self.0.chars() {
            if ch == '"' || ch == '\\' {
                escaped.push('\\');
            }
            escaped.push(ch);
        }
        format!("[{MARKER_ATTR}=\"{escaped}\"]")
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Marker {
    type Error = MarkerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Selector matching every marked element regardless of marker value.
#[must_use]
pub fn any_marker_selector() -> String {
    format!("[{MARKER_ATTR}]")
}

impl std::borrow::Borrow<str> for Marker {
    fn borrow(&self) -> &str {
        &self.0
    }
}
