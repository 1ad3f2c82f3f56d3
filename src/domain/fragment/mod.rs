// SPDX-License-Identifier: MPL-2.0
//! Fragment entity.
//!
//! A fragment is one image piece placed on the document canvas. The document
//! model owns fragments; the control panel only ever holds snapshots of them.

mod newtypes;

pub use newtypes::{
    angle_bounds, angle_step_bounds, nudge_bounds, AngleDegrees, AngleStep, NudgeStep, Opacity,
};

use std::fmt;
use std::path::PathBuf;

/// Number of characters shown when a fragment has no display name.
const SHORT_ID_LEN: usize = 8;

/// Stable identifier of a fragment within a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentId(String);

impl FragmentId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the leading characters of the id, used as a fallback label.
    #[must_use]
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LEN) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FragmentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// An image piece with geometric and display properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub id: FragmentId,
    /// Display name; may be empty.
    pub name: String,
    /// Original pixel dimensions as `(width, height)`.
    pub original_size: (u32, u32),
    pub file_path: PathBuf,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub visible: bool,
    pub opacity: Opacity,
}

impl Fragment {
    /// Creates a fragment at the origin with an identity transform.
    #[must_use]
    pub fn new(id: impl Into<String>, file_path: impl Into<PathBuf>, size: (u32, u32)) -> Self {
        Self {
            id: FragmentId::new(id),
            name: String::new(),
            original_size: size,
            file_path: file_path.into(),
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            flip_horizontal: false,
            flip_vertical: false,
            visible: true,
            opacity: Opacity::default(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Returns the explicit display name, if one was set.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Clears rotation, flips and position back to the identity transform.
    ///
    /// Visibility and opacity are display properties and are left alone.
    pub fn reset_transform(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.rotation = 0.0;
        self.flip_horizontal = false;
        self.flip_vertical = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_truncates_to_eight_chars() {
        let id = FragmentId::new("0123456789abcdef");
        assert_eq!(id.short(), "01234567");
    }

    #[test]
    fn short_id_keeps_short_ids_whole() {
        let id = FragmentId::new("abc");
        assert_eq!(id.short(), "abc");
    }

    #[test]
    fn short_id_respects_char_boundaries() {
        let id = FragmentId::new("éééééééééé");
        assert_eq!(id.short().chars().count(), 8);
    }

    #[test]
    fn display_name_ignores_blank_names() {
        let fragment = Fragment::new("a", "a.png", (1, 1)).with_name("   ");
        assert_eq!(fragment.display_name(), None);

        let named = Fragment::new("a", "a.png", (1, 1)).with_name("Shard");
        assert_eq!(named.display_name(), Some("Shard"));
    }

    #[test]
    fn reset_transform_keeps_display_properties() {
        let mut fragment = Fragment::new("a", "a.png", (4, 4)).with_position(3.0, -2.0);
        fragment.rotation = 45.0;
        fragment.flip_vertical = true;
        fragment.visible = false;
        fragment.opacity = Opacity::new(0.3);

        fragment.reset_transform();

        assert_eq!((fragment.x, fragment.y), (0.0, 0.0));
        assert_eq!(fragment.rotation, 0.0);
        assert!(!fragment.flip_vertical);
        assert!(!fragment.visible);
        assert_eq!(fragment.opacity, Opacity::new(0.3));
    }
}
