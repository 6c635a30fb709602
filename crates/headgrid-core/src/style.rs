//! Width hints attached to leaf columns.

use serde::{Deserialize, Serialize};

/// A column length: plain pixels or a host-interpreted CSS length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    /// Pixels
    Px(f32),
    /// Any other length (`"20%"`, `"8em"`), passed through untouched
    Css(String),
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Self::Px(px)
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Self::Px(px as f32)
    }
}

impl From<u32> for Length {
    fn from(px: u32) -> Self {
        Self::Px(px as f32)
    }
}

impl From<&str> for Length {
    fn from(css: &str) -> Self {
        Self::Css(css.to_string())
    }
}

/// Per-leaf width style used to size a column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidthStyle {
    /// Preferred width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Length>,
    /// Minimum width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<Length>,
    /// Maximum width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Length>,
}

impl WidthStyle {
    /// Whether no width hint is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width.is_none() && self.min_width.is_none() && self.max_width.is_none()
    }
}
