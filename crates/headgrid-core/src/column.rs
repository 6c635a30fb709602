//! Column tree nodes: groups, leaves and their identity keys.

use crate::style::Length;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identity key of a column.
///
/// Keys are either strings or integers, matching how hosts usually name the
/// field a column reads from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnKey {
    /// Integer key
    Num(i64),
    /// String key
    Str(String),
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ColumnKey {
    fn from(key: &str) -> Self {
        Self::Str(key.to_string())
    }
}

impl From<String> for ColumnKey {
    fn from(key: String) -> Self {
        Self::Str(key)
    }
}

impl From<i64> for ColumnKey {
    fn from(key: i64) -> Self {
        Self::Num(key)
    }
}

impl From<i32> for ColumnKey {
    fn from(key: i32) -> Self {
        Self::Num(i64::from(key))
    }
}

/// Variant of a leaf column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafKind {
    /// Ordinary column bound to a data field
    #[default]
    Data,
    /// Row selection checkbox column
    Selection,
    /// Row expand toggle column
    Expand,
}

impl LeafKind {
    /// Whether this is an ordinary data column.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data)
    }
}

/// Terminal column in a header tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafColumn {
    /// Column variant
    #[serde(rename = "type", default, skip_serializing_if = "LeafKind::is_data")]
    pub kind: LeafKind,
    /// Identity key (required for data columns)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ColumnKey>,
    /// Header title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Preferred width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Length>,
    /// Minimum width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<Length>,
    /// Maximum width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Length>,
    /// Number of leaf slots the header cell covers (default 1).
    ///
    /// Must be at least 1. Zero is a caller contract violation: the layout it
    /// produces is unspecified and the value is not clamped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_col_span: Option<usize>,
}

impl LeafColumn {
    /// Create a data column with the given key.
    #[must_use]
    pub fn new(key: impl Into<ColumnKey>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Create a row selection column.
    #[must_use]
    pub fn selection() -> Self {
        Self {
            kind: LeafKind::Selection,
            ..Self::default()
        }
    }

    /// Create a row expand column.
    #[must_use]
    pub fn expand() -> Self {
        Self {
            kind: LeafKind::Expand,
            ..Self::default()
        }
    }

    /// Set header title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set preferred width.
    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set minimum width.
    #[must_use]
    pub fn min_width(mut self, width: impl Into<Length>) -> Self {
        self.min_width = Some(width.into());
        self
    }

    /// Set maximum width.
    #[must_use]
    pub fn max_width(mut self, width: impl Into<Length>) -> Self {
        self.max_width = Some(width.into());
        self
    }

    /// Make the header cell cover `span` leaf slots.
    #[must_use]
    pub const fn col_span(mut self, span: usize) -> Self {
        self.title_col_span = Some(span);
        self
    }

    /// Span override, defaulting to 1.
    #[must_use]
    pub fn resolved_col_span(&self) -> usize {
        self.title_col_span.unwrap_or(1)
    }
}

/// Header cell grouping a contiguous run of columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnGroup {
    /// Optional identity key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ColumnKey>,
    /// Header title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Child columns, left to right
    pub children: Vec<ColumnNode>,
}

impl ColumnGroup {
    /// Create a titled group over `children`.
    #[must_use]
    pub fn new(title: impl Into<String>, children: impl IntoIterator<Item = ColumnNode>) -> Self {
        Self {
            key: None,
            title: Some(title.into()),
            children: children.into_iter().collect(),
        }
    }

    /// Set identity key.
    #[must_use]
    pub fn key(mut self, key: impl Into<ColumnKey>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// A node of the column tree.
///
/// Nodes are cheap to clone: both variants are shared, immutable handles, so
/// layout records can point back at the node they were produced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnNode {
    /// Group header with children
    Group(Arc<ColumnGroup>),
    /// Terminal column
    Leaf(Arc<LeafColumn>),
}

impl ColumnNode {
    /// Wrap a leaf column.
    #[must_use]
    pub fn leaf(column: LeafColumn) -> Self {
        Self::Leaf(Arc::new(column))
    }

    /// Wrap a column group.
    #[must_use]
    pub fn group(group: ColumnGroup) -> Self {
        Self::Group(Arc::new(group))
    }

    /// Whether this node is a leaf.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Get the leaf column, if this is a leaf.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&Arc<LeafColumn>> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Group(_) => None,
        }
    }

    /// Get the group, if this is a group.
    #[must_use]
    pub const fn as_group(&self) -> Option<&Arc<ColumnGroup>> {
        match self {
            Self::Group(group) => Some(group),
            Self::Leaf(_) => None,
        }
    }

    /// Child nodes (empty for leaves).
    #[must_use]
    pub fn children(&self) -> &[ColumnNode] {
        match self {
            Self::Group(group) => &group.children,
            Self::Leaf(_) => &[],
        }
    }

    /// Header title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.title.as_deref(),
            Self::Leaf(leaf) => leaf.title.as_deref(),
        }
    }

    /// Declared key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&ColumnKey> {
        match self {
            Self::Group(group) => group.key.as_ref(),
            Self::Leaf(leaf) => leaf.key.as_ref(),
        }
    }

    /// Whether both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Group(a), Self::Group(b)) => Arc::ptr_eq(a, b),
            (Self::Leaf(a), Self::Leaf(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<LeafColumn> for ColumnNode {
    fn from(column: LeafColumn) -> Self {
        Self::leaf(column)
    }
}

impl From<ColumnGroup> for ColumnNode {
    fn from(group: ColumnGroup) -> Self {
        Self::group(group)
    }
}
