//! Immutable column tree snapshots with stable identity.

use crate::column::ColumnNode;
use serde::{Deserialize, Serialize, Serializer};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a column tree snapshot.
///
/// Every [`ColumnTree::new`] call gets a fresh id; clones share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreeId(u64);

impl TreeId {
    fn next() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// An ordered forest of top-level columns.
///
/// The snapshot is immutable; build a new tree to change the columns.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Vec<ColumnNode>")]
pub struct ColumnTree {
    id: TreeId,
    columns: Arc<[ColumnNode]>,
}

impl ColumnTree {
    /// Create a snapshot with a fresh identity.
    #[must_use]
    pub fn new(columns: impl IntoIterator<Item = ColumnNode>) -> Self {
        Self {
            id: TreeId::next(),
            columns: columns.into_iter().collect(),
        }
    }

    /// Identity of this snapshot.
    #[must_use]
    pub const fn id(&self) -> TreeId {
        self.id
    }

    /// Top-level columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[ColumnNode] {
        &self.columns
    }

    /// Number of top-level columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for ColumnTree {
    fn default() -> Self {
        Self::new([])
    }
}

impl From<Vec<ColumnNode>> for ColumnTree {
    fn from(columns: Vec<ColumnNode>) -> Self {
        Self::new(columns)
    }
}

impl FromIterator<ColumnNode> for ColumnTree {
    fn from_iter<I: IntoIterator<Item = ColumnNode>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Serialize for ColumnTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.columns.serialize(serializer)
    }
}
