//! First pass: header depth and leaf projection.

use headgrid_core::{ColumnKey, ColumnNode, ColumnResolver, LeafColumn, WidthStyle};
use serde::Serialize;
use std::sync::Arc;

/// Layout metadata of one leaf column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColItem {
    /// Resolved identity key
    pub key: ColumnKey,
    /// Resolved width style
    pub style: WidthStyle,
    /// The leaf this item was produced from
    pub column: Arc<LeafColumn>,
}

/// Result of the depth scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepthScan {
    /// Number of header rows (greatest node depth + 1, 0 for no columns)
    pub row_count: usize,
    /// Every leaf, left to right
    pub cols: Vec<ColItem>,
}

impl DepthScan {
    /// Greatest depth at which any node exists.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.row_count.checked_sub(1)
    }

    /// Total number of leaf slots.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.cols.len()
    }

    /// One empty row bucket per header row.
    #[must_use]
    pub fn empty_rows<T>(&self) -> Vec<Vec<T>> {
        std::iter::repeat_with(Vec::new)
            .take(self.row_count)
            .collect()
    }

    fn visit<R>(&mut self, node: &ColumnNode, depth: usize, resolver: &R)
    where
        R: ColumnResolver + ?Sized,
    {
        self.row_count = self.row_count.max(depth + 1);

        match node {
            ColumnNode::Group(group) => {
                for child in &group.children {
                    self.visit(child, depth + 1, resolver);
                }
            }
            ColumnNode::Leaf(leaf) => self.cols.push(ColItem {
                key: resolver.key(leaf),
                style: resolver.width_style(leaf),
                column: Arc::clone(leaf),
            }),
        }
    }
}

/// Walk the column forest once, depth first, left to right.
pub fn scan_depth<R>(columns: &[ColumnNode], resolver: &R) -> DepthScan
where
    R: ColumnResolver + ?Sized,
{
    let mut scan = DepthScan::default();
    for column in columns {
        scan.visit(column, 0, resolver);
    }
    scan
}
