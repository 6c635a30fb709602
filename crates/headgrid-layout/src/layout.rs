//! Complete header layout for one column tree.

use crate::grid::{build_grid, RowItem};
use crate::scan::{scan_depth, ColItem};
use headgrid_core::{ColumnNode, ColumnResolver, DefaultResolver};
use serde::Serialize;

/// Header rows plus the flattened leaf columns of a column tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderLayout {
    rows: Vec<Vec<RowItem>>,
    cols: Vec<ColItem>,
    data_related_cols: Vec<ColItem>,
}

impl HeaderLayout {
    /// Header rows, top to bottom, cells left to right.
    #[must_use]
    pub fn rows(&self) -> &[Vec<RowItem>] {
        &self.rows
    }

    /// Every leaf column, left to right, ignoring span collapse.
    #[must_use]
    pub fn cols(&self) -> &[ColItem] {
        &self.cols
    }

    /// Leaf columns used to align body cells.
    ///
    /// Same content as [`cols`](Self::cols); body cells never collapse.
    #[must_use]
    pub fn data_related_cols(&self) -> &[ColItem] {
        &self.data_related_cols
    }

    /// Number of header rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of leaf columns.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.cols.len()
    }

    /// Leaves that have no header cell because a neighbour spans over them.
    #[must_use]
    pub fn suppressed_count(&self) -> usize {
        let visible = self
            .rows
            .iter()
            .flatten()
            .filter(|item| item.column.is_leaf())
            .count();
        self.leaf_count() - visible
    }

    /// Whether the layout has no header rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Compute the header layout with the default key and width rules.
#[must_use]
pub fn compute_header_layout(columns: &[ColumnNode]) -> HeaderLayout {
    compute_header_layout_with(columns, &DefaultResolver)
}

/// Compute the header layout using `resolver` for keys and width styles.
pub fn compute_header_layout_with<R>(columns: &[ColumnNode], resolver: &R) -> HeaderLayout
where
    R: ColumnResolver + ?Sized,
{
    let scan = scan_depth(columns, resolver);
    let rows = build_grid(columns, &scan);
    let layout = HeaderLayout {
        rows,
        data_related_cols: scan.cols.clone(),
        cols: scan.cols,
    };

    tracing::debug!(
        rows = layout.row_count(),
        leaves = layout.leaf_count(),
        suppressed = layout.suppressed_count(),
        "computed header layout"
    );

    layout
}
