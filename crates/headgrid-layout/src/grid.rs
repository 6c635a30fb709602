//! Second pass: header grid placement.
//!
//! Every visible node becomes a [`RowItem`] in the row matching its depth:
//! - Groups cover one row and as many columns as their children together.
//! - Leaves reach down to the last header row.
//! - A leaf with a span override of `k` covers the next `k - 1` leaf slots,
//!   which then get no cell of their own (span collapse). Slots are counted
//!   over the whole tree, so a span may reach into a following group.
//! - The rightmost cell of each row is flagged `is_last`.

use crate::scan::DepthScan;
use headgrid_core::ColumnNode;
use serde::Serialize;

/// Placement of one header cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowItem {
    /// The node this cell renders
    pub column: ColumnNode,
    /// Leaf columns covered horizontally
    pub col_span: usize,
    /// Header rows covered vertically
    pub row_span: usize,
    /// Rightmost visible cell of its row
    pub is_last: bool,
}

struct GridBuilder {
    rows: Vec<Vec<RowItem>>,
    row_count: usize,
    /// Global index of the next leaf, in left-to-right order
    next_leaf: usize,
    /// Leaves with an index below this are covered by an earlier span
    hide_until: usize,
}

impl GridBuilder {
    /// Place `node` and return the columns it covers.
    fn place(&mut self, node: &ColumnNode, depth: usize) -> usize {
        match node {
            ColumnNode::Group(group) => {
                let col_span = group.children.iter().fold(0usize, |sum, child| {
                    sum.saturating_add(self.place(child, depth + 1))
                });
                self.rows[depth].push(RowItem {
                    column: node.clone(),
                    col_span,
                    row_span: 1,
                    is_last: false,
                });
                col_span
            }
            ColumnNode::Leaf(leaf) => {
                let index = self.next_leaf;
                self.next_leaf += 1;
                if index < self.hide_until {
                    return 0;
                }

                let col_span = leaf.resolved_col_span();
                if col_span > 1 {
                    self.hide_until = index.saturating_add(col_span);
                }
                self.rows[depth].push(RowItem {
                    column: node.clone(),
                    col_span,
                    row_span: self.row_count - depth,
                    is_last: false,
                });
                col_span
            }
        }
    }

    fn finish(mut self) -> Vec<Vec<RowItem>> {
        for row in &mut self.rows {
            if let Some(last) = row.last_mut() {
                last.is_last = true;
            }
        }
        self.rows
    }
}

/// Lay out the header rows for `columns`.
///
/// `scan` must come from [`scan_depth`](crate::scan_depth) over the same
/// columns; it fixes the number of rows the leaves extend to.
///
/// # Panics
///
/// Panics if `scan` has fewer rows than `columns` is deep, which happens when
/// it was taken from a different column slice.
#[must_use]
pub fn build_grid(columns: &[ColumnNode], scan: &DepthScan) -> Vec<Vec<RowItem>> {
    let mut builder = GridBuilder {
        rows: scan.empty_rows(),
        row_count: scan.row_count,
        next_leaf: 0,
        hide_until: 0,
    };
    for column in columns {
        builder.place(column, 0);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan_depth;
    use headgrid_core::{ColumnGroup, DefaultResolver, LeafColumn};

    fn leaf(key: &str) -> ColumnNode {
        ColumnNode::from(LeafColumn::new(key))
    }

    fn spanning(key: &str, span: usize) -> ColumnNode {
        ColumnNode::from(LeafColumn::new(key).col_span(span))
    }

    fn group(title: &str, children: Vec<ColumnNode>) -> ColumnNode {
        ColumnNode::from(ColumnGroup::new(title, children))
    }

    fn grid(columns: &[ColumnNode]) -> Vec<Vec<RowItem>> {
        build_grid(columns, &scan_depth(columns, &DefaultResolver))
    }

    /// (label, col_span, row_span, is_last) per row.
    fn shape(rows: &[Vec<RowItem>]) -> Vec<Vec<(String, usize, usize, bool)>> {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|item| {
                        let label = item
                            .column
                            .key()
                            .map(ToString::to_string)
                            .or_else(|| item.column.title().map(str::to_string))
                            .unwrap_or_default();
                        (label, item.col_span, item.row_span, item.is_last)
                    })
                    .collect()
            })
            .collect()
    }

    fn cell(
        label: &str,
        col_span: usize,
        row_span: usize,
        is_last: bool,
    ) -> (String, usize, usize, bool) {
        (label.to_string(), col_span, row_span, is_last)
    }

    // =========================================================================
    // Basic placement
    // =========================================================================

    #[test]
    fn test_grid_empty() {
        assert!(grid(&[]).is_empty());
    }

    #[test]
    fn test_grid_flat_columns() {
        let rows = grid(&[leaf("a"), leaf("b"), leaf("c")]);
        assert_eq!(
            shape(&rows),
            vec![vec![
                cell("a", 1, 1, false),
                cell("b", 1, 1, false),
                cell("c", 1, 1, true),
            ]]
        );
    }

    #[test]
    fn test_grid_two_levels() {
        let rows = grid(&[group("g1", vec![leaf("a"), leaf("b")]), leaf("c")]);
        assert_eq!(
            shape(&rows),
            vec![
                vec![cell("g1", 2, 1, false), cell("c", 1, 2, true)],
                vec![cell("a", 1, 1, false), cell("b", 1, 1, true)],
            ]
        );
    }

    #[test]
    fn test_grid_group_after_leaf() {
        let rows = grid(&[leaf("a"), group("g", vec![leaf("b"), leaf("c")])]);
        assert_eq!(
            shape(&rows),
            vec![
                vec![cell("a", 1, 2, false), cell("g", 2, 1, true)],
                vec![cell("b", 1, 1, false), cell("c", 1, 1, true)],
            ]
        );
    }

    #[test]
    fn test_grid_irregular_depths() {
        let columns = vec![
            group(
                "g1",
                vec![group("g2", vec![leaf("a"), leaf("b")]), leaf("c")],
            ),
            group("g3", vec![leaf("d")]),
            leaf("e"),
        ];
        let rows = grid(&columns);
        assert_eq!(
            shape(&rows),
            vec![
                vec![
                    cell("g1", 3, 1, false),
                    cell("g3", 1, 1, false),
                    cell("e", 1, 3, true),
                ],
                vec![
                    cell("g2", 2, 1, false),
                    cell("c", 1, 2, false),
                    cell("d", 1, 2, true),
                ],
                vec![cell("a", 1, 1, false), cell("b", 1, 1, true)],
            ]
        );
    }

    #[test]
    fn test_grid_single_child_group_keeps_true_span() {
        let rows = grid(&[group("g", vec![spanning("a", 3)]), leaf("b"), leaf("c")]);
        assert_eq!(rows[0][0].col_span, 3);
        assert_eq!(rows[0].len(), 1);
    }

    #[test]
    fn test_grid_records_point_at_nodes() {
        let columns = vec![group("g", vec![leaf("a")])];
        let rows = grid(&columns);
        assert!(rows[0][0].column.ptr_eq(&columns[0]));
        assert!(rows[1][0].column.ptr_eq(&columns[0].children()[0]));
    }

    // =========================================================================
    // Span collapse
    // =========================================================================

    #[test]
    fn test_grid_span_hides_following_leaf() {
        let rows = grid(&[spanning("a", 2), leaf("b"), leaf("c")]);
        assert_eq!(
            shape(&rows),
            vec![vec![cell("a", 2, 1, false), cell("c", 1, 1, true)]]
        );
    }

    #[test]
    fn test_grid_span_to_end_is_last() {
        let rows = grid(&[leaf("a"), spanning("b", 2), leaf("c")]);
        assert_eq!(
            shape(&rows),
            vec![vec![cell("a", 1, 1, false), cell("b", 2, 1, true)]]
        );
    }

    #[test]
    fn test_grid_hidden_leaf_span_is_ignored() {
        let rows = grid(&[spanning("a", 2), spanning("b", 3), leaf("c"), leaf("d")]);
        assert_eq!(
            shape(&rows),
            vec![vec![
                cell("a", 2, 1, false),
                cell("c", 1, 1, false),
                cell("d", 1, 1, true),
            ]]
        );
    }

    #[test]
    fn test_grid_span_reaches_into_next_group() {
        let columns = vec![
            group("g1", vec![leaf("a"), spanning("b", 2)]),
            group("g2", vec![leaf("c"), leaf("d")]),
        ];
        let rows = grid(&columns);
        assert_eq!(
            shape(&rows),
            vec![
                vec![cell("g1", 3, 1, false), cell("g2", 1, 1, true)],
                vec![
                    cell("a", 1, 1, false),
                    cell("b", 2, 1, false),
                    cell("d", 1, 1, true),
                ],
            ]
        );
        let total: usize = rows[0].iter().map(|item| item.col_span).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_grid_span_swallows_whole_group() {
        let columns = vec![spanning("a", 2), group("g", vec![leaf("b")]), leaf("c")];
        let rows = grid(&columns);
        assert_eq!(
            shape(&rows),
            vec![
                vec![
                    cell("a", 2, 2, false),
                    cell("g", 0, 1, false),
                    cell("c", 1, 2, true),
                ],
                vec![],
            ]
        );
    }

    #[test]
    fn test_grid_huge_span_saturates() {
        let columns = vec![
            leaf("a"),
            spanning("b", usize::MAX),
            group("g", vec![leaf("c"), spanning("d", usize::MAX)]),
            leaf("e"),
        ];
        let rows = grid(&columns);
        assert_eq!(
            shape(&rows),
            vec![
                vec![
                    cell("a", 1, 2, false),
                    cell("b", usize::MAX, 2, false),
                    cell("g", 0, 1, true),
                ],
                vec![],
            ]
        );
    }

    #[test]
    fn test_grid_group_span_sum_saturates() {
        let columns = vec![group("g", vec![leaf("a"), spanning("b", usize::MAX)])];
        let rows = grid(&columns);
        assert_eq!(rows[0][0].col_span, usize::MAX);
        assert_eq!(rows[1].len(), 2);
    }

    // =========================================================================
    // Degenerate input
    // =========================================================================

    #[test]
    fn test_grid_empty_group_is_kept() {
        let rows = grid(&[group("empty", vec![]), leaf("a")]);
        assert_eq!(
            shape(&rows),
            vec![vec![cell("empty", 0, 1, false), cell("a", 1, 1, true)]]
        );
    }

    #[test]
    fn test_grid_only_empty_group() {
        let rows = grid(&[group("empty", vec![])]);
        assert_eq!(shape(&rows), vec![vec![cell("empty", 0, 1, true)]]);
    }
}
