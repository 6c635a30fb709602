//! Key and width-style derivation for leaf columns.

use crate::column::{ColumnKey, LeafColumn, LeafKind};
use crate::style::WidthStyle;

/// Key used for the row selection column.
pub const SELECTION_COLUMN_KEY: &str = "__n_selection__";

/// Key used for the row expand column.
pub const EXPAND_COLUMN_KEY: &str = "__n_expand__";

/// Host lookups that turn a leaf column into layout metadata.
///
/// Implementations must be side-effect free: the layout engine may call them
/// any number of times and caches their results per tree.
pub trait ColumnResolver {
    /// Stable identity key of the column.
    fn key(&self, column: &LeafColumn) -> ColumnKey;

    /// Width style of the column.
    fn width_style(&self, column: &LeafColumn) -> WidthStyle;
}

/// Resolver with the stock key and width rules.
///
/// Selection and expand columns get fixed keys; data columns use their
/// declared key, or an empty string when none was declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResolver;

impl ColumnResolver for DefaultResolver {
    fn key(&self, column: &LeafColumn) -> ColumnKey {
        match column.kind {
            LeafKind::Selection => ColumnKey::from(SELECTION_COLUMN_KEY),
            LeafKind::Expand => ColumnKey::from(EXPAND_COLUMN_KEY),
            LeafKind::Data => column
                .key
                .clone()
                .unwrap_or_else(|| ColumnKey::Str(String::new())),
        }
    }

    fn width_style(&self, column: &LeafColumn) -> WidthStyle {
        WidthStyle {
            width: column.width.clone(),
            min_width: column.min_width.clone(),
            max_width: column.max_width.clone(),
        }
    }
}
