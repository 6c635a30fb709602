//! Core types for headgrid grouped table headers.
//!
//! This crate provides the column model consumed by the header layout engine:
//! - Column tree nodes: [`ColumnNode`], [`ColumnGroup`], [`LeafColumn`]
//! - Column identity: [`ColumnKey`], [`TreeId`]
//! - Width hints: [`Length`], [`WidthStyle`]
//! - Snapshots: [`ColumnTree`]
//! - Collaborators: [`ColumnResolver`], [`DefaultResolver`]

mod column;
mod resolver;
mod style;
mod tree;

pub use column::{ColumnGroup, ColumnKey, ColumnNode, LeafColumn, LeafKind};
pub use resolver::{ColumnResolver, DefaultResolver, EXPAND_COLUMN_KEY, SELECTION_COLUMN_KEY};
pub use style::{Length, WidthStyle};
pub use tree::{ColumnTree, TreeId};
