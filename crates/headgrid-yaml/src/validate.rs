//! Column tree validation.
//!
//! The layout engine accepts any tree; span overrides below 1 and missing or
//! duplicate keys are caught here, before a tree reaches it.

use crate::error::ParseError;
use headgrid_core::{ColumnKey, ColumnNode, ColumnResolver, DefaultResolver, LeafColumn, LeafKind};
use std::collections::HashSet;
use std::fmt;

/// Non-fatal finding about a column tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Group without children; it renders with a column span of 0
    EmptyGroup {
        /// Location in the manifest
        path: String,
    },
    /// Span override that reaches past the last leaf column
    SpanOverrun {
        /// Location in the manifest
        path: String,
        /// Requested span
        span: usize,
        /// Leaf slots left from this column to the end
        remaining: usize,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGroup { path } => write!(f, "{path}: group has no children"),
            Self::SpanOverrun {
                path,
                span,
                remaining,
            } => write!(
                f,
                "{path}: titleColSpan {span} exceeds the {remaining} remaining column(s)"
            ),
        }
    }
}

struct Validator {
    keys: HashSet<ColumnKey>,
    leaves: Vec<(String, usize)>,
    warnings: Vec<ValidationWarning>,
}

impl Validator {
    fn visit(&mut self, node: &ColumnNode, path: String) -> Result<(), ParseError> {
        match node {
            ColumnNode::Group(group) => {
                if group.children.is_empty() {
                    self.warnings.push(ValidationWarning::EmptyGroup {
                        path: path.clone(),
                    });
                }
                for (i, child) in group.children.iter().enumerate() {
                    self.visit(child, format!("{path}.children[{i}]"))?;
                }
                Ok(())
            }
            ColumnNode::Leaf(leaf) => self.visit_leaf(leaf, path),
        }
    }

    fn visit_leaf(&mut self, leaf: &LeafColumn, path: String) -> Result<(), ParseError> {
        if leaf.kind == LeafKind::Data && leaf.key.is_none() {
            return Err(ParseError::MissingField(format!("{path}.key")));
        }
        if leaf.title_col_span == Some(0) {
            return Err(ParseError::InvalidValue {
                field: format!("{path}.titleColSpan"),
                message: "must be at least 1".to_string(),
            });
        }

        let key = DefaultResolver.key(leaf);
        if self.keys.contains(&key) {
            return Err(ParseError::Validation(format!(
                "duplicate column key '{key}' at {path}"
            )));
        }
        self.keys.insert(key);

        self.leaves.push((path, leaf.resolved_col_span()));
        Ok(())
    }

    fn check_spans(&mut self) {
        let total = self.leaves.len();
        for (index, (path, span)) in self.leaves.iter().enumerate() {
            let remaining = total - index;
            if *span > remaining {
                self.warnings.push(ValidationWarning::SpanOverrun {
                    path: path.clone(),
                    span: *span,
                    remaining,
                });
            }
        }
    }
}

/// Validate a column forest.
///
/// Hard errors: a data column without a key, a span override of 0, two leaves
/// resolving to the same key. Everything else is reported as a warning and
/// logged.
pub fn validate_columns(columns: &[ColumnNode]) -> Result<Vec<ValidationWarning>, ParseError> {
    let mut validator = Validator {
        keys: HashSet::new(),
        leaves: Vec::new(),
        warnings: Vec::new(),
    };
    for (i, column) in columns.iter().enumerate() {
        validator.visit(column, format!("columns[{i}]"))?;
    }
    validator.check_spans();

    for warning in &validator.warnings {
        tracing::warn!("{warning}");
    }
    Ok(validator.warnings)
}
