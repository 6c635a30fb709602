//! Header layout engine with per-tree memoization.

use crate::cache::LayoutCache;
use crate::layout::{compute_header_layout_with, HeaderLayout};
use headgrid_core::{ColumnResolver, ColumnTree, DefaultResolver};
use std::sync::Arc;

/// Header layout engine with memoization.
///
/// Layouts are cached by [`ColumnTree`] identity. Trees are immutable, so a
/// cached layout is always the one a fresh computation would produce.
#[derive(Debug, Default)]
pub struct HeaderLayoutEngine<R = DefaultResolver> {
    cache: LayoutCache,
    resolver: R,
}

impl HeaderLayoutEngine {
    /// Create an engine with the default key and width rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ColumnResolver> HeaderLayoutEngine<R> {
    /// Create an engine with a custom resolver.
    #[must_use]
    pub fn with_resolver(resolver: R) -> Self {
        Self {
            cache: LayoutCache::new(),
            resolver,
        }
    }

    /// Layout for `tree`, reusing the cached result when there is one.
    pub fn layout(&mut self, tree: &ColumnTree) -> Arc<HeaderLayout> {
        if let Some(layout) = self.cache.get(tree.id()) {
            return layout;
        }

        let layout = Arc::new(self.compute(tree));
        self.cache.insert(tree.id(), Arc::clone(&layout));
        layout
    }

    /// Compute the layout for `tree` without touching the cache.
    #[must_use]
    pub fn compute(&self, tree: &ColumnTree) -> HeaderLayout {
        compute_header_layout_with(tree.columns(), &self.resolver)
    }

    /// Advance the cache frame, evicting layouts of trees no longer in use.
    pub fn advance_frame(&mut self) {
        self.cache.advance_frame();
    }

    /// Clear the layout cache.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// The layout cache.
    #[must_use]
    pub const fn cache(&self) -> &LayoutCache {
        &self.cache
    }

    /// The resolver used for keys and width styles.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headgrid_core::{ColumnGroup, ColumnKey, ColumnNode, LeafColumn, WidthStyle};

    fn tree() -> ColumnTree {
        ColumnTree::new([
            ColumnNode::from(ColumnGroup::new(
                "g",
                vec![
                    ColumnNode::from(LeafColumn::new("a")),
                    ColumnNode::from(LeafColumn::new("b")),
                ],
            )),
            ColumnNode::from(LeafColumn::new("c")),
        ])
    }

    #[derive(Debug, Default)]
    struct NumberedResolver;

    impl ColumnResolver for NumberedResolver {
        fn key(&self, column: &LeafColumn) -> ColumnKey {
            ColumnKey::Num(column.title.as_ref().map_or(0, String::len) as i64)
        }

        fn width_style(&self, _column: &LeafColumn) -> WidthStyle {
            WidthStyle::default()
        }
    }

    #[test]
    fn test_engine_new() {
        let engine = HeaderLayoutEngine::new();
        assert!(engine.cache().is_empty());
    }

    #[test]
    fn test_engine_layout_is_memoized() {
        let mut engine = HeaderLayoutEngine::new();
        let tree = tree();

        let first = engine.layout(&tree);
        let second = engine.layout(&tree.clone());

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(engine.cache().hits(), 1);
        assert_eq!(engine.cache().misses(), 1);
    }

    #[test]
    fn test_engine_cached_matches_fresh() {
        let mut engine = HeaderLayoutEngine::new();
        let tree = tree();

        let _ = engine.layout(&tree);
        let cached = engine.layout(&tree);
        assert_eq!(*cached, engine.compute(&tree));
    }

    #[test]
    fn test_engine_new_tree_recomputes() {
        let mut engine = HeaderLayoutEngine::new();
        let old = tree();
        let new = ColumnTree::new(old.columns().iter().cloned());

        let a = engine.layout(&old);
        let b = engine.layout(&new);

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a, b);
        assert_eq!(engine.cache().len(), 2);
    }

    #[test]
    fn test_engine_evicts_unused_trees() {
        let mut engine = HeaderLayoutEngine::new();
        let kept = tree();
        let dropped = tree();
        engine.layout(&kept);
        engine.layout(&dropped);

        for _ in 0..3 {
            engine.advance_frame();
            engine.layout(&kept);
        }

        assert_eq!(engine.cache().len(), 1);
    }

    #[test]
    fn test_engine_clear_cache() {
        let mut engine = HeaderLayoutEngine::new();
        engine.layout(&tree());
        engine.clear_cache();
        assert!(engine.cache().is_empty());
    }

    #[test]
    fn test_engine_with_resolver() {
        let engine = HeaderLayoutEngine::with_resolver(NumberedResolver);
        let tree = ColumnTree::new([ColumnNode::from(LeafColumn::new("a").title("Name"))]);

        let layout = engine.compute(&tree);
        assert_eq!(layout.cols()[0].key, ColumnKey::Num(4));
    }
}
