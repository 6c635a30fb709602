//! Layout caching for memoization.

use crate::layout::HeaderLayout;
use headgrid_core::TreeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Cached layout result.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    /// Computed layout
    pub layout: Arc<HeaderLayout>,
    /// Frame when this entry was last used
    pub last_used_frame: u64,
}

/// Layout cache keyed by column tree identity.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: HashMap<TreeId, CacheEntry>,
    current_frame: u64,
    hits: usize,
    misses: usize,
}

impl LayoutCache {
    /// Create a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the layout cached for a tree.
    #[must_use]
    pub fn get(&mut self, tree: TreeId) -> Option<Arc<HeaderLayout>> {
        if let Some(entry) = self.entries.get_mut(&tree) {
            entry.last_used_frame = self.current_frame;
            self.hits += 1;
            tracing::trace!(tree = tree.get(), "header layout cache hit");
            Some(Arc::clone(&entry.layout))
        } else {
            self.misses += 1;
            tracing::trace!(tree = tree.get(), "header layout cache miss");
            None
        }
    }

    /// Insert a computed layout into the cache.
    pub fn insert(&mut self, tree: TreeId, layout: Arc<HeaderLayout>) {
        self.entries.insert(
            tree,
            CacheEntry {
                layout,
                last_used_frame: self.current_frame,
            },
        );
    }

    /// Drop the entry for one tree.
    pub fn invalidate(&mut self, tree: TreeId) -> bool {
        self.entries.remove(&tree).is_some()
    }

    /// Clear the entire cache.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get the number of cache hits.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Get the number of cache misses.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Advance to the next frame and evict stale entries.
    pub fn advance_frame(&mut self) {
        self.current_frame += 1;

        // Evict entries not used in the last 2 frames
        let threshold = self.current_frame.saturating_sub(2);
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.last_used_frame >= threshold);

        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::trace!(
                evicted,
                frame = self.current_frame,
                "evicted header layouts"
            );
        }
    }

    /// Get the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
