//! Single-entry memo of the last computed paths.
//!
//! A view redraws far more often than its text, ranges or settings change.
//! The cache remembers the inputs of the last pass and hands back the same
//! paths while they stay equal; any change recomputes everything.

use crate::config::Config;
use crate::layout::{HighlightRange, LayoutSnapshot};
use crate::log::debug;
use crate::render::geometry::RoundedPath;

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    ranges: Vec<HighlightRange>,
    layout_hash: u64,
    config: Config,
}

#[derive(Debug, Default)]
pub struct PathCache {
    entry: Option<(CacheKey, Vec<RoundedPath>)>,
    hits: u64,
    misses: u64,
}

impl PathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths for these inputs, recomputed only when they differ from the
    /// previous call.
    pub fn get_or_compute(
        &mut self,
        ranges: &[HighlightRange],
        layout: &LayoutSnapshot,
        config: &Config,
    ) -> &[RoundedPath] {
        let layout_hash = layout.geometry_hash();
        let fresh = match &self.entry {
            Some((key, _)) => {
                key.layout_hash == layout_hash && key.config == *config && key.ranges == ranges
            }
            None => false,
        };

        if fresh {
            self.hits += 1;
            debug!(hits = self.hits, "path cache hit");
        } else {
            self.misses += 1;
            debug!(misses = self.misses, "path cache miss");
            let paths = crate::render::compute_paths(ranges, layout, config);
            let key = CacheKey {
                ranges: ranges.to_vec(),
                layout_hash,
                config: config.clone(),
            };
            self.entry = Some((key, paths));
        }

        self.entry.as_ref().map_or(&[], |(_, paths)| paths.as_slice())
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuses_paths_until_inputs_change() {
        let layout = LayoutSnapshot::monospaced(&["hello world"], 8.0, 16.0);
        let ranges = vec![HighlightRange::new(0, 0..5)];
        let config = Config::default();
        let mut cache = PathCache::new();

        let first = cache.get_or_compute(&ranges, &layout, &config).to_vec();
        let second = cache.get_or_compute(&ranges, &layout, &config).to_vec();
        assert_eq!(first, second);
        assert_eq!((cache.hits(), cache.misses()), (1, 1));

        let wider = config.clone().with_padding(8.0);
        cache.get_or_compute(&ranges, &layout, &wider);
        assert_eq!(cache.misses(), 2);

        let moved = vec![HighlightRange::new(0, 6..11)];
        cache.get_or_compute(&moved, &layout, &wider);
        assert_eq!(cache.misses(), 3);

        let relaid = LayoutSnapshot::monospaced(&["hello world"], 9.0, 16.0);
        cache.get_or_compute(&moved, &relaid, &wider);
        assert_eq!(cache.misses(), 4);
    }

    #[test]
    fn invalidate_forces_recompute() {
        let layout = LayoutSnapshot::monospaced(&["abc"], 8.0, 16.0);
        let ranges = vec![HighlightRange::new(0, 0..3)];
        let mut cache = PathCache::new();
        cache.get_or_compute(&ranges, &layout, &Config::default());
        cache.invalidate();
        cache.get_or_compute(&ranges, &layout, &Config::default());
        assert_eq!((cache.hits(), cache.misses()), (0, 2));
    }
}
