//! Bookkeeping for byte ranges already consumed by accepted matches.

use std::ops::Range;

/// A sorted list of disjoint half-open byte ranges.
#[derive(Debug, Clone, Default)]
pub struct ClaimedSpans {
    spans: Vec<Range<usize>>,
}

impl ClaimedSpans {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `[start, end)` intersects any claimed range.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        if start >= end {
            return false;
        }
        // First claimed range that ends after `start`; only it can intersect.
        let idx = self.spans.partition_point(|s| s.end <= start);
        self.spans.get(idx).is_some_and(|s| s.start < end)
    }

    /// Record `[start, end)`. Returns `false` (and records nothing) if it
    /// is empty or overlaps an existing claim.
    pub fn claim(&mut self, start: usize, end: usize) -> bool {
        if start >= end || self.overlaps(start, end) {
            return false;
        }
        let idx = self.spans.partition_point(|s| s.end <= start);
        self.spans.insert(idx, start..end);
        true
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Range<usize>> {
        self.spans.iter()
    }
}
