use alloc::vec::Vec;
use core::fmt;

use crate::ScrollSample;

/// Error returned when the tracker is queried outside the current offset
/// table.
///
/// This indicates a caller ordering bug (querying before layout, or after an
/// unsynchronized item-count change), not a recoverable condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item index {} is outside the offset table (len {})",
            self.index, self.len
        )
    }
}

impl core::error::Error for IndexOutOfRange {}

/// Converts raw "first visible item + its top offset" scroll samples into an
/// absolute scroll position, via a cumulative offset table built from per-item
/// measured heights.
///
/// The table is rebuilt in full whenever the item set may have changed; there
/// is no incremental invalidation. Until the first [`Self::rebuild`], the
/// tracker reports `is_computed() == false` and callers must not query it.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    offsets: Vec<i32>,
    total_height: i32,
    computed: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the cumulative offset table for `count` items.
    ///
    /// `height_of(i)` must return item `i`'s measured pixel height. The call
    /// is idempotent for unchanged heights. A zero `count` yields an empty
    /// table and total height 0, which still counts as computed.
    pub fn rebuild(&mut self, count: usize, mut height_of: impl FnMut(usize) -> u32) {
        self.offsets.clear();
        self.offsets.reserve_exact(count);

        let mut running = 0i32;
        for i in 0..count {
            self.offsets.push(running);
            let h = height_of(i).min(i32::MAX as u32) as i32;
            running = running.saturating_add(h);
        }
        self.total_height = running;
        self.computed = true;
        qdebug!(count, total_height = running, "ScrollTracker::rebuild");
    }

    /// True once [`Self::rebuild`] has run for the current item set.
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Total measured content height, in pixels.
    pub fn total_height(&self) -> i32 {
        self.total_height
    }

    /// Cumulative offset of item `index`: the summed heights of items
    /// `[0, index)`. `offset_of(0)` is always 0.
    pub fn offset_of(&self, index: usize) -> Result<i32, IndexOutOfRange> {
        self.offsets.get(index).copied().ok_or(IndexOutOfRange {
            index,
            len: self.offsets.len(),
        })
    }

    /// Absolute scroll position for a sample:
    /// `offset_of(first_visible_index) - first_visible_top`.
    ///
    /// A pure function of the sample and the current table.
    pub fn scroll_y(&self, sample: ScrollSample) -> Result<i32, IndexOutOfRange> {
        let off = self.offset_of(sample.first_visible_index)?;
        Ok(off.saturating_sub(sample.first_visible_top))
    }
}
