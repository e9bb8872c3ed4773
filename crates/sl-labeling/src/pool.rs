//! Available-weight pool.
//!
//! A `FixedBitSet` over a bounded range of weights plus a cursor at the lowest
//! free weight. Weights only ever leave the pool, so the cursor only moves
//! forward: membership and removal are O(1), find-min is O(1), and the cursor
//! sweeps the range at most once over the whole run.

use fixedbitset::FixedBitSet;
use sl_core::Weight;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightPool {
    lo: Weight,
    hi: Weight,
    bits: FixedBitSet,
    /// Offset of the smallest free weight; equals the span once drained.
    cursor: usize,
    len: usize,
}

impl WeightPool {
    /// Pool holding every weight in `lo..=hi` (empty when `lo > hi`).
    pub fn with_range(lo: Weight, hi: Weight) -> Self {
        let span = if lo > hi { 0 } else { (hi - lo) as usize + 1 };
        let mut bits = FixedBitSet::with_capacity(span);
        bits.insert_range(..);
        Self {
            lo,
            hi,
            bits,
            cursor: 0,
            len: span,
        }
    }

    /// Every weight the sum rule can produce from labels in `[1, k]`.
    pub fn for_sum_labels(k: u32) -> Self {
        Self::with_range(2, k.saturating_mul(2))
    }

    /// Smallest weight the pool started with.
    pub fn lo(&self) -> Weight {
        self.lo
    }

    /// Largest weight the pool started with.
    pub fn hi(&self) -> Weight {
        self.hi
    }

    /// Number of weights still available.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn offset(&self, weight: Weight) -> Option<usize> {
        if weight < self.lo || weight > self.hi {
            return None;
        }
        Some((weight - self.lo) as usize)
    }

    pub fn contains(&self, weight: Weight) -> bool {
        self.offset(weight).is_some_and(|bit| self.bits.contains(bit))
    }

    /// Remove `weight`; returns false if it was not available.
    pub fn take(&mut self, weight: Weight) -> bool {
        let Some(bit) = self.offset(weight) else {
            return false;
        };
        if !self.bits.contains(bit) {
            return false;
        }
        self.bits.set(bit, false);
        self.len -= 1;
        self.advance_cursor();
        true
    }

    /// Smallest available weight.
    pub fn min(&self) -> Option<Weight> {
        if self.cursor >= self.bits.len() {
            return None;
        }
        Some(self.lo + self.cursor as Weight)
    }

    /// Remove and return the smallest available weight.
    pub fn pop_min(&mut self) -> Option<Weight> {
        let weight = self.min()?;
        self.take(weight);
        Some(weight)
    }

    /// Remaining weights in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = Weight> + '_ {
        self.bits.ones().map(move |bit| self.lo + bit as Weight)
    }

    fn advance_cursor(&mut self) {
        while self.cursor < self.bits.len() && !self.bits.contains(self.cursor) {
            self.cursor += 1;
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    proptest! {
        #[test]
        fn matches_ordered_set(k in 1_u32..300, removals in prop::collection::vec(0_u32..700, 0..400)) {
            let mut pool = WeightPool::for_sum_labels(k);
            let mut model: BTreeSet<u32> = (2..=2 * k).collect();

            for w in removals {
                let before = pool.len();
                let taken = pool.take(w);
                prop_assert_eq!(taken, model.remove(&w));
                // shrinks by exactly one per successful commit
                prop_assert_eq!(pool.len(), before - usize::from(taken));
                prop_assert!(!pool.contains(w));
                prop_assert_eq!(pool.min(), model.first().copied());
            }
            prop_assert_eq!(pool.iter().collect::<Vec<_>>(), model.into_iter().collect::<Vec<_>>());
        }
    }
}
