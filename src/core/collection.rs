//! Collection state: 100 item slots with counts and levels.

use serde::{Deserialize, Serialize};

use crate::constants::{ITEM_COUNT, LEVEL_THRESHOLDS, MAX_LEVEL, NEAR_MISS_RADIUS};

/// One item slot in the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSlot {
    /// Times this item has been drawn.
    pub count: u32,
    /// Level derived from count, 0-4. Recomputed on every update.
    pub level: u8,
}

/// Outcome of recording one draw against the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    pub was_new: bool,
    pub old_level: u8,
    pub new_level: u8,
}

/// Progress toward the next item level, for a given draw count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u8,
    /// None at max level.
    pub next_level: Option<u8>,
    /// Floor percentage between the current and next threshold.
    pub percent: u32,
    /// Draws remaining until the next threshold (0 at max level).
    pub remaining: u32,
}

/// Level for a given draw count.
pub fn level_for_count(count: u32) -> u8 {
    let mut level = 0;
    for (candidate, &threshold) in LEVEL_THRESHOLDS.iter().enumerate().skip(1) {
        if count >= threshold {
            level = candidate as u8;
        }
    }
    level
}

/// Progress between the current level threshold and the next one.
pub fn level_progress(count: u32) -> LevelProgress {
    let level = level_for_count(count);
    if level >= MAX_LEVEL {
        return LevelProgress {
            level,
            next_level: None,
            percent: 100,
            remaining: 0,
        };
    }
    let current = LEVEL_THRESHOLDS[level as usize];
    let next = LEVEL_THRESHOLDS[level as usize + 1];
    LevelProgress {
        level,
        next_level: Some(level + 1),
        percent: (count - current) * 100 / (next - current),
        remaining: next - count,
    }
}

/// The full 100-slot collection, indices 1..=100.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionState {
    items: Vec<ItemSlot>,
}

impl Default for CollectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionState {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            items: vec![ItemSlot::default(); ITEM_COUNT as usize],
        }
    }

    /// Whether an index addresses a real slot (1..=100).
    pub fn valid_index(index: u32) -> bool {
        (1..=ITEM_COUNT).contains(&index)
    }

    fn position(index: u32) -> Option<usize> {
        if Self::valid_index(index) {
            Some((index - 1) as usize)
        } else {
            None
        }
    }

    /// Slot for an index, if in range.
    pub fn item(&self, index: u32) -> Option<&ItemSlot> {
        Self::position(index).map(|pos| &self.items[pos])
    }

    /// Iterates all slots as (index, slot) pairs, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &ItemSlot)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(pos, slot)| (pos as u32 + 1, slot))
    }

    /// Records one draw of `index`. Out-of-range indices are rejected
    /// without touching any state.
    pub fn record_draw(&mut self, index: u32) -> Option<RollOutcome> {
        let pos = Self::position(index)?;
        let slot = &mut self.items[pos];
        let was_new = slot.count == 0;
        let old_level = slot.level;
        slot.count += 1;
        slot.level = level_for_count(slot.count);
        Some(RollOutcome {
            was_new,
            old_level,
            new_level: slot.level,
        })
    }

    /// Indices never drawn, ascending.
    pub fn missing_items(&self) -> Vec<u32> {
        (1..=ITEM_COUNT)
            .filter(|&index| self.items[(index - 1) as usize].count == 0)
            .collect()
    }

    /// Indices drawn at least once, ascending.
    pub fn collected_items(&self) -> Vec<u32> {
        (1..=ITEM_COUNT)
            .filter(|&index| self.items[(index - 1) as usize].count > 0)
            .collect()
    }

    /// Indices at or above a level, ascending.
    pub fn leveled_items(&self, min_level: u8) -> Vec<u32> {
        (1..=ITEM_COUNT)
            .filter(|&index| self.items[(index - 1) as usize].level >= min_level)
            .collect()
    }

    /// Number of distinct items collected, recounted from the slots.
    pub fn collected_count(&self) -> u32 {
        self.items.iter().filter(|slot| slot.count > 0).count() as u32
    }

    /// Sum of all item levels.
    pub fn total_levels(&self) -> u32 {
        self.items.iter().map(|slot| slot.level as u32).sum()
    }

    /// Whether all 100 items are collected.
    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|slot| slot.count > 0)
    }

    /// Near-miss candidates: the union of [m-3, m+3] windows around every
    /// missing item m, clamped to 1..=100. Owned neighbors stay in the pool.
    pub fn near_missing_pool(&self) -> Vec<u32> {
        let mut in_pool = [false; ITEM_COUNT as usize];
        for index in self.missing_items() {
            let lo = index.saturating_sub(NEAR_MISS_RADIUS).max(1);
            let hi = (index + NEAR_MISS_RADIUS).min(ITEM_COUNT);
            for n in lo..=hi {
                in_pool[(n - 1) as usize] = true;
            }
        }
        (1..=ITEM_COUNT)
            .filter(|&n| in_pool[(n - 1) as usize])
            .collect()
    }

    /// Repairs a collection loaded from external data: exactly 100 slots,
    /// every level rederived from its count.
    pub fn normalize(&mut self) {
        self.items.resize(ITEM_COUNT as usize, ItemSlot::default());
        for slot in &mut self.items {
            slot.level = level_for_count(slot.count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_count_thresholds() {
        assert_eq!(level_for_count(0), 0);
        assert_eq!(level_for_count(9), 0);
        assert_eq!(level_for_count(10), 1);
        assert_eq!(level_for_count(24), 1);
        assert_eq!(level_for_count(25), 2);
        assert_eq!(level_for_count(49), 2);
        assert_eq!(level_for_count(50), 3);
        assert_eq!(level_for_count(99), 3);
        assert_eq!(level_for_count(100), 4);
        assert_eq!(level_for_count(250), 4);
    }

    #[test]
    fn test_record_draw_new_then_repeat() {
        let mut state = CollectionState::new();

        let first = state.record_draw(42).unwrap();
        assert!(first.was_new);
        assert_eq!(first.old_level, 0);
        assert_eq!(first.new_level, 0);

        let second = state.record_draw(42).unwrap();
        assert!(!second.was_new);
        assert_eq!(state.item(42).unwrap().count, 2);
    }

    #[test]
    fn test_record_draw_level_up_at_threshold() {
        let mut state = CollectionState::new();
        for _ in 0..9 {
            state.record_draw(7);
        }
        assert_eq!(state.item(7).unwrap().level, 0);

        let outcome = state.record_draw(7).unwrap();
        assert_eq!(outcome.old_level, 0);
        assert_eq!(outcome.new_level, 1);
    }

    #[test]
    fn test_record_draw_rejects_out_of_range() {
        let mut state = CollectionState::new();
        assert!(state.record_draw(0).is_none());
        assert!(state.record_draw(101).is_none());
        assert_eq!(state.collected_count(), 0);
        assert!(state.item(0).is_none());
        assert!(state.item(101).is_none());
    }

    #[test]
    fn test_missing_and_collected_queries() {
        let mut state = CollectionState::new();
        assert_eq!(state.missing_items().len(), 100);
        assert!(state.collected_items().is_empty());

        state.record_draw(1);
        state.record_draw(50);
        state.record_draw(100);

        assert_eq!(state.collected_items(), vec![1, 50, 100]);
        assert_eq!(state.missing_items().len(), 97);
        assert_eq!(state.collected_count(), 3);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_leveled_items_filter() {
        let mut state = CollectionState::new();
        for _ in 0..10 {
            state.record_draw(3);
        }
        for _ in 0..25 {
            state.record_draw(8);
        }
        state.record_draw(12);

        assert_eq!(state.leveled_items(1), vec![3, 8]);
        assert_eq!(state.leveled_items(2), vec![8]);
        assert_eq!(state.total_levels(), 3);
    }

    #[test]
    fn test_is_complete_after_all_items() {
        let mut state = CollectionState::new();
        for index in 1..=100 {
            state.record_draw(index);
        }
        assert!(state.is_complete());
        assert_eq!(state.collected_count(), 100);
        assert!(state.missing_items().is_empty());
    }

    #[test]
    fn test_near_missing_pool_single_gap() {
        let mut state = CollectionState::new();
        for index in 1..=100 {
            if index != 50 {
                state.record_draw(index);
            }
        }
        assert_eq!(state.near_missing_pool(), vec![47, 48, 49, 50, 51, 52, 53]);
    }

    #[test]
    fn test_near_missing_pool_clamps_at_edges() {
        let mut state = CollectionState::new();
        for index in 2..=100 {
            state.record_draw(index);
        }
        assert_eq!(state.near_missing_pool(), vec![1, 2, 3, 4]);

        let mut state = CollectionState::new();
        for index in 1..=99 {
            state.record_draw(index);
        }
        assert_eq!(state.near_missing_pool(), vec![97, 98, 99, 100]);
    }

    #[test]
    fn test_near_missing_pool_merges_windows() {
        let mut state = CollectionState::new();
        for index in 1..=100 {
            if index != 10 && index != 11 {
                state.record_draw(index);
            }
        }
        assert_eq!(state.near_missing_pool(), vec![7, 8, 9, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_near_missing_pool_empty_when_complete() {
        let mut state = CollectionState::new();
        for index in 1..=100 {
            state.record_draw(index);
        }
        assert!(state.near_missing_pool().is_empty());
    }

    #[test]
    fn test_level_progress_fresh_and_midway() {
        let fresh = level_progress(0);
        assert_eq!(fresh.level, 0);
        assert_eq!(fresh.next_level, Some(1));
        assert_eq!(fresh.percent, 0);
        assert_eq!(fresh.remaining, 10);

        let half = level_progress(5);
        assert_eq!(half.percent, 50);
        assert_eq!(half.remaining, 5);

        let mid_level_one = level_progress(17);
        assert_eq!(mid_level_one.level, 1);
        assert_eq!(mid_level_one.next_level, Some(2));
        assert_eq!(mid_level_one.percent, 46);
        assert_eq!(mid_level_one.remaining, 8);
    }

    #[test]
    fn test_level_progress_at_max() {
        let maxed = level_progress(100);
        assert_eq!(maxed.level, 4);
        assert_eq!(maxed.next_level, None);
        assert_eq!(maxed.percent, 100);
        assert_eq!(maxed.remaining, 0);
    }

    #[test]
    fn test_normalize_rederives_levels_and_size() {
        let mut state = CollectionState::new();
        state.items.truncate(40);
        state.items[4].count = 30;
        state.items[4].level = 0;

        state.normalize();

        assert_eq!(state.items.len(), 100);
        assert_eq!(state.item(5).unwrap().level, 2);
        assert_eq!(state.item(100).unwrap().count, 0);
    }
}
