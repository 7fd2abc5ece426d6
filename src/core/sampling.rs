//! Biased draw sampling.
//!
//! The RNG is always injected so callers (and tests) control seeding.

use rand::Rng;

use crate::constants::{ITEM_COUNT, NEAR_MISS_BIAS_THRESHOLD};
use crate::core::collection::CollectionState;

/// Picks a biased target index. Above 50% bias the pick comes from the
/// near-missing pool (which may land on an owned neighbor), otherwise
/// uniformly from the missing set. None when nothing is missing.
pub fn select_biased_target(state: &CollectionState, bias: f64, rng: &mut impl Rng) -> Option<u32> {
    let missing = state.missing_items();
    if missing.is_empty() {
        return None;
    }
    if bias > NEAR_MISS_BIAS_THRESHOLD {
        let pool = state.near_missing_pool();
        if !pool.is_empty() {
            return Some(pool[rng.gen_range(0..pool.len())]);
        }
    }
    Some(missing[rng.gen_range(0..missing.len())])
}

/// Rolls one item index in 1..=100. With probability bias/100 the draw is
/// steered toward missing items; otherwise, and whenever the collection is
/// already complete, it is uniform.
pub fn roll_with_bias(state: &CollectionState, bias: f64, rng: &mut impl Rng) -> u32 {
    let roll = rng.gen::<f64>() * 100.0;
    if roll < bias {
        if let Some(target) = select_biased_target(state, bias, rng) {
            return target;
        }
    }
    rng.gen_range(1..=ITEM_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn all_but(missing: &[u32]) -> CollectionState {
        let mut state = CollectionState::new();
        for index in 1..=100 {
            if !missing.contains(&index) {
                state.record_draw(index);
            }
        }
        state
    }

    #[test]
    fn test_select_none_when_complete() {
        let state = all_but(&[]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(select_biased_target(&state, 85.0, &mut rng), None);
    }

    #[test]
    fn test_select_low_bias_hits_missing_set() {
        let state = all_but(&[42]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..50 {
            assert_eq!(select_biased_target(&state, 40.0, &mut rng), Some(42));
        }
    }

    #[test]
    fn test_select_high_bias_uses_near_miss_window() {
        let state = all_but(&[50]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut hit_neighbor = false;
        for _ in 0..200 {
            let target = select_biased_target(&state, 90.0, &mut rng).unwrap();
            assert!((47..=53).contains(&target));
            if target != 50 {
                hit_neighbor = true;
            }
        }
        // The window includes owned neighbors
        assert!(hit_neighbor);
    }

    #[test]
    fn test_roll_always_in_range() {
        let state = all_but(&[10, 20, 30]);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..500 {
            let index = roll_with_bias(&state, 60.0, &mut rng);
            assert!((1..=100).contains(&index));
        }
    }

    #[test]
    fn test_roll_with_zero_bias_is_uniform_branch() {
        let state = all_but(&[99]);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut seen_owned = false;
        for _ in 0..300 {
            let index = roll_with_bias(&state, 0.0, &mut rng);
            assert!((1..=100).contains(&index));
            if index != 99 {
                seen_owned = true;
            }
        }
        assert!(seen_owned);
    }

    #[test]
    fn test_roll_on_complete_collection_falls_through() {
        let state = all_but(&[]);
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..100 {
            let index = roll_with_bias(&state, 85.0, &mut rng);
            assert!((1..=100).contains(&index));
        }
    }

    #[test]
    fn test_high_bias_concentrates_on_window() {
        let state = all_but(&[50]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let window_hits = (0..1000)
            .filter(|_| (47..=53).contains(&roll_with_bias(&state, 85.0, &mut rng)))
            .count();
        // ~86% expected; far above the 7% a uniform roll would give
        assert!(window_hits > 700, "window hits: {}", window_hits);
    }
}
