//! Bias and cooldown math over the collection.
//!
//! Everything here is a pure scan of the 100 slots. Bias feeds the
//! sampler; cooldown reduction feeds the caller's draw timers.

use crate::constants::{
    is_divisible_by_5, is_fibonacci, is_prime, BIAS_CAP, COOLDOWN_FLOOR_PERCENT,
    COOLDOWN_PER_DIV5_ITEM, COOLDOWN_PER_LEVEL, COOLDOWN_REDUCTION_CAP, FIBONACCI_MULTIPLIER,
    LEVEL_BIAS_BONUS, PRIME_MULTIPLIER,
};
use crate::core::collection::CollectionState;

/// Combined special-number multiplier for one index (1.5 prime, 1.2
/// Fibonacci, stacking).
pub fn special_bonus(index: u32) -> f64 {
    let mut bonus = 1.0;
    if is_prime(index) {
        bonus *= PRIME_MULTIPLIER;
    }
    if is_fibonacci(index) {
        bonus *= FIBONACCI_MULTIPLIER;
    }
    bonus
}

/// Sampling bias percentage, 0.0..=85.0. Each slot contributes its level
/// bonus times its special multiplier; level 0 contributes nothing.
pub fn compute_bias(state: &CollectionState) -> f64 {
    let bias: f64 = state
        .iter()
        .map(|(index, slot)| {
            let level_bonus = LEVEL_BIAS_BONUS
                .get(slot.level as usize)
                .copied()
                .unwrap_or(0.0);
            level_bonus * special_bonus(index)
        })
        .sum();
    bias.min(BIAS_CAP)
}

/// Cooldown reduction in whole percentage points, 0..=85. 2 per leveled
/// item divisible by 5, plus 1 per level across the collection.
pub fn cooldown_reduction(state: &CollectionState) -> u32 {
    let mut reduction = 0;
    for (index, slot) in state.iter() {
        if is_divisible_by_5(index) && slot.level >= 1 {
            reduction += COOLDOWN_PER_DIV5_ITEM;
        }
        reduction += COOLDOWN_PER_LEVEL * slot.level as u32;
    }
    reduction.min(COOLDOWN_REDUCTION_CAP)
}

/// Applies a reduction to a base cooldown, never dropping below 15% of
/// the base.
pub fn effective_cooldown_ms(base_ms: u64, reduction: u32) -> u64 {
    let reduced = base_ms * (100 - reduction.min(100)) as u64 / 100;
    reduced.max(base_ms * COOLDOWN_FLOOR_PERCENT / 100)
}
