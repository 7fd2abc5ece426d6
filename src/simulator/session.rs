//! Per-trial result types recorded by the runner.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// State sampled the moment a completion milestone was first reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneSample {
    /// Completion count (distinct items) at the milestone.
    pub completion: u32,
    /// Total rolls when the milestone was first reached.
    pub rolls: u64,
    pub bias: f64,
    pub cooldown_reduction: u32,
}

/// Final counters for one trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub total_rolls: u64,
    pub final_bias: f64,
    pub final_cooldown_reduction: u32,
    pub best_streak: u32,
    /// False only when the safety cap stopped the trial early.
    pub completed: bool,
    pub elapsed_ms: u64,
}

/// Everything recorded while one trial played out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    /// First-reach roll counts keyed by recorded milestone.
    pub rolls_by_completion: BTreeMap<u32, u64>,
    /// Milestone samples in the order they were reached.
    pub milestones: Vec<MilestoneSample>,
    pub summary: SessionSummary,
}

impl SessionResult {
    /// Sample recorded for a given milestone, if the trial reached it.
    pub fn milestone(&self, completion: u32) -> Option<&MilestoneSample> {
        self.milestones
            .iter()
            .find(|sample| sample.completion == completion)
    }

    /// Roll delta between a recorded target and its predecessor entry.
    /// 94 and 96 are never recorded, so the 95 and 97 targets measure
    /// from the start of the run.
    pub fn endgame_delta(&self, target: u32) -> Option<u64> {
        let rolls = *self.rolls_by_completion.get(&target)?;
        let prev = target
            .checked_sub(1)
            .and_then(|p| self.rolls_by_completion.get(&p))
            .copied()
            .unwrap_or(0);
        Some(rolls.saturating_sub(prev))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(rolls: &[(u32, u64)]) -> SessionResult {
        SessionResult {
            rolls_by_completion: rolls.iter().copied().collect(),
            milestones: rolls
                .iter()
                .map(|&(completion, r)| MilestoneSample {
                    completion,
                    rolls: r,
                    bias: 10.0,
                    cooldown_reduction: 5,
                })
                .collect(),
            summary: SessionSummary {
                total_rolls: rolls.last().map(|&(_, r)| r).unwrap_or(0),
                final_bias: 10.0,
                final_cooldown_reduction: 5,
                best_streak: 3,
                completed: true,
                elapsed_ms: 1,
            },
        }
    }

    #[test]
    fn test_endgame_delta_with_recorded_predecessor() {
        let result = result_with(&[(97, 300), (98, 340), (99, 420)]);
        assert_eq!(result.endgame_delta(98), Some(40));
        assert_eq!(result.endgame_delta(99), Some(80));
    }

    #[test]
    fn test_endgame_delta_measures_from_zero_without_predecessor() {
        // 94 is never a recorded milestone, so 95 measures from zero
        let result = result_with(&[(95, 250)]);
        assert_eq!(result.endgame_delta(95), Some(250));
    }

    #[test]
    fn test_endgame_delta_missing_target() {
        let result = result_with(&[(95, 250)]);
        assert_eq!(result.endgame_delta(100), None);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let result = result_with(&[(95, 250)]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"rollsByCompletion\""));
        assert!(json.contains("\"totalRolls\""));
        assert!(json.contains("\"finalCooldownReduction\""));
        assert!(json.contains("\"cooldownReduction\""));
    }
}
