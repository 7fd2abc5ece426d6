//! Balance report: aggregation over recorded trials plus text and JSON
//! rendering.

use std::collections::BTreeMap;

use serde::Serialize;

use super::session::{MilestoneSample, SessionResult};

/// Milestones shown in the progression table.
const REPORT_MILESTONES: [u32; 9] = [50, 70, 80, 90, 93, 95, 97, 98, 99];

/// Targets measured as roll deltas in the endgame table.
const ENDGAME_TARGETS: [u32; 5] = [95, 97, 98, 99, 100];

/// Aggregates for one progression milestone, over the trials that
/// actually recorded it.
#[derive(Debug, Clone, Copy)]
pub struct MilestoneStats {
    pub completion: u32,
    pub trials: u32,
    pub avg_rolls: f64,
    pub avg_bias: f64,
    pub avg_cooldown: f64,
}

/// Roll-delta aggregates for one endgame target.
#[derive(Debug, Clone, Copy)]
pub struct EndgameStats {
    pub target: u32,
    pub trials: u32,
    pub avg_delta: f64,
    pub min_delta: u64,
    pub max_delta: u64,
}

/// Aggregated results from a batch of trials.
#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub num_trials: u32,
    pub trials_completed: u32,
    pub trials_truncated: u32,

    // Aggregates over completed trials only
    pub avg_total_rolls: f64,
    pub avg_final_bias: f64,
    pub avg_final_cooldown: f64,
    pub avg_best_streak: f64,

    // Per-milestone and endgame tables
    pub milestone_stats: Vec<MilestoneStats>,
    pub endgame_stats: Vec<EndgameStats>,

    // Individual trial results for detailed analysis
    pub sessions: Vec<SessionResult>,
}

impl BalanceReport {
    /// Create a report from recorded trials.
    pub fn from_sessions(sessions: Vec<SessionResult>) -> Self {
        let num_trials = sessions.len() as u32;
        let trials_completed = sessions.iter().filter(|s| s.summary.completed).count() as u32;
        let trials_truncated = num_trials - trials_completed;

        // Overall averages cover completed trials only
        let denom = trials_completed.max(1) as f64;
        let completed = || sessions.iter().filter(|s| s.summary.completed);
        let avg_total_rolls =
            completed().map(|s| s.summary.total_rolls as f64).sum::<f64>() / denom;
        let avg_final_bias = completed().map(|s| s.summary.final_bias).sum::<f64>() / denom;
        let avg_final_cooldown = completed()
            .map(|s| s.summary.final_cooldown_reduction as f64)
            .sum::<f64>()
            / denom;
        let avg_best_streak =
            completed().map(|s| s.summary.best_streak as f64).sum::<f64>() / denom;

        // Progression rows: a trial missing a milestone is excluded from
        // that row, never imputed.
        let mut milestone_stats = Vec::new();
        for completion in REPORT_MILESTONES {
            let samples: Vec<&MilestoneSample> = sessions
                .iter()
                .filter_map(|s| s.milestone(completion))
                .collect();
            if samples.is_empty() {
                continue;
            }
            let n = samples.len() as f64;
            milestone_stats.push(MilestoneStats {
                completion,
                trials: samples.len() as u32,
                avg_rolls: samples.iter().map(|m| m.rolls as f64).sum::<f64>() / n,
                avg_bias: samples.iter().map(|m| m.bias).sum::<f64>() / n,
                avg_cooldown: samples.iter().map(|m| m.cooldown_reduction as f64).sum::<f64>() / n,
            });
        }

        let mut endgame_stats = Vec::new();
        for target in ENDGAME_TARGETS {
            let deltas: Vec<u64> = sessions
                .iter()
                .filter_map(|s| s.endgame_delta(target))
                .collect();
            if deltas.is_empty() {
                continue;
            }
            let n = deltas.len() as f64;
            endgame_stats.push(EndgameStats {
                target,
                trials: deltas.len() as u32,
                avg_delta: deltas.iter().map(|&d| d as f64).sum::<f64>() / n,
                min_delta: deltas.iter().copied().min().unwrap_or(0),
                max_delta: deltas.iter().copied().max().unwrap_or(0),
            });
        }

        Self {
            num_trials,
            trials_completed,
            trials_truncated,
            avg_total_rolls,
            avg_final_bias,
            avg_final_cooldown,
            avg_best_streak,
            milestone_stats,
            endgame_stats,
            sessions,
        }
    }

    /// Progression row for a milestone, if any trial recorded it.
    pub fn milestone_row(&self, completion: u32) -> Option<&MilestoneStats> {
        self.milestone_stats
            .iter()
            .find(|row| row.completion == completion)
    }

    /// Endgame row for a target, if any trial recorded it.
    pub fn endgame_row(&self, target: u32) -> Option<&EndgameStats> {
        self.endgame_stats.iter().find(|row| row.target == target)
    }

    /// Average of the last two endgame deltas (99 and 100), the cost of
    /// the final stretch.
    fn final_stretch_avg(&self) -> Option<f64> {
        let last = self.endgame_row(100)?;
        let prev = self.endgame_row(99)?;
        Some((last.avg_delta + prev.avg_delta) / 2.0)
    }

    /// Generate the human-readable report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                   BALANCE ANALYSIS REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Trials: {} total, {} completed, {} did not complete\n\n",
            self.num_trials, self.trials_completed, self.trials_truncated
        ));

        report.push_str("── OVERALL STATISTICS ───────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Rolls to Complete:   {:.0}\n",
            self.avg_total_rolls
        ));
        report.push_str(&format!(
            "  Avg Final Bias:          {:.1}%\n",
            self.avg_final_bias
        ));
        report.push_str(&format!(
            "  Avg Final Cooldown:      -{:.1}%\n",
            self.avg_final_cooldown
        ));
        report.push_str(&format!(
            "  Avg Best Streak:         {:.1}\n\n",
            self.avg_best_streak
        ));

        report.push_str("── PROGRESSION ANALYSIS ─────────────────────────────────────────\n");
        if self.milestone_stats.is_empty() {
            report.push_str("  No milestones recorded\n");
        } else {
            report.push_str("  Milestone   Trials   Avg Rolls   Avg Bias   Avg Cooldown\n");
            report.push_str("  ─────────   ──────   ─────────   ────────   ────────────\n");
            for row in &self.milestone_stats {
                report.push_str(&format!(
                    "  {:>8}%   {:>6}   {:>9.0}   {:>7.1}%   {:>11.1}%\n",
                    row.completion, row.trials, row.avg_rolls, row.avg_bias, row.avg_cooldown
                ));
            }
        }
        report.push('\n');

        report.push_str("── ENDGAME DIFFICULTY ───────────────────────────────────────────\n");
        if self.endgame_stats.is_empty() {
            report.push_str("  No endgame data recorded\n");
        } else {
            for row in &self.endgame_stats {
                report.push_str(&format!(
                    "  Reaching {:>3}%: {:>6.0} rolls   (min {}, max {})\n",
                    row.target, row.avg_delta, row.min_delta, row.max_delta
                ));
            }
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        self.push_assessment(&mut report);

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    fn push_assessment(&self, report: &mut String) {
        let checkpoint = match self.milestone_row(93) {
            Some(row) => *row,
            None => {
                report.push_str("  Not enough data for an assessment\n");
                return;
            }
        };

        let bias_rating = if checkpoint.avg_bias < 30.0 {
            "TOO LOW - endgame barely steers toward missing numbers"
        } else if checkpoint.avg_bias < 50.0 {
            "LOW - late game drags without stronger bias"
        } else {
            "OK - strong assist in the late game"
        };
        let cooldown_rating = if checkpoint.avg_cooldown < 30.0 {
            "TOO LOW - draws stay slow to the very end"
        } else if checkpoint.avg_cooldown < 50.0 {
            "LOW - draw pacing barely improves"
        } else {
            "OK - draws speed up nicely"
        };

        report.push_str(&format!(
            "  Bias at 93%:     {:.1}% - {}\n",
            checkpoint.avg_bias, bias_rating
        ));
        report.push_str(&format!(
            "  Cooldown at 93%: {:.1}% - {}\n",
            checkpoint.avg_cooldown, cooldown_rating
        ));

        if let Some(stretch) = self.final_stretch_avg() {
            let stretch_rating = if stretch > 50.0 {
                "TOO HARD - the last numbers are a wall"
            } else if stretch > 25.0 {
                "HARD - grindy but acceptable"
            } else {
                "OK - the finish stays in reach"
            };
            report.push_str(&format!(
                "  Final Stretch:   {:.1} rolls per number - {}\n",
                stretch, stretch_rating
            ));
        }

        if checkpoint.avg_bias < 50.0 {
            report.push_str("  ⚠️  Endgame bias below 50% - consider raising level bonuses\n");
        }
        if checkpoint.avg_cooldown < 50.0 {
            report
                .push_str("  ⚠️  Endgame cooldown below 50% - consider raising div-5 bonuses\n");
        }
        if self.avg_total_rolls > 1000.0 {
            report.push_str("  ⚠️  Completion averages over 1,000 rolls - game may be too long\n");
        }
        if self.trials_truncated > 0 {
            report.push_str(&format!(
                "  ⚠️  {} trial(s) hit the roll cap and were excluded from averages\n",
                self.trials_truncated
            ));
        }
    }

    /// Generate the machine-readable artifact. Key names stay camelCase
    /// for compatibility with existing balance-results.json consumers.
    pub fn to_json(&self) -> String {
        #[derive(Serialize)]
        struct EndgameEntry {
            avg: f64,
            min: u64,
            max: u64,
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Summary {
            simulations: u32,
            avg_total_rolls: f64,
            avg_final_bias: f64,
            avg_final_cooldown: f64,
            endgame_analysis: BTreeMap<u32, EndgameEntry>,
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Artifact<'a> {
            summary: Summary,
            detailed_results: &'a [SessionResult],
        }

        let endgame_analysis = self
            .endgame_stats
            .iter()
            .map(|row| {
                (
                    row.target,
                    EndgameEntry {
                        avg: row.avg_delta.round(),
                        min: row.min_delta,
                        max: row.max_delta,
                    },
                )
            })
            .collect();

        let artifact = Artifact {
            summary: Summary {
                simulations: self.num_trials,
                avg_total_rolls: self.avg_total_rolls.round(),
                avg_final_bias: round1(self.avg_final_bias),
                avg_final_cooldown: round1(self.avg_final_cooldown),
                endgame_analysis,
            },
            detailed_results: &self.sessions,
        };

        serde_json::to_string_pretty(&artifact).unwrap_or_else(|_| "{}".to_string())
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
