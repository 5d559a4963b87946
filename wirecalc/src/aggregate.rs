//! Run footage aggregation: round-trip doubling, slack, waste and
//! conductor multipliers.

use serde::{Deserialize, Serialize};

/// One cable run from the editable runs table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    #[serde(default)]
    pub label: String,
    /// One-way length in feet. Blank table cells deserialize to 0.
    #[serde(default)]
    pub one_way_length_ft: f64,
}

impl Run {
    pub fn new(label: impl Into<String>, one_way_length_ft: f64) -> Self {
        Self {
            label: label.into(),
            one_way_length_ft,
        }
    }

    /// One-way length with malformed values (negative, NaN, infinite)
    /// coerced to 0. Bad cells never reject the row.
    pub fn sanitized_length_ft(&self) -> f64 {
        if self.one_way_length_ft.is_finite() && self.one_way_length_ft > 0.0 {
            self.one_way_length_ft
        } else {
            0.0
        }
    }

    /// Footage this run contributes to the purchase total.
    pub fn effective_length_ft(&self, round_trip: bool) -> f64 {
        let len = self.sanitized_length_ft();
        if round_trip {
            len * 2.0
        } else {
            len
        }
    }
}

/// Termination slack and waste parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlackParams {
    #[serde(default)]
    pub termination_count: u32,
    #[serde(default)]
    pub slack_per_termination_ft: f64,
    #[serde(default)]
    pub vertical_allowance_ft: f64,
    /// Waste/contingency percentage in [0, 100].
    #[serde(default)]
    pub waste_pct: f64,
}

impl Default for SlackParams {
    fn default() -> Self {
        Self {
            termination_count: 10,
            slack_per_termination_ft: 2.0,
            vertical_allowance_ft: 0.0,
            waste_pct: 10.0,
        }
    }
}

/// Aggregate footage figures for a calculation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Sum of effective (round-trip-adjusted) run lengths.
    pub sum_runs_ft: f64,
    /// Termination slack plus vertical allowance footage.
    pub slack_ft: f64,
    /// Cable footage to buy, waste included.
    pub total_cable_ft: f64,
    /// Informational conductor-feet (cable footage times conductor
    /// count); not a second purchase quantity.
    pub total_conductor_ft: f64,
}

/// Aggregate a runs table into purchase footage figures.
///
/// `slack_ft = termination_count * (slack_per_termination + vertical)`,
/// then waste is applied to runs plus slack, and conductor-feet scales
/// the result by `conductor_count` for multi-conductor cable.
pub fn aggregate(
    runs: &[Run],
    round_trip: bool,
    conductor_count: u32,
    slack: &SlackParams,
) -> AggregateResult {
    let sum_runs_ft: f64 = runs.iter().map(|r| r.effective_length_ft(round_trip)).sum();
    let slack_ft = slack.termination_count as f64
        * (slack.slack_per_termination_ft + slack.vertical_allowance_ft);
    let base_total = sum_runs_ft + slack_ft;
    let total_cable_ft = base_total * (1.0 + slack.waste_pct / 100.0);
    AggregateResult {
        sum_runs_ft,
        slack_ft,
        total_cable_ft,
        total_conductor_ft: total_cable_ft * conductor_count as f64,
    }
}
