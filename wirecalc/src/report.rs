//! Estimate summary and CSV export.

use serde::{Deserialize, Serialize};

use crate::core::{EstimateResult, RunRow};

/// Round to two decimals for display/export.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Errors producing the CSV export.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV output was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Flat summary record of one calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateSummary {
    pub project: String,
    /// Report date, `YYYY-MM-DD`.
    pub date: String,
    pub url: String,
    pub material: String,
    /// Detected gauge label, empty when nothing was detected.
    pub detected_gauge: String,
    pub voltage_v: f64,
    pub current_a: f64,
    pub max_drop_pct: f64,
    pub round_trip: bool,
    pub conductor_count: u32,
    pub sum_runs_ft: f64,
    pub slack_ft: f64,
    pub total_cable_ft: f64,
    pub total_conductor_ft: f64,
}

const SUMMARY_HEADER: &[&str] = &[
    "Project",
    "Date",
    "URL",
    "Material",
    "Detected AWG",
    "Voltage (V)",
    "Current (A)",
    "Max Drop (%)",
    "Round-trip runs",
    "Conductor count",
    "Sum runs (ft, effective)",
    "Slack/vertical (ft)",
    "Total cable (ft)",
    "Total conductor feet (ft)",
];

const RUN_HEADER: &[&str] = &["Run Label", "Length (ft, one-way)", "Effective length used (ft)"];

fn summary_fields(summary: &EstimateSummary) -> Vec<String> {
    vec![
        summary.project.clone(),
        summary.date.clone(),
        summary.url.clone(),
        summary.material.clone(),
        summary.detected_gauge.clone(),
        summary.voltage_v.to_string(),
        summary.current_a.to_string(),
        summary.max_drop_pct.to_string(),
        if summary.round_trip { "Yes" } else { "No" }.to_string(),
        summary.conductor_count.to_string(),
        summary.sum_runs_ft.to_string(),
        summary.slack_ft.to_string(),
        summary.total_cable_ft.to_string(),
        summary.total_conductor_ft.to_string(),
    ]
}

fn run_fields(row: &RunRow) -> Vec<String> {
    vec![
        row.label.clone(),
        row.one_way_length_ft.to_string(),
        row.effective_length_ft.to_string(),
    ]
}

/// Export an estimate as a single flat CSV table: the summary record
/// cross-joined with the per-run rows. With no runs the summary is
/// emitted once with blank run columns.
pub fn estimate_csv(result: &EstimateResult) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let header: Vec<&str> = SUMMARY_HEADER.iter().chain(RUN_HEADER.iter()).copied().collect();
    writer.write_record(&header)?;

    let summary = summary_fields(&result.summary);
    if result.runs.is_empty() {
        let mut record = summary.clone();
        record.extend(RUN_HEADER.iter().map(|_| String::new()));
        writer.write_record(&record)?;
    } else {
        for row in &result.runs {
            let mut record = summary.clone();
            record.extend(run_fields(row));
            writer.write_record(&record)?;
        }
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.5128), 2.51);
        assert_eq!(round2(3.996), 4.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
