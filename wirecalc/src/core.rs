//! Core estimation logic shared by the CLI and any future front end.
//! One calculation pass: aggregate footage, per-run gauge suggestions,
//! ampacity sanity check, purchase plan and summary.

use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate, AggregateResult, Run, SlackParams};
use crate::extract::{DetectedSize, ProductSpec};
use crate::packaging::{self, parse_pack_override, PurchasePlan};
use crate::report::{self, round2, EstimateSummary, ReportError};
use crate::tables::{awg_label, copper_ampacity, Material, SizeCode};
use crate::vdrop::select_gauge;

/// Shown with every report. Results are estimates, not engineering.
pub const DISCLAIMER: &str = "Estimations only. Not a substitute for NEC/CEC compliance or \
     professional engineering judgment. Verify insulation, temperature rating, conduit fill, \
     and derating per code.";

/// Default round-up granularity for by-the-foot orders, in feet.
pub const DEFAULT_FOOT_ROUNDING_FT: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum WirecalcError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed request file: {0}")]
    RequestParse(#[from] serde_json::Error),
}

/// Electrical assumptions for the voltage-drop selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectricalAssumptions {
    pub system_voltage_v: f64,
    pub current_a: f64,
    /// Allowed voltage drop as a percentage of system voltage, (0, 100].
    pub max_drop_pct: f64,
    /// Overrides the detected conductor material when set.
    #[serde(default)]
    pub material_override: Option<Material>,
}

fn default_round_trip() -> bool {
    true
}

fn default_conductor_count() -> u32 {
    1
}

/// Everything one calculation pass needs, assembled from current form
/// state (or a JSON request file) by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    #[serde(default)]
    pub project_name: String,
    /// Product spec from extraction, if any.
    #[serde(default)]
    pub product: Option<ProductSpec>,
    pub assumptions: ElectricalAssumptions,
    /// Treat each run as an out-and-back length.
    #[serde(default = "default_round_trip")]
    pub round_trip: bool,
    /// Conductors in the cable jacket, 1..=20.
    #[serde(default = "default_conductor_count")]
    pub conductor_count: u32,
    pub runs: Vec<Run>,
    #[serde(default)]
    pub slack: SlackParams,
    /// Packaging override, comma-separated feet ("250,500,1000").
    #[serde(default)]
    pub pack_override: Option<String>,
    /// Round-up granularity for by-the-foot orders; defaults to
    /// [`DEFAULT_FOOT_ROUNDING_FT`].
    #[serde(default)]
    pub foot_rounding_ft: Option<u32>,
}

impl EstimateRequest {
    /// Load a request from a JSON file.
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, WirecalcError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn validate(&self) -> Result<(), WirecalcError> {
        let a = &self.assumptions;
        if !a.system_voltage_v.is_finite() || a.system_voltage_v < 0.0 {
            return Err(WirecalcError::InvalidRequest(
                "system voltage must be a non-negative number".into(),
            ));
        }
        if !a.current_a.is_finite() || a.current_a < 0.0 {
            return Err(WirecalcError::InvalidRequest(
                "circuit current must be a non-negative number".into(),
            ));
        }
        if !a.max_drop_pct.is_finite() || a.max_drop_pct <= 0.0 || a.max_drop_pct > 100.0 {
            return Err(WirecalcError::InvalidRequest(
                "max voltage drop must be in (0, 100] percent".into(),
            ));
        }
        if self.conductor_count == 0 || self.conductor_count > 20 {
            return Err(WirecalcError::InvalidRequest(
                "conductor count must be between 1 and 20".into(),
            ));
        }
        if !self.slack.waste_pct.is_finite()
            || self.slack.waste_pct < 0.0
            || self.slack.waste_pct > 100.0
        {
            return Err(WirecalcError::InvalidRequest(
                "waste percentage must be in [0, 100]".into(),
            ));
        }
        Ok(())
    }

    /// Material used for voltage drop: override, else detection, else
    /// copper.
    pub fn resolved_material(&self) -> Material {
        self.assumptions
            .material_override
            .or_else(|| self.product.as_ref().and_then(|p| p.material))
            .unwrap_or(Material::Copper)
    }
}

/// One row of the per-run result table. Gauge/drop columns are `None`
/// when the selector was skipped (non-positive amps, volts or length).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRow {
    pub label: String,
    pub one_way_length_ft: f64,
    pub effective_length_ft: f64,
    #[serde(default)]
    pub suggested_gauge: Option<String>,
    #[serde(default)]
    pub size_code: Option<SizeCode>,
    /// Estimated drop in volts, rounded to 2 decimals.
    #[serde(default)]
    pub drop_volts: Option<f64>,
    /// Estimated drop as a percent of system voltage, 2 decimals.
    #[serde(default)]
    pub drop_pct: Option<f64>,
    /// False when even the thickest tabulated size exceeds the limit.
    #[serde(default)]
    pub within_limit: Option<bool>,
}

/// Verdict of the copper-only ampacity quick check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmpacityVerdict {
    WithinQuickRef,
    ExceedsQuickRef,
    NotImplemented,
}

/// Informational ampacity sanity check against the detected product
/// size. Never a pass/fail compliance result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmpacityCheck {
    pub verdict: AmpacityVerdict,
    pub message: String,
}

/// How the purchase requirement gets covered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanOutcome {
    /// Discrete pack plan (override or detected packaging).
    Packs { plan: PurchasePlan },
    /// Sold by the foot: order the rounded-up total directly.
    ByTheFoot { order_ft: f64, rounding_ft: u32 },
    /// No packaging information; planning skipped.
    Unplanned,
}

/// Full result of one calculation pass, recomputed from scratch on each
/// trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub material: Material,
    pub aggregate: AggregateResult,
    pub runs: Vec<RunRow>,
    #[serde(default)]
    pub ampacity: Option<AmpacityCheck>,
    pub plan: PlanOutcome,
    /// Non-fatal problems encountered along the way.
    #[serde(default)]
    pub warnings: Vec<String>,
    pub summary: EstimateSummary,
}

impl EstimateResult {
    /// CSV export of the summary cross-joined with the run rows.
    pub fn to_csv(&self) -> Result<String, WirecalcError> {
        Ok(report::estimate_csv(self)?)
    }
}

/// Core estimation API.
pub struct EstimateCore;

impl EstimateCore {
    /// Run one full calculation pass. Pure apart from the report date
    /// stamp; identical inputs yield identical tables and plans.
    pub fn estimate(request: &EstimateRequest) -> Result<EstimateResult, WirecalcError> {
        request.validate()?;

        let mut warnings = Vec::new();
        let material = request.resolved_material();
        let agg = aggregate(
            &request.runs,
            request.round_trip,
            request.conductor_count,
            &request.slack,
        );
        tracing::debug!(
            material = %material,
            total_cable_ft = agg.total_cable_ft,
            "aggregated runs"
        );

        let runs = request
            .runs
            .iter()
            .map(|run| build_run_row(run, request, material))
            .collect();

        let ampacity = ampacity_check(
            request.product.as_ref().and_then(|p| p.detected_size),
            material,
            request.assumptions.current_a,
        );

        let plan = resolve_plan(request, agg.total_cable_ft, &mut warnings);
        let summary = build_summary(request, material, &agg);

        Ok(EstimateResult {
            material,
            aggregate: agg,
            runs,
            ampacity,
            plan,
            warnings,
            summary,
        })
    }
}

fn build_run_row(run: &Run, request: &EstimateRequest, material: Material) -> RunRow {
    let one_way = run.sanitized_length_ft();
    let amps = request.assumptions.current_a;
    let volts = request.assumptions.system_voltage_v;

    let selection = (amps > 0.0 && volts > 0.0 && one_way > 0.0).then(|| {
        select_gauge(
            material,
            amps,
            volts,
            one_way,
            request.assumptions.max_drop_pct,
        )
    });

    RunRow {
        label: run.label.clone(),
        one_way_length_ft: one_way,
        effective_length_ft: run.effective_length_ft(request.round_trip),
        suggested_gauge: selection.map(|s| awg_label(s.size_code)),
        size_code: selection.map(|s| s.size_code),
        drop_volts: selection.map(|s| round2(s.drop_volts)),
        drop_pct: selection.map(|s| round2(s.drop_pct)),
        within_limit: selection.map(|s| s.within_limit),
    }
}

/// Copper-only ampacity sanity check against the detected product size.
/// Anything the quick-reference table cannot answer yields an explicit
/// not-implemented notice instead of a false check.
fn ampacity_check(
    detected: Option<DetectedSize>,
    material: Material,
    amps: f64,
) -> Option<AmpacityCheck> {
    let detected = detected?;

    if material != Material::Copper {
        return Some(AmpacityCheck {
            verdict: AmpacityVerdict::NotImplemented,
            message: format!(
                "Ampacity quick reference is only implemented for copper; no check for {}.",
                material
            ),
        });
    }

    let code = match detected {
        DetectedSize::Awg(code) => code,
        DetectedSize::Kcmil(v) => {
            return Some(AmpacityCheck {
                verdict: AmpacityVerdict::NotImplemented,
                message: format!(
                    "Detected {} kcmil: ampacity quick reference does not cover kcmil sizes.",
                    v
                ),
            });
        }
    };

    let Some(ampacity) = copper_ampacity(code) else {
        return Some(AmpacityCheck {
            verdict: AmpacityVerdict::NotImplemented,
            message: format!(
                "Detected size {} is outside the ampacity quick-reference table.",
                awg_label(code)
            ),
        });
    };

    if amps > ampacity as f64 {
        Some(AmpacityCheck {
            verdict: AmpacityVerdict::ExceedsQuickRef,
            message: format!(
                "Detected product {} copper may be undersized for {:.1} A \
                 (quick ref {} A @75\u{b0}C). Verify with NEC tables and derating.",
                awg_label(code),
                amps,
                ampacity
            ),
        })
    } else {
        Some(AmpacityCheck {
            verdict: AmpacityVerdict::WithinQuickRef,
            message: format!(
                "Quick check: {} copper ~{} A @75\u{b0}C. Enter actual insulation, \
                 temperature rating, and apply derating as required.",
                awg_label(code),
                ampacity
            ),
        })
    }
}

/// Packaging resolution order: explicit override, then detected discrete
/// packaging, then by-the-foot, else unplanned. Override parse failures
/// are non-fatal: the plan stays empty and a warning is reported.
fn resolve_plan(
    request: &EstimateRequest,
    total_cable_ft: f64,
    warnings: &mut Vec<String>,
) -> PlanOutcome {
    let rounding_ft = request.foot_rounding_ft.unwrap_or(DEFAULT_FOOT_ROUNDING_FT);

    if let Some(override_text) = request.pack_override.as_deref() {
        if !override_text.trim().is_empty() {
            match parse_pack_override(override_text) {
                Ok(sizes) if !sizes.is_empty() => {
                    return PlanOutcome::Packs {
                        plan: packaging::plan(total_cable_ft, &sizes),
                    };
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("{}", e);
                    warnings.push(e.to_string());
                    return PlanOutcome::Unplanned;
                }
            }
        }
    }

    let product = request.product.as_ref();
    match (
        product.and_then(|p| p.pack_length_ft),
        product.and_then(|p| p.pack_unit),
    ) {
        (Some(len), Some(crate::extract::PackUnit::Ft)) => PlanOutcome::Packs {
            plan: packaging::plan(total_cable_ft, &[len]),
        },
        (_, Some(crate::extract::PackUnit::FtEach)) => PlanOutcome::ByTheFoot {
            order_ft: packaging::round_up_to(total_cable_ft, rounding_ft),
            rounding_ft,
        },
        _ => {
            warnings.push(
                "Packaging not detected. Use the override to model 250/500/1000 ft spools \
                 or check the product page."
                    .to_string(),
            );
            PlanOutcome::Unplanned
        }
    }
}

fn build_summary(
    request: &EstimateRequest,
    material: Material,
    agg: &AggregateResult,
) -> EstimateSummary {
    let product = request.product.as_ref();
    EstimateSummary {
        project: request.project_name.clone(),
        date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        url: product.and_then(|p| p.url.clone()).unwrap_or_default(),
        material: material.to_string(),
        detected_gauge: product
            .and_then(|p| p.detected_size)
            .map(|s| s.label())
            .unwrap_or_default(),
        voltage_v: request.assumptions.system_voltage_v,
        current_a: request.assumptions.current_a,
        max_drop_pct: request.assumptions.max_drop_pct,
        round_trip: request.round_trip,
        conductor_count: request.conductor_count,
        sum_runs_ft: round2(agg.sum_runs_ft),
        slack_ft: round2(agg.slack_ft),
        total_cable_ft: round2(agg.total_cable_ft),
        total_conductor_ft: round2(agg.total_conductor_ft),
    }
}
