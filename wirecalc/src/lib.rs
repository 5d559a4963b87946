//! Wirecalc - wire length, voltage-drop and purchase-plan estimation
//!
//! This library turns a product page (or pasted specs), a table of run
//! lengths and basic electrical assumptions into a buy-ready estimate:
//! total footage, a suggested minimum gauge per run, an ampacity sanity
//! check and a spool purchase plan.
//!
//! # Quick Start
//!
//! ```
//! use wirecalc::{
//!     extract_from_text, ElectricalAssumptions, EstimateCore, EstimateRequest, Run,
//!     SlackParams,
//! };
//!
//! let product = extract_from_text("12 AWG copper building wire, 500 ft spool");
//! let request = EstimateRequest {
//!     project_name: "Garage subpanel".into(),
//!     product: Some(product),
//!     assumptions: ElectricalAssumptions {
//!         system_voltage_v: 120.0,
//!         current_a: 15.0,
//!         max_drop_pct: 3.0,
//!         material_override: None,
//!     },
//!     round_trip: true,
//!     conductor_count: 2,
//!     runs: vec![Run::new("Run 1", 50.0), Run::new("Run 2", 75.0)],
//!     slack: SlackParams::default(),
//!     pack_override: None,
//!     foot_rounding_ft: None,
//! };
//!
//! let result = EstimateCore::estimate(&request).unwrap();
//! for row in &result.runs {
//!     println!("{}: {:?}", row.label, row.suggested_gauge);
//! }
//! ```
//!
//! # Features
//!
//! - **Spec extraction**: AWG/kcmil, material and packaging detection
//!   from unstructured product text
//! - **Gauge selection**: smallest conductor meeting a voltage-drop
//!   limit, with an explicit degraded state when nothing does
//! - **Purchase planning**: greedy largest-first spool plans, plus
//!   by-the-foot round-ups
//! - **Scraping**: product page fetch and site-aware spec extraction
//!
//! Everything this crate computes is an estimate; see
//! [`DISCLAIMER`](core::DISCLAIMER).

pub mod aggregate;
pub mod core;
pub mod extract;
pub mod packaging;
pub mod report;
pub mod scrape;
pub mod tables;
pub mod vdrop;

// Re-export main types
pub use crate::core::{
    AmpacityCheck, AmpacityVerdict, ElectricalAssumptions, EstimateCore, EstimateRequest,
    EstimateResult, PlanOutcome, RunRow, WirecalcError, DISCLAIMER,
};
pub use aggregate::{aggregate as aggregate_runs, AggregateResult, Run, SlackParams};
pub use extract::{extract_from_text, DetectedSize, PackUnit, ProductSpec, SpecSource};
pub use packaging::{parse_pack_override, plan as plan_packs, PlanItem, PurchasePlan};
pub use report::{EstimateSummary, ReportError};
pub use scrape::{scrape_document, PageScraper, ScrapeError};
pub use tables::{awg_label, Material, SizeCode};
pub use vdrop::{select_gauge, GaugeSelection};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ElectricalAssumptions, EstimateCore, EstimateRequest, EstimateResult, Material,
        PlanOutcome, ProductSpec, Run, RunRow, SlackParams, WirecalcError,
    };
}
