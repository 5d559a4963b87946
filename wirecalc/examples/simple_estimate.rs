//! Minimal estimate: pasted specs, three runs, default slack.
//!
//! Run with: cargo run --example simple_estimate

use wirecalc::{
    extract_from_text, ElectricalAssumptions, EstimateCore, EstimateRequest, PlanOutcome, Run,
    SlackParams, DISCLAIMER,
};

fn main() {
    let product = extract_from_text(
        "THHN building wire, #12 AWG stranded copper, 500 ft spool, 600 V",
    );
    println!("Detected: {:?}", product);

    let request = EstimateRequest {
        project_name: "Workshop circuits".into(),
        product: Some(product),
        assumptions: ElectricalAssumptions {
            system_voltage_v: 120.0,
            current_a: 15.0,
            max_drop_pct: 3.0,
            material_override: None,
        },
        round_trip: true,
        conductor_count: 2,
        runs: vec![
            Run::new("Panel to bench", 50.0),
            Run::new("Panel to lathe", 75.0),
            Run::new("Panel to compressor", 100.0),
        ],
        slack: SlackParams::default(),
        pack_override: None,
        foot_rounding_ft: None,
    };

    let result = EstimateCore::estimate(&request).expect("valid request");

    println!(
        "Total cable to order: {:.1} ft ({:.1} ft of conductor)",
        result.aggregate.total_cable_ft, result.aggregate.total_conductor_ft
    );
    for row in &result.runs {
        if let (Some(gauge), Some(pct)) = (&row.suggested_gauge, row.drop_pct) {
            println!("  {}: {} ({:.2}% drop)", row.label, gauge, pct);
        }
    }
    if let PlanOutcome::Packs { plan } = &result.plan {
        for item in &plan.items {
            println!("  Buy {} x {} ft", item.quantity, item.pack_length_ft);
        }
    }
    println!("\n{}", DISCLAIMER);
}
