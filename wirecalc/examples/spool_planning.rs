//! Standalone packaging planner: compare spool mixes for one total.
//!
//! Run with: cargo run --example spool_planning

use wirecalc::{parse_pack_override, plan_packs};

fn main() {
    let total_ft = 1375.0;

    for packs in ["1000,500,250", "500,250", "250"] {
        let sizes = parse_pack_override(packs).expect("valid pack list");
        let plan = plan_packs(total_ft, &sizes);
        println!("Packs {{{}}} covering {:.0} ft:", packs, total_ft);
        for item in &plan.items {
            println!("  {} ft x {}", item.pack_length_ft, item.quantity);
        }
        println!(
            "  covered {} ft, waste {:.0} ft\n",
            plan.covered_ft(),
            plan.covered_ft() as f64 - total_ft
        );
    }
}
