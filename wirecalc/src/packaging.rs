//! Spool/pack purchase planning.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One line of a purchase plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub pack_length_ft: u32,
    pub quantity: u32,
}

/// A purchase plan covering a footage requirement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PurchasePlan {
    pub items: Vec<PlanItem>,
}

impl PurchasePlan {
    /// Total footage covered by the plan.
    pub fn covered_ft(&self) -> u64 {
        self.items
            .iter()
            .map(|i| i.pack_length_ft as u64 * i.quantity as u64)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Malformed packaging override input.
#[derive(Debug, Clone, thiserror::Error)]
#[error("couldn't parse packaging override {input:?}: use comma-separated integers like 250,500,1000")]
pub struct PackOverrideError {
    pub input: String,
}

/// Parse a comma-separated packaging override ("250,500,1000") into a
/// deduplicated set of pack sizes, sorted largest-first. Blank entries
/// between commas are skipped; anything that is not a positive integer
/// fails the whole override.
pub fn parse_pack_override(input: &str) -> Result<Vec<u32>, PackOverrideError> {
    let mut sizes = BTreeSet::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.parse::<u32>() {
            Ok(n) if n > 0 => {
                sizes.insert(n);
            }
            _ => {
                return Err(PackOverrideError {
                    input: input.to_string(),
                })
            }
        }
    }
    Ok(sizes.into_iter().rev().collect())
}

/// Greedy largest-first purchase plan.
///
/// Takes as many of each pack size as fit, larger sizes first; any
/// leftover footage is covered by one extra unit of the smallest size.
/// The result always covers `total_ft` but is intentionally not optimal
/// in pack count or cost (over-provisioning by up to one smallest pack
/// is accepted). Zero-quantity lines are filtered out.
///
/// An empty `pack_sizes` slice yields an empty plan.
pub fn plan(total_ft: f64, pack_sizes: &[u32]) -> PurchasePlan {
    let sizes: Vec<u32> = {
        let set: BTreeSet<u32> = pack_sizes.iter().copied().filter(|&s| s > 0).collect();
        set.into_iter().rev().collect()
    };
    if sizes.is_empty() || total_ft <= 0.0 {
        return PurchasePlan::default();
    }

    let mut remaining = total_ft;
    let mut items: Vec<PlanItem> = Vec::with_capacity(sizes.len());
    for &size in &sizes {
        let count = (remaining / size as f64).floor() as u32;
        items.push(PlanItem {
            pack_length_ft: size,
            quantity: count,
        });
        remaining -= count as f64 * size as f64;
    }
    if remaining > 0.0 {
        // One extra of the smallest pack covers the tail.
        if let Some(last) = items.last_mut() {
            last.quantity += 1;
        }
    }
    items.retain(|i| i.quantity > 0);
    PurchasePlan { items }
}

/// Round a by-the-foot order up to a granularity (e.g. nearest 10 ft).
/// A granularity of 0 leaves the total untouched.
pub fn round_up_to(total_ft: f64, granularity_ft: u32) -> f64 {
    if granularity_ft == 0 || total_ft <= 0.0 {
        return total_ft.max(0.0);
    }
    let g = granularity_ft as f64;
    (total_ft / g).ceil() * g
}
