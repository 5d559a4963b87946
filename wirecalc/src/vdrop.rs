//! Voltage-drop based gauge selection.

use serde::{Deserialize, Serialize};

use crate::tables::{resistance_table, Material, SizeCode};

/// Outcome of a gauge selection for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeSelection {
    /// Selected size code (smallest adequate conductor, or the thickest
    /// tabulated one when nothing satisfies the limit).
    pub size_code: SizeCode,
    /// Round-trip voltage drop at the selected size, in volts.
    pub drop_volts: f64,
    /// Drop as a percentage of system voltage.
    pub drop_pct: f64,
    /// False when even the thickest tabulated conductor exceeds the
    /// allowed drop; callers must surface that as a degraded result.
    pub within_limit: bool,
}

/// Select the smallest conductor meeting a voltage-drop limit.
///
/// Scans the material's table thin-to-thick and returns the first size
/// whose round-trip drop `2 * amps * (r_per_kft / 1000) * one_way_ft`
/// stays within `max_drop_pct` of `volts`. The factor 2 models the
/// out-and-back circuit path, so `one_way_ft` must always be the one-way
/// run length even when the purchased footage is round-trip.
///
/// If no tabulated size satisfies the limit, the thickest size is
/// returned with its actual (exceeding) drop and `within_limit` false.
///
/// Callers must not invoke this with non-positive amps, volts or length;
/// those runs have no meaningful drop and their result fields stay blank.
pub fn select_gauge(
    material: Material,
    amps: f64,
    volts: f64,
    one_way_ft: f64,
    max_drop_pct: f64,
) -> GaugeSelection {
    let table = resistance_table(material);
    for &(size_code, r_per_kft) in table {
        let drop_volts = 2.0 * amps * (r_per_kft / 1000.0) * one_way_ft;
        let drop_pct = (drop_volts / volts) * 100.0;
        if drop_pct <= max_drop_pct {
            return GaugeSelection {
                size_code,
                drop_volts,
                drop_pct,
                within_limit: true,
            };
        }
    }

    // Exhausted the table: report the thickest size with its real drop.
    let (size_code, r_per_kft) = table[table.len() - 1];
    let drop_volts = 2.0 * amps * (r_per_kft / 1000.0) * one_way_ft;
    GaugeSelection {
        size_code,
        drop_volts,
        drop_pct: (drop_volts / volts) * 100.0,
        within_limit: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::COPPER_OHMS_PER_KFT;

    #[test]
    fn test_selects_smallest_adequate_copper_size() {
        let sel = select_gauge(Material::Copper, 20.0, 120.0, 100.0, 3.0);
        assert!(sel.within_limit);
        assert!(sel.drop_pct <= 3.0);

        // It must be the thinnest table entry satisfying the bound:
        // every thinner size must exceed 3%.
        for &(code, r_per_kft) in COPPER_OHMS_PER_KFT {
            if code <= sel.size_code {
                break;
            }
            let drop = 2.0 * 20.0 * (r_per_kft / 1000.0) * 100.0;
            assert!(
                (drop / 120.0) * 100.0 > 3.0,
                "size {} would also satisfy the bound",
                code
            );
        }
    }

    #[test]
    fn test_known_selection() {
        // 20 A, 120 V, 100 ft one-way, 3% -> 3.6 V budget.
        // 10 AWG: 2*20*0.000999*100 = 3.996 V (3.33%) too high;
        // 8 AWG: 2*20*0.0006282*100 = 2.5128 V (2.094%) ok.
        let sel = select_gauge(Material::Copper, 20.0, 120.0, 100.0, 3.0);
        assert_eq!(sel.size_code, 8);
        assert!((sel.drop_volts - 2.5128).abs() < 1e-9);
    }

    #[test]
    fn test_degraded_when_nothing_satisfies() {
        // Absurd constraint: 1000 A over 500 ft at 0.1% of 120 V.
        let sel = select_gauge(Material::Copper, 1000.0, 120.0, 500.0, 0.1);
        assert!(!sel.within_limit);
        assert_eq!(sel.size_code, -3); // 4/0, thickest tabulated
        assert!(sel.drop_pct > 0.1);
    }

    #[test]
    fn test_aluminum_uses_aluminum_table() {
        let cu = select_gauge(Material::Copper, 20.0, 120.0, 150.0, 3.0);
        let al = select_gauge(Material::Aluminum, 20.0, 120.0, 150.0, 3.0);
        // Aluminum is more resistive, so it can never pick a thinner wire.
        assert!(al.size_code <= cu.size_code);
    }

    #[test]
    fn test_idempotent() {
        let a = select_gauge(Material::Copper, 15.0, 240.0, 80.0, 3.0);
        let b = select_gauge(Material::Copper, 15.0, 240.0, 80.0, 3.0);
        assert_eq!(a, b);
    }
}
