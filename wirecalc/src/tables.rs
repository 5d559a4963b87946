//! Conductor reference data: resistance and ampacity tables.
//!
//! Size codes follow the AWG numbering with an integer extension for the
//! aught sizes: 14 down to 1 are plain AWG, 0 is 1/0-class "0 AWG", and
//! -1, -2, -3 encode 2/0, 3/0 and 4/0. Tables are ordered thin-to-thick
//! (largest code first) so selection scans evaluate the cheapest adequate
//! conductor first.
//!
//! Resistance values are approximate 75 °C figures per 1000 ft taken from
//! common reference tables. The ampacity table is a deliberately
//! simplified quick reference (75 °C copper THHN in raceway, no derating)
//! used only for sanity checking, never for compliance.

use serde::{Deserialize, Serialize};

/// Integer wire size code. Non-negative values are plain AWG numbers;
/// -1, -2, -3 encode 2/0, 3/0 and 4/0.
pub type SizeCode = i32;

/// Conductor material recognized by the resistance tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Copper,
    Aluminum,
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Material::Copper => write!(f, "copper"),
            Material::Aluminum => write!(f, "aluminum"),
        }
    }
}

/// Copper resistance in ohms per 1000 ft, thin-to-thick.
pub const COPPER_OHMS_PER_KFT: &[(SizeCode, f64)] = &[
    (14, 2.525),
    (12, 1.588),
    (10, 0.999),
    (8, 0.6282),
    (6, 0.3951),
    (4, 0.2485),
    (3, 0.1970),
    (2, 0.1563),
    (1, 0.1239),
    (0, 0.0983),
    (-1, 0.0779), // 2/0
    (-2, 0.0618), // 3/0
    (-3, 0.0490), // 4/0
];

/// Aluminum resistance in ohms per 1000 ft, thin-to-thick.
pub const ALUMINUM_OHMS_PER_KFT: &[(SizeCode, f64)] = &[
    (12, 2.52),
    (10, 1.588),
    (8, 0.999),
    (6, 0.6282),
    (4, 0.3951),
    (3, 0.3133),
    (2, 0.2485),
    (1, 0.1970),
    (0, 0.1563),
    (-1, 0.1239),
    (-2, 0.0983),
    (-3, 0.0779),
];

/// Copper ampacity quick reference in amps (75 °C, not derated).
/// Placeholder values for sanity checks only.
pub const COPPER_AMPACITY_75C: &[(SizeCode, u32)] = &[
    (14, 20),
    (12, 25),
    (10, 35),
    (8, 50),
    (6, 65),
    (4, 85),
    (3, 100),
    (2, 115),
    (1, 130),
    (0, 150),
    (-1, 175),
    (-2, 200),
    (-3, 230),
];

/// Resistance table for a material, ordered thin-to-thick.
pub fn resistance_table(material: Material) -> &'static [(SizeCode, f64)] {
    match material {
        Material::Copper => COPPER_OHMS_PER_KFT,
        Material::Aluminum => ALUMINUM_OHMS_PER_KFT,
    }
}

/// Quick-reference ampacity for a copper size code, if tabulated.
pub fn copper_ampacity(size_code: SizeCode) -> Option<u32> {
    COPPER_AMPACITY_75C
        .iter()
        .find(|(code, _)| *code == size_code)
        .map(|(_, amps)| *amps)
}

/// Human-readable label for a size code.
///
/// Non-negative codes render as "`n` AWG" (code 0 renders as the plain
/// numeric "0 AWG", not "1/0 AWG"); -1, -2, -3 render as "2/0 AWG",
/// "3/0 AWG" and "4/0 AWG". Codes outside the tabulated range render as
/// the bare number.
pub fn awg_label(size_code: SizeCode) -> String {
    if size_code >= 0 {
        return format!("{} AWG", size_code);
    }
    match size_code {
        -1 => "2/0 AWG".to_string(),
        -2 => "3/0 AWG".to_string(),
        -3 => "4/0 AWG".to_string(),
        other => format!("{}", other),
    }
}
