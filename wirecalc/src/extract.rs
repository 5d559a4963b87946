//! Text spec extraction.
//!
//! Detects wire gauge, conductor material and packaging length from
//! unstructured product text (scraped page fragments or pasted specs).
//! All detection runs over whitespace-normalized text and is pure: the
//! same text always yields the same [`ProductSpec`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tables::{awg_label, Material, SizeCode};

// "6 AWG", "#4 AWG", "awg" in any case. First match wins.
static AWG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)#?\s*(\d{1,2})\s*AWG\b").unwrap());

// Large conductors listed in kcmil/MCM instead of AWG.
static KCMIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{2,4})\s*(?:kcmil|MCM)\b").unwrap());

static COPPER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:copper|cu)\b").unwrap());

static ALUMINUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:aluminum|alum|al)\b").unwrap());

// "500 ft", "1000ft", "250 feet"
static PACK_FT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{2,5})\s*(?:ft|feet)\b").unwrap());

static BY_FOOT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:per\s+foot|by\s+the\s+foot|sold\s+by\s+foot)\b").unwrap()
});

/// Where a [`ProductSpec`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecSource {
    /// Scraped from a fetched product page.
    Url,
    /// Parsed from pasted text.
    Manual,
}

/// How the product is packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackUnit {
    /// Discrete lengths (spools/reels) of `pack_length_ft`.
    Ft,
    /// Sold by the foot; `pack_length_ft` is 1.
    FtEach,
}

/// Detected conductor size.
///
/// AWG detections index the resistance/ampacity tables. kcmil/MCM
/// detections are captured as raw values that are numerically
/// incompatible with those tables and are never used as an index;
/// callers must present them as detected-but-unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedSize {
    Awg(SizeCode),
    Kcmil(u32),
}

impl DetectedSize {
    /// The AWG size code, if this detection is table-compatible.
    pub fn awg_code(&self) -> Option<SizeCode> {
        match self {
            DetectedSize::Awg(code) => Some(*code),
            DetectedSize::Kcmil(_) => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            DetectedSize::Awg(code) => awg_label(*code),
            DetectedSize::Kcmil(v) => format!("{} kcmil", v),
        }
    }
}

/// Specs detected from product text. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub source: SpecSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub detected_size: Option<DetectedSize>,
    #[serde(default)]
    pub material: Option<Material>,
    #[serde(default)]
    pub pack_length_ft: Option<u32>,
    #[serde(default)]
    pub pack_unit: Option<PackUnit>,
    /// First 4000 characters of page text, kept for preview when the
    /// generic scrape path was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_text_preview: Option<String>,
}

impl ProductSpec {
    /// A spec with every detection field empty, used when a fetch or
    /// parse fails and only the URL is known.
    pub fn url_only(url: impl Into<String>) -> Self {
        Self {
            source: SpecSource::Url,
            url: Some(url.into()),
            detected_size: None,
            material: None,
            pack_length_ft: None,
            pack_unit: None,
            page_text_preview: None,
        }
    }
}

/// Collapse all whitespace runs to single spaces and trim the ends.
pub fn normalize_space(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = true; // leading whitespace is dropped
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Detect a conductor size from text.
///
/// AWG takes precedence; if no AWG token is present, a kcmil/MCM value
/// is captured as [`DetectedSize::Kcmil`].
pub fn parse_size(text: &str) -> Option<DetectedSize> {
    if let Some(caps) = AWG_RE.captures(text) {
        if let Ok(n) = caps[1].parse::<SizeCode>() {
            return Some(DetectedSize::Awg(n));
        }
    }
    if let Some(caps) = KCMIL_RE.captures(text) {
        if let Ok(n) = caps[1].parse::<u32>() {
            return Some(DetectedSize::Kcmil(n));
        }
    }
    None
}

/// Detect the conductor material. Copper takes precedence when both
/// materials are mentioned.
pub fn detect_material(text: &str) -> Option<Material> {
    if COPPER_RE.is_match(text) {
        return Some(Material::Copper);
    }
    if ALUMINUM_RE.is_match(text) {
        return Some(Material::Aluminum);
    }
    None
}

/// Detect packaging: a discrete footage ("500 ft") or sold-by-the-foot
/// phrasing. Returns `(length_ft, unit)`.
pub fn parse_pack_length(text: &str) -> Option<(u32, PackUnit)> {
    if let Some(caps) = PACK_FT_RE.captures(text) {
        if let Ok(n) = caps[1].parse::<u32>() {
            return Some((n, PackUnit::Ft));
        }
    }
    if BY_FOOT_RE.is_match(text) {
        return Some((1, PackUnit::FtEach));
    }
    None
}

/// Run all detections over pasted text and assemble a manual-source spec.
pub fn extract_from_text(text: &str) -> ProductSpec {
    let normalized = normalize_space(text);
    let pack = parse_pack_length(&normalized);
    ProductSpec {
        source: SpecSource::Manual,
        url: None,
        detected_size: parse_size(&normalized),
        material: detect_material(&normalized),
        pack_length_ft: pack.map(|(n, _)| n),
        pack_unit: pack.map(|(_, u)| u),
        page_text_preview: None,
    }
}
