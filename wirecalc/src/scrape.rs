//! Product page fetching and spec scraping.
//!
//! Fetches a product page with a browser-like user agent and runs the
//! text extractors over whatever structure the page offers. Known
//! retailers get a targeted scrape (short description, feature bullets,
//! "Product Specification" block); everything else falls back to the
//! full normalized page text.

use std::time::Duration;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::extract::{
    detect_material, normalize_space, parse_pack_length, parse_size, ProductSpec, SpecSource,
};

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Generic-path page text kept for preview/detection.
const PREVIEW_CHARS: usize = 4000;

/// Feature bullets considered on the targeted scrape path.
const MAX_FEATURE_BULLETS: usize = 50;

static SHORT_DESCRIPTION_SEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.short-description.text-dark").unwrap());
static LI_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("li").unwrap());
static STRONG_SEL: Lazy<Selector> = Lazy::new(|| Selector::parse("strong").unwrap());

/// Errors from fetching a product page.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(u16),
}

/// HTTP client for product pages.
pub struct PageScraper {
    client: reqwest::Client,
}

impl PageScraper {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a page body. Non-2xx statuses are errors.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ScrapeError::Status(response.status().as_u16()));
        }
        Ok(response.text().await?)
    }

    /// Fetch a product page and extract its specs.
    pub async fn extract_specs(&self, url: &str) -> Result<ProductSpec, ScrapeError> {
        let html = self.fetch_html(url).await?;
        Ok(scrape_document(&html, url))
    }
}

/// Extract a [`ProductSpec`] from already-fetched HTML.
///
/// Dispatches on the URL host: City Electric Supply pages use the
/// targeted scrape, everything else the generic one.
pub fn scrape_document(html: &str, url: &str) -> ProductSpec {
    let document = Html::parse_document(html);
    let host = reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_default();

    let mut spec = if host.contains("cityelectricsupply.com") {
        ces_scrape(&document)
    } else {
        generic_scrape(&document)
    };
    spec.url = Some(url.to_string());
    spec
}

fn element_text(el: ElementRef<'_>) -> String {
    normalize_space(&el.text().collect::<Vec<_>>().join(" "))
}

/// Targeted scrape for City Electric Supply product pages: short
/// description, feature bullets (capped) and the block enclosing a
/// "Product Specification" label, combined into one detection string.
fn ces_scrape(document: &Html) -> ProductSpec {
    let short_description = document
        .select(&SHORT_DESCRIPTION_SEL)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let features = document
        .select(&LI_SEL)
        .take(MAX_FEATURE_BULLETS)
        .map(element_text)
        .collect::<Vec<_>>()
        .join(" | ");

    let specs_block = document
        .select(&STRONG_SEL)
        .find(|s| {
            element_text(*s)
                .to_lowercase()
                .contains("product specification")
        })
        .and_then(|s| s.parent().and_then(ElementRef::wrap))
        .map(element_text)
        .unwrap_or_default();

    let combined = [short_description, features, specs_block].join(" ");
    let pack = parse_pack_length(&combined);
    ProductSpec {
        source: SpecSource::Url,
        url: None,
        detected_size: parse_size(&combined),
        material: detect_material(&combined),
        pack_length_ft: pack.map(|(n, _)| n),
        pack_unit: pack.map(|(_, u)| u),
        page_text_preview: None,
    }
}

/// Generic scrape: run detection over the whole normalized page text and
/// keep a short preview of it.
fn generic_scrape(document: &Html) -> ProductSpec {
    let text = normalize_space(&document.root_element().text().collect::<Vec<_>>().join(" "));
    let pack = parse_pack_length(&text);
    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    ProductSpec {
        source: SpecSource::Url,
        url: None,
        detected_size: parse_size(&text),
        material: detect_material(&text),
        pack_length_ft: pack.map(|(n, _)| n),
        pack_unit: pack.map(|(_, u)| u),
        page_text_preview: (!preview.is_empty()).then_some(preview),
    }
}
