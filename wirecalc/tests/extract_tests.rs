//! Tests for spec extraction over realistic product text.

use wirecalc::{extract_from_text, scrape_document, DetectedSize, Material, PackUnit};

#[test]
fn test_awg_detection_across_variants() {
    for text in [
        "12 AWG",
        "12awg",
        "#12 AWG",
        "# 12 awg THHN",
        "Southwire 12 Awg solid",
        "conductor size: 12 AWG.",
    ] {
        let spec = extract_from_text(text);
        assert_eq!(
            spec.detected_size,
            Some(DetectedSize::Awg(12)),
            "failed on {:?}",
            text
        );
    }
}

#[test]
fn test_copper_precedence_over_aluminum() {
    let spec = extract_from_text("Aluminum alloy lugs, copper conductors");
    assert_eq!(spec.material, Some(Material::Copper));
}

#[test]
fn test_realistic_product_blurb() {
    let spec = extract_from_text(
        "SOOW 6/4 Portable Cord. 600V. Flexible stranded copper. \
         Sold in 250 ft reels. Oil and water resistant jacket.",
    );
    assert_eq!(spec.detected_size, None); // no AWG token in this blurb
    assert_eq!(spec.material, Some(Material::Copper));
    assert_eq!(spec.pack_length_ft, Some(250));
    assert_eq!(spec.pack_unit, Some(PackUnit::Ft));
}

#[test]
fn test_scrape_document_generic_host() {
    let html = r#"<html><head><title>Wire</title></head><body>
        <h1>THHN Building Wire</h1>
        <p>#6 AWG stranded copper, 500 ft spool.</p>
    </body></html>"#;
    let spec = scrape_document(html, "https://shop.example.com/thhn-6");
    assert_eq!(spec.detected_size, Some(DetectedSize::Awg(6)));
    assert_eq!(spec.material, Some(Material::Copper));
    assert_eq!(spec.pack_length_ft, Some(500));
    assert_eq!(spec.url.as_deref(), Some("https://shop.example.com/thhn-6"));
}

#[test]
fn test_scrape_document_targeted_host_uses_specs_block() {
    let html = r#"<html><body>
        <div class="short-description text-dark">Portable cord for generators</div>
        <ul><li>Rugged jacket</li><li>4 AWG aluminum conductors</li></ul>
        <section>
          <strong>Product Specification</strong>
          <p>Packaging: 500 ft reel</p>
        </section>
    </body></html>"#;
    let spec = scrape_document(html, "https://www.cityelectricsupply.com/cord-4awg");
    assert_eq!(spec.detected_size, Some(DetectedSize::Awg(4)));
    assert_eq!(spec.material, Some(Material::Aluminum));
    assert_eq!(spec.pack_length_ft, Some(500));
}

#[test]
fn test_kcmil_detected_as_unsupported_size() {
    let spec = extract_from_text("500 MCM copper feeder cable");
    assert_eq!(spec.detected_size, Some(DetectedSize::Kcmil(500)));
    assert_eq!(spec.detected_size.unwrap().awg_code(), None);
}
