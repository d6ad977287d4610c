//! OKLCH export over palette files.

mod common;

use common::fixtures::{palettes, Workspace};
use harmonize::services::{export_palettes, load_palettes, save_json};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_export_round_trip_through_files() {
    let ws = Workspace::new();
    let input = ws.write_json(
        "rgbPalette.json",
        &json!([
            ["#ffff00", "#0000ff", "#00ff00"],
            {"url": "https://example.com", "palette": ["#0000ff", "#ff0000", "#00ff00"]},
            palettes::MALFORMED,
        ]),
    );

    let inputs = load_palettes(&input).await.unwrap();
    let export = export_palettes(&inputs, 3);
    assert_eq!(export.skipped, 1);

    let output = ws.path("processed/oklchPalette.json");
    save_json(&output, &export.palettes).await.unwrap();

    let written = ws.read_json("processed/oklchPalette.json");
    assert_eq!(
        written,
        json!([
            [[0.628, 0.258, 0.081], [0.866, 0.295, 0.396], [0.452, 0.313, 0.733]],
            [[0.968, 0.211, 0.305], [0.866, 0.295, 0.396], [0.452, 0.313, 0.733]],
        ])
    );
}

#[tokio::test]
async fn test_export_values_in_unit_range() {
    let ws = Workspace::new();
    let input = ws.write_json(
        "rgbPalette.json",
        &json!([
            palettes::ANALOGOUS_MAJORITY,
            palettes::TRIAD,
            palettes::TETRAD_TIE,
            palettes::COMPLEMENTARY,
        ]),
    );

    let inputs = load_palettes(&input).await.unwrap();
    let export = export_palettes(&inputs, 3);
    assert_eq!(export.skipped, 0);
    assert_eq!(export.palettes.len(), 4);

    for palette in &export.palettes {
        for [l, c, h] in palette {
            assert!((0.0..=1.0).contains(l), "L {l}");
            assert!(*c >= 0.0, "C {c}");
            assert!((0.0..=1.0).contains(h), "H {h}");
        }
        assert!(palette.windows(2).all(|w| w[0][2] <= w[1][2]));
    }

    let first_hues: Vec<f64> = export.palettes.iter().map(|p| p[0][2]).collect();
    assert!(first_hues.windows(2).all(|w| w[0] <= w[1]));
}
