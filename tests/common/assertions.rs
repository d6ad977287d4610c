//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Pattern labels in tie-break order
pub const PATTERN_LABELS: [&str; 7] = [
    "monochromatic",
    "analogous",
    "complementary",
    "split_complementary",
    "triad",
    "tetrad",
    "oklch_balance",
];

/// Assert a results-file entry has the persisted record shape
pub fn assert_valid_record(record: &serde_json::Value, expected_palette: &[&str]) {
    let hex_palette: Vec<&str> = record["hex_palette"]
        .as_array()
        .expect("hex_palette should be an array")
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(hex_palette, expected_palette);

    let final_pattern = record["final_pattern"]
        .as_str()
        .expect("final_pattern should be a string");
    assert!(
        PATTERN_LABELS.contains(&final_pattern),
        "unknown final_pattern {final_pattern}"
    );

    let subsets = record["combination_scores"]
        .as_array()
        .expect("combination_scores should be an array");
    let n = expected_palette.len();
    assert_eq!(subsets.len(), n * (n - 1) * (n - 2) / 6);

    for subset in subsets {
        assert_eq!(subset["subset"].as_array().unwrap().len(), 3);
        assert!(PATTERN_LABELS.contains(&subset["best_match"].as_str().unwrap()));

        let scores = subset["scores"].as_object().unwrap();
        for label in PATTERN_LABELS {
            let score = scores[label].as_u64().unwrap();
            assert!(
                score == 0 || score == 3 || score == 5,
                "score {score} for {label}"
            );
        }
    }
}

/// Winning pattern of every subset, in order
pub fn subset_winners(record: &serde_json::Value) -> Vec<String> {
    record["combination_scores"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["best_match"].as_str().unwrap().to_string())
        .collect()
}
