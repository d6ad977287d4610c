//! Domain-critical regression tests for color-harmony.
//!
//! Each test guards against a specific way the scoring can silently drift,
//! and says what it means when it breaks.

#[cfg(test)]
mod domain_tests {
    use crate::color::{Hex, Hsl, Oklch, Srgb};
    use crate::harmony::{classify_palette, tally_votes, total_score, HarmonyPattern};

    fn palette(hexes: &[&str]) -> Vec<Srgb> {
        hexes.iter().map(|s| Srgb::from_hex(s).unwrap()).collect()
    }

    // ========================================================================
    // GAP 1: OKLab works on gamma-encoded channels
    // ========================================================================

    /// If this breaks, it means: someone added sRGB linearization before the
    /// OKLab matrices. Mid grey then drops from L≈0.795 to L≈0.600 and every
    /// stored OKLCH value and balance score shifts.
    #[test]
    fn test_oklab_skips_linearization() {
        let grey = Srgb::from_hex("#808080").unwrap().to_oklab();
        assert!(
            (grey.l - 0.79474).abs() < 1e-4,
            "REGRESSION: #808080 has OKLab L={:.5}, expected 0.79474",
            grey.l
        );
    }

    // ========================================================================
    // GAP 2: Hue distance is circular
    // ========================================================================

    /// If this breaks, it means: hue distance is computed as a plain absolute
    /// difference, so reds on both sides of 0° look 356° apart.
    #[test]
    fn test_monochromatic_across_zero() {
        let colors: Vec<Srgb> = [358.0, 0.0, 2.0]
            .iter()
            .map(|&h| Hsl::new(h, 1.0, 0.5).to_srgb())
            .collect();
        let (best, scores) = total_score(&colors).unwrap();
        assert_eq!(best, HarmonyPattern::Monochromatic);
        assert_eq!(scores.get(HarmonyPattern::Analogous), 5);
    }

    /// If this breaks, it means: the wrap is applied to the spread but not to
    /// pair checks. Hues 355° and 5° are analogous, not 350° apart.
    #[test]
    fn test_analogous_across_zero() {
        let (best, _) = total_score(&palette(&["#ff0015", "#ff0000", "#ff1500"])).unwrap();
        assert_eq!(best, HarmonyPattern::Analogous);
    }

    // ========================================================================
    // GAP 3: Score tie-break follows pattern order
    // ========================================================================

    /// If this breaks, it means: the best pattern is chosen by something other
    /// than "first maximum wins" (e.g. the last maximum, or a sort that is not
    /// stable). Near-identical reds score 5 on both monochromatic and
    /// analogous.
    #[test]
    fn test_score_tie_prefers_monochromatic() {
        let (best, scores) = total_score(&palette(&["#ff0000", "#fe0101", "#ff0202"])).unwrap();
        assert_eq!(scores.get(HarmonyPattern::Monochromatic), 5);
        assert_eq!(scores.get(HarmonyPattern::Analogous), 5);
        assert_eq!(best, HarmonyPattern::Monochromatic);
    }

    /// If this breaks, it means: a palette that matches nothing is no longer
    /// reported as monochromatic, which changes stored classifications.
    #[test]
    fn test_no_match_defaults_to_monochromatic() {
        let (best, scores) = total_score(&palette(&["#ff0000", "#ffaa00", "#feff00"])).unwrap();
        assert!(
            scores.iter().all(|(_, s)| s == 0),
            "expected no pattern to match, got {scores:?}"
        );
        assert_eq!(best, HarmonyPattern::Monochromatic);
    }

    // ========================================================================
    // GAP 4: Vote tie-break follows first appearance
    // ========================================================================

    /// If this breaks, it means: tied votes are resolved by pattern order
    /// instead of by which pattern won a subset first. Complementary comes
    /// before tetrad in pattern order, but tetrad wins the first subset.
    #[test]
    fn test_vote_tie_prefers_first_seen() {
        let result = classify_palette(&["#ff0000", "#ffaa00", "#7fff00", "#00feff"]).unwrap();
        let winners: Vec<HarmonyPattern> = result
            .combination_scores
            .iter()
            .map(|s| s.best_match)
            .collect();
        assert_eq!(
            winners,
            vec![
                HarmonyPattern::Tetrad,
                HarmonyPattern::Complementary,
                HarmonyPattern::Complementary,
                HarmonyPattern::Tetrad,
            ]
        );
        assert_eq!(result.final_pattern, HarmonyPattern::Tetrad);
    }

    /// If this breaks, it means: the vote is no longer a simple majority.
    /// Three analogous subsets and one triad subset must give analogous, and
    /// the triad must still be reported for its own subset.
    #[test]
    fn test_vote_majority() {
        assert_eq!(
            tally_votes([
                HarmonyPattern::Triad,
                HarmonyPattern::Analogous,
                HarmonyPattern::Analogous,
                HarmonyPattern::Analogous,
            ]),
            Some(HarmonyPattern::Analogous)
        );

        let result = classify_palette(&["#ff0000", "#ff0400", "#ff0800", "#ff5500"]).unwrap();
        assert_eq!(result.final_pattern, HarmonyPattern::Analogous);
        assert_eq!(result.combination_scores.len(), 4);
        assert_eq!(
            result.combination_scores[0].best_match,
            HarmonyPattern::Monochromatic
        );
    }

    // ========================================================================
    // GAP 5: Hex quantization truncates
    // ========================================================================

    /// If this breaks, it means: `to_hex` rounds instead of truncating. Any
    /// color that went through OKLab and back would then serialize one step
    /// brighter than before.
    #[test]
    fn test_hex_truncates() {
        assert_eq!(Srgb::new(0.999, 0.5, 0.0021).to_hex().to_string(), "#fe7f00");
    }

    /// If this breaks, it means: the 8-bit round trip lost exactness. Every
    /// byte must survive `u8 -> f64 -> u8` despite truncation.
    #[test]
    fn test_hex_round_trip_exact_for_all_bytes() {
        for v in 0..=255u8 {
            let hex = Hex::from_bytes([v, 255 - v, v / 2]);
            assert_eq!(hex.to_srgb().to_hex(), hex, "byte {v} drifted");
        }
    }

    // ========================================================================
    // GAP 6: Out-of-gamut results are not clamped early
    // ========================================================================

    /// If this breaks, it means: OKLCH to sRGB started clamping. The raw
    /// channels must leave 0..=1 so callers can detect out-of-gamut colors;
    /// only hex output saturates.
    #[test]
    fn test_out_of_gamut_is_visible() {
        let vivid = Oklch::new(0.7, 0.4, 30.0).to_srgb();
        assert!(
            vivid.r > 1.0 || vivid.g < 0.0 || vivid.b < 0.0,
            "expected out-of-gamut channels, got {vivid:?}"
        );
        let [r, g, b] = vivid.to_hex().to_bytes();
        assert_eq!(r, 255);
        assert!(g < 255 && b < 255);
    }

    // ========================================================================
    // GAP 7: Complementary window
    // ========================================================================

    /// If this breaks, it means: the complementary range stopped covering
    /// exactly-opposite hues. Red against cyan is 180° apart.
    #[test]
    fn test_red_cyan_is_complementary() {
        let (best, scores) = total_score(&palette(&["#ff0000", "#00ffff", "#808080"])).unwrap();
        assert_eq!(best, HarmonyPattern::Complementary);
        assert_eq!(scores.get(HarmonyPattern::SplitComplementary), 5);
        assert_eq!(scores.get(HarmonyPattern::Triad), 0);
    }
}
