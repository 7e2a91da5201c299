//! Domain-critical regression tests for color-convert.
//!
//! These tests cover properties that span several conversions: round trips,
//! agreement with an independent implementation, and the edge cases LED
//! drivers rely on. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::color::{
        hex_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
        temperature_to_rgb, Hsl, Hsv, Rgb,
    };
    use crate::strict::{try_hsl_to_rgb, try_hsv_to_rgb};

    /// Channel values sampled for cube sweeps: every 5th step plus the
    /// neighbours of the extremes.
    fn samples() -> Vec<u8> {
        let mut values: Vec<u8> = (0..=255u8).step_by(5).collect();
        values.extend([1, 2, 3, 4, 126, 127, 128, 129, 253, 254]);
        values.sort_unstable();
        values.dedup();
        values
    }

    fn max_channel_error(a: Rgb, b: Rgb) -> i16 {
        a.to_bytes()
            .into_iter()
            .zip(b.to_bytes())
            .map(|(x, y)| (i16::from(x) - i16::from(y)).abs())
            .max()
            .unwrap_or(0)
    }

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        d.min(1.0 - d)
    }

    // ========================================================================
    // GAP 1: Round trips lose at most one step per channel
    // ========================================================================

    /// If this breaks, it means: hsv_to_rgb and rgb_to_hsv disagree on the
    /// sector table or on the hue scaling, so colors drift on every
    /// round trip instead of only losing the truncated fraction.
    #[test]
    fn test_hsv_round_trip_within_one_step() {
        let values = samples();
        for &r in &values {
            for &g in &values {
                for &b in &values {
                    let rgb = Rgb::new(r, g, b);
                    let back = hsv_to_rgb(rgb_to_hsv(rgb));
                    assert!(
                        max_channel_error(rgb, back) <= 1,
                        "REGRESSION: HSV round trip of {rgb:?} produced {back:?}"
                    );
                }
            }
        }
    }

    /// If this breaks, it means: the HSL saturation branches (l <= 0.5 vs
    /// l > 0.5) or the ±1/3 hue offsets are inconsistent between directions.
    #[test]
    fn test_hsl_round_trip_within_one_step() {
        let values = samples();
        for &r in &values {
            for &g in &values {
                for &b in &values {
                    let rgb = Rgb::new(r, g, b);
                    let back = hsl_to_rgb(rgb_to_hsl(rgb));
                    assert!(
                        max_channel_error(rgb, back) <= 1,
                        "REGRESSION: HSL round trip of {rgb:?} produced {back:?}"
                    );
                }
            }
        }
    }

    /// If this breaks, it means: hex encoding or decoding lost or reordered
    /// a byte. Unlike the float models this round trip must be exact.
    #[test]
    fn test_hex_round_trip_is_exact() {
        let values = samples();
        for &r in &values {
            for &g in &values {
                for &b in &values {
                    let rgb = Rgb::new(r, g, b);
                    assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), rgb);
                }
            }
        }
    }

    // ========================================================================
    // GAP 2: Agreement with the palette crate
    // ========================================================================

    /// If this breaks, it means: rgb_to_hsv deviates from the textbook HSV
    /// definition (hue sector, saturation denominator, or value).
    #[test]
    fn test_rgb_to_hsv_matches_palette_crate() {
        use palette::{Hsv as PaletteHsv, IntoColor, Srgb};

        let values = [0u8, 17, 64, 128, 200, 255];
        for &r in &values {
            for &g in &values {
                for &b in &values {
                    let ours = rgb_to_hsv(Rgb::new(r, g, b));
                    let srgb: Srgb<f64> = Srgb::new(r, g, b).into_format();
                    let theirs: PaletteHsv<palette::encoding::Srgb, f64> = srgb.into_color();

                    let their_hue = theirs.hue.into_positive_degrees() / 360.0;
                    assert!(
                        hue_distance(ours.h, their_hue) < 1e-9,
                        "hue mismatch for ({r}, {g}, {b}): ours={}, palette={their_hue}",
                        ours.h
                    );
                    assert!((ours.s - theirs.saturation).abs() < 1e-9);
                    assert!((ours.v - theirs.value).abs() < 1e-9);
                }
            }
        }
    }

    /// If this breaks, it means: rgb_to_hsl deviates from the textbook HSL
    /// definition.
    #[test]
    fn test_rgb_to_hsl_matches_palette_crate() {
        use palette::{Hsl as PaletteHsl, IntoColor, Srgb};

        let values = [0u8, 17, 64, 128, 200, 255];
        for &r in &values {
            for &g in &values {
                for &b in &values {
                    let ours = rgb_to_hsl(Rgb::new(r, g, b));
                    let srgb: Srgb<f64> = Srgb::new(r, g, b).into_format();
                    let theirs: PaletteHsl<palette::encoding::Srgb, f64> = srgb.into_color();

                    let their_hue = theirs.hue.into_positive_degrees() / 360.0;
                    assert!(
                        hue_distance(ours.h, their_hue) < 1e-9,
                        "hue mismatch for ({r}, {g}, {b}): ours={}, palette={their_hue}",
                        ours.h
                    );
                    assert!((ours.s - theirs.saturation).abs() < 1e-9);
                    assert!((ours.l - theirs.lightness).abs() < 1e-9);
                }
            }
        }
    }

    // ========================================================================
    // GAP 3: Fixed points LED drivers depend on
    // ========================================================================

    /// If this breaks, it means: the primaries no longer land on full
    /// channels, so a "pure red" LED command leaks into green or blue.
    #[test]
    fn test_primary_hues_hit_full_channels() {
        let cases = [
            (0.0, Rgb::new(255, 0, 0)),
            (1.0 / 3.0, Rgb::new(0, 255, 0)),
            (2.0 / 3.0, Rgb::new(0, 0, 255)),
        ];
        for (h, expected) in cases {
            let rgb = hsv_to_rgb(Hsv::new(h, 1.0, 1.0));
            assert!(
                max_channel_error(rgb, expected) <= 1,
                "REGRESSION: hue {h} produced {rgb:?}, expected {expected:?}"
            );
        }
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
    }

    /// If this breaks, it means: the grey shortcut compares against an
    /// epsilon or rounds instead of truncating.
    #[test]
    fn test_grey_is_hue_independent_and_truncated() {
        let grey = rgb_to_hsv(Rgb::new(128, 128, 128));
        assert_eq!((grey.h, grey.s), (0.0, 0.0));
        assert!((grey.v - 0.502).abs() < 1e-3);

        for i in 0..=10 {
            let h = f64::from(i) / 10.0;
            assert_eq!(hsl_to_rgb(Hsl::new(h, 0.0, 0.5)), Rgb::new(127, 127, 127));
        }
    }

    /// If this breaks, it means: the temperature fit lost its neutral point
    /// or its warm/cool ordering.
    #[test]
    fn test_temperature_orientation() {
        let neutral = temperature_to_rgb(6600);
        assert_eq!((neutral.r, neutral.g), (255, 255));
        assert!(neutral.b >= 250, "6600 K blue was {}", neutral.b);

        let warm = temperature_to_rgb(1000);
        assert_eq!(warm.r, 255);
        assert!(warm.b < 50, "1000 K should have little blue: {warm:?}");

        let cool = temperature_to_rgb(10000);
        assert_eq!(cool.b, 255);
        assert!(cool.r < cool.b, "10000 K should be bluish: {cool:?}");
    }

    /// If this breaks, it means: the strict path changed the numeric result
    /// of a valid conversion instead of only gating it.
    #[test]
    fn test_strict_path_is_a_pure_gate() {
        for i in 0..=20 {
            let x = f64::from(i) / 20.0;
            let hsv = Hsv::new(x, 1.0 - x, 0.5 + x / 2.0);
            assert_eq!(try_hsv_to_rgb(hsv), Ok(hsv_to_rgb(hsv)));
            let hsl = Hsl::new(1.0 - x, x, x);
            assert_eq!(try_hsl_to_rgb(hsl), Ok(hsl_to_rgb(hsl)));
        }
    }
}
