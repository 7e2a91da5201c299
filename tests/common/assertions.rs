//! Assertion helpers for tests.

use color_convert::Rgb;
use pretty_assertions::assert_eq;
use rgbconv::models::ConversionOutput;

/// Assert an output is an RGB color within `tolerance` steps per channel
pub fn assert_rgb_close(output: &ConversionOutput, expected: Rgb, tolerance: u8) {
    let ConversionOutput::Rgb(actual) = output else {
        panic!("Expected RGB output, got {output:?}");
    };
    for (got, want) in actual.to_bytes().into_iter().zip(expected.to_bytes()) {
        assert!(
            got.abs_diff(want) <= tolerance,
            "Expected {expected:?} (±{tolerance}), got {actual:?}"
        );
    }
}

/// Assert an output is exactly the given RGB color
pub fn assert_rgb(output: &ConversionOutput, expected: Rgb) {
    assert_eq!(output, &ConversionOutput::Rgb(expected));
}

/// Assert an output is the given hex string
pub fn assert_hex(output: &ConversionOutput, expected: &str) {
    assert_eq!(
        output,
        &ConversionOutput::Hex {
            hex: expected.to_string()
        }
    );
}
