/// Check for equality between two components allowing for 16-bit rounding
/// errors.
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual,
            $expected,
            epsilon = 1.0 / i16::MAX as $crate::Component
        );
    }};
}

/// Check that two RGB colors differ by at most one step per channel.
macro_rules! assert_rgb_near {
    ($actual:expr,$expected:expr) => {{
        let actual: $crate::Rgb = $actual;
        let expected: $crate::Rgb = $expected;
        let close = |a: u8, b: u8| (a as i16 - b as i16).abs() <= 1;
        assert!(
            close(actual.red(), expected.red())
                && close(actual.green(), expected.green())
                && close(actual.blue(), expected.blue()),
            "{} is not within rounding of {}",
            actual,
            expected
        );
    }};
}

/// Every `step`th value of each channel, starting from black.
pub fn rgb_sweep(step: usize) -> impl Iterator<Item = crate::Rgb> {
    (0..=255_u8).step_by(step).flat_map(move |red| {
        (0..=255_u8).step_by(step).flat_map(move |green| {
            (0..=255_u8)
                .step_by(step)
                .map(move |blue| crate::Rgb::new(red, green, blue))
        })
    })
}
