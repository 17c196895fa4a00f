use crate::Float;

/// The coefficients for computing the relative luminance of linear sRGB
/// coordinates.
const LUMINANCE_WEIGHTS: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The linear luminance at or below which a color counts as black. Black has
/// no chromatic ratio to preserve, so the LRV solve falls back to neutral
/// gray.
const BLACK_CUTOFF: Float = 1e-6;

/// The relative luminance above which a background is light enough to carry
/// black text.
pub(crate) const LIGHT_BACKGROUND: Float = 0.5;

/// Compute the relative luminance Y for the given linear sRGB coordinates.
#[inline]
pub(crate) fn relative_luminance(value: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *LUMINANCE_WEIGHTS;
    let [r, g, b] = *value;

    r.mul_add(c1, g.mul_add(c2, b * c3))
}

/// Round the relative luminance to a light reflectance value.
///
/// LRV is the luminance scaled to `0..=100` and quoted with one decimal
/// digit, which is the resolution paint datasheets use.
#[inline]
pub(crate) fn light_reflectance_value(luminance: Float) -> Float {
    (luminance * 1000.0).round() / 10.0
}

/// Rescale the linear sRGB coordinates to hit the target light reflectance
/// value.
///
/// The target is clamped to `0..=100`. Scaling each linear channel by the
/// same factor preserves the chromatic ratio exactly as long as no channel
/// leaves unit range. Channels that would exceed 1.0 are clipped, which can
/// shift the hue at extreme targets.
pub(crate) fn rescale_luminance(value: &[Float; 3], target_lrv: Float) -> [Float; 3] {
    let target = target_lrv.clamp(0.0, 100.0) / 100.0;
    let luminance = relative_luminance(value);
    if luminance <= BLACK_CUTOFF {
        return [target; 3];
    }

    let factor = target / luminance;
    [
        (value[0] * factor).clamp(0.0, 1.0),
        (value[1] * factor).clamp(0.0, 1.0),
        (value[2] * factor).clamp(0.0, 1.0),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_relative_luminance() {
        assert_close_enough!(relative_luminance(&[0.0, 0.0, 0.0]), 0.0);
        assert_close_enough!(relative_luminance(&[1.0, 1.0, 1.0]), 1.0);

        // The green channel dominates.
        assert!(
            relative_luminance(&[0.0, 1.0, 0.0]) > relative_luminance(&[1.0, 0.0, 1.0]),
            "green must outweigh red and blue combined"
        );
    }

    #[test]
    fn test_one_decimal_rounding() {
        assert_close_enough!(light_reflectance_value(0.8025862135585101), 80.3);
        assert_close_enough!(light_reflectance_value(1.0), 100.0);
        assert_close_enough!(light_reflectance_value(0.0), 0.0);
        assert_close_enough!(light_reflectance_value(0.10925686885885547), 10.9);
    }

    #[test]
    fn test_rescale_black_falls_back_to_gray() {
        let gray = rescale_luminance(&[0.0, 0.0, 0.0], 50.0);
        assert_eq!(gray, [0.5, 0.5, 0.5], "black rescales to neutral gray");
    }

    #[test]
    fn test_rescale_clamps_target_and_channels() {
        let black = rescale_luminance(&[0.2, 0.4, 0.1], -25.0);
        assert_eq!(black, [0.0, 0.0, 0.0], "negative targets clamp to zero");

        let capped = rescale_luminance(&[0.9, 0.2, 0.1], 200.0);
        assert!(
            capped[0] <= 1.0 && capped[1] <= 1.0 && capped[2] <= 1.0,
            "channels must not leave unit range"
        );
        assert_close_enough!(capped[0], 1.0);
    }

    #[test]
    fn test_rescale_preserves_channel_ratio() {
        let scaled = rescale_luminance(&[0.8, 0.4, 0.2], 25.0);
        assert_close_enough!(scaled[0] / scaled[1], 2.0);
        assert_close_enough!(scaled[1] / scaled[2], 2.0);
        assert_close_enough!(relative_luminance(&scaled), 0.25);
    }
}
