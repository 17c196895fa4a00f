use crate::Float;

/// The substitute distance when the pointer coincides with an anchor point.
/// Keeps the inverse-square weight finite.
const COINCIDENT_DISTANCE: Float = 1e-6;

/// Linearly interpolate between two coordinate sets.
///
/// The fraction selects the end coordinates: 0 yields `start`, 1 yields
/// `end`. Interpolating gamma-encoded sRGB coordinates is perceptually
/// incorrect; callers mix in linear light and encode once at the output
/// boundary.
#[inline]
pub(crate) fn interpolate(fraction: Float, start: &[Float; 3], end: &[Float; 3]) -> [Float; 3] {
    [
        start[0].mul_add(1.0 - fraction, end[0] * fraction),
        start[1].mul_add(1.0 - fraction, end[1] * fraction),
        start[2].mul_add(1.0 - fraction, end[2] * fraction),
    ]
}

/// Compute normalized inverse-square-distance weights for the pointer
/// position relative to the three anchor points.
///
/// A pointer sitting exactly on an anchor would produce an infinite weight;
/// the distance is replaced with [`COINCIDENT_DISTANCE`] instead, which
/// makes that anchor dominate without a division by zero. The returned
/// weights are non-negative and sum to one.
pub(crate) fn inverse_square_weights(point: [Float; 2], anchors: &[[Float; 2]; 3]) -> [Float; 3] {
    let mut weights = [0.0; 3];
    for (weight, anchor) in weights.iter_mut().zip(anchors.iter()) {
        let distance = (point[0] - anchor[0]).hypot(point[1] - anchor[1]);
        let distance = if distance == 0.0 {
            COINCIDENT_DISTANCE
        } else {
            distance
        };
        *weight = (distance * distance).recip();
    }

    let total = weights[0] + weights[1] + weights[2];
    [weights[0] / total, weights[1] / total, weights[2] / total]
}

/// Convert barycentric weights to the sequential two-stage mix fractions.
///
/// The second stage fraction is the third weight itself; the first stage
/// fraction is the second weight's share of the first pair. When the pair
/// weight vanishes, the pair blend is immaterial and defaults to the
/// midpoint.
pub(crate) fn weights_to_stages(weights: &[Float; 3]) -> (Float, Float) {
    let pair = weights[0] + weights[1];
    let first = if pair > 0.0 { weights[1] / pair } else { 0.5 };

    (first, weights[2])
}

/// Convert the sequential two-stage mix fractions to barycentric weights.
pub(crate) fn stages_to_weights(pair_fraction: Float, third_fraction: Float) -> [Float; 3] {
    [
        (1.0 - pair_fraction) * (1.0 - third_fraction),
        pair_fraction * (1.0 - third_fraction),
        third_fraction,
    ]
}

/// Compute the per-channel weighted average of three 24-bit colors.
///
/// This operates on the raw, gamma-encoded channel values. It is the cheap
/// shading used for the visualizer's gradient field only; the numeric mix
/// result always goes through linear light instead.
pub(crate) fn weighted_average_24bit(weights: &[Float; 3], colors: &[[u8; 3]; 3]) -> [u8; 3] {
    let mut average = [0_u8; 3];
    for (channel, value) in average.iter_mut().enumerate() {
        let sum = weights[0].mul_add(
            colors[0][channel] as Float,
            weights[1].mul_add(
                colors[1][channel] as Float,
                weights[2] * colors[2][channel] as Float,
            ),
        );
        *value = sum.round() as u8;
    }

    average
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_interpolation_endpoints() {
        let start = [0.25, 0.5, 0.75];
        let end = [0.75, 0.25, 0.0];

        assert_eq!(interpolate(0.0, &start, &end), start);
        assert_eq!(interpolate(1.0, &start, &end), end);

        let half = interpolate(0.5, &start, &end);
        assert!(
            (half[0] - 0.5).abs() < 1e-12,
            "midpoint should average the endpoints"
        );
    }

    #[test]
    fn test_weights_are_normalized() {
        let anchors = [[0.12, 0.12], [0.88, 0.12], [0.50, 0.88]];

        for point in [
            [0.5, 0.5],
            [0.2, 0.3],
            [0.88, 0.11],
            [0.12, 0.12],
            [0.5, 0.87],
        ] {
            let weights = inverse_square_weights(point, &anchors);
            let total = weights[0] + weights[1] + weights[2];
            assert!(
                (total - 1.0).abs() < 1e-9,
                "weights for {:?} sum to {} instead of 1",
                point,
                total
            );
            assert!(
                weights.iter().all(|w| *w >= 0.0),
                "weights for {:?} must be non-negative",
                point
            );
        }
    }

    #[test]
    fn test_weights_at_anchor_dominate() {
        let anchors = [[0.12, 0.12], [0.88, 0.12], [0.50, 0.88]];
        let weights = inverse_square_weights([0.12, 0.12], &anchors);
        assert!(
            weights[0] > 0.999_999,
            "coincident pointer should all but own the blend, got {}",
            weights[0]
        );
    }

    #[test]
    fn test_center_weights() {
        // The center of the unit square is equidistant from the two top
        // anchors and half that squared distance from the bottom one.
        let anchors = [[0.12, 0.12], [0.88, 0.12], [0.50, 0.88]];
        let weights = inverse_square_weights([0.5, 0.5], &anchors);

        assert!((weights[0] - 0.25).abs() < 1e-12, "got {}", weights[0]);
        assert!((weights[1] - 0.25).abs() < 1e-12, "got {}", weights[1]);
        assert!((weights[2] - 0.50).abs() < 1e-12, "got {}", weights[2]);
    }

    #[test]
    fn test_stage_round_trip() {
        let (first, second) = weights_to_stages(&[0.25, 0.25, 0.5]);
        assert!((first - 0.5).abs() < 1e-12, "got {}", first);
        assert!((second - 0.5).abs() < 1e-12, "got {}", second);

        let weights = stages_to_weights(first, second);
        assert!((weights[0] - 0.25).abs() < 1e-12, "got {}", weights[0]);
        assert!((weights[1] - 0.25).abs() < 1e-12, "got {}", weights[1]);
        assert!((weights[2] - 0.50).abs() < 1e-12, "got {}", weights[2]);
    }

    #[test]
    fn test_vanishing_pair_defaults_to_midpoint() {
        let (first, second) = weights_to_stages(&[0.0, 0.0, 1.0]);
        assert!((first - 0.5).abs() < 1e-12, "got {}", first);
        assert!((second - 1.0).abs() < 1e-12, "got {}", second);
    }

    #[test]
    fn test_weighted_average_is_gamma_space() {
        let colors = [[236, 231, 222], [214, 200, 183], [180, 170, 160]];
        let average = weighted_average_24bit(&[0.25, 0.25, 0.5], &colors);
        assert_eq!(average, [203, 193, 181]);

        // A single unit weight selects that color exactly.
        let only_third = weighted_average_24bit(&[0.0, 0.0, 1.0], &colors);
        assert_eq!(only_third, [180, 170, 160]);
    }
}
