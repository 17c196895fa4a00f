use super::{normalize, ColorSpace};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function converts the coordinates to sRGB and then quantizes them to
/// the range `0x00..=0xff`. Coordinates outside the sRGB gamut are clamped
/// to unit range before quantization, so the result is always a displayable
/// color.
pub(crate) fn to_24bit(space: ColorSpace, coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = convert(space, ColorSpace::Srgb, coordinates);
    [
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing
/// a new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion.
fn srgb_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.04045 {
            value / 12.92
        } else {
            ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
fn linear_srgb_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let magnitude = value.abs();
        if magnitude <= 0.0031308 {
            value * 12.92
        } else {
            magnitude
                .powf(1.0 / 2.4)
                .mul_add(1.055, -0.055)
                .copysign(value)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124564, 0.3575761, 0.1804375 ],
    [ 0.2126729, 0.7151522, 0.0721750 ],
    [ 0.0193339, 0.1191920, 0.9503041 ],
];

/// Convert coordinates for linear sRGB to XYZ. This is a one-hop, direct
/// conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2404542, -1.5371385, -0.4985314 ],
    [ -0.9692660,  1.8760108,  0.0415560 ],
    [  0.0556434, -0.2040259,  1.0572252 ],
];

/// Convert coordinates for XYZ to linear sRGB. This is a one-hop, direct
/// conversion.
fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------

mod lab {
    use crate::Float;

    /// The D65 reference white in XYZ.
    const WHITE: [Float; 3] = [0.95047, 1.0, 1.08883];

    const EPSILON: Float = 216.0 / 24389.0;
    const SLOPE: Float = 841.0 / 108.0;
    const OFFSET: Float = 4.0 / 29.0;

    /// Convert coordinates for XYZ to CIELAB. This is a one-hop, direct
    /// conversion.
    pub(super) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn f(t: Float) -> Float {
            if t > EPSILON {
                t.cbrt()
            } else {
                SLOPE.mul_add(t, OFFSET)
            }
        }

        let fx = f(value[0] / WHITE[0]);
        let fy = f(value[1] / WHITE[1]);
        let fz = f(value[2] / WHITE[2]);

        [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
    }

    /// Convert coordinates for CIELAB to XYZ. This is a one-hop, direct
    /// conversion.
    pub(super) fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
        #[inline]
        fn f_inv(t: Float) -> Float {
            if t > 6.0 / 29.0 {
                t * t * t
            } else {
                (108.0 / 841.0) * (t - OFFSET)
            }
        }

        let fy = (value[0] + 16.0) / 116.0;
        let fx = fy + value[1] / 500.0;
        let fz = fy - value[2] / 200.0;

        [
            WHITE[0] * f_inv(fx),
            WHITE[1] * f_inv(fy),
            WHITE[2] * f_inv(fz),
        ]
    }
}

use lab::{lab_to_xyz, xyz_to_lab};

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to XYZ. This is a two-hop conversion.
#[inline]
fn srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = srgb_to_linear_srgb(value);
    linear_srgb_to_xyz(&linear_srgb)
}

/// Convert coordinates for XYZ to sRGB. This is a two-hop conversion.
#[inline]
fn xyz_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_srgb = xyz_to_linear_srgb(value);
    linear_srgb_to_srgb(&linear_srgb)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates from one color space to another.
///
/// This function normalizes not-a-number coordinates to zero and then
/// converts them to the targeted color space, which may be the same as the
/// original color space. This function does not check whether the result is
/// in gamut for the targeted color space.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[Float; 3],
) -> [Float; 3] {
    use ColorSpace::*;

    // 1. Normalize coordinates. Be done if color spaces are the same.
    let coordinates = normalize(coordinates);
    if from_space == to_space {
        return coordinates;
    }

    // 2. Handle single-hop conversions that don't go through root XYZ
    match (from_space, to_space) {
        (Srgb, LinearSrgb) => return srgb_to_linear_srgb(&coordinates),
        (LinearSrgb, Srgb) => return linear_srgb_to_srgb(&coordinates),
        _ => (),
    };

    // 3a. Convert from source color space to root XYZ
    let intermediate = match from_space {
        Srgb => srgb_to_xyz(&coordinates),
        LinearSrgb => linear_srgb_to_xyz(&coordinates),
        Lab => lab_to_xyz(&coordinates),
        Xyz => coordinates,
    };

    // 3b. Convert from root XYZ to target color space on different branch
    match to_space {
        Srgb => xyz_to_srgb(&intermediate),
        LinearSrgb => xyz_to_linear_srgb(&intermediate),
        Lab => xyz_to_lab(&intermediate),
        Xyz => intermediate,
    }
}
