/// The enumeration of supported color spaces.
///
/// # sRGB and Linear sRGB
///
/// [sRGB](https://en.wikipedia.org/wiki/SRGB) is the color space paints are
/// picked and displayed in, and 24-bit sRGB is the canonical representation
/// at the application boundary. Its linear form undoes the gamma encoding
/// and hence is the space in which physically meaningful operations, notably
/// blending and luminance, take place. For in-gamut colors, the coordinates
/// of both spaces range from 0 to 1, inclusive.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) with the [D65
/// standard illuminant](https://en.wikipedia.org/wiki/Standard_illuminant)
/// serves as this crate's root color space: all conversions between
/// unrelated color spaces go through XYZ.
///
/// # CIELAB
///
/// [CIELAB](https://en.wikipedia.org/wiki/CIELAB_color_space) is the
/// perceptually motivated view that paint datasheets quote, with one
/// lightness coordinate L and two chromatic coordinates a and b. L is
/// nominally `0..=100` but not hard-clamped; a and b are unbounded in
/// principle, though paint colors stay well within `-128..=128`. This crate
/// uses CIELAB relative to D65, matching the sRGB white point rather than
/// the print-oriented D50.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    LinearSrgb,
    Xyz,
    Lab,
}

impl ColorSpace {
    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue
    /// coordinates. In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        matches!(*self, Self::Srgb | Self::LinearSrgb)
    }

    /// Determine whether this color space is bounded.
    ///
    /// XYZ and CIELAB are *unbounded* and hence can model any color. By
    /// contrast, the RGB color spaces are *bounded*, with coordinates of
    /// in-gamut colors ranging `0..=1`.
    pub const fn is_bounded(&self) -> bool {
        self.is_rgb()
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Srgb => "sRGB",
            Self::LinearSrgb => "linear sRGB",
            Self::Xyz => "XYZ D65",
            Self::Lab => "CIELAB",
        };

        f.write_str(s)
    }
}
