use std::str::FromStr;

use crate::core::{
    convert, format, from_24bit, interpolate, inverse_square_weights, light_reflectance_value,
    parse, relative_luminance, rescale_luminance, stages_to_weights, to_24bit, to_eq_coordinates,
    weighted_average_24bit, weights_to_stages, ColorSpace, LIGHT_BACKGROUND,
};
use crate::Float;

/// Create a new sRGB color from 24-bit integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. However, it also is safe to use in const
/// expressions, which is how the [factory catalog](crate::catalog) builds
/// its table.
///
/// Rust currently does not allow floating point operations in const
/// functions but does allow them in const expressions, notably as arguments
/// to a const function such as a constructor. Hence this macro converts the
/// integer coordinates before passing them to [`Color::new`].
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $crate::ColorSpace::Srgb,
            [
                $r as $crate::Float / 255.0,
                $g as $crate::Float / 255.0,
                $b as $crate::Float / 255.0,
            ],
        )
    };
}

/// A high-resolution color object.
///
/// Every color object has a [color space](ColorSpace) and three coordinates.
/// The canonical representation at the application boundary is 24-bit sRGB;
/// all other representations are derived views that this type computes on
/// demand. Editing a derived view means constructing a color in that view's
/// color space and converting back, so there is never more than one stored
/// representation to keep synchronized.
///
/// # Equality Testing and Hashing
///
/// Coordinates are floating point numbers, so this type normalizes them
/// before equality testing or hashing: not-a-numbers become positive zero,
/// resolution is reduced by rounding (the canonical representation is 8-bit
/// quantized, so nothing meaningful is lost), negative zeros become positive
/// after rounding, and the results are compared as bit strings. Equal colors
/// therefore have equal hashes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

impl Color {
    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// ```
    /// # use paintmix::{Color, ColorSpace};
    /// let pewter = Color::new(ColorSpace::Lab, [80.3, -0.7, 7.6]);
    /// assert_eq!(pewter.space(), ColorSpace::Lab);
    /// ```
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates in unit range.
    #[inline]
    pub const fn srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(ColorSpace::Srgb, [r, g, b])
    }

    /// Instantiate a new CIELAB color with the given lightness L, a, and b
    /// coordinates.
    #[inline]
    pub const fn lab(l: Float, a: Float, b: Float) -> Self {
        Self::new(ColorSpace::Lab, [l, a, b])
    }

    /// Instantiate a new sRGB color from its 24-bit representation.
    ///
    /// This function returns a new sRGB color with the given red, green, and
    /// blue coordinates scaled by 1/255. The [`rgb`] macro does the same
    /// thing but is safe to use inside const expressions.
    ///
    /// ```
    /// # use paintmix::Color;
    /// let beige = Color::from_24bit(0xec, 0xe7, 0xde);
    /// assert_eq!(beige.to_24bit(), [0xec, 0xe7, 0xde]);
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    /// Access the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Convert this color to the target color space.
    ///
    /// Conversions route through XYZ D65, with direct conversions between
    /// sRGB and its linear form. Not-a-number coordinates are normalized to
    /// zero on the way. The result is not checked against the target's
    /// gamut; quantization with [`Color::to_24bit`] clamps instead.
    ///
    /// ```
    /// # use paintmix::{Color, ColorSpace};
    /// let lab = Color::from_24bit(0xec, 0xe7, 0xde).to(ColorSpace::Lab);
    /// assert!((lab[0] - 91.801).abs() < 1e-3);
    /// assert!((lab[1] - 0.136).abs() < 1e-3);
    /// assert!((lab[2] - 4.971).abs() < 1e-3);
    /// ```
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    /// Convert this color to its 24-bit sRGB representation.
    ///
    /// Each coordinate is clamped to the sRGB gamut, scaled to `0..=255`,
    /// and rounded. This is the only lossy step in the pipeline, and it is
    /// deferred to the output boundary so that intermediate math keeps full
    /// resolution.
    #[inline]
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(self.space, &self.coordinates)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the relative luminance Y of this color.
    ///
    /// The result is the Rec. 709 weighted sum of the linear sRGB channels
    /// and ranges `0..=1` for in-gamut colors.
    pub fn luminance(&self) -> Float {
        let linear = convert(self.space, ColorSpace::LinearSrgb, &self.coordinates);
        relative_luminance(&linear)
    }

    /// Compute the light reflectance value of this color.
    ///
    /// LRV is the relative luminance scaled to `0..=100` and rounded to one
    /// decimal digit, matching the resolution of paint datasheets.
    ///
    /// ```
    /// # use paintmix::Color;
    /// assert_eq!(Color::from_24bit(0xec, 0xe7, 0xde).lrv(), 80.3);
    /// ```
    pub fn lrv(&self) -> Float {
        light_reflectance_value(self.luminance())
    }

    /// Compute the color with the target light reflectance value that keeps
    /// this color's chromatic ratio.
    ///
    /// The target is clamped to `0..=100`. All linear channels are scaled by
    /// the same factor, which preserves hue and chroma exactly as long as no
    /// channel leaves unit range; channels that would exceed 1.0 are
    /// clipped, so extreme targets can shift the hue. Pure black has no
    /// chromatic ratio to preserve and yields the neutral gray at the target
    /// luminance. The result is an sRGB color.
    ///
    /// ```
    /// # use paintmix::Color;
    /// let beige = Color::from_24bit(0xec, 0xe7, 0xde);
    /// assert_eq!(beige.with_lrv(50.0).to_24bit(), [191, 187, 180]);
    ///
    /// let black = Color::from_24bit(0, 0, 0);
    /// assert_eq!(black.with_lrv(50.0).to_24bit(), [188, 188, 188]);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_lrv(&self, target: Float) -> Self {
        let linear = convert(self.space, ColorSpace::LinearSrgb, &self.coordinates);
        let rescaled = rescale_luminance(&linear, target);

        Self::new(
            ColorSpace::Srgb,
            convert(ColorSpace::LinearSrgb, ColorSpace::Srgb, &rescaled),
        )
    }

    /// Determine the shade of text that stays legible over this color.
    ///
    /// ```
    /// # use paintmix::{Color, TextShade};
    /// assert_eq!(Color::from_24bit(236, 231, 222).text_shade(), TextShade::Black);
    /// assert_eq!(Color::from_24bit(36, 86, 194).text_shade(), TextShade::White);
    /// ```
    pub fn text_shade(&self) -> TextShade {
        if self.luminance() > LIGHT_BACKGROUND {
            TextShade::Black
        } else {
            TextShade::White
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Mix this color with another color in linear light.
    ///
    /// The fraction selects the share of the other color: 0 yields this
    /// color, 1 the other. Both colors are converted to linear sRGB before
    /// interpolating, and the result stays linear, so gamma encoding happens
    /// exactly once when the result is quantized or converted. Mixing the
    /// gamma-encoded coordinates instead would darken every blend; that is
    /// the error this crate exists to avoid.
    ///
    /// ```
    /// # use paintmix::Color;
    /// let white = Color::from_24bit(255, 255, 255);
    /// let black = Color::from_24bit(0, 0, 0);
    ///
    /// // The linear-light midpoint, not the naive (127, 127, 127).
    /// assert_eq!(white.mix(&black, 0.5).to_24bit(), [188, 188, 188]);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn mix(&self, with: &Color, fraction: Float) -> Color {
        Mixer::new(self, with).at(fraction)
    }

    /// Mix this color with a second and third color in linear light.
    ///
    /// The blend runs in two sequential stages: this color and the second
    /// blend at `pair_fraction`, and that intermediate blends with the third
    /// color at `third_fraction`. The intermediate never leaves linear
    /// light, so rounding error does not compound across stages.
    ///
    /// ```
    /// # use paintmix::Color;
    /// let a = Color::from_24bit(236, 231, 222);
    /// let b = Color::from_24bit(214, 200, 183);
    /// let c = Color::from_24bit(180, 170, 160);
    ///
    /// assert_eq!(a.mix3(&b, &c, 0.5, 0.5).to_24bit(), [204, 195, 184]);
    /// // A full third fraction is the third color, whatever the pair did.
    /// assert_eq!(a.mix3(&b, &c, 0.3, 1.0).to_24bit(), [180, 170, 160]);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn mix3(
        &self,
        second: &Color,
        third: &Color,
        pair_fraction: Float,
        third_fraction: Float,
    ) -> Color {
        self.mix(second, pair_fraction).mix(third, third_fraction)
    }
}

impl Default for Color {
    /// Create an instance of the default color, the origin of the XYZ color
    /// space, i.e., pitch black.
    #[inline]
    fn default() -> Self {
        Self::new(ColorSpace::Xyz, [0.0, 0.0, 0.0])
    }
}

impl FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// This method parses the hexadecimal notation for 24-bit sRGB colors.
    /// Parsing is case-insensitive and forgiving about everything except the
    /// digit count: characters that are not hexadecimal digits, including
    /// the customary `#` prefix, are ignored, and exactly six digits must
    /// remain. A failed parse returns the error without any partial result,
    /// so the caller's current color stays untouched.
    ///
    /// ```
    /// # use paintmix::Color;
    /// # use paintmix::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let beige = Color::from_str("#ECE7DE")?;
    /// assert_eq!(beige.to_24bit(), [236, 231, 222]);
    ///
    /// let same: Color = " ec e7 de ".parse()?;
    /// assert_eq!(same, beige);
    ///
    /// assert!(Color::from_str("#ECE7D").is_err());
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|[r, g, b]| Self::from_24bit(r, g, b))
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(&self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// Colors in different color spaces always differ; conversion is the
    /// caller's decision. Coordinates are normalized exactly like
    /// [`Color::hash`] normalizes them, so equal colors have equal hashes.
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(&self.coordinates);
        let n2 = to_eq_coordinates(&other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}])",
            self.space, c1, c2, c3
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// sRGB colors format in the uppercase hashed hexadecimal notation the
    /// application boundary exchanges. Colors in the other spaces format in
    /// CSS style with the `lab()` or `color()` function, respecting the
    /// formatter's precision and defaulting to 5 digits past the decimal.
    ///
    /// ```
    /// # use paintmix::{Color, ColorSpace};
    /// let beige = Color::from_24bit(236, 231, 222);
    /// assert_eq!(beige.to_string(), "#ECE7DE");
    /// assert_eq!(format!("{:.1}", beige.to(ColorSpace::Lab)), "lab(91.8 0.1 5)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, f)
    }
}

// ====================================================================================================================

/// The shade of text that stays legible over a colored background.
///
/// Swatch labels render in black over light paints and in white over dark
/// ones; the cutover sits at a relative luminance of 0.5. This is a pure
/// decision, not a formatting concern.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextShade {
    Black,
    White,
}

impl TextShade {
    /// The color of this text shade.
    pub fn color(&self) -> Color {
        match *self {
            Self::Black => rgb!(0, 0, 0),
            Self::White => rgb!(255, 255, 255),
        }
    }
}

// ====================================================================================================================

/// Helper struct for repeated two-color mixing.
///
/// A mixer converts both endpoint colors to linear light once and then
/// evaluates the blend for any number of mix fractions. That matches the
/// shape of a blend slider, which asks for dozens of fractions between the
/// same two paints while the user drags. [`Color::mix`] is the one-shot
/// convenience on top of this type.
///
/// ```
/// # use paintmix::{Color, Mixer};
/// let white = Color::from_24bit(255, 255, 255);
/// let black = Color::from_24bit(0, 0, 0);
///
/// let mixer = Mixer::new(&white, &black);
/// assert_eq!(mixer.at(0.0).to_24bit(), [255, 255, 255]);
/// assert_eq!(mixer.at(0.5).to_24bit(), [188, 188, 188]);
/// assert_eq!(mixer.at(1.0).to_24bit(), [0, 0, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct Mixer {
    start: [Float; 3],
    end: [Float; 3],
}

impl Mixer {
    /// Create a new mixer for the two colors.
    pub fn new(start: &Color, end: &Color) -> Self {
        Self {
            start: convert(start.space, ColorSpace::LinearSrgb, &start.coordinates),
            end: convert(end.space, ColorSpace::LinearSrgb, &end.coordinates),
        }
    }

    /// Compute the mixed color for the given fraction of the end color.
    ///
    /// The result is a linear sRGB color; gamma encoding happens when the
    /// caller quantizes or converts it.
    #[inline]
    pub fn at(&self, fraction: Float) -> Color {
        Color::new(
            ColorSpace::LinearSrgb,
            interpolate(fraction, &self.start, &self.end),
        )
    }
}

// ====================================================================================================================

/// Barycentric weights for the three-color blend visualizer.
///
/// The visualizer lets the user pick a blend by pointing inside a field with
/// three fixed anchor colors. Each anchor's weight is inversely proportional
/// to the squared distance from the pointer, and the three weights are
/// normalized to sum to one. The weights convert losslessly to and from the
/// sequential two-stage mix fractions that [`Color::mix3`] consumes, and the
/// individual weights are exactly the percentage shares the mix-ratio
/// readout displays.
///
/// ```
/// # use paintmix::MixWeights;
/// let weights = MixWeights::from_stages(0.5, 0.5);
/// assert!((weights.a() - 0.25).abs() < 1e-12);
/// assert!((weights.b() - 0.25).abs() < 1e-12);
/// assert!((weights.c() - 0.50).abs() < 1e-12);
///
/// let (pair_fraction, third_fraction) = weights.to_stages();
/// assert!((pair_fraction - 0.5).abs() < 1e-12);
/// assert!((third_fraction - 0.5).abs() < 1e-12);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug)]
pub struct MixWeights {
    inner: [Float; 3],
}

impl MixWeights {
    /// Create new mix weights, normalized to sum to one.
    ///
    /// The weights are expected to be non-negative. If they sum to zero or
    /// less, no anchor has a claim on the blend and all three weigh equally.
    pub fn new(a: Float, b: Float, c: Float) -> Self {
        let total = a + b + c;
        if total <= 0.0 {
            Self {
                inner: [1.0 / 3.0; 3],
            }
        } else {
            Self {
                inner: [a / total, b / total, c / total],
            }
        }
    }

    /// Compute the weights for a pointer position relative to the three
    /// anchor points.
    ///
    /// Weights fall off with the squared distance to each anchor. A pointer
    /// exactly on an anchor does not divide by zero; a small substitute
    /// distance makes that anchor dominate the blend instead.
    pub fn from_point(point: [Float; 2], anchors: &[[Float; 2]; 3]) -> Self {
        Self {
            inner: inverse_square_weights(point, anchors),
        }
    }

    /// Compute the weights equivalent to the sequential two-stage mix
    /// fractions.
    ///
    /// These are the percentage shares of the final blend:
    /// `(1−pair)·(1−third)` of the first color, `pair·(1−third)` of the
    /// second, and `third` of the third.
    pub fn from_stages(pair_fraction: Float, third_fraction: Float) -> Self {
        Self {
            inner: stages_to_weights(pair_fraction, third_fraction),
        }
    }

    /// Convert these weights to sequential two-stage mix fractions.
    ///
    /// Returns the fraction of the second color within the first pair and
    /// the fraction of the third color against that intermediate. When the
    /// pair weight vanishes, the pair fraction defaults to the midpoint.
    pub fn to_stages(&self) -> (Float, Float) {
        weights_to_stages(&self.inner)
    }

    /// Access the first anchor's weight.
    #[inline]
    pub fn a(&self) -> Float {
        self.inner[0]
    }

    /// Access the second anchor's weight.
    #[inline]
    pub fn b(&self) -> Float {
        self.inner[1]
    }

    /// Access the third anchor's weight.
    #[inline]
    pub fn c(&self) -> Float {
        self.inner[2]
    }

    /// Compute the gradient-field preview color for the three anchor colors.
    ///
    /// The preview averages the raw 24-bit channels. That is deliberately
    /// the cheaper algorithm for painting the live gradient field pixel by
    /// pixel; the numeric blend a user commits to goes through
    /// [`Color::mix3`] in linear light and generally differs.
    ///
    /// ```
    /// # use paintmix::{Color, MixWeights};
    /// let anchors = [
    ///     Color::from_24bit(236, 231, 222),
    ///     Color::from_24bit(214, 200, 183),
    ///     Color::from_24bit(180, 170, 160),
    /// ];
    /// let field = MixWeights::new(0.25, 0.25, 0.5).preview(&anchors);
    /// assert_eq!(field.to_24bit(), [203, 193, 181]);
    /// ```
    pub fn preview(&self, colors: &[Color; 3]) -> Color {
        let raw = [
            colors[0].to_24bit(),
            colors[1].to_24bit(),
            colors[2].to_24bit(),
        ];
        let [r, g, b] = weighted_average_24bit(&self.inner, &raw);

        Color::from_24bit(r, g, b)
    }
}

impl AsRef<[Float; 3]> for MixWeights {
    fn as_ref(&self) -> &[Float; 3] {
        &self.inner
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lrv_monotonicity() {
        let base = Color::from_24bit(120, 80, 40);

        for channel in 0..3 {
            let mut previous = -1.0;
            for value in (0..=255_u16).step_by(5) {
                let mut raw = base.to_24bit();
                raw[channel] = value as u8;
                let lrv = Color::from_24bit(raw[0], raw[1], raw[2]).lrv();
                assert!(
                    previous <= lrv,
                    "lrv decreased from {} to {} while raising channel {}",
                    previous,
                    lrv,
                    channel
                );
                previous = lrv;
            }
        }
    }

    #[test]
    fn test_lrv_solve_downscale() {
        for color in [
            Color::from_24bit(236, 231, 222),
            Color::from_24bit(36, 86, 194),
            Color::from_24bit(126, 141, 150),
        ] {
            let reachable = color.lrv() as u16;
            for target in (5..=reachable).step_by(5) {
                let target = target as Float;
                let solved = color.with_lrv(target);

                // Before quantization the solve is exact; the 24-bit result
                // can still be off by a few tenths.
                assert!(
                    (solved.luminance() * 100.0 - target).abs() < 1e-9,
                    "continuous solve missed target {}",
                    target
                );
                let [r, g, b] = solved.to_24bit();
                let quantized = Color::from_24bit(r, g, b).lrv();
                assert!(
                    (quantized - target).abs() <= 0.35,
                    "quantized lrv {} strayed from target {}",
                    quantized,
                    target
                );
            }
        }
    }

    #[test]
    fn test_lrv_solve_reference_points() {
        let beige = Color::from_24bit(236, 231, 222);
        let royal = Color::from_24bit(36, 86, 194);

        assert_eq!(beige.with_lrv(50.0).to_24bit(), [191, 187, 180]);
        assert_eq!(royal.with_lrv(10.0).to_24bit(), [34, 82, 186]);

        // Unreachable targets clip channels and shift hue; the beige cannot
        // reach 100 without going past white on red and blue.
        assert_eq!(beige.with_lrv(100.0).to_24bit(), [255, 255, 245]);
        assert_eq!(beige.with_lrv(150.0).to_24bit(), [255, 255, 245]);
        assert_eq!(beige.with_lrv(-10.0).to_24bit(), [0, 0, 0]);
    }

    #[test]
    fn test_mix_boundaries() {
        let a = Color::from_24bit(236, 231, 222);
        let b = Color::from_24bit(214, 200, 183);
        let c = Color::from_24bit(180, 170, 160);

        assert_eq!(a.mix(&b, 0.0).to_24bit(), a.to_24bit());
        assert_eq!(a.mix(&b, 1.0).to_24bit(), b.to_24bit());
        assert_eq!(a.mix3(&b, &c, 0.0, 0.0).to_24bit(), a.to_24bit());
        for pair_fraction in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(
                a.mix3(&b, &c, pair_fraction, 1.0).to_24bit(),
                c.to_24bit(),
                "a full third fraction must yield the third color at pair fraction {}",
                pair_fraction
            );
        }
    }

    #[test]
    fn test_mix_is_linear_light() {
        let white = Color::from_24bit(255, 255, 255);
        let black = Color::from_24bit(0, 0, 0);
        let mid = white.mix(&black, 0.5).to_24bit();

        assert_ne!(
            mid,
            [127, 127, 127],
            "gamma-space averaging would give 127s"
        );
        assert_eq!(mid, [188, 188, 188]);

        let a = Color::from_24bit(236, 231, 222);
        let b = Color::from_24bit(214, 200, 183);
        assert_eq!(a.mix(&b, 0.5).to_24bit(), [225, 216, 204]);
    }

    #[test]
    fn test_mix3_matches_chained_mix() {
        let a = Color::from_24bit(236, 231, 222);
        let b = Color::from_24bit(214, 200, 183);
        let c = Color::from_24bit(180, 170, 160);

        let direct = a.mix3(&b, &c, 0.3, 0.7);
        let chained = a.mix(&b, 0.3).mix(&c, 0.7);
        assert_eq!(direct, chained);
    }

    #[test]
    fn test_equality_and_hashing() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let color = Color::srgb(0.5, 0.25, Float::NAN);
        let normalized = Color::srgb(0.5, 0.25, 0.0);
        assert_eq!(color, normalized);

        let hash = |c: &Color| {
            let mut hasher = DefaultHasher::new();
            c.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(
            hash(&color),
            hash(&normalized),
            "equal colors must hash alike"
        );

        assert_ne!(
            Color::srgb(0.0, 0.0, 0.0),
            Color::new(ColorSpace::Xyz, [0.0, 0.0, 0.0]),
            "colors in different spaces never compare equal"
        );
    }

    #[test]
    fn test_display_formats() {
        let beige = Color::from_24bit(236, 231, 222);
        assert_eq!(beige.to_string(), "#ECE7DE");
        assert_eq!(Color::from_24bit(0, 1, 2).to_string(), "#000102");
        assert_eq!(
            beige.to(ColorSpace::Lab).to_string(),
            "lab(91.80099 0.1364 4.9712)"
        );
        assert_eq!(
            Color::new(ColorSpace::Xyz, [0.0, 1.0, 0.5]).to_string(),
            "color(xyz 0 1 0.5)"
        );
    }

    #[test]
    fn test_parse_failure_leaves_no_partial_state() {
        let result = Color::from_str("#ECE7");
        assert!(result.is_err(), "short input must not parse");
        let result = Color::try_from("#ECE7DE00");
        assert!(result.is_err(), "long input must not parse");
    }

    #[test]
    fn test_text_shade_colors() {
        assert_eq!(TextShade::Black.color().to_24bit(), [0, 0, 0]);
        assert_eq!(TextShade::White.color().to_24bit(), [255, 255, 255]);
    }

    #[test]
    fn test_weights_from_point_round_trip_stages() {
        let anchors = [[0.12, 0.12], [0.88, 0.12], [0.50, 0.88]];
        let weights = MixWeights::from_point([0.4, 0.6], &anchors);
        let (pair_fraction, third_fraction) = weights.to_stages();
        let back = MixWeights::from_stages(pair_fraction, third_fraction);

        assert!((weights.a() - back.a()).abs() < 1e-9);
        assert!((weights.b() - back.b()).abs() < 1e-9);
        assert!((weights.c() - back.c()).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_weights_split_evenly() {
        let weights = MixWeights::new(0.0, 0.0, 0.0);
        assert!((weights.a() - 1.0 / 3.0).abs() < 1e-12);
        assert!((weights.b() - 1.0 / 3.0).abs() < 1e-12);
        assert!((weights.c() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let beige = Color::from_24bit(236, 231, 222);
        let json = serde_json::to_string(&beige).expect("color must serialize");
        let back: Color = serde_json::from_str(&json).expect("color must deserialize");
        assert_eq!(beige, back);

        let weights = MixWeights::from_stages(0.25, 0.75);
        let json = serde_json::to_string(&weights).expect("weights must serialize");
        let back: MixWeights = serde_json::from_str(&json).expect("weights must deserialize");
        assert!((weights.a() - back.a()).abs() < 1e-12);
    }
}
