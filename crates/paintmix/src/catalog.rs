//! Utility module with factory paint colors.
//!
//! The mixer UI offers a small built-in selection of well-known manufacturer
//! colors so that a blend can start from something real. Each entry carries
//! the manufacturer, product line, marketing name, and color code from the
//! datasheet; LRV and CIELAB are derived from the color on demand rather
//! than stored, like every other view in this crate. Managing a user's own
//! paint inventory is the application's concern, not this module's.

use crate::{rgb, Color, ColorSpace, Float};

/// A paint color as cataloged by its manufacturer.
#[derive(Clone, Debug)]
pub struct PaintColor {
    maker: &'static str,
    line: &'static str,
    name: &'static str,
    code: &'static str,
    color: Color,
}

impl PaintColor {
    const fn new(
        maker: &'static str,
        line: &'static str,
        name: &'static str,
        code: &'static str,
        color: Color,
    ) -> Self {
        Self {
            maker,
            line,
            name,
            code,
            color,
        }
    }

    /// Access the manufacturer.
    #[inline]
    pub fn maker(&self) -> &'static str {
        self.maker
    }

    /// Access the product line.
    #[inline]
    pub fn line(&self) -> &'static str {
        self.line
    }

    /// Access the marketing name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Access the manufacturer's color code.
    #[inline]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Access the color.
    pub fn color(&self) -> Color {
        self.color.clone()
    }

    /// Compute the light reflectance value of this paint.
    ///
    /// ```
    /// # use paintmix::catalog::find_by_code;
    /// let dove = find_by_code("OC-17").expect("White Dove ships with the catalog");
    /// assert_eq!(dove.lrv(), 81.3);
    /// ```
    pub fn lrv(&self) -> Float {
        self.color.lrv()
    }

    /// Compute the CIELAB coordinates of this paint.
    pub fn lab(&self) -> [Float; 3] {
        *self.color.to(ColorSpace::Lab).as_ref()
    }
}

/// The built-in factory colors.
///
/// A deliberately small table: the popular whites and grays people actually
/// tint from, plus one saturated blue to exercise the darker end of the LRV
/// scale.
pub const FACTORY_COLORS: [PaintColor; 5] = [
    PaintColor::new(
        "Benjamin Moore",
        "Interior Eggshell",
        "White Dove",
        "OC-17",
        rgb!(234, 233, 226),
    ),
    PaintColor::new(
        "Sherwin-Williams",
        "Interior Matte",
        "Alabaster",
        "SW 7008",
        rgb!(238, 234, 225),
    ),
    PaintColor::new(
        "Benjamin Moore",
        "Advance Satin",
        "Revere Pewter",
        "HC-172",
        rgb!(204, 199, 185),
    ),
    PaintColor::new(
        "Sherwin-Williams",
        "Interior Satin",
        "Cadet",
        "SW 9130",
        rgb!(126, 141, 150),
    ),
    PaintColor::new(
        "PPG",
        "Interior Semi-Gloss",
        "Royal Blue",
        "PPG1159-7",
        rgb!(36, 86, 194),
    ),
];

/// Look up a factory color by its manufacturer code.
///
/// The comparison ignores ASCII case, so `"oc-17"` finds White Dove.
pub fn find_by_code(code: &str) -> Option<&'static PaintColor> {
    let catalog: &'static [PaintColor; 5] = &FACTORY_COLORS;
    catalog
        .iter()
        .find(|paint| paint.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_catalog_metrics() {
        let expected = [
            ("OC-17", 81.3),
            ("SW 7008", 82.5),
            ("HC-172", 57.2),
            ("SW 9130", 25.7),
            ("PPG1159-7", 10.9),
        ];

        for (code, lrv) in expected {
            let paint = find_by_code(code).expect("every expected code ships with the catalog");
            assert_eq!(paint.lrv(), lrv, "wrong LRV for {}", code);
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        let dove = find_by_code("oc-17").expect("lookup must ignore case");
        assert_eq!(dove.name(), "White Dove");
        assert_eq!(dove.maker(), "Benjamin Moore");
        assert!(find_by_code("OC-9999").is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        for (index, paint) in FACTORY_COLORS.iter().enumerate() {
            for other in FACTORY_COLORS.iter().skip(index + 1) {
                assert!(
                    !paint.code().eq_ignore_ascii_case(other.code()),
                    "duplicate catalog code {}",
                    paint.code()
                );
            }
        }
    }

    #[test]
    fn test_labels_stay_legible() {
        use crate::TextShade;

        let dove = find_by_code("OC-17").expect("White Dove ships with the catalog");
        assert_eq!(dove.color().text_shade(), TextShade::Black);

        let royal = find_by_code("PPG1159-7").expect("Royal Blue ships with the catalog");
        assert_eq!(royal.color().text_shade(), TextShade::White);
    }
}
