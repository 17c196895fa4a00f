use super::{to_24bit, ColorSpace};
use crate::error::ColorFormatError;
use crate::Float;

/// Parse a 24-bit color in hexadecimal format.
///
/// This function ignores every character that is not a hexadecimal digit,
/// including the customary `#` prefix, whitespace, and separators, and then
/// requires exactly six digits to remain. Each pair of digits becomes one
/// unsigned byte. Any other digit count is a parse failure; the input is
/// never truncated or padded.
pub(crate) fn parse(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let mut digits = [0_u32; 6];
    let mut count = 0;

    for character in s.chars() {
        let Some(value) = character.to_digit(16) else {
            continue;
        };
        if count < digits.len() {
            digits[count] = value;
        }
        count += 1;
    }

    match count {
        0..=5 => Err(ColorFormatError::TooFewDigits(count)),
        6 => Ok([
            (16 * digits[0] + digits[1]) as u8,
            (16 * digits[2] + digits[3]) as u8,
            (16 * digits[4] + digits[5]) as u8,
        ]),
        _ => Err(ColorFormatError::TooManyDigits(count)),
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the 24-bit coordinates in hashed hexadecimal format.
///
/// The output is always seven characters, uppercase, with zero-padded
/// channels.
pub(crate) fn format_hex(
    coordinates: &[u8; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    f.write_fmt(format_args!(
        "#{:02X}{:02X}{:02X}",
        coordinates[0], coordinates[1], coordinates[2]
    ))
}

/// Format the color as a string.
///
/// sRGB colors format in the hashed hexadecimal notation the application
/// boundary exchanges, quantized to 24 bits. The other color spaces format
/// in CSS style with the `lab()` or `color()` function and space-separated
/// coordinates, respecting the formatter's precision and defaulting to 5
/// digits past the decimal. CSS mandates no trailing zeros, so coordinates
/// are rounded rather than formatted with fixed precision.
pub(crate) fn format(
    space: ColorSpace,
    coordinates: &[Float; 3],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let prefix = match space {
        ColorSpace::Srgb => {
            return format_hex(&to_24bit(space, coordinates), f);
        }
        ColorSpace::LinearSrgb => "color(linear-srgb ",
        ColorSpace::Xyz => "color(xyz ",
        ColorSpace::Lab => "lab(",
    };
    f.write_str(prefix)?;

    let factor = (10.0 as Float).powi(f.precision().unwrap_or(5) as i32);
    for (index, coordinate) in coordinates.iter().enumerate() {
        if coordinate.is_nan() {
            f.write_str("none")?;
        } else {
            let c = (coordinate * factor).round() / factor;
            if c == c.trunc() {
                f.write_fmt(format_args!("{:.0}", c))?;
            } else {
                f.write_fmt(format_args!("{}", c))?;
            }
        }

        if index < 2 {
            f.write_str(" ")?;
        }
    }

    f.write_str(")")
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, ColorFormatError};

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(parse("#ECE7DE")?, [0xec_u8, 0xe7, 0xde]);
        assert_eq!(parse("ece7de")?, [0xec_u8, 0xe7, 0xde]);
        assert_eq!(parse("  #eC e7-De ")?, [0xec_u8, 0xe7, 0xde]);
        assert_eq!(parse("#000000")?, [0_u8, 0, 0]);

        assert_eq!(parse(""), Err(ColorFormatError::TooFewDigits(0)));
        assert_eq!(parse("#ECE7D"), Err(ColorFormatError::TooFewDigits(5)));
        assert_eq!(parse("#ECE7DE1F"), Err(ColorFormatError::TooManyDigits(8)));
        assert_eq!(parse("#xyz"), Err(ColorFormatError::TooFewDigits(0)));

        Ok(())
    }

    #[test]
    fn test_hex_round_trip() {
        for r in (0..=255_u16).step_by(17) {
            for g in (0..=255_u16).step_by(17) {
                for b in (0..=255_u16).step_by(17) {
                    let formatted = format!("#{:02X}{:02X}{:02X}", r, g, b);
                    let parsed = parse(&formatted).expect("well-formed hex must parse");
                    assert_eq!(
                        parsed,
                        [r as u8, g as u8, b as u8],
                        "round trip failed for {}",
                        formatted
                    );
                }
            }
        }
    }
}
