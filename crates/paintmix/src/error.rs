//! Utility module with paintmix's errors.

/// An erroneous color format.
///
/// Hexadecimal color input is sanitized before validation: every character
/// that is not a hexadecimal digit is ignored. What remains must be exactly
/// six digits. Both variants carry the number of digits that were actually
/// found, and a failed parse leaves the caller's current color untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with fewer than six hexadecimal digits. For example,
    /// `#ece7d` has five, and `#garnet` has only the two digits `a` and `e`.
    TooFewDigits(usize),

    /// A color format with more than six hexadecimal digits. For example,
    /// `#AABBCCDD` has eight.
    TooManyDigits(usize),
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::TooFewDigits(count) => f.write_fmt(format_args!(
                "color format should have 6 hexadecimal digits but has only {}",
                count
            )),
            Self::TooManyDigits(count) => f.write_fmt(format_args!(
                "color format should have 6 hexadecimal digits but has {}",
                count
            )),
        }
    }
}

impl std::error::Error for ColorFormatError {}
