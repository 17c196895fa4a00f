use crate::Float;

/// An extension trait for float-width-dependent constants.
pub(crate) trait FloatExt {
    /// The factor for reducing resolution ahead of equality testing and
    /// hashing. Since the canonical representation at the application
    /// boundary is 8-bit sRGB, colors do not need anywhere near full float
    /// resolution to be distinguishable.
    const ROUNDING_FACTOR: Self;
}

#[cfg(feature = "f64")]
impl FloatExt for Float {
    const ROUNDING_FACTOR: Float = 1e9;
}

#[cfg(not(feature = "f64"))]
impl FloatExt for Float {
    const ROUNDING_FACTOR: Float = 1e4;
}
