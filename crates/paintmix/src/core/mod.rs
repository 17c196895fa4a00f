mod blend;
mod conversion;
mod equality;
mod luminance;
mod math;
mod space;
mod string;

// blend
pub(crate) use blend::{
    interpolate, inverse_square_weights, stages_to_weights, weighted_average_24bit,
    weights_to_stages,
};

// conversion
pub(crate) use conversion::{convert, from_24bit, to_24bit};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::{normalize, to_eq_coordinates};

// luminance
pub(crate) use luminance::{
    light_reflectance_value, relative_luminance, rescale_luminance, LIGHT_BACKGROUND,
};

// math
pub(crate) use math::FloatExt;

// space
pub use space::ColorSpace;

// string
pub(crate) use string::{format, parse};
