//! # Paintmix
//!
//! Paintmix is the colorimetry core of a paint-color mixing calculator. It
//! implements the pure math that every mixer screen depends on, and nothing
//! else: the surrounding forms, sliders, canvases, and pantry inventory are
//! expected to live in a UI layer that calls into this crate.
//!
//!
//! ## 1. Overview
//!
//! Paintmix's main abstractions are:
//!
//!   * [`Color`] combines a [`ColorSpace`] with three [`Float`] coordinates.
//!     Its methods expose conversion between color spaces, 24-bit
//!     quantization, light reflectance values with the inverse
//!     [`Color::with_lrv`] solve, linear-light mixing, and the black-or-white
//!     [`TextShade`] decision for legible swatch labels.
//!   * [`Mixer`] prepares a two-color blend once and then evaluates it for
//!     any number of mix fractions, which is the shape a slider needs.
//!   * [`MixWeights`] models the three-anchor blend visualizer: normalized
//!     inverse-square-distance weights, their conversion to and from the
//!     sequential two-stage mix fractions, and the raw-RGB gradient preview.
//!   * The [`catalog`] module ships a small table of factory paint colors
//!     with their derived metrics.
//!
//! All operations are pure, synchronous, and allocation-free. Conversions
//! route through XYZ (D65); blending happens in linear light, never in
//! gamma-encoded space.
//!
//!
//! ## 2. Optional Features
//!
//! Paintmix supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives `serde::Serialize` and `serde::Deserialize` for
//!     the public value types, so that an application layer can store or
//!     exchange colors without this crate prescribing a format. This feature
//!     is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod catalog;
pub mod error;
mod object;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::ColorSpace;
pub use object::{Color, Mixer, MixWeights, TextShade};
