//! # Traits for elements of dense data structures
//!
//! Containers store floating point values. The `Element` trait collects the bounds needed to
//! store, compare and print them, so that the container types don't need to repeat them.
use std::fmt::{Debug, Display};

use num_traits::{Float, NumCast};

use crate::data::linear_algebra::DEFAULT_TOLERANCE;

/// Element of a `Vector` or `Matrix` type.
///
/// Implemented for every type satisfying the bounds, in practice `f32` and `f64`.
pub trait Element: Float + Display + Debug + Default + 'static {
    /// The tolerance used by `equal`, converted to this type.
    ///
    /// Falls back to zero (exact comparison) if the type can't represent the default.
    fn default_tolerance() -> Self {
        <Self as NumCast>::from(DEFAULT_TOLERANCE).unwrap_or_else(Self::zero)
    }

    /// Whether two values differ by at most `tolerance`.
    ///
    /// Exactly equal values (including equal infinities) are always within tolerance.
    fn within(self, other: Self, tolerance: Self) -> bool {
        self == other || (self - other).abs() <= tolerance
    }
}

impl<T: Float + Display + Debug + Default + 'static> Element for T {}
