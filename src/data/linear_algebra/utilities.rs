//! Helper algorithms for the `linear_algebra` module.
use ndarray::{ArrayView, Dimension, Zip};

use crate::data::linear_algebra::error::{Error, Result};
use crate::data::linear_algebra::traits::Element;

/// Validate an `(offset, length)` pair against the extent of a source along one axis.
///
/// # Arguments
///
/// * `names`: Names of the offset and length arguments, used in error messages.
/// * `offset`: Start of the region, should be in `[0, extent]`.
/// * `length`: Length of the region, should be in `[0, extent - offset]`. Defaults to the remainder
/// of the source.
/// * `extent`: Size of the source along this axis.
/// * `source`: Description of the source extent, for example `"len(src)"`.
///
/// # Return value
///
/// The length of the region, with the default filled in.
pub(super) fn check_region(
    names: (&str, &str),
    offset: usize,
    length: Option<usize>,
    extent: usize,
    source: &str,
) -> Result<usize> {
    let (offset_name, length_name) = names;
    if offset > extent {
        return Err(Error::bound(offset_name, offset, extent, format!(" when {}={}", source, extent)));
    }

    let max_length = extent - offset;
    let length = length.unwrap_or(max_length);
    if length > max_length {
        return Err(Error::bound(
            length_name, length, max_length,
            format!(" when {}={} and {}={}", offset_name, offset, source, extent),
        ));
    }

    Ok(length)
}

/// Whether two arrays have the same shape, and all values pairwise differ by at most `tolerance`.
pub(super) fn approx_equal_arrays<F: Element, D: Dimension>(
    left: &ArrayView<'_, F, D>,
    right: &ArrayView<'_, F, D>,
    tolerance: F,
) -> bool {
    left.shape() == right.shape()
        && Zip::from(left).and(right).all(|&x, &y| x.within(y, tolerance))
}
