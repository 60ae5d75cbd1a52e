//! # Sub-vector
//!
//! A view into a contiguous range of the values of a vector, a matrix row or an external array.
//! The view borrows its source, so it can't outlive it, and the source can't be changed through
//! any other path while the view exists.
use std::fmt;
use std::fmt::Display;

use log::trace;
use ndarray::{ArrayView1, ArrayViewMut1, s};

use crate::data::linear_algebra::error::Result;
use crate::data::linear_algebra::source::SourceMut;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::utilities::check_region;
use crate::data::linear_algebra::vector::{fmt_values, VectorBase};

/// Borrows a range of values, does not own them.
#[derive(Debug)]
pub struct SubVector<'a, F> {
    data: ArrayViewMut1<'a, F>,
}

impl<'a, F: Element> SubVector<'a, F> {
    /// Create a view into a range of a vector or of a one dimensional array.
    ///
    /// # Arguments
    ///
    /// * `source`: Vector, sub-vector or one dimensional array to borrow from.
    /// * `offset`: Index of the first element of the range, in `[0, len(source)]`.
    /// * `length`: Number of elements in the range, in `[0, len(source) - offset]`. Defaults to all
    /// remaining elements.
    ///
    /// # Errors
    ///
    /// `ArgumentType` if the source is not a vector, `IndexOutOfRange` if the range doesn't fit.
    pub fn new(source: impl Into<SourceMut<'a, F>>, offset: usize, length: Option<usize>) -> Result<Self> {
        Self::from_view(source.into().into_vector("src")?, offset, length)
    }

    pub(crate) fn from_view(view: ArrayViewMut1<'a, F>, offset: usize, length: Option<usize>) -> Result<Self> {
        let length = check_region(("offset", "length"), offset, length, view.len(), "len(src)")?;
        trace!("sub-vector at offset {} of length {} into a source of length {}", offset, length, view.len());

        Ok(Self { data: view.slice_move(s![offset..offset + length]) })
    }

    /// Release the view, keeping the borrow of the source.
    pub fn into_array(self) -> ArrayViewMut1<'a, F> {
        self.data
    }
}

impl<F: Element> VectorBase<F> for SubVector<'_, F> {
    fn as_array(&self) -> ArrayView1<'_, F> {
        self.data.view()
    }

    fn as_array_mut(&mut self) -> ArrayViewMut1<'_, F> {
        self.data.view_mut()
    }
}

impl<F: Element> Display for SubVector<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_values(self.as_array(), f)
    }
}
