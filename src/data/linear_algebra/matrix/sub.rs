//! # Sub-matrix
//!
//! A view into a rectangular region of a matrix or of an external two dimensional array. Unlike a
//! `Matrix`, a region may have a zero extent along one axis only.
use std::fmt;
use std::fmt::Display;

use log::trace;
use ndarray::{ArrayView2, ArrayViewMut2, s};

use crate::data::linear_algebra::error::Result;
use crate::data::linear_algebra::matrix::{fmt_rows, MatrixBase};
use crate::data::linear_algebra::source::SourceMut;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::utilities::check_region;

/// Borrows a region of values, does not own them.
#[derive(Debug)]
pub struct SubMatrix<'a, F> {
    data: ArrayViewMut2<'a, F>,
}

impl<'a, F: Element> SubMatrix<'a, F> {
    /// Create a view into a region of a matrix or of a two dimensional array.
    ///
    /// # Arguments
    ///
    /// * `source`: Matrix, sub-matrix or two dimensional array to borrow from.
    /// * `row_offset`: Index of the first row of the region.
    /// * `nr_rows`: Number of rows in the region, defaults to all remaining rows.
    /// * `column_offset`: Index of the first column of the region.
    /// * `nr_columns`: Number of columns in the region, defaults to all remaining columns.
    ///
    /// # Errors
    ///
    /// `ArgumentType` if the source is not a matrix, `IndexOutOfRange` if the region doesn't fit.
    pub fn new(
        source: impl Into<SourceMut<'a, F>>,
        row_offset: usize,
        nr_rows: Option<usize>,
        column_offset: usize,
        nr_columns: Option<usize>,
    ) -> Result<Self> {
        Self::from_view(source.into().into_matrix("src")?, row_offset, nr_rows, column_offset, nr_columns)
    }

    pub(crate) fn from_view(
        view: ArrayViewMut2<'a, F>,
        row_offset: usize,
        nr_rows: Option<usize>,
        column_offset: usize,
        nr_columns: Option<usize>,
    ) -> Result<Self> {
        let (source_rows, source_columns) = view.dim();
        let nr_rows = check_region(("row_offset", "rows"), row_offset, nr_rows, source_rows, "nr_rows(src)")?;
        let nr_columns = check_region(
            ("column_offset", "columns"), column_offset, nr_columns, source_columns, "nr_columns(src)",
        )?;
        trace!(
            "sub-matrix of {}x{} at ({}, {}) into a {}x{} source",
            nr_rows, nr_columns, row_offset, column_offset, source_rows, source_columns,
        );

        Ok(Self {
            data: view.slice_move(s![row_offset..row_offset + nr_rows, column_offset..column_offset + nr_columns]),
        })
    }

    /// Release the view, keeping the borrow of the source.
    pub fn into_array(self) -> ArrayViewMut2<'a, F> {
        self.data
    }
}

impl<F: Element> MatrixBase<F> for SubMatrix<'_, F> {
    fn as_array(&self) -> ArrayView2<'_, F> {
        self.data.view()
    }

    fn as_array_mut(&mut self) -> ArrayViewMut2<'_, F> {
        self.data.view_mut()
    }
}

impl<F: Element> Display for SubMatrix<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_rows(self.as_array(), f)
    }
}
