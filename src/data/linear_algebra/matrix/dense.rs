//! # Dense matrix
//!
//! Row-major storage of all values. Either both dimensions are zero, or both are positive.
use std::fmt;
use std::fmt::Display;

use log::debug;
use ndarray::{Array2, ArrayView2, ArrayViewMut2, s};

use crate::data::linear_algebra::error::{Error, Result};
use crate::data::linear_algebra::matrix::{fmt_rows, MatrixBase};
use crate::data::linear_algebra::ResizeType;
use crate::data::linear_algebra::source::Source;
use crate::data::linear_algebra::traits::Element;

/// Owns its values, stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<F> {
    data: Array2<F>,
}

impl<F: Element> Matrix<F> {
    /// Create a matrix without rows or columns.
    pub fn new() -> Self {
        Self { data: Array2::zeros((0, 0)) }
    }

    /// Create a matrix with all values zero.
    ///
    /// # Errors
    ///
    /// `InvalidShape` if exactly one of the dimensions is zero.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Result<Self> {
        check_shape(nr_rows, nr_columns)?;

        Ok(Self { data: Array2::zeros((nr_rows, nr_columns)) })
    }

    /// Create a matrix from an optional shape.
    ///
    /// Without a shape, the matrix is empty.
    ///
    /// # Errors
    ///
    /// `InvalidShape` if exactly one of the dimensions is zero.
    pub fn construct(size: Option<(usize, usize)>) -> Result<Self> {
        match size {
            Some((nr_rows, nr_columns)) => Self::zeros(nr_rows, nr_columns),
            None => Ok(Self::new()),
        }
    }

    /// Create a matrix by copying another matrix, or a two dimensional array.
    ///
    /// # Errors
    ///
    /// `ArgumentType` if the source is not a matrix, `InvalidShape` if the source has a zero
    /// extent along exactly one axis.
    pub fn from_source<'s>(source: impl Into<Source<'s, F>>) -> Result<Self> {
        let source = source.into().into_matrix("src")?;
        let (nr_rows, nr_columns) = source.dim();
        check_shape(nr_rows, nr_columns)?;

        Ok(Self::copy_of(source))
    }

    /// Create a matrix from its rows.
    ///
    /// # Errors
    ///
    /// `InvalidShape` if the rows are not all of the same length, or if they are all empty.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self> {
        let nr_rows = rows.len();
        let nr_columns = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != nr_columns) {
            return Err(Error::InvalidShape(format!(
                "rows should all have length {}, found a row of length {}", nr_columns, row.len(),
            )));
        }
        check_shape(nr_rows, nr_columns)?;

        let values = rows.into_iter().flatten().collect::<Vec<_>>();
        Ok(Self { data: Array2::from_shape_fn((nr_rows, nr_columns), |(i, j)| values[i * nr_columns + j]) })
    }

    /// Copy a view, which may have a zero extent along one axis only.
    pub(crate) fn copy_of(view: ArrayView2<'_, F>) -> Self {
        if view.is_empty() {
            Self::new()
        } else {
            Self { data: Array2::from_shape_fn(view.dim(), |index| view[index]) }
        }
    }

    /// Change the shape of this matrix.
    ///
    /// Views into this matrix can't exist while resizing, as they borrow it.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: The new number of rows.
    /// * `nr_columns`: The new number of columns.
    /// * `resize_type`: What to do with the existing values. `CopyData` keeps the values in the
    /// region that both shapes have in common.
    ///
    /// # Errors
    ///
    /// `InvalidShape` if exactly one of the new dimensions is zero. The matrix is not changed.
    pub fn resize(&mut self, nr_rows: usize, nr_columns: usize, resize_type: ResizeType) -> Result<()> {
        check_shape(nr_rows, nr_columns)?;
        debug!(
            "resizing {}x{} matrix to {}x{} ({:?})",
            self.nr_rows(), self.nr_columns(), nr_rows, nr_columns, resize_type,
        );

        let mut data = Array2::zeros((nr_rows, nr_columns));
        match resize_type {
            ResizeType::SetZero => {},
            ResizeType::Undefined => if self.size() == (nr_rows, nr_columns) {
                return Ok(());
            },
            ResizeType::CopyData => {
                let rows = nr_rows.min(self.nr_rows());
                let columns = nr_columns.min(self.nr_columns());
                data.slice_mut(s![..rows, ..columns]).assign(&self.data.slice(s![..rows, ..columns]));
            },
        }
        self.data = data;

        Ok(())
    }

    /// Get the data of this matrix.
    pub fn into_inner(self) -> Array2<F> {
        self.data
    }
}

fn check_shape(nr_rows: usize, nr_columns: usize) -> Result<()> {
    if (nr_rows == 0) != (nr_columns == 0) {
        Err(Error::InvalidShape(format!(
            "either both dimensions should be zero or both should be positive, got {}x{}", nr_rows, nr_columns,
        )))
    } else {
        Ok(())
    }
}

impl<F: Element> Default for Matrix<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Element> MatrixBase<F> for Matrix<F> {
    fn as_array(&self) -> ArrayView2<'_, F> {
        self.data.view()
    }

    fn as_array_mut(&mut self) -> ArrayViewMut2<'_, F> {
        self.data.view_mut()
    }
}

impl<F: Element> Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_rows(self.as_array(), f)
    }
}
