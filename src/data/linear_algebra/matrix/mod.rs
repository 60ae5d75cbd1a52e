//! # Matrix types
//!
//! An owning, row-major `Matrix` and a borrowing `SubMatrix`. The `MatrixBase` trait defines the
//! operations available for both, including reading and writing through index expressions.
use std::fmt::{self, Debug, Display};

use itertools::Itertools;
use log::debug;
use ndarray::{ArrayView2, ArrayViewMut2, Axis};

pub use dense::Matrix;
pub use sub::SubMatrix;

use crate::data::linear_algebra::error::{Error, Result};
use crate::data::linear_algebra::index::{assignment_target, check_point, Index, MatrixPlan, normalize_matrix, plan_matrix};
use crate::data::linear_algebra::source::Source;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::TransposeType;
use crate::data::linear_algebra::utilities::approx_equal_arrays;
use crate::data::linear_algebra::vector::SubVector;

mod dense;
mod sub;

/// Defines basic ways to read and change a matrix, regardless of ownership.
pub trait MatrixBase<F: Element>: Display + Debug {
    /// The values as an array view, without copying.
    fn as_array(&self) -> ArrayView2<'_, F>;
    /// The values as a mutable array view, without copying.
    ///
    /// Changes made through the view are changes to this matrix.
    fn as_array_mut(&mut self) -> ArrayViewMut2<'_, F>;

    /// Get the number of rows in this matrix.
    fn nr_rows(&self) -> usize {
        self.as_array().nrows()
    }

    /// Get the number of columns in this matrix.
    fn nr_columns(&self) -> usize {
        self.as_array().ncols()
    }

    /// Get the shape of this matrix as `(rows, columns)`.
    fn size(&self) -> (usize, usize) {
        (self.nr_rows(), self.nr_columns())
    }

    /// Get the value at coordinate (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `NotSupported` if an index is negative, `IndexOutOfRange` if it is too large.
    fn get(&self, row: isize, column: isize) -> Result<F> {
        let row = check_point(row, self.nr_rows(), "row")?;
        let column = check_point(column, self.nr_columns(), "column")?;
        Ok(self.as_array()[[row, column]])
    }

    /// Set the value at coordinate (`row`, `column`) to `value`.
    ///
    /// # Errors
    ///
    /// `NotSupported` if an index is negative, `IndexOutOfRange` if it is too large.
    fn set(&mut self, row: isize, column: isize, value: F) -> Result<()> {
        let row = check_point(row, self.nr_rows(), "row")?;
        let column = check_point(column, self.nr_columns(), "column")?;
        self.as_array_mut()[[row, column]] = value;
        Ok(())
    }

    /// Overwrite all values with those of a source, or of its transpose.
    ///
    /// # Errors
    ///
    /// `ArgumentType` if the source is not a matrix, `SizeMismatch` if the (transposed) shape of
    /// the source differs from the shape of this matrix.
    fn copy_from<'s>(&mut self, source: impl Into<Source<'s, F>>, transpose: TransposeType) -> Result<()> {
        let source = source.into().into_matrix("src")?;
        let source = match transpose {
            TransposeType::NoTrans => source,
            TransposeType::Trans => source.reversed_axes(),
        };
        if source.dim() != self.size() {
            let (nr_rows, nr_columns) = self.size();
            return Err(Error::SizeMismatch {
                expected: vec![nr_rows, nr_columns],
                found: source.shape().to_vec(),
            });
        }

        self.as_array_mut().assign(&source);
        Ok(())
    }

    /// Copy the values into a new, owning, matrix.
    ///
    /// Views may have a zero extent along one axis only, such a shape is copied as an empty
    /// matrix.
    fn to_matrix(&self) -> Matrix<F> {
        Matrix::copy_of(self.as_array())
    }

    /// Copy the values into nested `Vec`s, row by row.
    fn to_rows(&self) -> Vec<Vec<F>> {
        self.as_array().rows().into_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Whether the other matrix has the same shape, and each value differs at most `tolerance`
    /// from the value at the same coordinate in this matrix.
    fn approx_equal<M: MatrixBase<F> + ?Sized>(&self, other: &M, tolerance: F) -> bool {
        approx_equal_arrays(&self.as_array(), &other.as_array(), tolerance)
    }

    /// Whether the other matrix is equal to this one, within the default tolerance.
    fn equal<M: MatrixBase<F> + ?Sized>(&self, other: &M) -> bool {
        self.approx_equal(other, F::default_tolerance())
    }

    /// Borrow a rectangular region of this matrix.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the region doesn't fit inside this matrix.
    fn range(
        &mut self,
        row_offset: usize,
        nr_rows: usize,
        column_offset: usize,
        nr_columns: usize,
    ) -> Result<SubMatrix<'_, F>> {
        SubMatrix::from_view(self.as_array_mut(), row_offset, Some(nr_rows), column_offset, Some(nr_columns))
    }

    /// Borrow a single row of this matrix as a vector.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the row doesn't exist.
    fn row(&mut self, row: usize) -> Result<SubVector<'_, F>> {
        if row >= self.nr_rows() {
            return Err(Error::IndexOutOfRange(format!(
                "row index {} is out of bounds for length {}", row, self.nr_rows(),
            )));
        }

        SubVector::from_view(self.as_array_mut().index_axis_move(Axis(0), row), 0, None)
    }

    /// Read through an index expression.
    ///
    /// Pairs of integers give a value. Contiguous selections (slices with step one, possibly
    /// combined with an integer) borrow a region of this matrix. Stepped selections copy: into a
    /// sequence when combined with an integer, into a table otherwise.
    ///
    /// A single integer or slice selects rows, except on matrices with a single row or column,
    /// where it selects along the other axis.
    ///
    /// # Errors
    ///
    /// `InvalidIndexType` for expressions other than integers, slices and pairs of those,
    /// `NotSupported` for negative integers and `IndexOutOfRange` for selections that don't fit.
    fn select(&mut self, index: impl Into<Index>) -> Result<MatrixSelection<'_, F>> {
        let shape = self.size();
        let plan = plan_matrix(normalize_matrix(&index.into(), shape)?, shape)?;

        Ok(match plan {
            MatrixPlan::Scalar { row, column } => MatrixSelection::Scalar(self.as_array()[[row, column]]),
            MatrixPlan::View { row_offset, nr_rows, column_offset, nr_columns } => {
                MatrixSelection::View(self.range(row_offset, nr_rows, column_offset, nr_columns)?)
            },
            MatrixPlan::Gather(coordinates) => {
                debug!("copying {} values out of a {}x{} matrix", coordinates.len(), shape.0, shape.1);
                let values = self.as_array();
                MatrixSelection::Values(coordinates.into_iter().map(|(i, j)| values[[i, j]]).collect())
            },
            MatrixPlan::Grid { rows, columns } => {
                debug!("copying {}x{} values out of a {}x{} matrix", rows.len(), columns.len(), shape.0, shape.1);
                let values = self.as_array();
                MatrixSelection::Table(rows.into_iter()
                    .map(|i| columns.iter().map(|&j| values[[i, j]]).collect())
                    .collect())
            },
        })
    }

    /// Write a single value through an index expression.
    ///
    /// Only pairs of integers within bounds are supported.
    ///
    /// # Errors
    ///
    /// `InvalidIndexType` for every other expression.
    fn assign(&mut self, index: impl Into<Index>, value: F) -> Result<()> {
        let (row, column) = assignment_target(&index.into(), self.size())?;
        self.as_array_mut()[[row, column]] = value;
        Ok(())
    }
}

/// The result of reading a matrix through an index expression.
#[derive(Debug)]
pub enum MatrixSelection<'a, F> {
    /// A single value.
    Scalar(F),
    /// A borrowed region of the matrix.
    View(SubMatrix<'a, F>),
    /// Values copied from a single row or column.
    Values(Vec<F>),
    /// Values copied from several rows and columns, row by row.
    Table(Vec<Vec<F>>),
}

impl<'a, F> MatrixSelection<'a, F> {
    /// The value, if a single one was selected.
    pub fn into_scalar(self) -> Option<F> {
        match self {
            MatrixSelection::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// The view, if a region was borrowed.
    pub fn into_view(self) -> Option<SubMatrix<'a, F>> {
        match self {
            MatrixSelection::View(view) => Some(view),
            _ => None,
        }
    }

    /// The values, if they were copied from a single row or column.
    pub fn into_values(self) -> Option<Vec<F>> {
        match self {
            MatrixSelection::Values(values) => Some(values),
            _ => None,
        }
    }

    /// The values, if they were copied from several rows and columns.
    pub fn into_table(self) -> Option<Vec<Vec<F>>> {
        match self {
            MatrixSelection::Table(values) => Some(values),
            _ => None,
        }
    }
}

/// Whether two matrices have the same shape and their values are pairwise within `tolerance`.
pub fn approx_equal_matrix<F, A, B>(left: &A, right: &B, tolerance: F) -> bool
where
    F: Element,
    A: MatrixBase<F> + ?Sized,
    B: MatrixBase<F> + ?Sized,
{
    left.approx_equal(right, tolerance)
}

fn fmt_rows<F: Display>(values: ArrayView2<'_, F>, f: &mut fmt::Formatter) -> fmt::Result {
    if values.is_empty() {
        return write!(f, "[ ]");
    }

    writeln!(f, "[")?;
    let rows = values.rows().into_iter().map(|row| format!("  {}", row.iter().format(" ")));
    write!(f, "{} ]", rows.format("\n"))
}
