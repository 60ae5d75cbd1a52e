//! # Arguments for construction and copying
//!
//! Containers can be created from, copied from, and viewed into two families of values: the
//! containers of this crate, and external dense arrays (`ndarray` arrays and views, or slices).
//!
//! `Source` describes a value that is only read, `SourceMut` one that a view will alias. Both are
//! closed enums; conversions exist from all supported types, and each operation matches on the
//! variants it accepts.
use ndarray::{Array, ArrayView, ArrayView1, ArrayView2, ArrayViewD, ArrayViewMut, ArrayViewMut1,
              ArrayViewMut2, ArrayViewMutD, Dimension, Ix1, Ix2};

use crate::data::linear_algebra::error::{Error, Result};
use crate::data::linear_algebra::matrix::{Matrix, MatrixBase, SubMatrix};
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::{SubVector, Vector, VectorBase};

/// A value to read from.
#[derive(Debug, Clone)]
pub enum Source<'a, F> {
    /// A `Vector` or `SubVector`.
    Vector(ArrayView1<'a, F>),
    /// A `Matrix` or `SubMatrix`.
    Matrix(ArrayView2<'a, F>),
    /// An external array of any rank.
    Array(ArrayViewD<'a, F>),
}

impl<'a, F> Source<'a, F> {
    /// Human readable description of the family and shape of this source.
    pub fn describe(&self) -> String {
        match self {
            Source::Vector(view) => format!("a vector of length {}", view.len()),
            Source::Matrix(view) => format!("a {}x{} matrix", view.nrows(), view.ncols()),
            Source::Array(view) => format!("a {}-D array of shape {:?}", view.ndim(), view.shape()),
        }
    }

    /// Read this source as a vector.
    ///
    /// # Errors
    ///
    /// If the source is a matrix, or an external array that is not one dimensional.
    pub fn into_vector(self, argument: &'static str) -> Result<ArrayView1<'a, F>> {
        match self {
            Source::Vector(view) => Ok(view),
            Source::Array(view) if view.ndim() == 1 => view.into_dimensionality::<Ix1>()
                .map_err(|error| type_error(argument, VECTOR, error.to_string())),
            other => Err(type_error(argument, VECTOR, other.describe())),
        }
    }

    /// Read this source as a matrix.
    ///
    /// # Errors
    ///
    /// If the source is a vector, or an external array that is not two dimensional.
    pub fn into_matrix(self, argument: &'static str) -> Result<ArrayView2<'a, F>> {
        match self {
            Source::Matrix(view) => Ok(view),
            Source::Array(view) if view.ndim() == 2 => view.into_dimensionality::<Ix2>()
                .map_err(|error| type_error(argument, MATRIX, error.to_string())),
            other => Err(type_error(argument, MATRIX, other.describe())),
        }
    }
}

/// A value to alias with a view.
#[derive(Debug)]
pub enum SourceMut<'a, F> {
    /// A `Vector` or `SubVector`.
    Vector(ArrayViewMut1<'a, F>),
    /// A `Matrix` or `SubMatrix`.
    Matrix(ArrayViewMut2<'a, F>),
    /// An external array of any rank.
    Array(ArrayViewMutD<'a, F>),
}

impl<'a, F> SourceMut<'a, F> {
    /// Human readable description of the family and shape of this source.
    pub fn describe(&self) -> String {
        match self {
            SourceMut::Vector(view) => format!("a vector of length {}", view.len()),
            SourceMut::Matrix(view) => format!("a {}x{} matrix", view.nrows(), view.ncols()),
            SourceMut::Array(view) => format!("a {}-D array of shape {:?}", view.ndim(), view.shape()),
        }
    }

    /// Alias this source as a vector.
    ///
    /// # Errors
    ///
    /// If the source is a matrix, or an external array that is not one dimensional.
    pub fn into_vector(self, argument: &'static str) -> Result<ArrayViewMut1<'a, F>> {
        match self {
            SourceMut::Vector(view) => Ok(view),
            SourceMut::Array(view) if view.ndim() == 1 => view.into_dimensionality::<Ix1>()
                .map_err(|error| type_error(argument, VECTOR, error.to_string())),
            other => Err(type_error(argument, VECTOR, other.describe())),
        }
    }

    /// Alias this source as a matrix.
    ///
    /// # Errors
    ///
    /// If the source is a vector, or an external array that is not two dimensional.
    pub fn into_matrix(self, argument: &'static str) -> Result<ArrayViewMut2<'a, F>> {
        match self {
            SourceMut::Matrix(view) => Ok(view),
            SourceMut::Array(view) if view.ndim() == 2 => view.into_dimensionality::<Ix2>()
                .map_err(|error| type_error(argument, MATRIX, error.to_string())),
            other => Err(type_error(argument, MATRIX, other.describe())),
        }
    }
}

const VECTOR: &str = "a vector or a 1-D array";
const MATRIX: &str = "a matrix or a 2-D array";

fn type_error(argument: &'static str, expected: &'static str, found: String) -> Error {
    Error::ArgumentType { argument, expected, found }
}

impl<'a, F: Element> From<&'a Vector<F>> for Source<'a, F> {
    fn from(vector: &'a Vector<F>) -> Self {
        Source::Vector(vector.as_array())
    }
}

impl<'a, F: Element> From<&'a SubVector<'_, F>> for Source<'a, F> {
    fn from(vector: &'a SubVector<'_, F>) -> Self {
        Source::Vector(vector.as_array())
    }
}

impl<'a, F: Element> From<&'a Matrix<F>> for Source<'a, F> {
    fn from(matrix: &'a Matrix<F>) -> Self {
        Source::Matrix(matrix.as_array())
    }
}

impl<'a, F: Element> From<&'a SubMatrix<'_, F>> for Source<'a, F> {
    fn from(matrix: &'a SubMatrix<'_, F>) -> Self {
        Source::Matrix(matrix.as_array())
    }
}

impl<'a, F, D: Dimension> From<ArrayView<'a, F, D>> for Source<'a, F> {
    fn from(view: ArrayView<'a, F, D>) -> Self {
        Source::Array(view.into_dyn())
    }
}

impl<'a, F, D: Dimension> From<&'a Array<F, D>> for Source<'a, F> {
    fn from(array: &'a Array<F, D>) -> Self {
        Source::Array(array.view().into_dyn())
    }
}

impl<'a, F> From<&'a [F]> for Source<'a, F> {
    fn from(values: &'a [F]) -> Self {
        Source::Array(ArrayView1::from(values).into_dyn())
    }
}

impl<'a, F: Element> From<&'a mut Vector<F>> for SourceMut<'a, F> {
    fn from(vector: &'a mut Vector<F>) -> Self {
        SourceMut::Vector(vector.as_array_mut())
    }
}

impl<'a, F: Element> From<&'a mut SubVector<'_, F>> for SourceMut<'a, F> {
    fn from(vector: &'a mut SubVector<'_, F>) -> Self {
        SourceMut::Vector(vector.as_array_mut())
    }
}

impl<'a, F: Element> From<&'a mut Matrix<F>> for SourceMut<'a, F> {
    fn from(matrix: &'a mut Matrix<F>) -> Self {
        SourceMut::Matrix(matrix.as_array_mut())
    }
}

impl<'a, F: Element> From<&'a mut SubMatrix<'_, F>> for SourceMut<'a, F> {
    fn from(matrix: &'a mut SubMatrix<'_, F>) -> Self {
        SourceMut::Matrix(matrix.as_array_mut())
    }
}

impl<'a, F, D: Dimension> From<ArrayViewMut<'a, F, D>> for SourceMut<'a, F> {
    fn from(view: ArrayViewMut<'a, F, D>) -> Self {
        SourceMut::Array(view.into_dyn())
    }
}

impl<'a, F, D: Dimension> From<&'a mut Array<F, D>> for SourceMut<'a, F> {
    fn from(array: &'a mut Array<F, D>) -> Self {
        SourceMut::Array(array.view_mut().into_dyn())
    }
}

impl<'a, F> From<&'a mut [F]> for SourceMut<'a, F> {
    fn from(values: &'a mut [F]) -> Self {
        SourceMut::Array(ArrayViewMut1::from(values).into_dyn())
    }
}
