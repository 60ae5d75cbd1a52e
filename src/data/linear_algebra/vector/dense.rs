//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size, that only changes through `resize`.
use std::fmt;
use std::fmt::Display;

use log::debug;
use ndarray::{ArrayView1, ArrayViewMut1};

use crate::data::linear_algebra::error::{Error, Result};
use crate::data::linear_algebra::ResizeType;
use crate::data::linear_algebra::source::Source;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::{fmt_values, VectorBase};

/// Uses a `Vec` as underlying data structure. Owns its values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector<F> {
    data: Vec<F>,
}

impl<F: Element> Vector<F> {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a vector of a given length, with all values zero.
    pub fn with_len(len: usize) -> Self {
        Self { data: vec![F::zero(); len] }
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    pub fn constant(value: F, len: usize) -> Self {
        Self { data: vec![value; len] }
    }

    /// Create a vector from either a length, or a source to copy.
    ///
    /// Without arguments, the vector is empty.
    ///
    /// # Errors
    ///
    /// `ArgumentConflict` if both are given, and the errors of `from_source`.
    pub fn construct(size: Option<usize>, source: Option<Source<'_, F>>) -> Result<Self> {
        match (size, source) {
            (Some(_), Some(_)) => Err(Error::ArgumentConflict { first: "size", second: "src" }),
            (Some(len), None) => Ok(Self::with_len(len)),
            (None, Some(source)) => Self::from_source(source),
            (None, None) => Ok(Self::new()),
        }
    }

    /// Create a vector by copying another vector, or a one dimensional array.
    ///
    /// # Errors
    ///
    /// `ArgumentType` if the source is not a vector or a one dimensional array.
    pub fn from_source<'s>(source: impl Into<Source<'s, F>>) -> Result<Self> {
        let source = source.into().into_vector("src")?;

        Ok(Self { data: source.iter().copied().collect() })
    }

    /// Change the length of this vector.
    ///
    /// Views into this vector can't exist while resizing, as they borrow it.
    ///
    /// # Arguments
    ///
    /// * `len`: The new length.
    /// * `resize_type`: What to do with the existing values.
    pub fn resize(&mut self, len: usize, resize_type: ResizeType) {
        debug!("resizing vector of length {} to {} ({:?})", self.data.len(), len, resize_type);

        match resize_type {
            ResizeType::SetZero => {
                self.data.clear();
                self.data.resize(len, F::zero());
            },
            ResizeType::Undefined | ResizeType::CopyData => self.data.resize(len, F::zero()),
        }
    }

    /// Get the data of this vector.
    pub fn into_inner(self) -> Vec<F> {
        self.data
    }
}

impl<F> From<Vec<F>> for Vector<F> {
    fn from(data: Vec<F>) -> Self {
        Self { data }
    }
}

impl<F: Element> VectorBase<F> for Vector<F> {
    fn as_array(&self) -> ArrayView1<'_, F> {
        ArrayView1::from(self.data.as_slice())
    }

    fn as_array_mut(&mut self) -> ArrayViewMut1<'_, F> {
        ArrayViewMut1::from(self.data.as_mut_slice())
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<F: Element> Display for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_values(self.as_array(), f)
    }
}
