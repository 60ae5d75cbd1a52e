//! # Vector types
//!
//! An owning `Vector` and a borrowing `SubVector`. Everything that doesn't depend on ownership,
//! including reading through index expressions, is implemented once on the `VectorBase` trait.
use std::fmt::{self, Debug, Display};

use itertools::Itertools;
use log::debug;
use ndarray::{ArrayView1, ArrayViewMut1};

pub use dense::Vector;
pub use sub::SubVector;

use crate::data::linear_algebra::error::{Error, Result};
use crate::data::linear_algebra::index::{check_point, Index, normalize_vector, plan_vector, VectorPlan};
use crate::data::linear_algebra::source::Source;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::utilities::approx_equal_arrays;

mod dense;
mod sub;

/// Defines basic ways to read and change a vector, regardless of ownership.
pub trait VectorBase<F: Element>: Display + Debug {
    /// The values as an array view, without copying.
    fn as_array(&self) -> ArrayView1<'_, F>;
    /// The values as a mutable array view, without copying.
    ///
    /// Changes made through the view are changes to this vector.
    fn as_array_mut(&mut self) -> ArrayViewMut1<'_, F>;

    /// Number of items in the vector.
    fn len(&self) -> usize {
        self.as_array().len()
    }

    /// Whether the vector is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retrieve the value at an index.
    ///
    /// # Errors
    ///
    /// `NotSupported` if the index is negative, `IndexOutOfRange` if it is too large.
    fn get(&self, index: isize) -> Result<F> {
        let index = check_point(index, self.len(), "vector")?;
        Ok(self.as_array()[index])
    }

    /// Set the value at an index.
    ///
    /// # Errors
    ///
    /// `NotSupported` if the index is negative, `IndexOutOfRange` if it is too large.
    fn set(&mut self, index: isize, value: F) -> Result<()> {
        let index = check_point(index, self.len(), "vector")?;
        self.as_array_mut()[index] = value;
        Ok(())
    }

    /// Overwrite all values with those of a source of the same length.
    ///
    /// # Errors
    ///
    /// `ArgumentType` if the source is not a vector, `SizeMismatch` if the lengths differ.
    fn copy_from<'s>(&mut self, source: impl Into<Source<'s, F>>) -> Result<()> {
        let source = source.into().into_vector("src")?;
        if source.len() != self.len() {
            return Err(Error::SizeMismatch { expected: vec![self.len()], found: vec![source.len()] });
        }

        self.as_array_mut().assign(&source);
        Ok(())
    }

    /// Copy the values into a new, owning, vector.
    fn to_vector(&self) -> Vector<F> {
        Vector::from(self.to_vec())
    }

    /// Copy the values into a `Vec`.
    fn to_vec(&self) -> Vec<F> {
        self.as_array().iter().copied().collect()
    }

    /// Whether the other vector has the same length, and each value differs at most `tolerance`
    /// from the value at the same index in this vector.
    fn approx_equal<V: VectorBase<F> + ?Sized>(&self, other: &V, tolerance: F) -> bool {
        approx_equal_arrays(&self.as_array(), &other.as_array(), tolerance)
    }

    /// Whether the other vector is equal to this one, within the default tolerance.
    fn equal<V: VectorBase<F> + ?Sized>(&self, other: &V) -> bool {
        self.approx_equal(other, F::default_tolerance())
    }

    /// Borrow a range of this vector.
    ///
    /// # Arguments
    ///
    /// * `offset`: Index of the first element of the range.
    /// * `length`: Number of elements in the range.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the range doesn't fit inside this vector.
    fn range(&mut self, offset: usize, length: usize) -> Result<SubVector<'_, F>> {
        SubVector::from_view(self.as_array_mut(), offset, Some(length))
    }

    /// Read through an index expression.
    ///
    /// An integer gives the value at that index. A slice with step one borrows that range of this
    /// vector, other slices copy the values they select.
    ///
    /// # Errors
    ///
    /// `InvalidIndexType` for pairs, and the errors of `get` and `range`.
    fn select(&mut self, index: impl Into<Index>) -> Result<VectorSelection<'_, F>> {
        let len = self.len();
        let plan = plan_vector(normalize_vector(&index.into(), len)?, len)?;

        Ok(match plan {
            VectorPlan::Scalar(index) => VectorSelection::Scalar(self.as_array()[index]),
            VectorPlan::View { offset, length } => VectorSelection::View(self.range(offset, length)?),
            VectorPlan::Gather(indices) => {
                debug!("copying {} values out of a vector of length {}", indices.len(), len);
                let values = self.as_array();
                VectorSelection::Values(indices.into_iter().map(|index| values[index]).collect())
            },
        })
    }

    /// Write through an index expression.
    ///
    /// Only single integers are supported.
    ///
    /// # Errors
    ///
    /// `InvalidIndexType` for anything but an integer, and the errors of `set`.
    fn assign(&mut self, index: impl Into<Index>, value: F) -> Result<()> {
        match index.into() {
            Index::Int(index) => self.set(index, value),
            _ => Err(Error::InvalidIndexType("vector assignment needs an integer index".to_string())),
        }
    }
}

/// The result of reading a vector through an index expression.
#[derive(Debug)]
pub enum VectorSelection<'a, F> {
    /// A single value.
    Scalar(F),
    /// A borrowed range of the vector.
    View(SubVector<'a, F>),
    /// Copied values.
    Values(Vec<F>),
}

impl<'a, F> VectorSelection<'a, F> {
    /// The value, if a single one was selected.
    pub fn into_scalar(self) -> Option<F> {
        match self {
            VectorSelection::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// The view, if a range was borrowed.
    pub fn into_view(self) -> Option<SubVector<'a, F>> {
        match self {
            VectorSelection::View(view) => Some(view),
            _ => None,
        }
    }

    /// The values, if they were copied.
    pub fn into_values(self) -> Option<Vec<F>> {
        match self {
            VectorSelection::Values(values) => Some(values),
            _ => None,
        }
    }
}

/// Whether two vectors have the same length and their values are pairwise within `tolerance`.
pub fn approx_equal_vector<F, A, B>(left: &A, right: &B, tolerance: F) -> bool
where
    F: Element,
    A: VectorBase<F> + ?Sized,
    B: VectorBase<F> + ?Sized,
{
    left.approx_equal(right, tolerance)
}

fn fmt_values<F: Display>(values: ArrayView1<'_, F>, f: &mut fmt::Formatter) -> fmt::Result {
    if values.is_empty() {
        write!(f, "[ ]")
    } else {
        write!(f, "[ {} ]", values.iter().format(" "))
    }
}
