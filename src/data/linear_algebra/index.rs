//! # Index expressions
//!
//! Reading from a container with an index expression happens in three steps:
//!
//! * The expression (an integer, a slice, or a pair of those) is normalized into a canonical
//! selector per axis. Slices are resolved against the axis length, the way array languages do it:
//! negative bounds count from the end and are clamped.
//! * The selectors are turned into a plan: a scalar, a rectangular view, or a list of coordinates
//! to copy. Contiguous selections become views, stepped selections become copies.
//! * The container executes the plan.
//!
//! The first two steps are pure functions of the expression and the shape, and live here.
//!
//! Writing with an index expression is only possible for a single element, see
//! `assignment_target`.
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use itertools::iproduct;

use crate::data::linear_algebra::error::{Error, Result};

/// A range of indices with optional bounds and a step.
///
/// Bounds that are `None` default to the start or end of the axis, depending on the sign of the
/// step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Slice {
    /// First index, inclusive.
    pub start: Option<isize>,
    /// Last index, exclusive.
    pub stop: Option<isize>,
    /// Distance between consecutive indices, can't be zero.
    pub step: isize,
}

impl Slice {
    /// Create a new slice.
    pub fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Self { start, stop, step }
    }

    /// The slice selecting an entire axis.
    pub fn full() -> Self {
        Self::new(None, None, 1)
    }

    /// Replace the step of this slice.
    pub fn step_by(self, step: isize) -> Self {
        Self { step, ..self }
    }

    /// Resolve the bounds of this slice against an axis of length `len`.
    ///
    /// # Errors
    ///
    /// If the step is zero.
    pub fn indices(&self, len: usize) -> Result<SliceIndices> {
        if self.step == 0 {
            return Err(Error::IndexOutOfRange("slice step cannot be zero".to_string()));
        }

        let len = len as isize;
        let (lower, upper) = if self.step > 0 { (0, len) } else { (-1, len - 1) };
        let clamp = |bound: isize| {
            let bound = if bound < 0 { bound + len } else { bound };
            bound.clamp(lower, upper)
        };

        let start = match self.start {
            Some(start) => clamp(start),
            None => if self.step > 0 { lower } else { upper },
        };
        let stop = match self.stop {
            Some(stop) => clamp(stop),
            None => if self.step > 0 { upper } else { lower },
        };

        Ok(SliceIndices { start, stop, step: self.step })
    }
}

/// A slice with bounds resolved against a specific axis length.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SliceIndices {
    /// First index, inclusive.
    pub start: isize,
    /// Last index, exclusive.
    pub stop: isize,
    /// Distance between consecutive indices, never zero.
    pub step: isize,
}

impl SliceIndices {
    /// Whether this selects a contiguous region, that can be represented by a view.
    pub fn is_contiguous(&self) -> bool {
        self.step == 1
    }

    /// Offset and length of a contiguous region.
    ///
    /// # Errors
    ///
    /// If the stop precedes the start.
    pub fn extent(&self) -> Result<(usize, usize)> {
        debug_assert!(self.is_contiguous());

        if self.stop < self.start {
            return Err(Error::IndexOutOfRange(format!(
                "slice stop {} precedes slice start {}", self.stop, self.start,
            )));
        }

        Ok((self.start as usize, (self.stop - self.start) as usize))
    }

    /// The selected indices, in order.
    pub fn iter(&self) -> impl Iterator<Item=usize> + Clone + use<> {
        let SliceIndices { start, stop, step } = *self;
        // Counted in `usize`, so that extreme steps don't overflow
        let count = if step > 0 {
            if stop > start { (stop - start - 1) as usize / step.unsigned_abs() + 1 } else { 0 }
        } else if stop < start {
            (start - stop - 1) as usize / step.unsigned_abs() + 1
        } else { 0 };

        (0..count).map(move |i| (start + i as isize * step) as usize)
    }
}

/// An index expression.
///
/// Conversions exist from integers, ranges and pairs, such that expressions can be written as
/// `3`, `1..3`, `(0..2, 1)` or `(Slice::full().step_by(2), 0)`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Index {
    /// A single position.
    Int(isize),
    /// A range of positions.
    Slice(Slice),
    /// Multiple components, only pairs of integers and slices are accepted by matrices.
    Tuple(Vec<Index>),
}

impl Index {
    fn describe(&self) -> String {
        match self {
            Index::Int(_) => "an integer".to_string(),
            Index::Slice(_) => "a slice".to_string(),
            Index::Tuple(components) => format!("a tuple of length {}", components.len()),
        }
    }
}

impl From<Slice> for Index {
    fn from(slice: Slice) -> Self {
        Index::Slice(slice)
    }
}

impl From<RangeFull> for Index {
    fn from(_: RangeFull) -> Self {
        Index::Slice(Slice::full())
    }
}

impl<A: Into<Index>, B: Into<Index>> From<(A, B)> for Index {
    fn from((row, column): (A, B)) -> Self {
        Index::Tuple(vec![row.into(), column.into()])
    }
}

macro_rules! index_from_integer {
    ($($integer:ty),*) => {
        $(
        impl From<$integer> for Index {
            fn from(value: $integer) -> Self {
                Index::Int(saturate(value))
            }
        }

        impl From<Range<$integer>> for Index {
            fn from(range: Range<$integer>) -> Self {
                Index::Slice(Slice::new(Some(saturate(range.start)), Some(saturate(range.end)), 1))
            }
        }

        impl From<RangeFrom<$integer>> for Index {
            fn from(range: RangeFrom<$integer>) -> Self {
                Index::Slice(Slice::new(Some(saturate(range.start)), None, 1))
            }
        }

        impl From<RangeTo<$integer>> for Index {
            fn from(range: RangeTo<$integer>) -> Self {
                Index::Slice(Slice::new(None, Some(saturate(range.end)), 1))
            }
        }
        )*
    }
}

/// Convert to `isize`, clamping values that don't fit instead of wrapping them.
fn saturate<T: TryInto<isize> + PartialOrd + Default + Copy>(value: T) -> isize {
    value.try_into().unwrap_or(if value < T::default() { isize::MIN } else { isize::MAX })
}

index_from_integer!(i32, i64, isize, usize);

/// Canonical selection along a single axis.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Selector {
    /// A single position, not yet bounds checked.
    Point(isize),
    /// A resolved range of positions.
    Span(SliceIndices),
}

impl Selector {
    fn from_component(component: &Index, len: usize) -> Result<Self> {
        match component {
            &Index::Int(value) => Ok(Selector::Point(value)),
            Index::Slice(slice) => slice.indices(len).map(Selector::Span),
            Index::Tuple(_) => Err(Error::InvalidIndexType(
                "index components must be integers or slices".to_string(),
            )),
        }
    }

    fn full(len: usize) -> Self {
        Selector::Span(SliceIndices { start: 0, stop: len as isize, step: 1 })
    }
}

/// Normalize an index expression for a vector of length `len`.
///
/// # Errors
///
/// If the expression is not an integer or a slice, or if a slice is malformed.
pub fn normalize_vector(index: &Index, len: usize) -> Result<Selector> {
    match index {
        Index::Tuple(_) => Err(Error::InvalidIndexType(format!(
            "vector index must be an integer or a slice, got {}", index.describe(),
        ))),
        component => Selector::from_component(component, len),
    }
}

/// Normalize an index expression for a matrix into a `(row, column)` selector pair.
///
/// A single integer or slice selects rows of the matrix, except when the matrix is a single row
/// or a single column. Then, the matrix is treated as a vector, and the index selects along its
/// only non-trivial axis.
///
/// # Errors
///
/// If the expression is not an integer, a slice or a pair of those, or if a slice is malformed.
pub fn normalize_matrix(index: &Index, (nr_rows, nr_columns): (usize, usize)) -> Result<(Selector, Selector)> {
    match index {
        &Index::Int(value) => Ok(if nr_rows == 1 {
            (Selector::Point(0), Selector::Point(value))
        } else if nr_columns == 1 {
            (Selector::Point(value), Selector::Point(0))
        } else {
            (Selector::Point(value), Selector::full(nr_columns))
        }),
        Index::Slice(slice) => Ok(if nr_columns == 1 {
            (Selector::Span(slice.indices(nr_rows)?), Selector::Point(0))
        } else if nr_rows == 1 {
            (Selector::Point(0), Selector::Span(slice.indices(nr_columns)?))
        } else {
            (Selector::Span(slice.indices(nr_rows)?), Selector::full(nr_columns))
        }),
        Index::Tuple(components) => match components.as_slice() {
            [row, column] => Ok((
                Selector::from_component(row, nr_rows)?,
                Selector::from_component(column, nr_columns)?,
            )),
            _ => Err(Error::InvalidIndexType(format!(
                "matrix index must be an integer, a slice or a pair of those, got {}",
                index.describe(),
            ))),
        },
    }
}

/// Check a single position against the length of an axis.
///
/// # Errors
///
/// `NotSupported` for negative positions, `IndexOutOfRange` for positions beyond the end.
pub fn check_point(value: isize, len: usize, axis: &str) -> Result<usize> {
    if value < 0 {
        Err(Error::NotSupported(value))
    } else if value as usize >= len {
        Err(Error::IndexOutOfRange(format!(
            "{} index {} is out of bounds for length {}", axis, value, len,
        )))
    } else {
        Ok(value as usize)
    }
}

/// How a vector selection is executed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum VectorPlan {
    /// Read a single value.
    Scalar(usize),
    /// Borrow a contiguous region.
    View {
        /// First index of the region.
        offset: usize,
        /// Number of elements in the region.
        length: usize,
    },
    /// Copy the values at these indices, in this order.
    Gather(Vec<usize>),
}

/// Decide how a normalized vector selection is executed.
pub fn plan_vector(selector: Selector, len: usize) -> Result<VectorPlan> {
    match selector {
        Selector::Point(value) => check_point(value, len, "vector").map(VectorPlan::Scalar),
        Selector::Span(span) if span.is_contiguous() => {
            let (offset, length) = span.extent()?;
            Ok(VectorPlan::View { offset, length })
        },
        Selector::Span(span) => Ok(VectorPlan::Gather(span.iter().collect())),
    }
}

/// How a matrix selection is executed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MatrixPlan {
    /// Read a single value.
    Scalar {
        /// Row of the value.
        row: usize,
        /// Column of the value.
        column: usize,
    },
    /// Borrow a rectangular region.
    View {
        /// First row of the region.
        row_offset: usize,
        /// Number of rows of the region.
        nr_rows: usize,
        /// First column of the region.
        column_offset: usize,
        /// Number of columns of the region.
        nr_columns: usize,
    },
    /// Copy the values at these `(row, column)` coordinates into a sequence, in this order.
    Gather(Vec<(usize, usize)>),
    /// Copy the values at all combinations of these rows and columns into a table, row by row.
    Grid {
        /// Rows to copy, in order.
        rows: Vec<usize>,
        /// Columns to copy, in order.
        columns: Vec<usize>,
    },
}

/// Decide how a normalized `(row, column)` selection of a matrix is executed.
///
/// Single positions are bounds checked here, also when the other axis selects nothing.
pub fn plan_matrix((row, column): (Selector, Selector), (nr_rows, nr_columns): (usize, usize)) -> Result<MatrixPlan> {
    match (row, column) {
        (Selector::Point(row), Selector::Point(column)) => Ok(MatrixPlan::Scalar {
            row: check_point(row, nr_rows, "row")?,
            column: check_point(column, nr_columns, "column")?,
        }),
        (Selector::Span(rows), Selector::Span(columns)) => {
            if rows.is_contiguous() && columns.is_contiguous() {
                let (row_offset, nr_rows) = rows.extent()?;
                let (column_offset, nr_columns) = columns.extent()?;
                Ok(MatrixPlan::View { row_offset, nr_rows, column_offset, nr_columns })
            } else {
                Ok(MatrixPlan::Grid { rows: rows.iter().collect(), columns: columns.iter().collect() })
            }
        },
        (Selector::Span(rows), Selector::Point(column)) => {
            let column = check_point(column, nr_columns, "column")?;
            if rows.is_contiguous() {
                let (row_offset, nr_rows) = rows.extent()?;
                Ok(MatrixPlan::View { row_offset, nr_rows, column_offset: column, nr_columns: 1 })
            } else {
                Ok(MatrixPlan::Gather(iproduct!(rows.iter(), [column]).collect()))
            }
        },
        (Selector::Point(row), Selector::Span(columns)) => {
            let row = check_point(row, nr_rows, "row")?;
            if columns.is_contiguous() {
                let (column_offset, nr_columns) = columns.extent()?;
                Ok(MatrixPlan::View { row_offset: row, nr_rows: 1, column_offset, nr_columns })
            } else {
                Ok(MatrixPlan::Gather(iproduct!([row], columns.iter()).collect()))
            }
        },
    }
}

/// The single element written by an assignment through an index expression.
///
/// Only pairs of in-bounds, non-negative integers are accepted.
///
/// # Errors
///
/// `InvalidIndexType` for every other expression, including pairs that are out of bounds.
pub fn assignment_target(index: &Index, (nr_rows, nr_columns): (usize, usize)) -> Result<(usize, usize)> {
    if let Index::Tuple(components) = index {
        if let [Index::Int(row), Index::Int(column)] = components.as_slice() {
            if (0..nr_rows as isize).contains(row) && (0..nr_columns as isize).contains(column) {
                return Ok((*row as usize, *column as usize));
            }
        }
    }

    Err(Error::InvalidIndexType(format!(
        "matrix assignment needs a pair of in-bounds integers, got {}", index.describe(),
    )))
}
