//! # Dense vectors and matrices
//!
//! Owning containers (`Vector`, `Matrix`) and borrowing views into them (`SubVector`,
//! `SubMatrix`), with reading and writing through array-language index expressions such as
//! `m.select((0..2, 1))`.
//!
//! Views borrow their source, so the source can't be dropped, resized or otherwise changed while a
//! view into it exists. External `ndarray` arrays and slices can be used wherever a container is
//! read from or viewed into.
#![warn(missing_docs)]

pub mod data;

pub use data::linear_algebra::DEFAULT_TOLERANCE;
pub use data::linear_algebra::error::{Error, Result};
pub use data::linear_algebra::index::{Index, Slice};
pub use data::linear_algebra::matrix::{approx_equal_matrix, Matrix, MatrixBase, MatrixSelection, SubMatrix};
pub use data::linear_algebra::{ResizeType, TransposeType};
pub use data::linear_algebra::source::{Source, SourceMut};
pub use data::linear_algebra::traits::Element;
pub use data::linear_algebra::vector::{approx_equal_vector, SubVector, Vector, VectorBase, VectorSelection};
