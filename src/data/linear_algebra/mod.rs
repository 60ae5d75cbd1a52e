//! # Linear algebra primitives
//!
//! Dense vectors and matrices, the views that borrow regions of them, and the indexing rules
//! shared by both.

pub mod error;
pub mod index;
pub mod matrix;
pub mod source;
pub mod traits;
pub mod vector;
mod utilities;

/// Tolerance used when comparing containers without an explicit tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-16;

/// How existing values are treated when a container changes size.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum ResizeType {
    /// All values are zero after resizing.
    #[default]
    SetZero,
    /// Values are unspecified after resizing.
    ///
    /// Storage is never left uninitialized, but callers should not rely on what it contains.
    Undefined,
    /// Values in the region common to the old and new shape are kept, the others are zero.
    CopyData,
}

/// Whether a source is read as is, or transposed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum TransposeType {
    /// Use the source as is.
    #[default]
    NoTrans,
    /// Use the transpose of the source.
    Trans,
}
