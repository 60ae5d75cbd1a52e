//! # Storing of values in memory
//!
//! This module provides the containers, the views into them and the index expressions that select
//! from them.

pub mod linear_algebra;
