//! Sparse matrix containers for assembling and exporting problem data.
//!
//! The main type here is [`SparseColMatrix`], an entry store keyed by
//! `(row, col)` with row and column views kept alongside.  It exports
//! either raw [`ColumnArrays`] keyed by the caller's identifiers, or a
//! solver-ready [`CscMatrix`] with 0-based positional indices.

#![allow(non_snake_case)]

mod error_types;
pub use error_types::*;
mod floats;
pub use floats::*;
mod matrix_traits;
pub use matrix_traits::*;
mod matrix_types;
pub use matrix_types::*;
mod csc;
mod colmatrix;
pub use colmatrix::*;

#[cfg(test)]
mod tests;
