//!  __lpsparse__ is a small sparse matrix container for assembling the
//! constraint data of linear and mixed-integer programs.
//!
//! Entries are keyed by `(row, col)` over row and column identifier
//! universes that are declared up front.  Once populated, the matrix is
//! exported in the compressed sparse column layout that solver APIs expect:
//!
//! $$
//! (\text{nnz},\ \text{colstarts},\ \text{collens},\ \text{rowval},\ \text{nzval})
//! $$
//!
//! where `colstarts` has one more element than there are declared columns
//! and its final element terminates the last column.
//!
//! ## Example
//!
//! ```
//! use lpsparse::algebra::*;
//!
//! let mut A: SparseColMatrix<f64> = SparseColMatrix::new(&[1, 2], &[50, 51]).unwrap();
//! A.add(1, 50, 3.0, Membership::RowsAndCols).unwrap();
//! A.add(2, 51, -1.0, Membership::RowsAndCols).unwrap();
//!
//! let arrays = A.to_column_arrays();
//! assert_eq!(arrays.nnz, 2);
//! assert_eq!(arrays.colstarts, vec![0, 1, 2]);
//! assert_eq!(arrays.collens, vec![1, 1]);
//! assert_eq!(arrays.rowval, vec![1, 2]);
//! assert_eq!(arrays.nzval, vec![3.0, -1.0]);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;

/// Version of this crate, as reported in printed summaries.
pub fn version() -> &'static str {
    VERSION
}
