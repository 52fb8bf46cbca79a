use crate::algebra::Axis;
use thiserror::Error;

/// Error type returned by sparse column matrix construction and insertion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseMatrixError {
    /// A row or column identifier appears more than once in the declared universe
    #[error("{axis} identifier {id} appears more than once in the matrix {axis}s")]
    InvalidUniverse {
        /// universe containing the duplicate
        axis: Axis,
        /// the duplicated identifier
        id: usize,
    },
    /// Checked insertion referenced an undeclared row
    #[error("row {0} is not in the matrix rows")]
    RowNotInMatrix(usize),
    /// Checked insertion referenced an undeclared column
    #[error("col {0} is not in the matrix columns")]
    ColNotInMatrix(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned when validating compressed column data.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Data is not sorted by row index within each column
    #[error("Data is not sorted by row index within each column")]
    BadRowOrdering,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
    #[error("Column lengths disagree with column pointer values")]
    /// Column lengths are not the differences of consecutive column starts
    BadColLength,
}
