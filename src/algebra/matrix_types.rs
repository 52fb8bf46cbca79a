#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Solver-facing matrices are in standard compressed sparse
// column format with 0-based positional row indices.

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// This field should have length `n+1`. The last entry corresponds
    /// to the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

/// Matrix axis marker
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Row axis
    Row,
    /// Column axis
    Col,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "col"),
        }
    }
}

/// Membership checks applied to a single entry insertion.
///
/// When rows are checked, an undeclared row is rejected with
/// [`RowNotInMatrix`](crate::algebra::SparseMatrixError::RowNotInMatrix).
/// When columns are checked, an undeclared column is rejected with
/// [`ColNotInMatrix`](crate::algebra::SparseMatrixError::ColNotInMatrix).
/// If both checks are enabled and both fail, the row error is reported.
///
/// Unchecked coordinates that fall outside the declared universes are
/// admitted and extend the corresponding row or column view.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Membership {
    /// No membership checks
    #[default]
    Unchecked,
    /// Reject undeclared rows only
    Rows,
    /// Reject undeclared columns only
    Cols,
    /// Reject undeclared rows and undeclared columns
    RowsAndCols,
}

impl Membership {
    /// true if insertions under this policy reject undeclared rows
    pub fn checks_rows(&self) -> bool {
        matches!(self, Membership::Rows | Membership::RowsAndCols)
    }
    /// true if insertions under this policy reject undeclared columns
    pub fn checks_cols(&self) -> bool {
        matches!(self, Membership::Cols | Membership::RowsAndCols)
    }
}
