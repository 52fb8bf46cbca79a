use crate::algebra::{CscMatrix, FloatT, SparseColMatrix, SparseFormatError, SparseView};
use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compressed column export of a [`SparseColMatrix`]
///
/// Columns appear in declared column order.  For column `i`, the entries
/// `rowval[k]`, `nzval[k]` for `colstarts[i] <= k < colstarts[i+1]` are
/// the nonzeros of that column, with row identifiers in the order they
/// were first added to the column.  Row identifiers are __not__ sorted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnArrays<T = f64> {
    /// number of entries in the source matrix at export time
    pub nnz: usize,
    /// start offset of each column, plus a trailing end marker.
    ///
    /// This field has length `ncols+1` and its last entry equals the
    /// lengths of the `rowval` and `nzval` fields.
    pub colstarts: Vec<usize>,
    /// number of entries in each column
    pub collens: Vec<usize>,
    /// row identifier of each exported entry
    pub rowval: Vec<usize>,
    /// value of each exported entry
    pub nzval: Vec<T>,
}

impl<T> ColumnArrays<T> {
    /// number of exported columns
    pub fn ncols(&self) -> usize {
        self.collens.len()
    }

    /// Check that the arrays satisfy the compressed column shape contract.
    ///
    /// Row identifiers are not required to be sorted within a column.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colstarts.len() != self.collens.len() + 1
            || self.colstarts.first() != Some(&0)
            || self.colstarts.last() != Some(&self.rowval.len())
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colstarts monotonicity
        if self.colstarts.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        if self
            .colstarts
            .windows(2)
            .zip(&self.collens)
            .any(|(c, &len)| c[1] - c[0] != len)
        {
            return Err(SparseFormatError::BadColLength);
        }

        Ok(())
    }

    /// Split into the `(nnz, colstarts, collens, rowval, nzval)` tuple.
    pub fn into_parts(self) -> (usize, Vec<usize>, Vec<usize>, Vec<usize>, Vec<T>) {
        (
            self.nnz,
            self.colstarts,
            self.collens,
            self.rowval,
            self.nzval,
        )
    }
}

impl<T> SparseColMatrix<T>
where
    T: Clone,
{
    /// Export the matrix contents in compressed column form.
    ///
    /// Columns are exported in declared order, including empty ones.
    /// Entries stored in columns outside the declared universe count
    /// towards `nnz` but are not exported.
    ///
    /// If [`verbose`](crate::algebra::MatrixSettings::verbose) is set, a
    /// summary line is written to the configured print target.
    pub fn to_column_arrays(&self) -> ColumnArrays<T> {
        let mut colstarts = Vec::with_capacity(self.cols.len() + 1);
        let mut collens = Vec::with_capacity(self.cols.len());
        let mut rowval = Vec::with_capacity(self.nnz());
        let mut nzval = Vec::with_capacity(self.nnz());

        for col in self.cols.iter() {
            let start = nzval.len();
            colstarts.push(start);
            if let Some(view) = self.colview.get(col) {
                for (&row, value) in view.iter() {
                    rowval.push(row);
                    nzval.push(value.clone());
                }
            }
            collens.push(nzval.len() - start);
        }
        colstarts.push(nzval.len());

        let arrays = ColumnArrays {
            nnz: self.nnz(),
            colstarts,
            collens,
            rowval,
            nzval,
        };

        if self.settings.verbose {
            // printing failures never affect the export
            let _ = self.print_export_summary(&arrays);
        }

        arrays
    }
}

impl<T> SparseColMatrix<T>
where
    T: FloatT,
{
    /// Convert to a solver-ready [`CscMatrix`] with 0-based indices.
    ///
    /// Row `i` of the result is the `i`-th entry of
    /// [`row_order`](Self::row_order) and column `j` is the `j`-th declared
    /// column.  Entries within each column are sorted by row position, so
    /// the result always passes [`CscMatrix::check_format`].
    pub fn to_csc(&self) -> CscMatrix<T> {
        let m = self.rowview.len();
        let n = self.cols.len();

        // every row in a column view also has a row view entry
        let positions = |view: &SparseView<T>| {
            view.iter()
                .filter_map(|(row, &v)| self.rowview.get_index_of(row).map(|r| (r, v)))
                .sorted_by_key(|&(r, _)| r)
        };

        // count the nonzeros in the declared columns
        let nnz = self
            .cols
            .iter()
            .filter_map(|col| self.colview.get(col))
            .map(|view| positions(view).len())
            .sum();

        let mut C = CscMatrix::spalloc(m, n, nnz);

        //populate new matrix
        let mut ptr = 0;
        for (j, col) in self.cols.iter().enumerate() {
            C.colptr[j] = ptr;
            let Some(view) = self.colview.get(col) else {
                continue;
            };
            for (r, v) in positions(view) {
                C.rowval[ptr] = r;
                C.nzval[ptr] = v;
                ptr += 1;
            }
        }
        C.colptr[n] = ptr;

        C
    }
}
