use crate::algebra::{Axis, MatrixSettings, Membership, ShapedMatrix, SparseMatrixError};
use crate::io::PrintTarget;
use indexmap::{IndexMap, IndexSet};
use std::sync::Mutex;

/// Row or column view: maps the opposite identifier to the stored value.
pub type SparseView<T> = IndexMap<usize, T>;

/// Sparse matrix keyed by `(row, col)` over declared row and column universes
///
/// The matrix keeps three views of the same data: an entry store keyed by
/// `(row, col)`, a row view (`row -> col -> value`) and a column view
/// (`col -> row -> value`).  Every insertion path goes through a single
/// internal primitive, so the three views are always consistent.
///
/// All maps preserve first-insertion order.  Overwriting an existing
/// coordinate replaces its value but keeps its position, so the order of
/// rows within an exported column is the order in which they were first
/// added to that column.
///
/// __Example usage__ :
///
/// ```
/// use lpsparse::algebra::*;
///
/// let mut A = SparseColMatrix::new(&[1, 2], &[10, 20]).unwrap();
/// A.add(1, 10, "x", Membership::RowsAndCols).unwrap();
///
/// assert_eq!(A.get(1, 10), Some(&"x"));
/// assert_eq!(A.get_or(2, 20, "-"), "-");
/// assert!(A.add(3, 10, "y", Membership::Rows).is_err());
/// ```
///
/// Mutation requires `&mut self`.  To share a matrix between threads, wrap
/// it in a `RwLock` so that insertions are serialized against readers.
#[derive(Debug)]
pub struct SparseColMatrix<T = f64> {
    pub(crate) rows: IndexSet<usize>,
    pub(crate) cols: IndexSet<usize>,
    pub(crate) entries: IndexMap<(usize, usize), T>,
    pub(crate) rowview: IndexMap<usize, SparseView<T>>,
    pub(crate) colview: IndexMap<usize, SparseView<T>>,
    /// matrix configuration
    pub settings: MatrixSettings,
    pub(crate) stream: Mutex<PrintTarget>,
}

impl<T> SparseColMatrix<T>
where
    T: Clone,
{
    /// Create an empty matrix over the given row and column universes.
    ///
    /// Both universes are stored in the order given.  The column order
    /// fixes the column order of every export.
    ///
    /// # Errors
    /// Returns [`InvalidUniverse`](SparseMatrixError::InvalidUniverse)
    /// if either universe contains a duplicate identifier.
    pub fn new(rows: &[usize], cols: &[usize]) -> Result<Self, SparseMatrixError> {
        Self::with_settings(rows, cols, MatrixSettings::default())
    }

    /// Create an empty matrix with user supplied settings.
    pub fn with_settings(
        rows: &[usize],
        cols: &[usize],
        settings: MatrixSettings,
    ) -> Result<Self, SparseMatrixError> {
        let rows = make_universe(rows, Axis::Row)?;
        let cols = make_universe(cols, Axis::Col)?;

        let rowview = rows.iter().map(|&r| (r, SparseView::new())).collect();
        let colview = cols.iter().map(|&c| (c, SparseView::new())).collect();
        let entries = IndexMap::with_capacity(settings.nnz_hint);

        Ok(Self {
            rows,
            cols,
            entries,
            rowview,
            colview,
            settings,
            stream: Mutex::new(PrintTarget::default()),
        })
    }

    /// Insert `value` at `(row, col)`, overwriting any previous value.
    ///
    /// The `checks` policy decides whether undeclared rows and/or columns
    /// are rejected.  The row check is applied first, so when both checks
    /// are enabled and both fail the error is
    /// [`RowNotInMatrix`](SparseMatrixError::RowNotInMatrix).  The matrix
    /// is unchanged on failure.
    pub fn add(
        &mut self,
        row: usize,
        col: usize,
        value: T,
        checks: Membership,
    ) -> Result<(), SparseMatrixError> {
        self.check_membership(row, col, checks)?;
        self.set(row, col, value);
        Ok(())
    }

    /// Insert `value` at `(row, col)` with no membership checks.
    ///
    /// Undeclared rows or columns are admitted and extend the row or
    /// column view.  Entries in undeclared columns are counted by
    /// [`nnz`](Self::nnz) but never appear in column exports.
    pub fn add_unchecked(&mut self, row: usize, col: usize, value: T) {
        self.set(row, col, value);
    }

    /// Insert `value` at `(row, col)` using the membership policy from
    /// [`MatrixSettings::default_membership`].
    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Result<(), SparseMatrixError> {
        self.add(row, col, value, self.settings.default_membership)
    }

    /// Insert a whole column of `(row, value)` pairs.
    ///
    /// The column must be declared.  Rows are not checked, so undeclared
    /// rows are admitted and extend the row view.  Pairs are inserted in
    /// iteration order.
    pub fn add_column<I>(&mut self, col: usize, items: I) -> Result<(), SparseMatrixError>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        if !self.cols.contains(&col) {
            return Err(SparseMatrixError::ColNotInMatrix(col));
        }
        for (row, value) in items {
            self.set(row, col, value);
        }
        Ok(())
    }

    /// Value stored at `(row, col)`, or `default` if there is none.
    pub fn get_or(&self, row: usize, col: usize, default: T) -> T {
        self.get(row, col).cloned().unwrap_or(default)
    }

    fn check_membership(
        &self,
        row: usize,
        col: usize,
        checks: Membership,
    ) -> Result<(), SparseMatrixError> {
        if checks.checks_rows() && !self.rows.contains(&row) {
            return Err(SparseMatrixError::RowNotInMatrix(row));
        }
        if checks.checks_cols() && !self.cols.contains(&col) {
            return Err(SparseMatrixError::ColNotInMatrix(col));
        }
        Ok(())
    }

    // the only write site for all three views
    fn set(&mut self, row: usize, col: usize, value: T) {
        self.rowview
            .entry(row)
            .or_default()
            .insert(col, value.clone());
        self.colview
            .entry(col)
            .or_default()
            .insert(row, value.clone());
        self.entries.insert((row, col), value);
    }
}

impl<T> SparseColMatrix<T> {
    /// Reference to the value stored at `(row, col)`, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.entries.get(&(row, col))
    }

    /// true if a value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// number of stored entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// true if no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// declared row universe, in declaration order
    pub fn rows(&self) -> &IndexSet<usize> {
        &self.rows
    }

    /// declared column universe, in export order
    pub fn cols(&self) -> &IndexSet<usize> {
        &self.cols
    }

    /// the entries of `row`, keyed by column
    pub fn row(&self, row: usize) -> Option<&SparseView<T>> {
        self.rowview.get(&row)
    }

    /// the entries of `col`, keyed by row
    pub fn col(&self, col: usize) -> Option<&SparseView<T>> {
        self.colview.get(&col)
    }

    /// Row identifiers known to the row view: declared rows first, then
    /// rows admitted by unchecked insertions in order of admission.
    ///
    /// Position `i` of this vector is row `i` of [`to_csc`](Self::to_csc).
    pub fn row_order(&self) -> Vec<usize> {
        self.rowview.keys().copied().collect()
    }

    /// Iterate over all stored entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        self.entries.iter().map(|(&idx, v)| (idx, v))
    }
}

impl<T> Clone for SparseColMatrix<T>
where
    T: Clone,
{
    /// Clones the matrix data and settings.  The clone prints to stdout.
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            cols: self.cols.clone(),
            entries: self.entries.clone(),
            rowview: self.rowview.clone(),
            colview: self.colview.clone(),
            settings: self.settings.clone(),
            stream: Mutex::new(PrintTarget::default()),
        }
    }
}

impl<T> ShapedMatrix for SparseColMatrix<T> {
    fn nrows(&self) -> usize {
        self.rows.len()
    }
    fn ncols(&self) -> usize {
        self.cols.len()
    }
}

fn make_universe(ids: &[usize], axis: Axis) -> Result<IndexSet<usize>, SparseMatrixError> {
    let mut universe = IndexSet::with_capacity(ids.len());
    for &id in ids {
        if !universe.insert(id) {
            return Err(SparseMatrixError::InvalidUniverse { axis, id });
        }
    }
    Ok(universe)
}
