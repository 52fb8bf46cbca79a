/// Dimension queries shared by the matrix types in this crate.
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// (rows, columns)
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// true if the matrix has the same number of rows and columns
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}
