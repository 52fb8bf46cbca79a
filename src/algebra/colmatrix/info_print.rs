use crate::algebra::{ColumnArrays, SparseColMatrix};
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::fs::File;
use std::io::Write;
use std::sync::{MutexGuard, PoisonError};

impl<T> ConfigurablePrintTarget for SparseColMatrix<T> {
    fn print_to_stdout(&mut self) {
        self.stream_mut().print_to_stdout()
    }
    fn print_to_file(&mut self, file: File) {
        self.stream_mut().print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream_mut().print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream_mut().print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream_mut().print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream_mut().get_print_buffer()
    }
}

impl<T> SparseColMatrix<T> {
    /// Write a one-line description of the matrix to the print target.
    pub fn print_summary(&self) -> std::io::Result<()> {
        let mut out = self.stream();
        self.write_dimensions(&mut *out)?;
        writeln!(out)?;
        out.flush()
    }

    pub(crate) fn print_export_summary(&self, arrays: &ColumnArrays<T>) -> std::io::Result<()> {
        let mut out = self.stream();
        self.write_dimensions(&mut *out)?;
        writeln!(
            out,
            ", exported {} of {} entries in {} columns",
            arrays.rowval.len(),
            arrays.nnz,
            arrays.ncols()
        )?;
        out.flush()
    }

    fn write_dimensions(&self, out: &mut PrintTarget) -> std::io::Result<()> {
        let extra_rows = self.rowview.len() - self.rows.len();
        let extra_cols = self.colview.len() - self.cols.len();

        write!(
            out,
            "lpsparse v{}: {} x {} declared",
            crate::version(),
            self.rows.len(),
            self.cols.len()
        )?;
        if extra_rows > 0 || extra_cols > 0 {
            write!(out, " (+{} rows, +{} cols admitted)", extra_rows, extra_cols)?;
        }
        write!(out, ", nnz = {}", self.nnz())
    }

    // a poisoned lock only means another printer panicked
    fn stream(&self) -> MutexGuard<'_, PrintTarget> {
        self.stream.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn stream_mut(&mut self) -> &mut PrintTarget {
        self.stream.get_mut().unwrap_or_else(PoisonError::into_inner)
    }
}
