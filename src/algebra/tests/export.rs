#![allow(non_snake_case)]
use crate::algebra::*;
use crate::io::ConfigurablePrintTarget;

#[test]
fn test_column_arrays_two_entries() {
    let mut A = SparseColMatrix::new(&[1, 2], &[50, 51]).unwrap();
    A.add(1, 50, "a", Membership::Unchecked).unwrap();
    A.add(2, 51, "b", Membership::Unchecked).unwrap();

    let (nnz, colstarts, collens, rowval, nzval) = A.to_column_arrays().into_parts();
    assert_eq!(nnz, 2);
    assert_eq!(colstarts, vec![0, 1, 2]);
    assert_eq!(collens, vec![1, 1]);
    assert_eq!(rowval, vec![1, 2]);
    assert_eq!(nzval, vec!["a", "b"]);
}

#[test]
fn test_column_arrays_empty_column() {
    let mut A = SparseColMatrix::new(&[1], &[10, 20]).unwrap();
    A.add(1, 10, "x", Membership::Unchecked).unwrap();

    let arrays = A.to_column_arrays();
    assert_eq!(arrays.nnz, 1);
    assert_eq!(arrays.colstarts, vec![0, 1, 1]);
    assert_eq!(arrays.collens, vec![1, 0]);
    assert_eq!(arrays.rowval, vec![1]);
    assert_eq!(arrays.nzval, vec!["x"]);
    assert!(arrays.check_format().is_ok());
}

#[test]
fn test_column_arrays_empty_matrix() {
    let A: SparseColMatrix<f64> = SparseColMatrix::new(&[0, 1], &[3, 4, 5]).unwrap();
    let arrays = A.to_column_arrays();

    assert_eq!(arrays.nnz, 0);
    assert_eq!(arrays.colstarts, vec![0, 0, 0, 0]);
    assert_eq!(arrays.collens, vec![0, 0, 0]);
    assert!(arrays.rowval.is_empty());
    assert!(arrays.nzval.is_empty());
    assert!(arrays.check_format().is_ok());

    // no columns at all still gives the end marker
    let B: SparseColMatrix<f64> = SparseColMatrix::new(&[0], &[]).unwrap();
    assert_eq!(B.to_column_arrays().colstarts, vec![0]);
}

#[test]
fn test_column_arrays_bulk_insert() {
    let mut A = SparseColMatrix::new(&[1], &[10, 20]).unwrap();
    A.add_column(20, [(1, "p"), (2, "q")]).unwrap();

    let arrays = A.to_column_arrays();
    assert_eq!(arrays.colstarts, vec![0, 0, 2]);
    assert_eq!(arrays.collens, vec![0, 2]);
    assert_eq!(arrays.rowval, vec![1, 2]);
    assert_eq!(arrays.nzval, vec!["p", "q"]);
}

#[test]
fn test_column_arrays_declared_order() {
    // columns declared out of numeric order and filled in reverse
    let mut A = SparseColMatrix::new(&[0, 1, 2], &[7, 3, 5]).unwrap();
    A.add_unchecked(0, 5, 1.0);
    A.add_unchecked(2, 3, 2.0);
    A.add_unchecked(1, 7, 3.0);
    A.add_unchecked(0, 7, 4.0);

    let arrays = A.to_column_arrays();
    assert_eq!(arrays.colstarts, vec![0, 2, 3, 4]);
    assert_eq!(arrays.collens, vec![2, 1, 1]);
    // rows within a column follow insertion order, not numeric order
    assert_eq!(arrays.rowval, vec![1, 0, 2, 0]);
    assert_eq!(arrays.nzval, vec![3.0, 4.0, 2.0, 1.0]);
    assert!(arrays.check_format().is_ok());
}

#[test]
fn test_column_arrays_overwrite_and_undeclared_col() {
    let mut A = SparseColMatrix::new(&[0, 1], &[0, 1]).unwrap();
    A.add_unchecked(0, 0, 1.0);
    A.add_unchecked(0, 0, 2.0);
    A.add_unchecked(1, 9, 3.0);

    let arrays = A.to_column_arrays();
    // the undeclared column counts towards nnz but is not exported
    assert_eq!(arrays.nnz, 2);
    assert_eq!(arrays.colstarts, vec![0, 1, 1]);
    assert_eq!(arrays.nzval, vec![2.0]);
    assert!(arrays.check_format().is_ok());
}

#[test]
fn test_column_arrays_repeatable() {
    let mut A = SparseColMatrix::new(&[0, 1], &[0, 1]).unwrap();
    A.add_unchecked(1, 1, 1.0);
    A.add_unchecked(0, 1, 2.0);
    assert_eq!(A.to_column_arrays(), A.to_column_arrays());
    assert_eq!(A.nnz(), 2);
}

#[test]
fn test_column_arrays_check_format() {
    let good = ColumnArrays {
        nnz: 3,
        colstarts: vec![0, 2, 3],
        collens: vec![2, 1],
        rowval: vec![4, 1, 0],
        nzval: vec![1., 2., 3.],
    };
    assert!(good.check_format().is_ok());
    assert_eq!(good.ncols(), 2);

    let mut bad = good.clone();
    bad.nzval.pop();
    assert_eq!(bad.check_format(), Err(SparseFormatError::IncompatibleDimension));

    let mut bad = good.clone();
    bad.colstarts = vec![0, 2];
    assert_eq!(bad.check_format(), Err(SparseFormatError::IncompatibleDimension));

    let mut bad = good.clone();
    bad.colstarts = vec![0, 4, 3];
    assert_eq!(bad.check_format(), Err(SparseFormatError::BadColptr));

    let mut bad = good;
    bad.collens = vec![1, 2];
    assert_eq!(bad.check_format(), Err(SparseFormatError::BadColLength));
}

#[test]
fn test_to_csc() {
    // rows declared as [30, 10, 20]; row 40 is admitted unchecked
    let mut A = SparseColMatrix::new(&[30, 10, 20], &[1, 0]).unwrap();
    A.add_unchecked(20, 1, 1.0);
    A.add_unchecked(30, 1, 2.0);
    A.add_unchecked(40, 0, 3.0);
    A.add_unchecked(10, 0, 4.0);

    let C = A.to_csc();
    assert_eq!(A.row_order(), vec![30, 10, 20, 40]);
    assert_eq!(C.size(), (4, 2));
    assert_eq!(C.nnz(), 4);
    assert!(C.check_format().is_ok());

    assert_eq!(C.colptr, vec![0, 2, 4]);
    assert_eq!(C.rowval, vec![0, 2, 1, 3]);
    assert_eq!(C.nzval, vec![2.0, 1.0, 4.0, 3.0]);
    assert_eq!(C.get_entry((2, 0)), Some(1.0));
    assert_eq!(C.get_entry((3, 1)), Some(3.0));
    assert_eq!(C.get_entry((0, 1)), None);
}

#[test]
fn test_verbose_export_summary() {
    let settings = MatrixSettingsBuilder::default().verbose(true).build().unwrap();
    let mut A = SparseColMatrix::with_settings(&[0, 1], &[0, 1, 2], settings).unwrap();
    A.print_to_buffer();

    A.add_unchecked(0, 1, 1.0);
    A.add_unchecked(5, 9, 1.0);
    let _ = A.to_column_arrays();

    let out = A.get_print_buffer().unwrap();
    assert!(out.contains("2 x 3 declared"));
    assert!(out.contains("(+1 rows, +1 cols admitted)"));
    assert!(out.contains("nnz = 2"));
    assert!(out.contains("exported 1 of 2 entries in 3 columns"));
}

#[test]
fn test_quiet_export_prints_nothing() {
    let mut A: SparseColMatrix<f64> = SparseColMatrix::new(&[0], &[0]).unwrap();
    A.print_to_buffer();
    let _ = A.to_column_arrays();
    assert_eq!(A.get_print_buffer().unwrap(), "");

    A.print_summary().unwrap();
    assert!(A.get_print_buffer().unwrap().contains("1 x 1 declared, nnz = 0"));
}

#[test]
fn test_to_csc_empty() {
    let A: SparseColMatrix<f64> = SparseColMatrix::new(&[0, 1, 2], &[4, 5]).unwrap();
    let C = A.to_csc();
    assert_eq!(C, CscMatrix::spalloc(3, 2, 0));
    assert_eq!(C.nnz(), 0);
    assert_eq!(C.colptr, vec![0, 0, 0]);
    assert!(C.check_format().is_ok());

    // entries only in an undeclared column are not converted
    let mut B: SparseColMatrix<f64> = SparseColMatrix::new(&[0], &[1]).unwrap();
    B.add_unchecked(0, 9, 1.0);
    let C = B.to_csc();
    assert_eq!(C.nnz(), 0);
    assert!(C.check_format().is_ok());
}

fn verbose_matrix() -> SparseColMatrix<f64> {
    let settings = MatrixSettingsBuilder::default().verbose(true).build().unwrap();
    let mut A = SparseColMatrix::with_settings(&[0, 1], &[0, 1], settings).unwrap();
    A.add_unchecked(1, 1, 2.0);
    A
}

#[test]
fn test_verbose_export_to_file() {
    use std::io::{Read, Seek, SeekFrom};

    let mut A = verbose_matrix();
    let file = tempfile::tempfile().unwrap();
    A.print_to_file(file.try_clone().unwrap());
    let _ = A.to_column_arrays();

    let mut file = file;
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut out = String::new();
    file.read_to_string(&mut out).unwrap();
    assert!(out.contains("2 x 2 declared, nnz = 1, exported 1 of 1 entries in 2 columns"));

    // output is no longer buffered
    assert!(A.get_print_buffer().is_err());
}

#[test]
fn test_verbose_export_to_stream() {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut A = verbose_matrix();
    let buffer = SharedBuffer::default();
    A.print_to_stream(Box::new(buffer.clone()));
    let _ = A.to_column_arrays();
    A.print_summary().unwrap();

    let out = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("exported 1 of 1 entries in 2 columns"));
    assert!(lines[1].ends_with("2 x 2 declared, nnz = 1"));
}

#[test]
fn test_print_to_stdout_resets_buffer() {
    let mut A = verbose_matrix();
    A.print_to_buffer();
    A.print_summary().unwrap();
    assert!(!A.get_print_buffer().unwrap().is_empty());

    A.print_to_stdout();
    assert!(A.get_print_buffer().is_err());
    assert!(A.print_summary().is_ok());
}
