#![allow(non_snake_case)]
use lpsparse::algebra::*;
use std::env;
use std::fs::File;

fn main() {
    let mut A = SparseColMatrix::new(&[0, 1], &[0, 1, 2]).unwrap();
    A.add_column(0, [(0, 1.0), (1, -1.0)]).unwrap();
    A.add(1, 2, 4.0, Membership::RowsAndCols).unwrap();

    // write the matrix to a scratch file and read it back
    let filename = env::temp_dir().join("lpsparse_demo.json");
    let mut file = File::create(&filename).unwrap();
    A.save_to_file(&mut file).unwrap();

    let mut file = File::open(&filename).unwrap();
    let B = SparseColMatrix::<f64>::load_from_file(&mut file, None).unwrap();

    println!("{:?}", B.to_csc());
}
