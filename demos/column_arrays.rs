#![allow(non_snake_case)]
use lpsparse::algebra::*;

fn main() {
    let rows: Vec<usize> = (0..10).collect();
    let cols: Vec<usize> = (50..60).collect();

    let settings = MatrixSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();

    let mut A = SparseColMatrix::with_settings(&rows, &cols, settings).unwrap();
    A.add(1, 52, "item", Membership::Unchecked).unwrap();
    A.add(2, 54, "stuff", Membership::Unchecked).unwrap();

    let arrays = A.to_column_arrays();
    println!("{:?}", arrays.into_parts());
}
