//! Integration tests for flat-buffer import and export.
//!
//! A buffer written in one layout and read back in the other must produce the
//! transpose, and the internal row-major grid must never depend on which
//! layout was used to build it.

use linmat::prelude::*;
use linmat::LinAlgError;

fn sequence<const N: usize>() -> [f64; N] {
    std::array::from_fn(|i| i as f64)
}

/// Exporting row-major and re-reading as column-major transposes.
#[test]
fn cross_layout_round_trip_transposes() {
    let m = Mat4::from_array(&sequence::<16>(), Layout::RowMajor);
    let flipped = Mat4::from_array(&m.copy(Layout::RowMajor), Layout::ColumnMajor);
    assert_eq!(flipped.elements(), m.transpose().elements());

    let m3 = Mat3::from_array(&sequence::<9>(), Layout::ColumnMajor);
    let flipped3 = Mat3::from_array(&m3.copy(Layout::ColumnMajor), Layout::RowMajor);
    assert_eq!(flipped3.elements(), m3.transpose().elements());
}

/// Same-layout round trips are exact.
#[test]
fn same_layout_round_trip_is_exact() {
    for layout in [Layout::RowMajor, Layout::ColumnMajor] {
        let data = sequence::<16>();
        assert_eq!(Mat4::from_array(&data, layout).copy(layout), data);
    }
}

/// Column-major buffers place consecutive elements down a column.
#[test]
fn column_major_fills_columns() {
    let m = Mat3::from_array(&sequence::<9>(), Layout::ColumnMajor);
    assert_eq!(m.col(0).unwrap().to_array(), [0.0, 1.0, 2.0]);
    assert_eq!(m.row(0).unwrap().to_array(), [0.0, 3.0, 6.0]);
    assert_eq!(m[(2, 1)], 5.0);
}

/// `from_rows` with a column-major layout treats each array as a column.
#[test]
fn from_rows_respects_layout() {
    let rows = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
    let by_row = Mat3::from_rows(rows, Layout::RowMajor);
    let by_col = Mat3::from_rows(rows, Layout::ColumnMajor);
    assert_eq!(by_row.elements(), &rows);
    assert_eq!(by_col.elements(), by_row.transpose().elements());
    assert_eq!(by_col.col(1).unwrap(), Vec3::new(4.0, 5.0, 6.0));
}

/// Slices of the wrong length are rejected with the expected size.
#[test]
fn slice_length_is_checked() {
    let short = [0.0_f32; 15];
    assert_eq!(
        Mat4::from_slice(&short, Layout::RowMajor),
        Err(LinAlgError::DimensionMismatch { expected: 16, found: 15 })
    );
    let long = vec![0.0_f64; 10];
    assert_eq!(
        Mat3::from_slice(&long, Layout::ColumnMajor),
        Err(LinAlgError::DimensionMismatch { expected: 9, found: 10 })
    );
    let exact: Vec<f64> = (0..9).map(f64::from).collect();
    let m = Mat3::from_slice(&exact, Layout::RowMajor).unwrap();
    assert_eq!(m[(1, 0)], 3.0);
}

/// The layout used for the translation slot follows the vector convention.
#[test]
fn column_major_export_of_column_vector_translation() {
    let m = linmat::translate(1.0_f32, 2.0, 3.0, Convention::ColumnVector);
    let gpu = m.copy(Layout::ColumnMajor);
    assert_eq!(&gpu[12..], &[1.0, 2.0, 3.0, 1.0]);
    let row = linmat::translate(1.0_f32, 2.0, 3.0, Convention::RowVector);
    assert_eq!(row.copy(Layout::RowMajor), gpu);
}

/// Out-of-range element access reports the offending index.
#[test]
fn element_access_is_bounds_checked() {
    let mut m = Mat4::<f64>::IDENTITY;
    assert_eq!(m.get(4, 0), Err(LinAlgError::IndexOutOfRange { index: 4, len: 4 }));
    assert_eq!(m.set(0, 7, 1.0), Err(LinAlgError::IndexOutOfRange { index: 7, len: 4 }));
    assert!(m.row(4).is_err());
    assert!(m.set_col(1, Vec4::new(9.0, 9.0, 9.0, 9.0)).is_ok());
    assert_eq!(m.get(3, 1), Ok(9.0));
}
