use std::fs;
use std::path::Path;

use csindex_core::Layout;
use csindex_io::{
    load_coo, load_cs, load_shape, read_coo_csv, read_f64_column, read_i64_column, LoadError,
};
use csindex_kernels::{index_by_merge, Op};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn read_columns() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "ints.csv", "0\n1\n4\n\n5\n");
    write(dir.path(), "floats.csv", "value\n0.45\n0.22\n");

    let ints = read_i64_column(&dir.path().join("ints.csv"), false).unwrap();
    assert_eq!(ints, vec![0, 1, 4, 5]); // blank lines skipped

    let floats = read_f64_column(&dir.path().join("floats.csv"), true).unwrap();
    assert!(approx_eq(floats[0], 0.45) && approx_eq(floats[1], 0.22));
}

#[test]
fn parse_errors_carry_location() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "bad.csv", "1\ntwo\n3\n");
    let err = read_i64_column(&dir.path().join("bad.csv"), false).unwrap_err();
    match err {
        LoadError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_i64_column(&dir.path().join("nope.csv"), false).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn coo_triples() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "ix.csv",
        "row,col,value\n0, 2, 0.5\n1,0,1.5\n",
    );
    let ix = read_coo_csv(&dir.path().join("ix.csv"), true, 5, 3).unwrap();
    assert_eq!(ix.row, vec![0, 1]);
    assert_eq!(ix.col, vec![2, 0]);
    assert!(approx_eq(ix.data[0], 0.5) && approx_eq(ix.data[1], 1.5));

    write(dir.path(), "short.csv", "0,2\n");
    let err = read_coo_csv(&dir.path().join("short.csv"), false, 5, 3).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

fn write_capture(dir: &Path) {
    write(dir, "shape.csv", "5\n3\n");
    write(dir, "indptr.csv", "0\n1\n4\n4\n5\n6\n");
    write(dir, "indices.csv", "2\n0\n1\n2\n1\n1\n");
    write(dir, "data.csv", "0.45\n0.22\n0.74\n0.87\n0.60\n0.93\n");
    write(dir, "rows.csv", "0\n0\n1\n1\n4\n4\n4\n");
    write(dir, "cols.csv", "2\n2\n0\n1\n1\n1\n1\n");
    write(dir, "values.csv", "0\n0\n0\n0\n0\n0\n0\n");
}

#[test]
fn capture_round_trip_through_kernels() {
    let dir = tempfile::tempdir().unwrap();
    write_capture(dir.path());

    let (nrows, ncols) = load_shape(dir.path()).unwrap();
    assert_eq!((nrows, ncols), (5, 3));
    let mut m = load_cs(dir.path(), Layout::RowMajor, nrows, ncols).unwrap();
    let mut ix = load_coo(dir.path(), nrows, ncols).unwrap();

    index_by_merge(&mut m, &mut ix, Op::Get, None).unwrap();
    let expected = [0.45, 0.45, 0.22, 0.74, 0.93, 0.93, 0.93];
    for (got, want) in ix.data.iter().zip(expected) {
        assert!(approx_eq(*got, want));
    }
}

#[test]
fn capture_with_malformed_structure_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_capture(dir.path());
    // Break the offset table: last element no longer equals nnz.
    write(dir.path(), "indptr.csv", "0\n1\n4\n4\n5\n7\n");
    let err = load_cs(dir.path(), Layout::RowMajor, 5, 3).unwrap_err();
    assert!(matches!(err, LoadError::Shape(_)));
}
