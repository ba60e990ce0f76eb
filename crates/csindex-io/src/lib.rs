//! CSV fixture loading for csindex
//!
//! Peripheral to the kernels: these helpers read the columnar numeric
//! text files the test fixtures and debug captures use (one value per
//! line, or one comma-separated record per line, optional header row).
//! They validate nothing on the kernels' behalf beyond what
//! `from_parts(.., check = true)` checks at construction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csindex_core::{Coo, Cs, Layout};
use thiserror::Error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Failures while reading fixture/capture files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path}:{line}: {what}")]
    Parse {
        path: PathBuf,
        line: usize,
        what: String,
    },

    #[error("malformed arrays: {0}")]
    Shape(String),
}

fn parse_column<T>(path: &Path, skip_header: bool) -> Result<Vec<T>, LoadError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let reader = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if lineno == 0 && skip_header {
            continue;
        }
        let field = line.trim();
        if field.is_empty() {
            continue;
        }
        let v = field.parse::<T>().map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            line: lineno + 1,
            what: e.to_string(),
        })?;
        out.push(v);
    }
    Ok(out)
}

/// One i64 per line.
pub fn read_i64_column(path: &Path, skip_header: bool) -> Result<Vec<i64>, LoadError> {
    parse_column(path, skip_header)
}

/// One f64 per line.
pub fn read_f64_column(path: &Path, skip_header: bool) -> Result<Vec<f64>, LoadError> {
    parse_column(path, skip_header)
}

/// One `row,col,value` record per line.
pub fn read_coo_csv(
    path: &Path,
    skip_header: bool,
    nrows: usize,
    ncols: usize,
) -> Result<Coo<f64, i64>, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let mut row = Vec::new();
    let mut col = Vec::new();
    let mut data = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if lineno == 0 && skip_header {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let bad = |what: &str| LoadError::Parse {
            path: path.to_path_buf(),
            line: lineno + 1,
            what: what.to_string(),
        };
        let mut fields = line.split(',').map(str::trim);
        let (r, c, v) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(r), Some(c), Some(v), None) => (r, c, v),
            _ => return Err(bad("expected exactly three fields: row,col,value")),
        };
        row.push(r.parse::<i64>().map_err(|e| bad(&e.to_string()))?);
        col.push(c.parse::<i64>().map_err(|e| bad(&e.to_string()))?);
        data.push(v.parse::<f64>().map_err(|e| bad(&e.to_string()))?);
    }
    Coo::from_parts(nrows, ncols, row, col, data, true).map_err(LoadError::Shape)
}

/// Read `shape.csv` (two lines: nrows then ncols).
pub fn load_shape(dir: &Path) -> Result<(usize, usize), LoadError> {
    let v = read_i64_column(&dir.join("shape.csv"), false)?;
    if v.len() != 2 || v[0] < 0 || v[1] < 0 {
        return Err(LoadError::Shape(
            "shape.csv must hold exactly nrows and ncols".into(),
        ));
    }
    Ok((v[0] as usize, v[1] as usize))
}

/// Load a compressed matrix from a capture directory holding
/// `indptr.csv`, `indices.csv`, and `data.csv` (one value per line).
pub fn load_cs(
    dir: &Path,
    layout: Layout,
    nrows: usize,
    ncols: usize,
) -> Result<Cs<f64, i64>, LoadError> {
    let indptr = read_i64_column(&dir.join("indptr.csv"), false)?;
    let indices = read_i64_column(&dir.join("indices.csv"), false)?;
    let data = read_f64_column(&dir.join("data.csv"), false)?;
    Cs::from_parts(layout, nrows, ncols, indptr, indices, data, true).map_err(LoadError::Shape)
}

/// Load an index list from a capture directory holding `rows.csv`,
/// `cols.csv`, and `values.csv` (one value per line).
pub fn load_coo(dir: &Path, nrows: usize, ncols: usize) -> Result<Coo<f64, i64>, LoadError> {
    let row = read_i64_column(&dir.join("rows.csv"), false)?;
    let col = read_i64_column(&dir.join("cols.csv"), false)?;
    let data = read_f64_column(&dir.join("values.csv"), false)?;
    Coo::from_parts(nrows, ncols, row, col, data, true).map_err(LoadError::Shape)
}
