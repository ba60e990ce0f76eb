//! Replays a CSV-captured matrix/indexer pair through the kernels.
//!
//! Expects a capture directory holding `shape.csv`, `indptr.csv`,
//! `indices.csv`, `data.csv`, `rows.csv`, `cols.csv`, `values.csv`.
//! Debug driver only; not part of the library contract.

use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use csindex_core::Layout;
use csindex_io::{load_coo, load_cs, load_shape};
use csindex_kernels::{index_by_merge, index_by_search, Op, SearchKind};

enum Mode {
    Search(SearchKind),
    Merge,
}

fn usage() -> ExitCode {
    eprintln!(
        "usage: replay <capture-dir> <csr|csc> <get|set|add> \
         <binary|interpolation|weighted|merge> [workers]"
    );
    eprintln!("       workers: positive thread count, or -1 for the runtime default");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if !(4..=5).contains(&args.len()) {
        return usage();
    }
    let dir = PathBuf::from(&args[0]);
    let layout = match args[1].as_str() {
        "csr" => Layout::RowMajor,
        "csc" => Layout::ColMajor,
        _ => return usage(),
    };
    let op = match args[2].as_str() {
        "get" => Op::Get,
        "set" => Op::Set,
        "add" => Op::Add,
        _ => return usage(),
    };
    let mode = match args[3].as_str() {
        "binary" => Mode::Search(SearchKind::Binary),
        "interpolation" => Mode::Search(SearchKind::Interpolation),
        "weighted" => Mode::Search(SearchKind::Weighted),
        "merge" => Mode::Merge,
        _ => return usage(),
    };
    let workers = match args.get(4).map(|s| s.parse::<i64>()) {
        None => None,
        Some(Ok(-1)) => None,
        Some(Ok(n)) if n > 0 => Some(n as usize),
        _ => return usage(),
    };

    match replay(&dir, layout, op, &mode, workers) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("replay: {e}");
            ExitCode::FAILURE
        }
    }
}

fn replay(
    dir: &PathBuf,
    layout: Layout,
    op: Op,
    mode: &Mode,
    workers: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let (nrows, ncols) = load_shape(dir)?;
    let mut m = load_cs(dir, layout, nrows, ncols)?;
    let mut ix = load_coo(dir, nrows, ncols)?;
    println!(
        "loaded {}x{} matrix with {} stored entries, {} coordinates",
        nrows,
        ncols,
        m.nnz(),
        ix.nnz()
    );

    let start = Instant::now();
    match mode {
        Mode::Search(kind) => index_by_search(&mut m, &mut ix, op, *kind, workers)?,
        Mode::Merge => index_by_merge(&mut m, &mut ix, op, workers)?,
    }
    println!("indexed {} coordinates in {:?}", ix.nnz(), start.elapsed());

    match op {
        Op::Get => {
            for (k, v) in ix.data.iter().take(5).enumerate() {
                println!("values[{k}] = {v}");
            }
        }
        Op::Set | Op::Add => {
            for (p, v) in m.data.iter().take(5).enumerate() {
                println!("data[{p}] = {v}");
            }
        }
    }
    Ok(())
}
