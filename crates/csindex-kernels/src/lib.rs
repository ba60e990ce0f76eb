//! Indexing kernels for csindex (pure Rust, rayon parallel)

pub mod error;
pub mod index;
pub mod ops;
pub mod search;
pub mod util;

pub use error::{IndexError, Result};
pub use index::{index_by_merge, index_by_search};
pub use ops::Op;
pub use search::{
    binary_search, first_occurrence, interpolation_search, weighted_search, SearchKind,
};
pub use util::segment_bounds;
