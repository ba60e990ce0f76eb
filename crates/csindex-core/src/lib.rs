//! Core data structures for csindex (pure Rust)

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod coo;
mod cs;

pub use coo::Coo;
pub use cs::{Cs, Layout};
