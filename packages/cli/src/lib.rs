//! Bulletsplit CLI - segment free text at numeric bullet markers.
//!
//! The detection logic lives in [`bulletsplit_core`]; this crate is the
//! I/O glue around it:
//!
//! - [`cli`]: command-line interface (`split` and `csv` subcommands)
//! - [`dataset`]: CSV loading, column mapping and output writing
//! - [`error`]: error types and Result alias

pub mod cli;
pub mod dataset;
pub mod error;

pub use error::{Result, SplitError};
