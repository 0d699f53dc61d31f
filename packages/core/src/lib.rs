//! Bulletsplit core - Segment free text at embedded numeric bullet markers.
//!
//! This crate detects numeric bullet markers ("1.", "2:", "3)") inside a
//! free-text string and cuts the string into an ordered list of bullet
//! segments, even when the text contains noise digits that are not real
//! markers. Detection runs a scoring search over a layered graph of marker
//! candidates, so an isolated "5" in running text is rejected while a
//! genuine "1. ... 2. ... 3. ..." sequence is split exactly at its markers.
//!
//! # Example
//!
//! ```
//! use bulletsplit_core::SplitEngine;
//!
//! let engine = SplitEngine::new();
//! let segments = engine.split("item 5 costs 1. apple 2. banana");
//! assert_eq!(segments, vec!["item 5 costs ", "1. apple ", "2. banana"]);
//! ```
//!
//! # Architecture
//!
//! The pipeline runs four stages, each consuming only the previous stage's
//! output:
//!
//! - [`scanner`]: find numeric marker candidates and their offsets
//! - [`sequence`]: group candidates into contiguous value layers 1..K
//! - [`optimizer`]: score paths through the layers and pick the best one
//! - [`segmenter`]: cut the string at the chosen marker offsets
//!
//! [`engine::SplitEngine`] ties the stages together; [`config`] holds the
//! tunables and [`text`] the markup preprocessing used by callers.

pub mod config;
pub mod engine;
pub mod optimizer;
pub mod scanner;
pub mod segmenter;
pub mod sequence;
pub mod text;
pub mod types;

// Re-export main entry points
pub use config::{ScoreWeights, DEFAULT_MAX_BULLETS};
pub use engine::SplitEngine;
pub use text::strip_markup;
pub use types::{Marker, OptimalPath, PathNode};
