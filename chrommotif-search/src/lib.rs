//! Chromatin state motif search.
//!
//! Finds stretches of ChromHMM state calls matching a known motif, such as bivalent
//! promoters or polycomb repressed domains, and reports their genomic coordinates.
//!
//! The pipeline has three stages:
//!
//! - encode the per-bin state calls of an annotation file into a one-symbol-per-bin string
//!   ([encoder::SequenceEncoder]), dropping calls at or below the confidence threshold
//! - find every (possibly overlapping) occurrence of a [pattern::MotifPattern] in that string
//!   ([matcher::MotifMatcher])
//! - replay the annotation file to turn each motif core back into a genomic interval
//!   ([reconstruct::CoordinateReconstructor]) and write it out ([output::RecordWriter])
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chrommotif_search::{MotifPattern, MotifSearch};
//!
//! let summary = MotifSearch::new(MotifPattern::Bivalent)
//!     .with_slop(0)
//!     .run(Path::new("lung_15.5_mm10_18_posterior.bed"), None)
//!     .unwrap();
//!
//! println!("{} motifs", summary.matches);
//! ```

pub mod alphabet;
pub mod consts;
pub mod encoder;
pub mod errors;
pub mod matcher;
pub mod metadata;
pub mod output;
pub mod pattern;
pub mod reconstruct;
pub mod search;

// re-exports
pub use alphabet::{Alphabet, ChromState};
pub use encoder::{EncodedSequence, SequenceEncoder};
pub use errors::MotifSearchError;
pub use matcher::{MotifMatch, MotifMatcher};
pub use metadata::SampleMetadata;
pub use output::{OutputFormat, RecordWriter};
pub use pattern::MotifPattern;
pub use reconstruct::CoordinateReconstructor;
pub use search::{MotifSearch, SearchSummary};
