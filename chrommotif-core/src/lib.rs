//! # Core models and utilities for chromatin state motif search.
//!
//! This crate holds the small pieces shared by the rest of the workspace: the [models::Region]
//! type used for reported intervals, the [models::StateBin] record that represents one line of a
//! ChromHMM-style posterior annotation file, and helpers for opening (optionally gzipped) inputs
//! and outputs.
//!
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;
