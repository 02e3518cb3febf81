use std::ops::Range;

use chrommotif_core::errors::StateBinError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotifSearchError {
    #[error("Unknown chromatin state {label:?} at line {line}")]
    UnknownState { label: String, line: usize },

    #[error("Malformed annotation line {line}: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: StateBinError,
    },

    #[error("Input has more than {capacity} bins; raise the bin capacity or split the file")]
    CapacityExceeded { capacity: usize },

    #[error("Capture {capture:?} starts before bin {cursor}, which was already consumed")]
    CaptureOutOfOrder { capture: Range<usize>, cursor: usize },

    #[error("Capture {capture:?} refers to bin {bin}, but the annotation file has only {lines} lines")]
    MissingBin {
        capture: Range<usize>,
        bin: usize,
        lines: usize,
    },

    #[error("Capture {capture:?} ends past the largest representable coordinate")]
    CoordinateOverflow { capture: Range<usize> },

    #[error("Unknown motif type {0:?}; expected one of: bivalent, reprpc")]
    UnknownPattern(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MotifSearchError>;
