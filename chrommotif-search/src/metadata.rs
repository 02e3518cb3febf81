use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{ASSEMBLY_TOKEN, UNKNOWN_TIMEPOINT};

// ...<tissue>_<timepoint>_mm10..., e.g. /some/path/lung_15.5_mm10_18_posterior.bed
static SAMPLE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:.*/)?(.*)_([0-9.]+|{UNKNOWN_TIMEPOINT})_{ASSEMBLY_TOKEN}.*$"
    ))
    .expect("sample name pattern is a valid regex")
});

///
/// Tissue and developmental timepoint of a sample, as encoded in the
/// annotation file name.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleMetadata {
    pub tissue: String,
    pub timepoint: String,
}

impl SampleMetadata {
    ///
    /// Parse `<tissue>_<timepoint|unknown>_mm10` out of a path. Returns `None` when
    /// the path does not follow the naming convention.
    ///
    pub fn from_path(path: &Path) -> Option<Self> {
        let path = path.to_str()?;
        let caps = SAMPLE_NAME_REGEX.captures(path)?;

        Some(SampleMetadata {
            tissue: caps.get(1)?.as_str().to_string(),
            timepoint: caps.get(2)?.as_str().to_string(),
        })
    }

    pub fn unknown() -> Self {
        SampleMetadata {
            tissue: UNKNOWN_TIMEPOINT.to_string(),
            timepoint: UNKNOWN_TIMEPOINT.to_string(),
        }
    }
}
