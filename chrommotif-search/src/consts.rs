/// Width of one genomic bin, in base pairs.
pub const DEFAULT_BINSIZE: u32 = 200;

/// Bases the CLI adds to both sides of every reported interval. The library adds none unless asked.
pub const DEFAULT_SLOP: u32 = 200;

/// Posterior probability a bin must exceed (strictly) to be assigned its state symbol.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Symbol for bins without a confident state call. Never part of any motif.
pub const PLACEHOLDER_SYMBOL: u8 = b'.';

/// Number of 200 bp bins covering the mm10 assembly.
pub const MM10_200BP_BINS: usize = 13_627_678;

/// Assembly token expected in annotation file names.
pub const ASSEMBLY_TOKEN: &str = "mm10";

pub const UNKNOWN_TIMEPOINT: &str = "unknown";

/// Bins processed between progress updates.
pub const PROGRESS_INTERVAL: usize = 100_000;
