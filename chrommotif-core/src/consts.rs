pub const DELIMITER: char = '\t';

/// Path understood as "use standard input/output".
pub const STDIO_PATH: &str = "-";

pub const GZ_FILE_EXTENSION: &str = "gz";

/// Minimum number of columns in a state annotation line:
/// chrom, start, end, state label, confidence.
pub const STATE_BIN_MIN_COLUMNS: usize = 5;
