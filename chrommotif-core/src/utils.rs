use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::consts::{GZ_FILE_EXTENSION, STDIO_PATH};

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(GZ_FILE_EXTENSION))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

/// Get a writer for a file, a gzipped file, or stdout
///
/// # Arguments
///
/// - path: path to the file to write, `None` or '-' for stdout. Paths ending in
///   `.gz` are gzip compressed. Parent directories are created as needed.
///
/// # Returns
///
/// A `BufWriter` over the selected sink. The gzip stream is finalized when the
/// writer is dropped, so callers should `flush()` before dropping to surface errors.
pub fn get_dynamic_writer(path: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let path = match path {
        Some(p) if p != Path::new(STDIO_PATH) => p,
        _ => {
            return Ok(BufWriter::new(
                Box::new(std::io::stdout().lock()) as Box<dyn Write>
            ));
        }
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {:?}", parent)
            })?;
        }
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    let file: Box<dyn Write> = match is_gzipped(path) {
        true => Box::new(GzEncoder::new(file, Compression::default())),
        false => Box::new(file),
    };

    Ok(BufWriter::new(file))
}
