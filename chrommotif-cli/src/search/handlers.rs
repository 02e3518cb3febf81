use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use chrommotif_core::consts::STDIO_PATH;
use chrommotif_search::{MotifPattern, MotifSearch};

use super::cli::*;

pub fn run_search(matches: &ArgMatches) -> Result<()> {
    let motif_type = matches
        .get_one::<String>(TYPE_ARG)
        .expect("A motif type is required.");

    let file = matches
        .get_one::<String>(FILE_ARG)
        .expect("A path to a state annotation file is required.");

    let output = matches
        .get_one::<String>(OUT_ARG)
        .map(Path::new)
        .filter(|p| *p != Path::new(STDIO_PATH));

    let pattern: MotifPattern = motif_type.parse()?;
    let tag = matches
        .get_one::<String>(TAG_ARG)
        .cloned()
        .unwrap_or_else(|| pattern.tag().to_string());

    // clap fills these from their defaults
    let slop = *matches
        .get_one::<u32>(SLOP_ARG)
        .context("--slop must be a non-negative integer")?;
    let binsize = *matches
        .get_one::<u32>(BINSIZE_ARG)
        .context("--binsize must be a positive integer")?;
    let threshold = *matches
        .get_one::<f64>(THRESHOLD_ARG)
        .context("--threshold must be a number")?;

    let search = MotifSearch::new(pattern)
        .with_threshold(threshold)
        .with_binsize(binsize)
        .with_slop(slop)
        .with_capacity(matches.get_one::<usize>(MAX_BINS_ARG).copied())
        .with_overlapping(!matches.get_flag(NON_OVERLAPPING_ARG))
        .with_tag(Some(tag))
        .with_bed3(matches.get_flag(BED3_ARG))
        .with_progress(output.is_some());

    let summary = search
        .run(Path::new(file), output)
        .with_context(|| format!("Motif search failed for {}", file))?;

    if let Some(output) = output {
        info!("{} records written to {:?}", summary.matches, output);
    }

    Ok(())
}
