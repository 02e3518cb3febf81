use clap::{Arg, ArgAction, Command, arg, value_parser};

use chrommotif_search::consts::MM10_200BP_BINS;

pub const TYPE_ARG: &str = "type";
pub const FILE_ARG: &str = "file";
pub const OUT_ARG: &str = "out";
pub const BED3_ARG: &str = "bed3";
pub const SLOP_ARG: &str = "slop";
pub const BINSIZE_ARG: &str = "binsize";
pub const THRESHOLD_ARG: &str = "threshold";
pub const MAX_BINS_ARG: &str = "max-bins";
pub const TAG_ARG: &str = "tag";
pub const NON_OVERLAPPING_ARG: &str = "non-overlapping";
pub const VERBOSE_ARG: &str = "verbose";

pub fn create_search_cli(command: Command) -> Command {
    command
        .arg(
            Arg::new(TYPE_ARG)
                .long(TYPE_ARG)
                .short('t')
                .required(true)
                .value_parser(["bivalent", "reprpc"])
                .help("Motif to search for"),
        )
        .arg(
            Arg::new(FILE_ARG)
                .long(FILE_ARG)
                .short('f')
                .required(true)
                .help("State annotation file: chrom, start, end, state, posterior (.gz allowed)"),
        )
        .arg(
            Arg::new(OUT_ARG)
                .long(OUT_ARG)
                .short('o')
                .required(false)
                .help("Output file (default: stdout, '-' for stdout, .gz to compress)"),
        )
        .arg(
            Arg::new(BED3_ARG)
                .long(BED3_ARG)
                .short('3')
                .action(ArgAction::SetTrue)
                .help("Only write chrom, start and end"),
        )
        .arg(
            arg!(--slop <SLOP> "Bases added to both ends of every motif")
                .required(false)
                .value_parser(value_parser!(u32))
                .default_value("200"),
        )
        .arg(
            arg!(--binsize <BINSIZE> "Width of one bin in base pairs")
                .required(false)
                .value_parser(value_parser!(u32).range(1..))
                .default_value("200"),
        )
        .arg(
            arg!(--threshold <THRESHOLD> "Posterior a state call must exceed to be used")
                .required(false)
                .value_parser(value_parser!(f64))
                .default_value("0.5"),
        )
        .arg(
            Arg::new(MAX_BINS_ARG)
                .long(MAX_BINS_ARG)
                .required(false)
                .value_parser(value_parser!(usize))
                .help(format!(
                    "Fail if the file has more bins than this (mm10 at 200 bp: {MM10_200BP_BINS})"
                )),
        )
        .arg(arg!(--tag <TAG> "Tag column value (default: the motif type)").required(false))
        .arg(
            Arg::new(NON_OVERLAPPING_ARG)
                .long(NON_OVERLAPPING_ARG)
                .action(ArgAction::SetTrue)
                .help("Resume the search after the end of each motif instead of its start"),
        )
        .arg(
            Arg::new(VERBOSE_ARG)
                .long(VERBOSE_ARG)
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log progress and a summary to stderr"),
        )
}
