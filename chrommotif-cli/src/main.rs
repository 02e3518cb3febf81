mod search;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "chrommotif";
}

fn build_parser() -> Command {
    let command = Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Find chromatin state motifs (bivalent promoters, polycomb repressed domains) in ChromHMM posterior annotations and report them as BED intervals.");

    search::cli::create_search_cli(command)
}

fn init_logging(verbose: bool) {
    let level = match verbose {
        true => "debug",
        false => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag(search::cli::VERBOSE_ARG));

    search::handlers::run_search(&matches)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrommotif_search::consts::{DEFAULT_SLOP, MM10_200BP_BINS};

    #[test]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let matches = build_parser()
            .try_get_matches_from(["chrommotif", "--type", "bivalent", "--file", "x.bed"])
            .unwrap();

        assert_eq!(matches.get_one::<u32>(search::cli::SLOP_ARG), Some(&DEFAULT_SLOP));
        assert_eq!(matches.get_one::<u32>(search::cli::BINSIZE_ARG), Some(&200));
        assert_eq!(matches.get_one::<f64>(search::cli::THRESHOLD_ARG), Some(&0.5));
        assert!(!matches.get_flag(search::cli::BED3_ARG));
        assert_eq!(matches.get_one::<String>(search::cli::OUT_ARG), None);
    }

    #[test]
    fn test_parse_short_flags() {
        let matches = build_parser()
            .try_get_matches_from(["chrommotif", "-t", "reprpc", "-f", "x.bed", "-o", "-", "-3"])
            .unwrap();

        assert_eq!(
            matches.get_one::<String>(search::cli::TYPE_ARG).map(String::as_str),
            Some("reprpc")
        );
        assert!(matches.get_flag(search::cli::BED3_ARG));
    }

    #[test]
    fn test_max_bins_help_names_mm10_capacity() {
        let help = build_parser().render_long_help().to_string();
        assert!(help.contains(&MM10_200BP_BINS.to_string()));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let result = build_parser()
            .try_get_matches_from(["chrommotif", "--type", "enhancer", "--file", "x.bed"]);
        assert!(result.is_err());
    }
}
