use std::io::BufRead;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use chrommotif_core::models::StateBin;
use chrommotif_core::utils::get_dynamic_reader;

use crate::alphabet::Alphabet;
use crate::consts::{PLACEHOLDER_SYMBOL, PROGRESS_INTERVAL};
use crate::errors::{MotifSearchError, Result};

///
/// One symbol per genomic bin, in file order. Bins whose state call is not
/// confident enough hold [PLACEHOLDER_SYMBOL].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSequence {
    symbols: String,
    informative: usize,
}

impl EncodedSequence {
    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of bins carrying a state symbol rather than the placeholder.
    pub fn informative_bins(&self) -> usize {
        self.informative
    }
}

///
/// Builds an [EncodedSequence] from a state annotation file.
///
#[derive(Debug, Clone, Default)]
pub struct SequenceEncoder {
    alphabet: Alphabet,
    capacity: Option<usize>,
    show_progress: bool,
}

impl SequenceEncoder {
    pub fn new(alphabet: Alphabet) -> Self {
        SequenceEncoder {
            alphabet,
            ..Default::default()
        }
    }

    /// Reject inputs with more than `capacity` bins instead of growing the sequence.
    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn encode_file(&self, path: &Path) -> anyhow::Result<EncodedSequence> {
        let reader = get_dynamic_reader(path)?;
        let sequence = self.encode_reader(reader)?;

        debug!(
            "Encoded {} bins ({} informative) from {:?}",
            sequence.len(),
            sequence.informative_bins(),
            path
        );

        Ok(sequence)
    }

    pub fn encode_reader<R: BufRead>(&self, reader: R) -> Result<EncodedSequence> {
        let mut symbols = match self.capacity {
            Some(capacity) => String::with_capacity(capacity),
            None => String::new(),
        };
        let mut informative = 0;

        let spinner = match self.show_progress {
            true => ProgressBar::new_spinner(),
            false => ProgressBar::hidden(),
        };
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg} ({per_sec})")
        {
            spinner.set_style(style.tick_strings(&["-", "\\", "|", "/"]));
        }
        spinner.set_message("Encoding state bins...");

        for (index, line) in reader.lines().enumerate() {
            let line = line?;

            if let Some(capacity) = self.capacity {
                if index >= capacity {
                    return Err(MotifSearchError::CapacityExceeded { capacity });
                }
            }

            let bin = StateBin::parse(&line).map_err(|source| MotifSearchError::MalformedLine {
                line: index + 1,
                source,
            })?;

            let symbol = self
                .alphabet
                .encode(&bin.state, bin.confidence)
                .ok_or_else(|| MotifSearchError::UnknownState {
                    label: bin.state.clone(),
                    line: index + 1,
                })?;

            if symbol != PLACEHOLDER_SYMBOL {
                informative += 1;
            }
            symbols.push(char::from(symbol));

            if (index + 1) % PROGRESS_INTERVAL == 0 {
                spinner.set_message(format!("Encoded {} bins", index + 1));
            }
            spinner.inc(1);
        }

        spinner.finish_and_clear();

        Ok(EncodedSequence {
            symbols,
            informative,
        })
    }
}
