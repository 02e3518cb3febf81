use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use chrommotif_core::utils::{get_dynamic_reader, get_dynamic_writer};

use crate::alphabet::Alphabet;
use crate::consts::DEFAULT_BINSIZE;
use crate::encoder::SequenceEncoder;
use crate::matcher::MotifMatcher;
use crate::metadata::SampleMetadata;
use crate::output::{OutputFormat, RecordWriter};
use crate::pattern::MotifPattern;
use crate::reconstruct::CoordinateReconstructor;

///
/// Configuration for one motif search over one annotation file.
///
#[derive(Debug, Clone)]
pub struct MotifSearch {
    pattern: MotifPattern,
    alphabet: Alphabet,
    binsize: u32,
    slop: u32,
    capacity: Option<usize>,
    overlapping: bool,
    tag: Option<String>,
    bed3: bool,
    show_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchSummary {
    pub bins: usize,
    pub informative_bins: usize,
    pub matches: usize,
}

impl MotifSearch {
    pub fn new(pattern: MotifPattern) -> Self {
        MotifSearch {
            pattern,
            alphabet: Alphabet::default(),
            binsize: DEFAULT_BINSIZE,
            slop: 0,
            capacity: None,
            overlapping: true,
            tag: Some(pattern.tag().to_string()),
            bed3: false,
            show_progress: false,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.alphabet = Alphabet::new(threshold);
        self
    }

    pub fn with_binsize(mut self, binsize: u32) -> Self {
        self.binsize = binsize;
        self
    }

    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_overlapping(mut self, overlapping: bool) -> Self {
        self.overlapping = overlapping;
        self
    }

    /// Replace the tag column; `None` drops it.
    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_bed3(mut self, bed3: bool) -> Self {
        self.bed3 = bed3;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn output_format(&self, input: &Path) -> OutputFormat {
        if self.bed3 {
            return OutputFormat::Bed3;
        }

        let sample = SampleMetadata::from_path(input).unwrap_or_else(|| {
            warn!(
                "Could not find <tissue>_<timepoint>_mm10 in {:?}; reporting tissue and timepoint as unknown",
                input
            );
            SampleMetadata::unknown()
        });

        OutputFormat::annotated(sample, self.tag.clone())
    }

    ///
    /// Search `input` and write one record per motif core to `output`
    /// (`None` or `-` for stdout, `.gz` for compressed output).
    ///
    pub fn run(&self, input: &Path, output: Option<&Path>) -> Result<SearchSummary> {
        let writer = get_dynamic_writer(output)?;
        let (summary, _) = self.run_with_writer(input, writer)?;
        Ok(summary)
    }

    ///
    /// Same as [MotifSearch::run], writing to any sink. The flushed sink is returned
    /// alongside the summary.
    ///
    pub fn run_with_writer<W: Write>(&self, input: &Path, writer: W) -> Result<(SearchSummary, W)> {
        let sequence = SequenceEncoder::new(self.alphabet)
            .with_capacity(self.capacity)
            .with_progress(self.show_progress)
            .encode_file(input)?;

        let matcher = MotifMatcher::new(self.pattern).with_overlapping(self.overlapping);

        let reader = get_dynamic_reader(input)?;
        let mut reconstructor = CoordinateReconstructor::new(reader)
            .with_binsize(self.binsize)
            .with_slop(self.slop);

        let mut records = RecordWriter::new(writer, self.output_format(input));

        for motif in matcher.find_iter(sequence.as_str()) {
            let region = reconstructor
                .reconstruct(&motif.core())
                .with_context(|| format!("Failed to place {} motif at bins {:?}", self.pattern, motif.span))?;
            records
                .write_region(region)
                .context("Failed to write output record")?;
        }

        let summary = SearchSummary {
            bins: sequence.len(),
            informative_bins: sequence.informative_bins(),
            matches: records.written(),
        };
        let writer = records.finish().context("Failed to flush output")?;

        info!(
            "Found {} {} motifs in {} bins ({} above threshold) of {:?}",
            summary.matches, self.pattern, summary.bins, summary.informative_bins, input
        );

        Ok((summary, writer))
    }
}
