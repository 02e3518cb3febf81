use std::io::{self, Write};

use chrommotif_core::models::Region;

use crate::metadata::SampleMetadata;

///
/// Columns written after `chrom start end`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// chrom, start, end
    Bed3,
    /// chrom, start, end, tissue, timepoint[, tag]
    Annotated {
        sample: SampleMetadata,
        tag: Option<String>,
    },
}

impl OutputFormat {
    pub fn annotated(sample: SampleMetadata, tag: Option<String>) -> Self {
        OutputFormat::Annotated { sample, tag }
    }

    pub fn n_columns(&self) -> usize {
        match self {
            OutputFormat::Bed3 => 3,
            OutputFormat::Annotated { tag: None, .. } => 5,
            OutputFormat::Annotated { tag: Some(_), .. } => 6,
        }
    }

    /// Attach the annotation columns for this format to `region`.
    pub fn decorate(&self, region: Region) -> Region {
        match self {
            OutputFormat::Bed3 => Region { rest: None, ..region },
            OutputFormat::Annotated { sample, tag } => {
                let columns = [Some(&sample.tissue), Some(&sample.timepoint), tag.as_ref()];
                region.with_rest(columns.into_iter().flatten())
            }
        }
    }
}

///
/// Writes one tab-separated, newline-terminated line per region.
///
pub struct RecordWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    written: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        RecordWriter {
            writer,
            format,
            written: 0,
        }
    }

    pub fn write_region(&mut self, region: Region) -> io::Result<()> {
        let region = self.format.decorate(region);
        writeln!(self.writer, "{}", region.as_string())?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush the sink and hand it back.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn region() -> Region {
        Region {
            chr: "chr10".to_string(),
            start: 1000,
            end: 1800,
            rest: None,
        }
    }

    #[fixture]
    fn sample() -> SampleMetadata {
        SampleMetadata {
            tissue: "lung".to_string(),
            timepoint: "15.5".to_string(),
        }
    }

    fn render(format: OutputFormat, regions: Vec<Region>) -> String {
        let mut writer = RecordWriter::new(Vec::new(), format);
        for region in regions {
            writer.write_region(region).unwrap();
        }
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[rstest]
    fn test_bed3(region: Region) {
        let text = render(OutputFormat::Bed3, vec![region.clone(), region]);
        assert_eq!(text, "chr10\t1000\t1800\nchr10\t1000\t1800\n");
    }

    #[rstest]
    fn test_annotated_with_tag(region: Region, sample: SampleMetadata) {
        let format = OutputFormat::annotated(sample, Some("bivalent".to_string()));
        let text = render(format, vec![region]);
        assert_eq!(text, "chr10\t1000\t1800\tlung\t15.5\tbivalent\n");
    }

    #[rstest]
    fn test_annotated_without_tag(region: Region, sample: SampleMetadata) {
        let text = render(OutputFormat::annotated(sample, None), vec![region]);
        assert_eq!(text, "chr10\t1000\t1800\tlung\t15.5\n");
    }

    #[rstest]
    #[case(OutputFormat::Bed3)]
    #[case(OutputFormat::annotated(SampleMetadata::unknown(), None))]
    #[case(OutputFormat::annotated(SampleMetadata::unknown(), Some("reprpc".to_string())))]
    fn test_column_count_matches_format(region: Region, #[case] format: OutputFormat) {
        let expected = format.n_columns();
        let text = render(format, vec![region]);
        assert_eq!(text.trim_end_matches('\n').split('\t').count(), expected);
    }

    #[rstest]
    fn test_bed3_drops_existing_columns(region: Region) {
        let region = region.with_rest(["leftover"]);
        assert_eq!(OutputFormat::Bed3.decorate(region).rest, None);
    }
}
