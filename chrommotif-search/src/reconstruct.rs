use std::io::BufRead;
use std::ops::Range;

use chrommotif_core::models::{Region, StateBin};

use crate::consts::DEFAULT_BINSIZE;
use crate::errors::{MotifSearchError, Result};

///
/// Translates capture ranges (bin offsets) back into genomic coordinates by
/// replaying the annotation file.
///
/// The file is read forward only: captures must arrive in non-decreasing order of
/// their start offset. A capture that starts before the current line is rejected
/// with [MotifSearchError::CaptureOutOfOrder].
///
pub struct CoordinateReconstructor<R: BufRead> {
    reader: R,
    buffer: String,
    /// lines consumed so far
    cursor: usize,
    current: Option<StateBin>,
    binsize: u32,
    slop: u32,
}

impl<R: BufRead> CoordinateReconstructor<R> {
    pub fn new(reader: R) -> Self {
        CoordinateReconstructor {
            reader,
            buffer: String::new(),
            cursor: 0,
            current: None,
            binsize: DEFAULT_BINSIZE,
            slop: 0,
        }
    }

    pub fn with_binsize(mut self, binsize: u32) -> Self {
        self.binsize = binsize;
        self
    }

    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    ///
    /// Genomic interval covered by `capture`. Chromosome and start come from the
    /// capture's first bin; the end is that bin's end extended by one bin width per
    /// additional bin in the capture. Slop is applied last.
    ///
    pub fn reconstruct(&mut self, capture: &Range<usize>) -> Result<Region> {
        let (binsize, slop) = (self.binsize, self.slop);
        let first = self.seek(capture)?;

        let extra_bins = capture.len().saturating_sub(1);
        let end = u32::try_from(extra_bins)
            .ok()
            .and_then(|n| n.checked_mul(binsize))
            .and_then(|span| span.checked_add(first.end))
            .ok_or_else(|| MotifSearchError::CoordinateOverflow {
                capture: capture.clone(),
            })?;

        let region = Region {
            chr: first.chr.clone(),
            start: first.start,
            end,
            rest: None,
        };

        Ok(match slop {
            0 => region,
            slop => region.with_slop(slop),
        })
    }

    /// Advance until the line at index `capture.start` is the current line.
    fn seek(&mut self, capture: &Range<usize>) -> Result<&StateBin> {
        let target = capture.start;

        if target + 1 < self.cursor {
            return Err(MotifSearchError::CaptureOutOfOrder {
                capture: capture.clone(),
                cursor: self.cursor - 1,
            });
        }

        while self.cursor <= target {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Err(MotifSearchError::MissingBin {
                    capture: capture.clone(),
                    bin: target,
                    lines: self.cursor,
                });
            }
            self.cursor += 1;

            // only the target line is parsed; the encoder already validated the file
            if self.cursor > target {
                let bin = StateBin::parse(&self.buffer).map_err(|source| {
                    MotifSearchError::MalformedLine {
                        line: self.cursor,
                        source,
                    }
                })?;
                self.current = Some(bin);
            }
        }

        self.current.as_ref().ok_or_else(|| MotifSearchError::MissingBin {
            capture: capture.clone(),
            bin: target,
            lines: self.cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Cursor;

    /// `n` consecutive bins of width `binsize` on chr1, starting at 10_000.
    fn bins(n: usize, binsize: u32) -> Cursor<String> {
        let lines: String = (0..n as u32)
            .map(|i| {
                let start = 10_000 + i * binsize;
                format!("chr1\t{}\t{}\tE1\t0.9\n", start, start + binsize)
            })
            .collect();
        Cursor::new(lines)
    }

    #[rstest]
    #[case(0..1, 10_000, 10_200)]
    #[case(2..5, 10_400, 11_000)]
    #[case(9..10, 11_800, 12_000)]
    fn test_reconstruct_without_slop(
        #[case] capture: Range<usize>,
        #[case] start: u32,
        #[case] end: u32,
    ) {
        let mut reconstructor = CoordinateReconstructor::new(bins(10, 200)).with_slop(0);
        let region = reconstructor.reconstruct(&capture).unwrap();

        assert_eq!(region.chr, "chr1");
        assert_eq!((region.start, region.end), (start, end));
    }

    #[rstest]
    fn test_slop_defaults_to_zero() {
        let mut reconstructor = CoordinateReconstructor::new(bins(10, 200));
        let region = reconstructor.reconstruct(&(0..2)).unwrap();
        assert_eq!((region.start, region.end), (10_000, 10_400));
    }

    #[rstest]
    fn test_end_uses_configured_binsize() {
        let mut reconstructor = CoordinateReconstructor::new(bins(10, 50))
            .with_binsize(50)
            .with_slop(0);
        let region = reconstructor.reconstruct(&(3..7)).unwrap();

        // line 3 spans 10_150..10_200, plus three more bins
        assert_eq!((region.start, region.end), (10_150, 10_350));
    }

    #[rstest]
    #[case(1..2, 100, 10_100, 10_500)]
    #[case(1..4, 100, 10_100, 10_900)]
    #[case(0..1, 20_000, 0, 30_200)]
    fn test_slop(
        #[case] capture: Range<usize>,
        #[case] slop: u32,
        #[case] start: u32,
        #[case] end: u32,
    ) {
        let mut reconstructor = CoordinateReconstructor::new(bins(10, 200)).with_slop(slop);
        let region = reconstructor.reconstruct(&capture).unwrap();
        assert_eq!((region.start, region.end), (start, end));
    }

    #[rstest]
    fn test_sequential_and_repeated_captures() {
        let mut reconstructor = CoordinateReconstructor::new(bins(10, 200)).with_slop(0);

        let starts: Vec<u32> = [1..3, 1..4, 2..4, 7..9]
            .iter()
            .map(|capture| reconstructor.reconstruct(capture).unwrap().start)
            .collect();

        assert_eq!(starts, vec![10_200, 10_200, 10_400, 11_400]);
    }

    #[rstest]
    fn test_out_of_order_capture_is_rejected() {
        let mut reconstructor = CoordinateReconstructor::new(bins(10, 200));
        reconstructor.reconstruct(&(5..7)).unwrap();

        let err = reconstructor.reconstruct(&(2..4)).unwrap_err();
        assert!(matches!(
            err,
            MotifSearchError::CaptureOutOfOrder { cursor: 5, .. }
        ));
    }

    #[rstest]
    fn test_capture_past_end_of_file() {
        let mut reconstructor = CoordinateReconstructor::new(bins(3, 200));
        let err = reconstructor.reconstruct(&(3..4)).unwrap_err();
        assert!(matches!(
            err,
            MotifSearchError::MissingBin { bin: 3, lines: 3, .. }
        ));
    }
}
