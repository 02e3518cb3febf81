use std::ops::Range;

use regex::Regex;

use crate::pattern::MotifPattern;

///
/// A motif occurrence in an encoded state sequence. Offsets are bin indices.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifMatch {
    /// Whole match including the flanks.
    pub span: Range<usize>,
    /// Capture groups in pattern order.
    pub captures: Vec<Range<usize>>,
}

impl MotifMatch {
    /// The motif core, i.e. the first capture group. Falls back to the whole
    /// span for grammars without a capture group.
    pub fn core(&self) -> Range<usize> {
        self.captures
            .first()
            .cloned()
            .unwrap_or_else(|| self.span.clone())
    }
}

///
/// Searches encoded sequences for a [MotifPattern].
///
/// In overlapping mode (the default) scanning resumes one position past the start
/// of the previous match, so motifs sharing flanking bins are all reported.
///
#[derive(Debug, Clone, Copy)]
pub struct MotifMatcher {
    pattern: MotifPattern,
    overlapping: bool,
}

impl MotifMatcher {
    pub fn new(pattern: MotifPattern) -> Self {
        MotifMatcher {
            pattern,
            overlapping: true,
        }
    }

    pub fn with_overlapping(mut self, overlapping: bool) -> Self {
        self.overlapping = overlapping;
        self
    }

    ///
    /// Lazily enumerate matches in ascending order of their start offset.
    ///
    pub fn find_iter<'h>(&self, haystack: &'h str) -> MotifMatches<'h> {
        MotifMatches {
            regex: self.pattern.regex(),
            haystack,
            position: 0,
            overlapping: self.overlapping,
        }
    }

    pub fn find_all(&self, haystack: &str) -> Vec<MotifMatch> {
        self.find_iter(haystack).collect()
    }
}

pub struct MotifMatches<'h> {
    regex: &'static Regex,
    haystack: &'h str,
    position: usize,
    overlapping: bool,
}

impl Iterator for MotifMatches<'_> {
    type Item = MotifMatch;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position > self.haystack.len() {
            return None;
        }

        let caps = self.regex.captures_at(self.haystack, self.position)?;
        let whole = caps.get(0)?;

        self.position = match self.overlapping {
            true => whole.start() + 1,
            // empty matches cannot occur with the built-in grammars, but never stall
            false => whole.end().max(whole.start() + 1),
        };

        Some(MotifMatch {
            span: whole.range(),
            captures: caps.iter().skip(1).flatten().map(|m| m.range()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_bivalent_core_boundaries() {
        let matches = MotifMatcher::new(MotifPattern::Bivalent).find_all("KKGGGKK");

        assert_eq!(
            matches,
            vec![MotifMatch {
                span: 0..7,
                captures: vec![1..6],
            }]
        );
        assert_eq!(matches[0].core(), 1..6);
        assert_eq!(&"KKGGGKK"[matches[0].core()], "KGGGK");
    }

    #[rstest]
    fn test_overlapping_matches_share_flanks() {
        // two bivalent cores separated by repressed bins; the flanks of the first
        // match overlap the second
        let haystack = "KKGKKGKK";
        let overlapping = MotifMatcher::new(MotifPattern::Bivalent).find_all(haystack);
        let cores: Vec<_> = overlapping.iter().map(|m| m.core()).collect();
        assert_eq!(cores, vec![1..4, 4..7]);

        let disjoint = MotifMatcher::new(MotifPattern::Bivalent)
            .with_overlapping(false)
            .find_all(haystack);
        let cores: Vec<_> = disjoint.iter().map(|m| m.core()).collect();
        assert_eq!(cores, vec![1..4]);
    }

    #[rstest]
    fn test_overlapping_matches_within_one_run() {
        let haystack = "KKKGGKKK";
        let matches = MotifMatcher::new(MotifPattern::Bivalent).find_all(haystack);
        let cores: Vec<_> = matches.iter().map(|m| m.core()).collect();
        assert_eq!(cores, vec![2..6]);
    }

    #[rstest]
    fn test_matches_are_ordered_by_start() {
        let haystack = "PPGGPPKGKK..OOGOO.QRGGGGRQ";
        let matches = MotifMatcher::new(MotifPattern::Bivalent).find_all(haystack);

        assert_eq!(matches.len(), 4);
        assert!(matches.windows(2).all(|w| w[0].span.start < w[1].span.start));
        for m in &matches {
            assert_eq!(m.captures.len(), 1);
            assert!(m.span.start < m.core().start && m.core().end < m.span.end);
        }
    }

    #[rstest]
    fn test_reprpc_backtracks_into_flanks() {
        let haystack = "MOOKLKOOM";
        let matches = MotifMatcher::new(MotifPattern::ReprPc).find_all(haystack);
        let cores: Vec<_> = matches.iter().map(|m| &haystack[m.core()]).collect();
        assert_eq!(cores, vec!["OKLKO", "KLKO", "LKO"]);

        // polycomb bins may also serve as the flanks
        let haystack = "MKKKKKKM";
        let matches = MotifMatcher::new(MotifPattern::ReprPc).find_all(haystack);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].core(), 2..6);
    }

    #[rstest]
    #[case("")]
    #[case("....")]
    #[case("KGK")]
    fn test_no_matches(#[case] haystack: &str) {
        assert!(MotifMatcher::new(MotifPattern::Bivalent).find_all(haystack).is_empty());
    }
}
