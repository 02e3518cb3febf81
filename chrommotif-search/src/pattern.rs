use std::fmt::{self, Display};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::MotifSearchError;

/// Quiescent/repressed flank around a bivalent TSS core.
pub const BIVALENT_PATTERN: &str = r"[KLNOPQR]([KLNOPQR]G+[KLNOPQR])[KLNOPQR]";

/// Polycomb repressed core inside quiescent flanks, bounded by heterochromatin or quiescence.
pub const REPRPC_PATTERN: &str = r"[MNOPQR][KLNOPQR]([KLNOPQR][LK]+[KLNOPQR])[KLNOPQR][MNOPQR]";

static BIVALENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(BIVALENT_PATTERN).expect("bivalent pattern is a valid regex"));

static REPRPC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(REPRPC_PATTERN).expect("reprpc pattern is a valid regex"));

///
/// The built-in motif grammars. Each has exactly one capture group marking
/// the core of the motif; the rest of the match is flanking context.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotifPattern {
    Bivalent,
    ReprPc,
}

impl MotifPattern {
    pub const ALL: [MotifPattern; 2] = [MotifPattern::Bivalent, MotifPattern::ReprPc];

    pub fn regex(&self) -> &'static Regex {
        match self {
            MotifPattern::Bivalent => &BIVALENT_REGEX,
            MotifPattern::ReprPc => &REPRPC_REGEX,
        }
    }

    /// Default tag written next to every record produced by this motif.
    pub fn tag(&self) -> &'static str {
        match self {
            MotifPattern::Bivalent => "bivalent",
            MotifPattern::ReprPc => "reprpc",
        }
    }
}

impl FromStr for MotifPattern {
    type Err = MotifSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bivalent" => Ok(MotifPattern::Bivalent),
            "reprpc" => Ok(MotifPattern::ReprPc),
            _ => Err(MotifSearchError::UnknownPattern(s.to_string())),
        }
    }
}

impl Display for MotifPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_patterns_have_one_capture_group() {
        for pattern in MotifPattern::ALL {
            // group 0 is the whole match
            assert_eq!(pattern.regex().captures_len(), 2);
        }
    }

    #[rstest]
    #[case("bivalent", MotifPattern::Bivalent)]
    #[case("reprpc", MotifPattern::ReprPc)]
    #[case("ReprPC", MotifPattern::ReprPc)]
    fn test_parse_pattern(#[case] name: &str, #[case] expected: MotifPattern) {
        assert_eq!(name.parse::<MotifPattern>().unwrap(), expected);
        assert_eq!(expected.to_string(), expected.tag());
    }

    #[rstest]
    fn test_parse_unknown_pattern() {
        assert!(matches!(
            "enhancer".parse::<MotifPattern>(),
            Err(MotifSearchError::UnknownPattern(_))
        ));
    }

    #[rstest]
    #[case(MotifPattern::Bivalent, "KKGGGKK", true)]
    #[case(MotifPattern::Bivalent, "KKKKKKK", false)]
    #[case(MotifPattern::Bivalent, "KKG.GKK", false)]
    #[case(MotifPattern::Bivalent, "MKGKK", false)]
    #[case(MotifPattern::ReprPc, "MOOKLKOOM", true)]
    #[case(MotifPattern::ReprPc, "MOOGOOM", false)]
    fn test_pattern_grammar(#[case] pattern: MotifPattern, #[case] text: &str, #[case] hit: bool) {
        assert_eq!(pattern.regex().is_match(text), hit);
    }
}
