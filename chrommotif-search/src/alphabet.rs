//! The 18-state ChromHMM model and its one-letter encoding.
//!
//! Every state label (`E1`..`E18`) maps to a single ASCII symbol so a genome-wide run of
//! state calls becomes a plain string that can be searched with regular expressions.
//!
//! | label | symbol | mnemonic |
//! |-------|--------|----------|
//! | E16   | A      | TssA     |
//! | E18   | B      | TssFlnk  |
//! | E10   | C      | Tx       |
//! | E8    | D      | TxWk     |
//! | E14   | E      | Enh      |
//! | E13   | F      | EnhLo    |
//! | E17   | G      | TssBiv   |
//! | E12   | H      | EnhPois  |
//! | E15   | I      | EnhPr    |
//! | E11   | J      | EnhG     |
//! | E1    | K      | ReprPC   |
//! | E2    | L      | ReprPCWk |
//! | E9    | M      | Het      |
//! | E5    | N      | QuiesG   |
//! | E3    | O      | Quies    |
//! | E4    | P      | Quies2   |
//! | E6    | Q      | Quies3   |
//! | E7    | R      | Quies4   |
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::consts::{DEFAULT_THRESHOLD, PLACEHOLDER_SYMBOL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromState {
    TssA,
    TssFlnk,
    Tx,
    TxWk,
    Enh,
    EnhLo,
    TssBiv,
    EnhPois,
    EnhPr,
    EnhG,
    ReprPC,
    ReprPCWk,
    Het,
    QuiesG,
    Quies,
    Quies2,
    Quies3,
    Quies4,
}

static LABEL_LOOKUP: Lazy<HashMap<&'static str, ChromState>> = Lazy::new(|| {
    ChromState::ALL
        .iter()
        .map(|state| (state.label(), *state))
        .collect()
});

impl ChromState {
    pub const ALL: [ChromState; 18] = [
        ChromState::TssA,
        ChromState::TssFlnk,
        ChromState::Tx,
        ChromState::TxWk,
        ChromState::Enh,
        ChromState::EnhLo,
        ChromState::TssBiv,
        ChromState::EnhPois,
        ChromState::EnhPr,
        ChromState::EnhG,
        ChromState::ReprPC,
        ChromState::ReprPCWk,
        ChromState::Het,
        ChromState::QuiesG,
        ChromState::Quies,
        ChromState::Quies2,
        ChromState::Quies3,
        ChromState::Quies4,
    ];

    /// ChromHMM state label as written in the annotation files.
    pub fn label(&self) -> &'static str {
        match self {
            ChromState::TssA => "E16",
            ChromState::TssFlnk => "E18",
            ChromState::Tx => "E10",
            ChromState::TxWk => "E8",
            ChromState::Enh => "E14",
            ChromState::EnhLo => "E13",
            ChromState::TssBiv => "E17",
            ChromState::EnhPois => "E12",
            ChromState::EnhPr => "E15",
            ChromState::EnhG => "E11",
            ChromState::ReprPC => "E1",
            ChromState::ReprPCWk => "E2",
            ChromState::Het => "E9",
            ChromState::QuiesG => "E5",
            ChromState::Quies => "E3",
            ChromState::Quies2 => "E4",
            ChromState::Quies3 => "E6",
            ChromState::Quies4 => "E7",
        }
    }

    /// One-letter code used in the encoded state sequence.
    pub fn symbol(&self) -> u8 {
        match self {
            ChromState::TssA => b'A',
            ChromState::TssFlnk => b'B',
            ChromState::Tx => b'C',
            ChromState::TxWk => b'D',
            ChromState::Enh => b'E',
            ChromState::EnhLo => b'F',
            ChromState::TssBiv => b'G',
            ChromState::EnhPois => b'H',
            ChromState::EnhPr => b'I',
            ChromState::EnhG => b'J',
            ChromState::ReprPC => b'K',
            ChromState::ReprPCWk => b'L',
            ChromState::Het => b'M',
            ChromState::QuiesG => b'N',
            ChromState::Quies => b'O',
            ChromState::Quies2 => b'P',
            ChromState::Quies3 => b'Q',
            ChromState::Quies4 => b'R',
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            ChromState::TssA => "TssA",
            ChromState::TssFlnk => "TssFlnk",
            ChromState::Tx => "Tx",
            ChromState::TxWk => "TxWk",
            ChromState::Enh => "Enh",
            ChromState::EnhLo => "EnhLo",
            ChromState::TssBiv => "TssBiv",
            ChromState::EnhPois => "EnhPois",
            ChromState::EnhPr => "EnhPr",
            ChromState::EnhG => "EnhG",
            ChromState::ReprPC => "ReprPC",
            ChromState::ReprPCWk => "ReprPCWk",
            ChromState::Het => "Het",
            ChromState::QuiesG => "QuiesG",
            ChromState::Quies => "Quies",
            ChromState::Quies2 => "Quies2",
            ChromState::Quies3 => "Quies3",
            ChromState::Quies4 => "Quies4",
        }
    }

    pub fn from_label(label: &str) -> Option<ChromState> {
        LABEL_LOOKUP.get(label).copied()
    }
}

impl FromStr for ChromState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChromState::from_label(s).ok_or_else(|| format!("Unknown chromatin state: {}", s))
    }
}

impl Display for ChromState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.mnemonic())
    }
}

///
/// Maps state calls to symbols, keeping only calls whose confidence
/// is strictly above the threshold.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alphabet {
    pub threshold: f64,
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Alphabet {
    pub fn new(threshold: f64) -> Self {
        Alphabet { threshold }
    }

    pub fn is_confident(&self, confidence: f64) -> bool {
        confidence > self.threshold
    }

    ///
    /// Symbol for a single bin. Returns `None` when the label is not part of the
    /// alphabet, regardless of confidence.
    ///
    pub fn encode(&self, label: &str, confidence: f64) -> Option<u8> {
        let state = ChromState::from_label(label)?;
        match self.is_confident(confidence) {
            true => Some(state.symbol()),
            false => Some(PLACEHOLDER_SYMBOL),
        }
    }
}
