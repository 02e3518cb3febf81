use crate::consts::{DELIMITER, STATE_BIN_MIN_COLUMNS};
use crate::errors::StateBinError;

///
/// One line of a state annotation file: a genomic bin, the chromatin state
/// assigned to it and the posterior probability of that assignment.
///
/// ```text
/// chr10   1000    1200    E4  0.991
/// ```
///
#[derive(PartialEq, Debug, Clone)]
pub struct StateBin {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub state: String,
    pub confidence: f64,
}

impl StateBin {
    ///
    /// Parse a tab-separated annotation line. Columns past the fifth are ignored.
    ///
    pub fn parse(line: &str) -> Result<Self, StateBinError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let parts: Vec<&str> = line.split(DELIMITER).collect();

        if parts.len() < STATE_BIN_MIN_COLUMNS {
            return Err(StateBinError::MissingColumns {
                expected: STATE_BIN_MIN_COLUMNS,
                found: parts.len(),
            });
        }

        let start = parse_coordinate("start", parts[1])?;
        let end = parse_coordinate("end", parts[2])?;

        let confidence = parts[4]
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| !c.is_nan())
            .ok_or_else(|| StateBinError::InvalidConfidence(parts[4].to_string()))?;

        Ok(StateBin {
            chr: parts[0].to_owned(),
            start,
            end,
            state: parts[3].to_owned(),
            confidence,
        })
    }
}

fn parse_coordinate(column: &'static str, value: &str) -> Result<u32, StateBinError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| StateBinError::InvalidCoordinate {
            column,
            value: value.to_string(),
        })
}
