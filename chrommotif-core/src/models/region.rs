use std::fmt::{self, Display};

///
/// Region struct, a genomic interval reported by a motif search
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,

    pub rest: Option<String>,
}

impl Region {
    ///
    /// Get file string of Region
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}{}",
            self.chr,
            self.start,
            self.end,
            self.rest
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }

    ///
    /// Widen the region by `slop` bases on both sides. The start is floored at 0,
    /// the end saturates at `u32::MAX`.
    ///
    pub fn with_slop(mut self, slop: u32) -> Self {
        self.start = self.start.saturating_sub(slop);
        self.end = self.end.saturating_add(slop);
        self
    }

    ///
    /// Attach extra columns, appended tab-separated after `end`.
    ///
    pub fn with_rest<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = columns
            .into_iter()
            .map(|c| c.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join("\t");
        self.rest = Some(joined).filter(|s| !s.is_empty());
        self
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
