use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// One row of the team roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub username: String,
    pub country: String,
    pub hobby: String,
    pub affiliations: String,
    pub url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
}

/// Nuccore accession, kept verbatim including any `.version` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Accession(String);

impl Accession {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Accession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Accession {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(value))
    }
}

/// 1-based, inclusive coordinate window, as used by efetch `seq_start`/`seq_stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqRange {
    pub start: u64,
    pub end: u64,
}

impl fmt::Display for SeqRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// What could be read out of a member's URL. Accession and range are parsed
/// independently; either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlReference {
    pub accession: Option<Accession>,
    pub range: Option<SeqRange>,
}

impl UrlReference {
    pub fn range_start(&self) -> Option<u64> {
        self.range.map(|range| range.start)
    }

    pub fn range_end(&self) -> Option<u64> {
        self.range.map(|range| range.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceResult {
    pub identifier: String,
    pub sequence: String,
}

impl SequenceResult {
    /// Length in bases.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
