use std::io::{self, Write};

use crate::domain::{SequenceResult, TeamRecord};
use crate::error::FetchError;

pub const SEPARATOR_WIDTH: usize = 70;
pub const PLACEHOLDER: &str = "N/A";
pub const TRUNCATION_MARKER: char = '…';

#[derive(Debug)]
pub enum SkipReason {
    NoAccession,
    FetchFailed(FetchError),
}

/// Result of the sequence stage for one member, consumed by the reporter.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched {
        result: SequenceResult,
        gc_percent: f64,
    },
    Skipped(SkipReason),
}

impl FetchOutcome {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched { .. })
    }
}

/// Fixed-layout console report.
#[derive(Debug, Clone, Copy)]
pub struct TextReport {
    preview_len: usize,
}

impl TextReport {
    pub fn new(preview_len: usize) -> Self {
        Self { preview_len }
    }

    pub fn write_run_header<W: Write>(&self, out: &mut W, total: usize) -> io::Result<()> {
        writeln!(out, "{}", separator())?;
        writeln!(out, "📊 Processing {total} team members...")?;
        writeln!(out, "{}", separator())
    }

    pub fn write_progress<W: Write>(
        &self,
        out: &mut W,
        index: usize,
        total: usize,
    ) -> io::Result<()> {
        writeln!(out, "Processing member {} of {total}:", index + 1)
    }

    pub fn write_member<W: Write>(
        &self,
        out: &mut W,
        record: &TeamRecord,
        outcome: &FetchOutcome,
    ) -> io::Result<()> {
        writeln!(out, "{}", separator())?;
        writeln!(out, "Name        : {}", record.name)?;
        writeln!(out, "Slack user  : {}", record.username)?;
        writeln!(out, "Country     : {}", record.country)?;
        writeln!(out, "Hobby       : {}", record.hobby)?;
        writeln!(out, "Affiliations: {}", record.affiliations)?;
        writeln!(out)?;
        writeln!(out, "GitHub URL   : {}", or_placeholder(&record.github_url))?;
        writeln!(out, "LinkedIn URL : {}", or_placeholder(&record.linkedin_url))?;
        writeln!(out)?;

        match outcome {
            FetchOutcome::Skipped(SkipReason::NoAccession) => writeln!(
                out,
                "⚠️  Could not find an accession in the URL – skipping DNA fetch."
            ),
            FetchOutcome::Skipped(SkipReason::FetchFailed(err)) => {
                writeln!(out, "⚠️  Error while fetching DNA sequence: {err}")
            }
            FetchOutcome::Fetched { result, gc_percent } => {
                self.write_sequence(out, result, *gc_percent)
            }
        }
    }

    fn write_sequence<W: Write>(
        &self,
        out: &mut W,
        result: &SequenceResult,
        gc_percent: f64,
    ) -> io::Result<()> {
        writeln!(out, "DNA (FASTA header) : {}", result.identifier)?;
        writeln!(out, "Length               : {} bp", result.len())?;
        writeln!(out, "First {} bases       :", self.preview_len)?;
        writeln!(out, "{}", preview(&result.sequence, self.preview_len))?;
        writeln!(out, "GC content           : {gc_percent:.2}%")?;
        writeln!(out)?;
        writeln!(out, "{}", separator())?;
        writeln!(out)
    }
}

/// First `window` bases, followed by a single marker when anything was cut.
pub fn preview(sequence: &str, window: usize) -> String {
    let mut chars = sequence.chars();
    let mut shown: String = chars.by_ref().take(window).collect();
    if chars.next().is_some() {
        shown.push(TRUNCATION_MARKER);
    }
    shown
}

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}
