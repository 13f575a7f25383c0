use std::io::{self, Write};

use tracing::{info, warn};

use crate::composition::gc_content;
use crate::config::ReportConfig;
use crate::domain::{TeamRecord, UrlReference};
use crate::ncbi::SequenceFetcher;
use crate::output::{FetchOutcome, SkipReason, TextReport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub fetched: usize,
    pub skipped: usize,
}

pub struct App<F: SequenceFetcher> {
    fetcher: F,
    report: TextReport,
}

impl<F: SequenceFetcher> App<F> {
    pub fn new(config: &ReportConfig, fetcher: F) -> Self {
        Self {
            fetcher,
            report: TextReport::new(config.preview_len),
        }
    }

    /// Reports every member in order. Per-member failures are reported and
    /// skipped; only a write error on `out` stops the run.
    pub fn run<W: Write>(&self, records: &[TeamRecord], out: &mut W) -> io::Result<RunSummary> {
        let total = records.len();
        let mut summary = RunSummary {
            total,
            ..RunSummary::default()
        };

        self.report.write_run_header(out, total)?;
        for (index, record) in records.iter().enumerate() {
            self.report.write_progress(out, index, total)?;
            let outcome = self.process(record);
            if outcome.is_fetched() {
                summary.fetched += 1;
            } else {
                summary.skipped += 1;
            }
            self.report.write_member(out, record, &outcome)?;
        }
        out.flush()?;

        info!(
            total = summary.total,
            fetched = summary.fetched,
            skipped = summary.skipped,
            "report finished"
        );
        Ok(summary)
    }

    pub fn process(&self, record: &TeamRecord) -> FetchOutcome {
        let reference = UrlReference::parse(&record.url);
        let Some(accession) = reference.accession else {
            warn!(member = %record.name, url = %record.url, "no accession in url");
            return FetchOutcome::Skipped(SkipReason::NoAccession);
        };

        match self.fetcher.fetch(&accession, reference.range) {
            Ok(result) => {
                let gc_percent = gc_content(&result.sequence);
                FetchOutcome::Fetched { result, gc_percent }
            }
            Err(err) => {
                warn!(member = %record.name, %accession, error = %err, "sequence fetch failed");
                FetchOutcome::Skipped(SkipReason::FetchFailed(err))
            }
        }
    }
}
