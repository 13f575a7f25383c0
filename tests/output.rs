use team_seqreport::domain::{SequenceResult, TeamRecord};
use team_seqreport::error::FetchError;
use team_seqreport::output::{FetchOutcome, SkipReason, TextReport, preview};

fn record() -> TeamRecord {
    TeamRecord {
        name: "Ada".to_string(),
        username: "@ada".to_string(),
        country: "Kenya".to_string(),
        hobby: "Chess".to_string(),
        affiliations: "Lab A".to_string(),
        url: "https://www.ncbi.nlm.nih.gov/nuccore/NC_000010.11".to_string(),
        github_url: String::new(),
        linkedin_url: "https://linkedin.com/in/ada".to_string(),
    }
}

fn render(outcome: &FetchOutcome) -> String {
    let mut out = Vec::new();
    TextReport::new(60)
        .write_member(&mut out, &record(), outcome)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn preview_truncates_long_sequence() {
    let sequence = "ACGT".repeat(25);
    let shown = preview(&sequence, 60);
    assert_eq!(shown.chars().count(), 61);
    assert!(shown.ends_with('…'));
    assert_eq!(&shown[..60], &sequence[..60]);
}

#[test]
fn preview_keeps_short_sequence() {
    let sequence = "G".repeat(40);
    assert_eq!(preview(&sequence, 60), sequence);
}

#[test]
fn fetched_block_has_sequence_lines() {
    let outcome = FetchOutcome::Fetched {
        result: SequenceResult {
            identifier: "NC_000010.11:5-15".to_string(),
            sequence: "GCGCATATAT".to_string(),
        },
        gc_percent: 40.0,
    };
    let text = render(&outcome);
    assert!(text.contains("Name        : Ada\n"));
    assert!(text.contains("GitHub URL   : N/A\n"));
    assert!(text.contains("LinkedIn URL : https://linkedin.com/in/ada\n"));
    assert!(text.contains("DNA (FASTA header) : NC_000010.11:5-15\n"));
    assert!(text.contains("Length               : 10 bp\n"));
    assert!(text.contains("First 60 bases       :\nGCGCATATAT\n"));
    assert!(text.contains("GC content           : 40.00%\n"));
}

#[test]
fn skipped_block_omits_sequence_lines() {
    let text = render(&FetchOutcome::Skipped(SkipReason::NoAccession));
    assert!(text.contains("Could not find an accession in the URL"));
    assert!(!text.contains("DNA (FASTA header)"));
    assert!(!text.contains("GC content"));

    let failed = FetchOutcome::Skipped(SkipReason::FetchFailed(FetchError::Status {
        status: 503,
        message: "Service Unavailable".to_string(),
    }));
    let text = render(&failed);
    assert!(text.contains(
        "Error while fetching DNA sequence: NCBI returned status 503: Service Unavailable\n"
    ));
    assert!(!text.contains("Length"));
}

#[test]
fn gc_is_formatted_with_two_decimals() {
    let outcome = FetchOutcome::Fetched {
        result: SequenceResult {
            identifier: "X".to_string(),
            sequence: "GCA".to_string(),
        },
        gc_percent: 200.0 / 3.0,
    };
    assert!(render(&outcome).contains("GC content           : 66.67%\n"));
}

#[test]
fn run_header_and_progress() {
    let report = TextReport::new(60);
    let mut out = Vec::new();
    report.write_run_header(&mut out, 3).unwrap();
    report.write_progress(&mut out, 0, 3).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("📊 Processing 3 team members...\n"));
    assert!(text.ends_with("Processing member 1 of 3:\n"));
}
