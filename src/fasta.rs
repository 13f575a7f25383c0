use crate::domain::SequenceResult;
use crate::error::FetchError;

/// Parses text that must hold exactly one FASTA record.
///
/// The identifier is the first whitespace-delimited token of the header.
/// Sequence lines are joined with all whitespace removed.
pub fn parse_single_record(text: &str) -> Result<SequenceResult, FetchError> {
    let mut records: Vec<SequenceResult> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if let Some(header) = line.strip_prefix('>') {
            let identifier = header.split_whitespace().next().unwrap_or("").to_string();
            records.push(SequenceResult {
                identifier,
                sequence: String::new(),
            });
        } else if line.is_empty() {
            continue;
        } else if let Some(current) = records.last_mut() {
            current
                .sequence
                .extend(line.chars().filter(|ch| !ch.is_whitespace()));
        } else {
            return Err(FetchError::InvalidFasta(
                "sequence data before the first header".to_string(),
            ));
        }
    }

    match records.len() {
        0 => Err(FetchError::InvalidFasta("no records found".to_string())),
        1 => Ok(records.remove(0)),
        n => Err(FetchError::InvalidFasta(format!(
            "expected one record, found {n}"
        ))),
    }
}
