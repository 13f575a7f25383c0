use std::fs::File;
use std::io::Read;

use camino::Utf8Path;
use csv::StringRecord;
use tracing::debug;

use crate::domain::TeamRecord;
use crate::error::LoadError;

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "name",
    "username",
    "country",
    "hobby",
    "affiliations",
    "url",
];

pub struct RosterLoader;

impl RosterLoader {
    /// Loads every row of the roster in file order. `github_url` and
    /// `linkedin_url` may be missing, as columns or as trailing cells of a
    /// short row, and then read as empty strings.
    pub fn load(path: &Utf8Path) -> Result<Vec<TeamRecord>, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let records = Self::from_reader(file, path)?;
        debug!(path = %path, count = records.len(), "loaded roster");
        Ok(records)
    }

    /// `path` only labels errors.
    pub fn from_reader<R: Read>(reader: R, path: &Utf8Path) -> Result<Vec<TeamRecord>, LoadError> {
        let parse_error = |source: csv::Error| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers().map_err(parse_error)?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(LoadError::MissingColumn {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                });
            }
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let mut row = row.map_err(parse_error)?;
            fill_missing_optional(&mut row, &headers);
            records.push(row.deserialize(Some(&headers)).map_err(parse_error)?);
        }
        Ok(records)
    }
}

/// Pads a short row with empty cells when every missing trailing column is
/// optional. Rows that stop before a required column are left short and fail
/// to deserialize.
fn fill_missing_optional(row: &mut StringRecord, headers: &StringRecord) {
    if row.len() >= headers.len() {
        return;
    }
    let only_optional_missing = headers
        .iter()
        .skip(row.len())
        .all(|header| !REQUIRED_COLUMNS.contains(&header));
    if only_optional_missing {
        while row.len() < headers.len() {
            row.push_field("");
        }
    }
}
