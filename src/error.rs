use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Failure to load the roster table. Always fatal for the run.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("failed to open roster file {path}")]
    Open {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse roster {path}: {source}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("roster {path} is missing required column `{column}`")]
    #[diagnostic(help("required columns: name, username, country, hobby, affiliations, url"))]
    MissingColumn { path: Utf8PathBuf, column: String },
}

/// Failure to retrieve or parse one member's sequence. Recoverable per record.
#[derive(Debug, Error, Diagnostic)]
pub enum FetchError {
    #[error("NCBI request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NCBI returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("NCBI returned an empty response")]
    EmptyResponse,

    #[error("invalid FASTA response: {0}")]
    InvalidFasta(String),

    #[error("failed to build NCBI client: {0}")]
    Client(String),
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file at {0}")]
    Read(Utf8PathBuf),

    #[error("failed to parse JSON config: {0}")]
    Parse(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
