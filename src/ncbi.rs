use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::config::ReportConfig;
use crate::domain::{Accession, SeqRange, SequenceResult};
use crate::error::FetchError;
use crate::fasta::parse_single_record;

/// Retrieves one nucleotide record, optionally sliced server-side to `range`.
pub trait SequenceFetcher {
    fn fetch(
        &self,
        accession: &Accession,
        range: Option<SeqRange>,
    ) -> Result<SequenceResult, FetchError>;
}

impl<T: SequenceFetcher + ?Sized> SequenceFetcher for &T {
    fn fetch(
        &self,
        accession: &Accession,
        range: Option<SeqRange>,
    ) -> Result<SequenceResult, FetchError> {
        (**self).fetch(accession, range)
    }
}

/// E-utilities allow 3 requests per second without an API key.
pub const MIN_INTERVAL: Duration = Duration::from_millis(334);
/// E-utilities allow 10 requests per second with an API key.
pub const MIN_INTERVAL_WITH_KEY: Duration = Duration::from_millis(100);

/// Entrez E-utilities `efetch` client for the nuccore database.
///
/// Makes a single attempt per call with reqwest's default timeout. Requests
/// are spaced by at least `request_interval`; clones share the same gate.
#[derive(Clone)]
pub struct EntrezHttpClient {
    client: Client,
    config: ReportConfig,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl EntrezHttpClient {
    pub fn new(config: ReportConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("{}/{}", config.tool, env!("CARGO_PKG_VERSION")))
                .map_err(|err| FetchError::Client(err.to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| FetchError::Client(err.to_string()))?;

        Ok(Self {
            client,
            config,
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// Blocks until the next request is allowed, then claims the slot.
    fn wait_for_slot(&self) {
        let interval = request_interval(&self.config);
        let mut last = self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let wait = remaining_wait(*last, Instant::now(), interval);
        if !wait.is_zero() {
            debug!(wait_ms = wait.as_millis() as u64, "throttling efetch request");
            thread::sleep(wait);
        }
        *last = Some(Instant::now());
    }

    fn efetch_url(&self) -> String {
        format!("{}/efetch.fcgi", self.config.base_url)
    }

    fn handle_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, FetchError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .unwrap_or_else(|_| "NCBI request failed".to_string());
        Err(FetchError::Status {
            status,
            message: message.trim().to_string(),
        })
    }
}

impl SequenceFetcher for EntrezHttpClient {
    fn fetch(
        &self,
        accession: &Accession,
        range: Option<SeqRange>,
    ) -> Result<SequenceResult, FetchError> {
        let url = self.efetch_url();
        let params = efetch_params(&self.config, accession, range);
        self.wait_for_slot();
        debug!(%url, %accession, ?range, "requesting nuccore record");

        let response = self.client.get(&url).query(&params).send()?;
        let response = Self::handle_status(response)?;
        // Reading the body to the end consumes the response and frees the connection.
        let body = response.text()?;

        if body.trim().is_empty() {
            return Err(FetchError::EmptyResponse);
        }
        parse_single_record(&body)
    }
}

pub fn request_interval(config: &ReportConfig) -> Duration {
    if config.api_key.is_some() {
        MIN_INTERVAL_WITH_KEY
    } else {
        MIN_INTERVAL
    }
}

/// Time left before a request may go out, given when the previous one did.
pub fn remaining_wait(last: Option<Instant>, now: Instant, interval: Duration) -> Duration {
    match last {
        Some(last) => interval.saturating_sub(now.saturating_duration_since(last)),
        None => Duration::ZERO,
    }
}

pub fn efetch_params(
    config: &ReportConfig,
    accession: &Accession,
    range: Option<SeqRange>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("db", "nuccore".to_string()),
        ("id", accession.as_str().to_string()),
        ("rettype", "fasta".to_string()),
        ("retmode", "text".to_string()),
        ("tool", config.tool.clone()),
        ("email", config.contact_email.clone()),
    ];
    if let Some(range) = range {
        params.push(("seq_start", range.start.to_string()));
        params.push(("seq_stop", range.end.to_string()));
    }
    if let Some(api_key) = &config.api_key {
        params.push(("api_key", api_key.clone()));
    }
    params
}
