use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::form_urlencoded;

use crate::domain::{Accession, SeqRange, UrlReference};

static NUCCORE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/nuccore/([^?]+)").expect("nuccore pattern compiles"));

impl UrlReference {
    /// Reads the accession and optional `from`/`to` window out of a nuccore URL.
    ///
    /// Never fails: a URL that matches nothing yields an empty reference.
    pub fn parse(url: &str) -> Self {
        let reference = Self {
            accession: extract_accession(url),
            range: extract_range(url),
        };
        debug!(url, ?reference, "parsed member url");
        reference
    }
}

pub fn extract_accession(url: &str) -> Option<Accession> {
    NUCCORE_PATH
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| Accession::new(m.as_str()))
}

/// Both `from` and `to` must be present and numeric; anything less is no range.
pub fn extract_range(url: &str) -> Option<SeqRange> {
    let query = query_component(url)?;
    let mut from = None;
    let mut to = None;
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "from" if from.is_none() => from = Some(value.into_owned()),
            "to" if to.is_none() => to = Some(value.into_owned()),
            _ => {}
        }
    }
    let start = from?.trim().parse::<u64>().ok()?;
    let end = to?.trim().parse::<u64>().ok()?;
    Some(SeqRange { start, end })
}

fn query_component(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once('?')?;
    let query = rest.split_once('#').map_or(rest, |(query, _)| query);
    Some(query)
}
