//! # Query-String Contract
//!
//! A share link carries the encoded input in the `s` parameter. A link may
//! instead name a preset with `example`. When both are present the token
//! wins; a token that fails to decode falls back to the preset, and with
//! neither the default (empty) input is used.
//!
//! Resolution happens once, when a session starts. The result is a plain
//! snapshot; nothing here keeps state.

use crate::catalog::PresetCatalog;
use crate::model::SpecInput;
use crate::share;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

pub const SHARE_PARAM: &str = "s";
pub const EXAMPLE_PARAM: &str = "example";

/// Characters left unescaped in a query value (RFC 3986 unreserved).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Where the initial input of a session came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialSource {
    Shared,
    Preset(String),
    Default,
}

/// Decoded `key=value` pairs of a query string, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parses a bare query (`a=1&b=2`), a query with a leading `?`, or a
    /// full URL. Fragments are ignored.
    pub fn parse(raw: &str) -> Self {
        let pairs = query_part(raw)
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    /// First value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Resolves the initial input from a query string.
pub fn resolve<C: PresetCatalog + ?Sized>(query: &str, catalog: &C) -> (SpecInput, InitialSource) {
    let params = QueryParams::parse(query);

    if let Some(token) = params.get(SHARE_PARAM).filter(|t| !t.is_empty()) {
        match share::decode(token) {
            Some(input) => return (input, InitialSource::Shared),
            None => debug!("share parameter present but not decodable, falling back"),
        }
    }

    if let Some(id) = params.get(EXAMPLE_PARAM).filter(|id| !id.is_empty()) {
        match catalog.find(id) {
            Some(preset) => return (preset.data.clone(), InitialSource::Preset(preset.id.clone())),
            None => debug!(example = id, "unknown preset in query"),
        }
    }

    (SpecInput::default(), InitialSource::Default)
}

/// Builds a share link from a base URL.
///
/// Existing `s` and `example` parameters are dropped, other parameters are
/// kept, and the fragment is discarded.
pub fn share_url(base: &str, token: &str) -> String {
    let without_fragment = base.split('#').next().unwrap_or_default();
    let (path, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));

    let mut params: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = decode_component(pair.split_once('=').map_or(*pair, |(k, _)| k));
            key != SHARE_PARAM && key != EXAMPLE_PARAM
        })
        .map(str::to_string)
        .collect();
    params.push(format!(
        "{}={}",
        SHARE_PARAM,
        utf8_percent_encode(token, QUERY_VALUE)
    ));

    format!("{}?{}", path, params.join("&"))
}

fn query_part(raw: &str) -> &str {
    let without_fragment = raw.trim().split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if without_fragment.contains("://") => "",
        None => without_fragment,
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
