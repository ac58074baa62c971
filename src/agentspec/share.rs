//! # Share Codec
//!
//! Turns a [`SpecInput`] into a compact token that can sit in a URL query
//! parameter without escaping, and turns arbitrary strings back into inputs.
//!
//! ## Token format
//!
//! ```text
//! <tag><base64url payload, no padding>
//!
//! tag 'z'  payload = zlib(JSON)
//! tag 'j'  payload = JSON
//! ```
//!
//! The JSON is an object keyed by the field keys from [`Field::key`].
//! [`encode`] emits whichever form is shorter. Every character of a token is
//! in `[A-Za-z0-9_-]`, all unreserved in a query component.
//!
//! ## Decoding is defensive
//!
//! [`decode`] accepts any string and answers `None` for anything it cannot
//! use. The structure inside a well-formed payload is not trusted either:
//! known keys holding strings are kept, known keys of any other shape become
//! empty, unknown keys are dropped and missing keys take their defaults.

use crate::model::{Field, SpecInput};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use serde_json::{Map, Value};
use std::io::Write;
use thiserror::Error;
use tracing::debug;

pub const COMPRESSED_TAG: char = 'z';
pub const PLAIN_TAG: char = 'j';

/// Longer tokens are rejected before any decoding happens.
pub const MAX_TOKEN_CHARS: usize = 512 * 1024;

/// Upper bound on the decoded JSON payload.
pub const MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

/// Conservative length for links that must survive browsers and chat tools.
pub const DEFAULT_MAX_URL_LEN: usize = 2000;

const INFLATE_CHUNK: usize = 16 * 1024;

/// Why a token was rejected. Only ever logged; [`decode`] returns `None`.
#[derive(Error, Debug)]
enum ShareError {
    #[error("token is empty")]
    Empty,

    #[error("token is {0} characters long")]
    TooLong(usize),

    #[error("unknown token format {0:?}")]
    UnknownFormat(char),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("corrupt compressed payload: {0}")]
    Inflate(#[from] flate2::DecompressError),

    #[error("compressed payload ends early")]
    Truncated,

    #[error("unexpected bytes after compressed payload")]
    TrailingData,

    #[error("payload is larger than {0} bytes")]
    TooLarge(usize),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Encodes the input as a share token. Same input, same token.
pub fn encode(input: &SpecInput) -> String {
    let json = to_json(input);
    let plain = tagged(PLAIN_TAG, json.as_bytes());

    match deflate(json.as_bytes()) {
        Ok(compressed) => {
            let packed = tagged(COMPRESSED_TAG, &compressed);
            if packed.len() <= plain.len() {
                packed
            } else {
                plain
            }
        }
        Err(err) => {
            debug!(error = %err, "compression failed, emitting plain share token");
            plain
        }
    }
}

/// Decodes a share token, or `None` when the token is unusable.
pub fn decode(token: &str) -> Option<SpecInput> {
    match try_decode(token.trim()) {
        Ok(input) => Some(input),
        Err(err) => {
            debug!(error = %err, "rejected share token");
            None
        }
    }
}

/// Whether a share link stays within the given length.
pub fn fits_in_url(url: &str, max_len: usize) -> bool {
    url.len() <= max_len
}

fn to_json(input: &SpecInput) -> String {
    let map: Map<String, Value> = Field::ALL
        .iter()
        .map(|field| {
            (
                field.key().to_string(),
                Value::String(field.get(input).to_string()),
            )
        })
        .collect();
    Value::Object(map).to_string()
}

fn tagged(tag: char, payload: &[u8]) -> String {
    let mut token = String::with_capacity(1 + payload.len() * 4 / 3 + 4);
    token.push(tag);
    URL_SAFE_NO_PAD.encode_string(payload, &mut token);
    token
}

fn deflate(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(bytes.len()), Compression::best());
    encoder.write_all(bytes)?;
    encoder.finish()
}

fn try_decode(token: &str) -> Result<SpecInput, ShareError> {
    let mut chars = token.chars();
    let tag = chars.next().ok_or(ShareError::Empty)?;
    if token.len() > MAX_TOKEN_CHARS {
        return Err(ShareError::TooLong(token.len()));
    }
    if tag != COMPRESSED_TAG && tag != PLAIN_TAG {
        return Err(ShareError::UnknownFormat(tag));
    }

    let bytes = URL_SAFE_NO_PAD.decode(chars.as_str())?;
    let payload = if tag == COMPRESSED_TAG {
        inflate(&bytes)?
    } else {
        bytes
    };
    if payload.len() > MAX_PAYLOAD_BYTES {
        return Err(ShareError::TooLarge(MAX_PAYLOAD_BYTES));
    }

    let value: Value = serde_json::from_slice(&payload)?;
    from_value(value)
}

/// Inflates a complete zlib stream. A stream that never reaches its end
/// marker (a truncated token) is an error, as is anything after it.
fn inflate(bytes: &[u8]) -> Result<Vec<u8>, ShareError> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::new();

    loop {
        if out.len() > MAX_PAYLOAD_BYTES {
            return Err(ShareError::TooLarge(MAX_PAYLOAD_BYTES));
        }
        if out.len() == out.capacity() {
            out.reserve(INFLATE_CHUNK);
        }

        let in_before = inflater.total_in();
        let out_before = inflater.total_out();
        let remaining = &bytes[in_before as usize..];

        match inflater.decompress_vec(remaining, &mut out, FlushDecompress::None)? {
            Status::StreamEnd => {
                if (inflater.total_in() as usize) < bytes.len() {
                    return Err(ShareError::TrailingData);
                }
                return Ok(out);
            }
            Status::Ok | Status::BufError => {
                if inflater.total_in() == in_before && inflater.total_out() == out_before {
                    return Err(ShareError::Truncated);
                }
            }
        }
    }
}

fn from_value(value: Value) -> Result<SpecInput, ShareError> {
    let Value::Object(map) = value else {
        return Err(ShareError::NotAnObject);
    };

    let mut input = SpecInput::default();
    for field in Field::ALL {
        match map.get(field.key()) {
            Some(Value::String(text)) => field.set(&mut input, text.as_str()),
            Some(_) => debug!(field = field.key(), "non-string field in share token, using empty"),
            None => {}
        }
    }
    Ok(input)
}
