//! Resolves the input snapshot a command works on.
//!
//! An [`InputRequest`] names one source plus any number of field overrides.
//! Overrides are applied last, in order, so `--set` always wins over whatever
//! the source provided.

use crate::catalog::PresetCatalog;
use crate::commands::CmdMessage;
use crate::error::{AgentSpecError, Result};
use crate::model::{Field, FieldKind, SpecInput};
use crate::query::{self, InitialSource, QueryParams, SHARE_PARAM};
use crate::share;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Empty,
    /// JSON file on disk.
    File(PathBuf),
    /// JSON text already read by the caller (stdin).
    Json(String),
    Example(String),
    Token(String),
    /// A share link or bare query string.
    Url(String),
}

impl InputSource {
    /// Whether resolving this source may look up a preset.
    pub fn reads_presets(&self) -> bool {
        matches!(self, InputSource::Example(_) | InputSource::Url(_))
    }
}

/// A single `field=value` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOverride {
    pub field: Field,
    pub value: String,
}

impl FromStr for FieldOverride {
    type Err = String;

    /// List fields accept a literal `\n` as item separator, so
    /// `tools=Search\nBilling` yields two items.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected field=value, got {}", s))?;
        let field = Field::from_str(key)?;
        let value = match field.kind() {
            FieldKind::List => value.replace("\\n", "\n"),
            FieldKind::Scalar => value.to_string(),
        };
        Ok(Self { field, value })
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputRequest {
    pub source: InputSource,
    pub overrides: Vec<FieldOverride>,
}

impl InputRequest {
    pub fn new(source: InputSource) -> Self {
        Self {
            source,
            overrides: Vec::new(),
        }
    }

    pub fn with_overrides(mut self, overrides: Vec<FieldOverride>) -> Self {
        self.overrides = overrides;
        self
    }
}

/// The resolved snapshot and what the user should be told about it.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub input: SpecInput,
    pub messages: Vec<CmdMessage>,
}

pub fn run<C: PresetCatalog + ?Sized>(catalog: &C, request: &InputRequest) -> Result<Loaded> {
    let mut messages = Vec::new();
    let mut input = match &request.source {
        InputSource::Empty => SpecInput::default(),
        InputSource::File(path) => {
            debug!(path = %path.display(), "reading input file");
            let content = fs::read_to_string(path).map_err(AgentSpecError::Io)?;
            parse_json(&content)?
        }
        InputSource::Json(content) => parse_json(content)?,
        InputSource::Example(id) => match catalog.find(id) {
            Some(preset) => preset.data.clone(),
            None => {
                return Err(AgentSpecError::Input(format!(
                    "Unknown preset: {}. Available: {}",
                    id,
                    catalog.ids().join(", ")
                )))
            }
        },
        InputSource::Token(token) => decode_token(token)?,
        InputSource::Url(url) => {
            let (input, source) = query::resolve(url, catalog);
            let carried_token = QueryParams::parse(url)
                .get(SHARE_PARAM)
                .is_some_and(|t| !t.is_empty());
            match source {
                InitialSource::Shared => {}
                InitialSource::Preset(id) if carried_token => messages.push(CmdMessage::warning(
                    format!("Share token in link could not be decoded; using preset {}", id),
                )),
                InitialSource::Preset(_) => {}
                InitialSource::Default if carried_token => messages.push(CmdMessage::warning(
                    "Share token in link could not be decoded; using an empty input",
                )),
                InitialSource::Default => messages.push(CmdMessage::info(
                    "Link names no share token or known preset; using an empty input",
                )),
            }
            input
        }
    };

    for o in &request.overrides {
        debug!(field = %o.field, "applying override");
        o.field.set(&mut input, o.value.clone());
    }

    Ok(Loaded { input, messages })
}

/// Decodes a share token, also accepting a whole share link.
pub fn decode_token(raw: &str) -> Result<SpecInput> {
    let raw = raw.trim();
    let token = if raw.contains('?') || raw.contains('=') {
        QueryParams::parse(raw)
            .get(SHARE_PARAM)
            .map(str::to_string)
            .unwrap_or_default()
    } else {
        raw.to_string()
    };
    share::decode(&token)
        .ok_or_else(|| AgentSpecError::Input("Share token could not be decoded".to_string()))
}

/// An all-default input, for users writing JSON by hand.
pub fn skeleton() -> SpecInput {
    SpecInput::default()
}

fn parse_json(content: &str) -> Result<SpecInput> {
    serde_json::from_str(content).map_err(AgentSpecError::Serialization)
}
