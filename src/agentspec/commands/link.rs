use crate::commands::load;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::AgentSpecConfig;
use crate::error::Result;
use crate::model::SpecInput;
use crate::query;
use crate::share;
use tracing::debug;

/// Encodes the input and builds a share link from the configured base URL.
pub fn share(input: &SpecInput, config: &AgentSpecConfig) -> CmdResult {
    let token = share::encode(input);
    let url = query::share_url(&config.share_base_url, &token);
    debug!(token_len = token.len(), url_len = url.len(), "built share link");

    let mut result = CmdResult::default();
    if !share::fits_in_url(&url, config.max_url_length) {
        result.add_message(CmdMessage::warning(format!(
            "Share link is {} characters, above the limit of {}; some browsers and chat tools may cut it off",
            url.len(),
            config.max_url_length
        )));
    }
    result.token = Some(token);
    result.share_url = Some(url);
    result
}

/// Decodes a token (or a link carrying one) back into an input.
pub fn decode(raw: &str) -> Result<CmdResult> {
    let input = load::decode_token(raw)?;
    Ok(CmdResult::default().with_input(input))
}
