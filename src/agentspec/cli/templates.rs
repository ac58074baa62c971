//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in stand-alone
//! `.tmp` files next to this module, included here as string constants.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so block tags
//! sit on their own lines without leaking blank lines into the output. Each
//! output line in a template ends with a real newline.
//!
//! Templates pick styles by semantic name through the `style` filter. Width
//! math (padding, indentation) happens in Rust and arrives as plain strings.

pub const FINDINGS_TEMPLATE: &str = include_str!("templates/findings.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const PRESETS_TEMPLATE: &str = include_str!("templates/presets.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
