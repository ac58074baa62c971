//! # CLI Behavior
//!
//! The binary's client of the agentspec library. See the crate-level
//! documentation in `lib.rs` for the overall architecture.
//!
//! ## Choosing the Input
//!
//! Every document and link command works on one input snapshot, chosen by at
//! most one of:
//!
//! - `--input FILE` (JSON; `-` reads stdin)
//! - `--example ID` (a preset from the catalog)
//! - `--token TOKEN` (a share token)
//! - `--url URL` (a share link, resolved like the web page would: a usable
//!   token wins, then the `example` parameter, then the empty input)
//!
//! With none of them the empty input is used. `--set field=value` overrides
//! apply on top of whichever source was chosen.
//!
//! ## Naked Execution
//!
//! Running `agentspec` without a subcommand prints the grouped help.

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
