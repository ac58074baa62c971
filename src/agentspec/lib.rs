//! # Agentspec Architecture
//!
//! Agentspec turns a handful of form fields describing an AI agent (objective,
//! users, tools, budgets...) into three things:
//!
//! - a deterministic Markdown specification document,
//! - a list of lint findings pointing at gaps in the description,
//! - a compact, URL-safe share token that reproduces the exact input.
//!
//! This is a library that happens to have a CLI client. The binary is one
//! client; a web page or an editor plugin could be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders templates, reads stdin         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over PresetCatalog    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves input sources, writes exports, reads config     │
//! │  - Returns CmdResult values with messages for the UI        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model, markdown, lint, share, query, artifact)       │
//! │  - Pure functions over an immutable SpecInput snapshot      │
//! │  - No I/O, never fails for well-typed input                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The core functions are total: `markdown::render` and `lint::lint` accept
//! any [`model::SpecInput`], and `share::decode` reports bad tokens with
//! `None` instead of an error. Collaborator failures (files, clipboard,
//! config) travel as [`error::AgentSpecError`].
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests next to the code. This is where most
//!    of the testing lives.
//! 2. **API**: dispatch tests using a small in-test catalog.
//! 3. **CLI**: end-to-end tests in `tests/` driving the built binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Operation logic and result types
//! - [`model`]: `SpecInput`, the field registry and presets
//! - [`markdown`]: Markdown document generation
//! - [`lint`]: Completeness and consistency rules
//! - [`share`]: Share token codec
//! - [`query`]: Query-string contract for share links
//! - [`artifact`]: Export file naming
//! - [`catalog`]: Preset catalogs
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated output for the binary (not part of the lib API)

pub mod api;
pub mod artifact;
pub mod catalog;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod lint;
pub mod markdown;
pub mod model;
pub mod query;
pub mod share;
