//! # CLI Layer
//!
//! This module is **one possible UI client** for agentspec, not the
//! application itself. It is the only place that:
//!
//! - parses arguments and reads stdin,
//! - writes to stdout/stderr,
//! - installs the tracing subscriber.
//!
//! Documents (Markdown, tokens, JSON) go to stdout; messages about them go to
//! stderr so the output stays pipeable. Listings (presets, findings, config)
//! print their messages on stdout, after the listing.
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: resolves directories and configuration
//! - `AppContext::api()`: builds the API; the preset catalog file is only
//!   read by commands that look up presets, so a broken `catalog-path` can
//!   still be fixed with `config`
//! - `handle_*()`: per-command handlers that call the API and print

use super::render::{eprint_messages, print_messages, render_config, render_findings, render_presets};
use super::setup::{
    print_grouped_help, Cli, Commands, DocumentCommands, InputArgs, LinkCommands, MiscCommands,
};
use agentspec::api::{
    AgentSpecApi, CmdMessage, CmdResult, ConfigAction, InputRequest, InputSource, MessageLevel, Scope,
    SpecPaths,
};
use agentspec::catalog::{BuiltinCatalog, FileCatalog, PresetCatalog};
use agentspec::model::Preset;
use agentspec::clipboard::copy_to_clipboard;
use agentspec::config::AgentSpecConfig;
use agentspec::error::{AgentSpecError, Result};
use clap::Parser;
use directories::ProjectDirs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "AGENTSPEC_LOG";
const PROJECT_DIR: &str = ".agentspec";
const STDIN_MARKER: &str = "-";

type Api = AgentSpecApi<Box<dyn PresetCatalog>>;

struct AppContext {
    cwd: PathBuf,
    paths: SpecPaths,
    config: AgentSpecConfig,
    scope: Scope,
}

impl AppContext {
    fn api(&self, reads_presets: bool) -> Result<Api> {
        let catalog: Box<dyn PresetCatalog> = if !reads_presets {
            Box::new(Vec::<Preset>::new())
        } else if let Some(path) = &self.config.catalog_path {
            Box::new(FileCatalog::load(self.cwd.join(path))?)
        } else {
            Box::new(BuiltinCatalog::new())
        };
        Ok(AgentSpecApi::new(
            catalog,
            self.paths.clone(),
            self.config.clone(),
        ))
    }

    fn api_for(&self, request: &InputRequest) -> Result<Api> {
        self.api(request.source.reads_presets())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        print_grouped_help();
        return Ok(());
    };

    let ctx = init_context(cli.global)?;

    match command {
        Commands::Document(cmd) => match cmd {
            DocumentCommands::Render { input, copy } => handle_render(&ctx, input, copy),
            DocumentCommands::Lint { input, json } => handle_lint(&ctx, input, json),
            DocumentCommands::Export { input, dir, force } => {
                handle_export(&ctx, input, &dir, force)
            }
        },
        Commands::Link(cmd) => match cmd {
            LinkCommands::Share { input, token_only } => handle_share(&ctx, input, token_only),
            LinkCommands::Decode { token } => handle_decode(&ctx, &token),
        },
        Commands::Misc(cmd) => match cmd {
            MiscCommands::Presets => handle_presets(&ctx),
            MiscCommands::Template => handle_template(&ctx),
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
        },
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    // Ignored when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(use_global: bool) -> Result<AppContext> {
    let cwd = std::env::current_dir().map_err(AgentSpecError::Io)?;
    let project_dir = cwd.join(PROJECT_DIR);
    let global_dir = ProjectDirs::from("com", "agentspec", "agentspec")
        .map(|dirs| dirs.data_dir().to_path_buf());

    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };
    let paths = SpecPaths {
        project: Some(project_dir),
        global: global_dir,
    };
    let config_dir = paths.scope_dir(scope)?;
    let config = AgentSpecConfig::load(&config_dir)?;
    debug!(dir = %config_dir.display(), "configuration loaded");

    Ok(AppContext {
        cwd,
        paths,
        config,
        scope,
    })
}

fn input_request(args: InputArgs) -> Result<InputRequest> {
    let source = if let Some(path) = args.input {
        if path.as_os_str() == STDIN_MARKER {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(AgentSpecError::Io)?;
            InputSource::Json(buffer)
        } else {
            InputSource::File(path)
        }
    } else if let Some(id) = args.example {
        InputSource::Example(id)
    } else if let Some(token) = args.token {
        InputSource::Token(token)
    } else if let Some(url) = args.url {
        InputSource::Url(url)
    } else {
        InputSource::Empty
    };
    Ok(InputRequest::new(source).with_overrides(args.overrides))
}

/// Prints non-error messages and turns the first error message into `Err`.
fn finish(result: &CmdResult, to_stderr: bool) -> Result<()> {
    let (errors, others): (Vec<_>, Vec<_>) = result
        .messages
        .iter()
        .cloned()
        .partition(|m| m.level == MessageLevel::Error);

    if to_stderr {
        eprint_messages(&others);
    } else {
        print_messages(&others);
    }

    match errors.into_iter().next() {
        Some(error) => Err(AgentSpecError::Api(error.content)),
        None => Ok(()),
    }
}

fn handle_render(ctx: &AppContext, input: InputArgs, copy: bool) -> Result<()> {
    let request = input_request(input)?;
    let mut result = ctx.api_for(&request)?.render(&request)?;
    let markdown = result.markdown.take().unwrap_or_default();
    print!("{}", markdown);

    if copy {
        match copy_to_clipboard(&markdown) {
            Ok(()) => result.add_message(CmdMessage::success("Copied to clipboard.")),
            Err(e) => result.add_message(CmdMessage::warning(format!(
                "Failed to copy to clipboard: {}",
                e
            ))),
        }
    }
    finish(&result, true)
}

fn handle_lint(ctx: &AppContext, input: InputArgs, json: bool) -> Result<()> {
    let request = input_request(input)?;
    let result = ctx.api_for(&request)?.lint(&request)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.findings)?);
        return finish(&result, true);
    }
    print!("{}", render_findings(&result.findings));
    finish(&result, false)
}

fn handle_export(ctx: &AppContext, input: InputArgs, dir: &Path, force: bool) -> Result<()> {
    let request = input_request(input)?;
    let result = ctx.api_for(&request)?.export(&request, dir, force)?;
    finish(&result, false)
}

fn handle_share(ctx: &AppContext, input: InputArgs, token_only: bool) -> Result<()> {
    let request = input_request(input)?;
    let result = ctx.api_for(&request)?.share(&request)?;
    let line = if token_only {
        result.token.as_deref()
    } else {
        result.share_url.as_deref()
    };
    println!("{}", line.unwrap_or_default());
    finish(&result, true)
}

fn handle_decode(ctx: &AppContext, token: &str) -> Result<()> {
    let result = ctx.api(false)?.decode(token)?;
    if let Some(input) = &result.input {
        println!("{}", serde_json::to_string_pretty(input)?);
    }
    finish(&result, true)
}

fn handle_presets(ctx: &AppContext) -> Result<()> {
    let result = ctx.api(true)?.presets();
    print!("{}", render_presets(&result.presets));
    finish(&result, false)
}

fn handle_template(ctx: &AppContext) -> Result<()> {
    let result = ctx.api(false)?.template();
    if let Some(input) = &result.input {
        println!("{}", serde_json::to_string_pretty(input)?);
    }
    finish(&result, true)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api(false)?.config(ctx.scope, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
        let dir = ctx.paths.scope_dir(ctx.scope)?;
        debug!(dir = %dir.display(), "showing configuration");
    }
    finish(&result, false)
}
