use agentspec::api::FieldOverride;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agentspec", bin_name = "agentspec", version)]
#[command(
    about = "Turn an agent description into a Markdown spec, lint it and share it as a link",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the global configuration instead of the project one
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Where the input snapshot comes from. At most one source; `--set` applies on top.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// JSON file with the input fields (`-` reads stdin)
    #[arg(short, long, value_name = "FILE", group = "source")]
    pub input: Option<PathBuf>,

    /// Start from a preset
    #[arg(short, long, value_name = "ID", group = "source")]
    pub example: Option<String>,

    /// Start from a share token
    #[arg(long, value_name = "TOKEN", group = "source")]
    pub token: Option<String>,

    /// Start from a share link (or query string)
    #[arg(long, value_name = "URL", group = "source")]
    pub url: Option<String>,

    /// Override a field, e.g. --set objective="Triage tickets" (repeatable; `\n` separates list items)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub overrides: Vec<FieldOverride>,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Document,
    Link,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Document => "Document Commands:",
            CommandGroup::Link => "Link Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "render" | "lint" | "export" => Some(CommandGroup::Document),
            "share" | "decode" => Some(CommandGroup::Link),
            "presets" | "template" | "config" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Document, CommandGroup::Link, CommandGroup::Misc]
    }
}

/// Top-level help with subcommands listed by group.
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("agentspec {version}\n"));
    if let Some(about) = cmd.get_about() {
        output.push_str(&format!("{}\n", about));
    }
    output.push('\n');
    output.push_str("Usage: agentspec [OPTIONS] <COMMAND>\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group))
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -g, --global     Use the global configuration\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");
    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Document(DocumentCommands),

    #[command(flatten)]
    Link(LinkCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum DocumentCommands {
    /// Print the Markdown spec
    #[command(alias = "md", display_order = 1)]
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Also copy the Markdown to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Check the input for gaps and inconsistencies
    #[command(display_order = 2)]
    Lint {
        #[command(flatten)]
        input: InputArgs,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the Markdown spec to a file named after the spec
    #[command(display_order = 3)]
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Directory to write into
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LinkCommands {
    /// Print a share link that reproduces the input
    #[command(display_order = 10)]
    Share {
        #[command(flatten)]
        input: InputArgs,

        /// Print only the token
        #[arg(long)]
        token_only: bool,
    },

    /// Print the input carried by a share token or link, as JSON
    #[command(display_order = 11)]
    Decode {
        /// Share token or full share link
        token: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// List the available presets
    #[command(display_order = 20)]
    Presets,

    /// Print an empty input JSON document to fill in
    #[command(display_order = 21)]
    Template,

    /// Get or set configuration
    #[command(display_order = 22)]
    Config {
        /// Configuration key (share-base-url, max-url-length, catalog-path)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_with_overrides() {
        let cli = Cli::try_parse_from([
            "agentspec",
            "md",
            "--example",
            "sales-rfp",
            "--set",
            "name=Other",
            "--set",
            "risks=a\\nb",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Document(DocumentCommands::Render { input, copy })) => {
                assert!(!copy);
                assert_eq!(input.example.as_deref(), Some("sales-rfp"));
                assert_eq!(input.overrides.len(), 2);
                assert_eq!(input.overrides[1].value, "a\nb");
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_sources_are_exclusive() {
        let result = Cli::try_parse_from(["agentspec", "lint", "--example", "x", "--token", "y"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_override_is_rejected() {
        assert!(Cli::try_parse_from(["agentspec", "render", "--set", "colour=blue"]).is_err());
        assert!(Cli::try_parse_from(["agentspec", "render", "--set", "objective"]).is_err());
    }

    #[test]
    fn test_global_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["agentspec", "config", "--global"]).unwrap();
        assert!(cli.global);
    }

    #[test]
    fn test_grouped_help_lists_every_command() {
        let help = get_grouped_help();
        for name in [
            "render", "lint", "export", "share", "decode", "presets", "template", "config",
        ] {
            assert!(help.contains(name), "{}", name);
        }
        assert!(help.contains("Link Commands:"));
    }
}
