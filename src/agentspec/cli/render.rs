//! # Rendering Module
//!
//! Styled terminal output through minijinja templates and the theme in
//! [`super::styles`]. Color is auto-detected per stream unless a caller
//! forces it (tests always do).
//!
//! Layout math (column padding, indentation) stays in Rust because it needs
//! Unicode-aware widths; templates only decide what goes where and which
//! semantic style it gets.

use super::styles::{names, AGENTSPEC_THEME};
use super::templates::{CONFIG_TEMPLATE, FINDINGS_TEMPLATE, MESSAGES_TEMPLATE, PRESETS_TEMPLATE};
use agentspec::api::{CmdMessage, MessageLevel};
use agentspec::config::{AgentSpecConfig, CONFIG_KEYS};
use agentspec::lint::Finding;
use agentspec::model::Preset;
use console::Term;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Gap between the id column and the text after it.
const COLUMN_GAP: usize = 2;

#[derive(Serialize)]
struct FindingLine {
    id: String,
    title: String,
    detail: Option<String>,
    indent: String,
}

#[derive(Serialize)]
struct FindingsData {
    findings: Vec<FindingLine>,
    summary: String,
}

#[derive(Serialize)]
struct PresetLine {
    id: String,
    label: String,
    padding: String,
}

#[derive(Serialize)]
struct PresetsData {
    presets: Vec<PresetLine>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        AGENTSPEC_THEME.apply(&name, &value.to_string(), use_color)
    });
    env
}

fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = environment(use_color);
    env.add_template("output", template)?;
    env.get_template("output")?.render(data)
}

fn stdout_color() -> bool {
    Term::stdout().features().colors_supported()
}

pub fn render_findings(findings: &[Finding]) -> String {
    render_findings_internal(findings, stdout_color())
}

fn render_findings_internal(findings: &[Finding], use_color: bool) -> String {
    let lines = findings
        .iter()
        .map(|finding| {
            let id = finding.id.to_string();
            let indent = " ".repeat(id.width() + COLUMN_GAP);
            FindingLine {
                id,
                title: finding.title.clone(),
                detail: finding.detail.clone(),
                indent,
            }
        })
        .collect();

    let summary = match findings.len() {
        1 => "1 finding".to_string(),
        n => format!("{} findings", n),
    };
    let data = FindingsData {
        findings: lines,
        summary,
    };

    render_template(FINDINGS_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_presets(presets: &[Preset]) -> String {
    render_presets_internal(presets, stdout_color())
}

fn render_presets_internal(presets: &[Preset], use_color: bool) -> String {
    let id_width = presets.iter().map(|p| p.id.width()).max().unwrap_or(0);
    let lines = presets
        .iter()
        .map(|preset| PresetLine {
            id: preset.id.clone(),
            label: preset.label.clone(),
            padding: " ".repeat(id_width - preset.id.width() + COLUMN_GAP),
        })
        .collect();

    render_template(PRESETS_TEMPLATE, &PresetsData { presets: lines }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_config(config: &AgentSpecConfig) -> String {
    render_config_internal(config, stdout_color())
}

fn render_config_internal(config: &AgentSpecConfig, use_color: bool) -> String {
    let entries = CONFIG_KEYS
        .iter()
        .map(|key| ConfigEntry {
            key: key.to_string(),
            value: config.get(key).unwrap_or_default(),
        })
        .collect();

    render_template(CONFIG_TEMPLATE, &ConfigData { entries }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let messages = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    render_template(MESSAGES_TEMPLATE, &MessagesData { messages }, use_color).unwrap_or_else(
        |_| String::new(),
    )
}

/// Prints command messages to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages, stdout_color()));
}

/// Prints command messages to stderr, keeping stdout free for documents.
pub fn eprint_messages(messages: &[CmdMessage]) {
    let use_color = Term::stderr().features().colors_supported();
    eprint!("{}", render_messages(messages, use_color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentspec::lint::RuleId;
    use agentspec::model::SpecInput;

    #[test]
    fn test_render_findings_plain() {
        let findings = vec![
            Finding::new(RuleId::ObjectiveMissing, "Objective is missing"),
            Finding::new(RuleId::BudgetMissing, "No cost / latency budget").with_detail("Set one."),
        ];
        let output = render_findings_internal(&findings, false);
        assert_eq!(
            output,
            "objective-missing  Objective is missing\n\
             budget-missing  No cost / latency budget\n\
             \u{20}               Set one.\n\
             2 findings\n"
        );
    }

    #[test]
    fn test_render_no_findings_is_empty() {
        assert_eq!(render_findings_internal(&[], false), "");
    }

    #[test]
    fn test_render_findings_colored() {
        let findings = vec![Finding::new(RuleId::RisksMissing, "Risks missing")];
        let output = render_findings_internal(&findings, true);
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("1 finding"));
    }

    #[test]
    fn test_render_presets_aligns_labels() {
        let presets = vec![
            Preset {
                id: "a".into(),
                label: "Short".into(),
                data: SpecInput::default(),
            },
            Preset {
                id: "longer".into(),
                label: "Long".into(),
                data: SpecInput::default(),
            },
        ];
        let output = render_presets_internal(&presets, false);
        assert_eq!(output, "a       Short\nlonger  Long\n");
    }

    #[test]
    fn test_render_config() {
        let output = render_config_internal(&AgentSpecConfig::default(), false);
        assert_eq!(
            output,
            "share-base-url = http://localhost:3000/\nmax-url-length = 2000\ncatalog-path = \n"
        );
    }

    #[test]
    fn test_render_messages() {
        let messages = vec![CmdMessage::success("Done"), CmdMessage::warning("Careful")];
        assert_eq!(render_messages(&messages, false), "Done\nCareful\n");
        assert_eq!(render_messages(&[], false), "");
    }
}
