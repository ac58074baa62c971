//! # Markdown Generator
//!
//! Renders a [`SpecInput`] into a fixed-structure Markdown document.
//!
//! The document always contains every section, in the order given by
//! [`SECTIONS`]. Blank scalars render as [`NOT_SPECIFIED`], empty lists as a
//! single [`NONE_LISTED`] bullet. User text is included verbatim: nothing is
//! escaped, so headings or bullets typed into a field pass straight through.

use crate::model::{is_blank, Field, ListItems, SpecInput};

/// Title used when the name field is blank.
pub const DEFAULT_SPEC_NAME: &str = "Agent Spec";
pub const NOT_SPECIFIED: &str = "_Not specified._";
pub const NONE_LISTED: &str = "- _None listed._";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Title,
    Objective,
    Context,
    Users,
    Tools,
    DataSources,
    Constraints,
    Budget,
    SuccessMetrics,
    NonGoals,
    Risks,
}

pub const SECTIONS: [Section; 11] = [
    Section::Title,
    Section::Objective,
    Section::Context,
    Section::Users,
    Section::Tools,
    Section::DataSources,
    Section::Constraints,
    Section::Budget,
    Section::SuccessMetrics,
    Section::NonGoals,
    Section::Risks,
];

impl Section {
    /// Heading text for body sections. The title section has none.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Section::Title => None,
            Section::Objective => Some("Objective"),
            Section::Context => Some("Problem / Context"),
            Section::Users => Some("Primary Users"),
            Section::Tools => Some("Tools"),
            Section::DataSources => Some("Data Sources"),
            Section::Constraints => Some("Constraints"),
            Section::Budget => Some("Cost / Latency Budget"),
            Section::SuccessMetrics => Some("Success Metrics"),
            Section::NonGoals => Some("Non-Goals"),
            Section::Risks => Some("Risks / Open Questions"),
        }
    }
}

/// Renders the full spec document.
pub fn render(input: &SpecInput) -> String {
    let blocks: Vec<String> = SECTIONS
        .iter()
        .map(|section| render_section(*section, input))
        .collect();

    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

fn render_section(section: Section, input: &SpecInput) -> String {
    let body = match section {
        Section::Title => return format!("# {}", title(input)),
        Section::Objective => scalar(&input.objective),
        Section::Context => scalar(&input.context),
        Section::Users => scalar(&input.primary_users),
        Section::Tools => bullets(input.tools()),
        Section::DataSources => bullets(input.data_sources()),
        Section::Constraints => bullets(input.constraints()),
        Section::Budget => budget(input),
        Section::SuccessMetrics => bullets(input.success_metrics()),
        Section::NonGoals => bullets(input.non_goals()),
        Section::Risks => bullets(input.risks()),
    };

    let heading = section.heading().unwrap_or_default();
    format!("## {}\n\n{}", heading, body)
}

/// The document title: the name field, or [`DEFAULT_SPEC_NAME`].
pub fn title(input: &SpecInput) -> &str {
    if is_blank(&input.app_name) {
        DEFAULT_SPEC_NAME
    } else {
        input.app_name.trim()
    }
}

fn scalar(value: &str) -> String {
    if is_blank(value) {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    }
}

fn bullets(items: ListItems<'_>) -> String {
    let lines: Vec<String> = items.map(|item| format!("- {}", item)).collect();
    if lines.is_empty() {
        NONE_LISTED.to_string()
    } else {
        lines.join("\n")
    }
}

fn budget(input: &SpecInput) -> String {
    Field::BUDGET
        .iter()
        .map(|field| format!("- {}: {}", field.label(), scalar(field.get(input))))
        .collect::<Vec<_>>()
        .join("\n")
}
