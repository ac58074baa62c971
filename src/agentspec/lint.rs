//! # Lint Engine
//!
//! A fixed, ordered table of structural rules evaluated against a
//! [`SpecInput`]. Each rule looks at one or more fields and may emit a
//! [`Finding`]. Rules never see each other's results, and the table order is
//! the output order; findings are not sorted by severity.
//!
//! These are heuristics about shape ("is there anything in this list?"), not
//! an attempt to understand the text.

use crate::model::{is_blank, ListItems, SpecInput};
use serde::Serialize;
use std::fmt;

/// Objectives shorter than this (in characters, after trimming) are flagged.
pub const MIN_OBJECTIVE_CHARS: usize = 30;

/// Tool descriptions containing one of these suggest the tool changes state.
pub const WRITE_ACTION_KEYWORDS: [&str; 7] = [
    "create", "update", "delete", "send", "post", "write", "publish",
];

/// Mentioning this in a tool or constraint counts as a human approval gate.
pub const APPROVAL_KEYWORD: &str = "approval";

/// Stable identifiers for every rule, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    ObjectiveMissing,
    ObjectiveTooShort,
    UsersMissing,
    ContextMissing,
    SuccessMetricsMissing,
    ConstraintsMissing,
    ToolsWithoutDataSources,
    DataSourcesWithoutTools,
    NonGoalsMissing,
    RisksMissing,
    WriteToolsWithoutApproval,
    BudgetMissing,
    MaxRetriesNotNumeric,
    RetriesWithoutDegradation,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::ObjectiveMissing => "objective-missing",
            RuleId::ObjectiveTooShort => "objective-too-short",
            RuleId::UsersMissing => "users-missing",
            RuleId::ContextMissing => "context-missing",
            RuleId::SuccessMetricsMissing => "success-metrics-missing",
            RuleId::ConstraintsMissing => "constraints-missing",
            RuleId::ToolsWithoutDataSources => "tools-without-data-sources",
            RuleId::DataSourcesWithoutTools => "data-sources-without-tools",
            RuleId::NonGoalsMissing => "non-goals-missing",
            RuleId::RisksMissing => "risks-missing",
            RuleId::WriteToolsWithoutApproval => "write-tools-without-approval",
            RuleId::BudgetMissing => "budget-missing",
            RuleId::MaxRetriesNotNumeric => "max-retries-not-numeric",
            RuleId::RetriesWithoutDegradation => "retries-without-degradation",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: RuleId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Finding {
    pub fn new(id: RuleId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

type Rule = fn(&SpecInput) -> Option<Finding>;

const RULES: [Rule; 14] = [
    objective_missing,
    objective_too_short,
    users_missing,
    context_missing,
    success_metrics_missing,
    constraints_missing,
    tools_without_data_sources,
    data_sources_without_tools,
    non_goals_missing,
    risks_missing,
    write_tools_without_approval,
    budget_missing,
    max_retries_not_numeric,
    retries_without_degradation,
];

/// Runs every rule in order and collects the findings.
pub fn lint(input: &SpecInput) -> Vec<Finding> {
    RULES.iter().filter_map(|rule| rule(input)).collect()
}

fn has_items(mut items: ListItems<'_>) -> bool {
    items.next().is_some()
}

fn objective_missing(input: &SpecInput) -> Option<Finding> {
    is_blank(&input.objective).then(|| {
        Finding::new(RuleId::ObjectiveMissing, "Objective is missing")
            .with_detail("State the outcome this agent delivers in one sentence.")
    })
}

fn objective_too_short(input: &SpecInput) -> Option<Finding> {
    let len = input.objective.trim().chars().count();
    (len > 0 && len < MIN_OBJECTIVE_CHARS).then(|| {
        Finding::new(RuleId::ObjectiveTooShort, "Objective is very short").with_detail(format!(
            "{} characters; aim for at least {} so the outcome is unambiguous.",
            len, MIN_OBJECTIVE_CHARS
        ))
    })
}

fn users_missing(input: &SpecInput) -> Option<Finding> {
    is_blank(&input.primary_users)
        .then(|| Finding::new(RuleId::UsersMissing, "No primary users named"))
}

fn context_missing(input: &SpecInput) -> Option<Finding> {
    is_blank(&input.context).then(|| {
        Finding::new(RuleId::ContextMissing, "Problem / context is missing")
            .with_detail("Describe what triggers the agent and where it runs.")
    })
}

fn success_metrics_missing(input: &SpecInput) -> Option<Finding> {
    (!has_items(input.success_metrics())).then(|| {
        Finding::new(RuleId::SuccessMetricsMissing, "No success metrics")
            .with_detail("Add at least one measurable metric (time saved, accuracy, CSAT).")
    })
}

fn constraints_missing(input: &SpecInput) -> Option<Finding> {
    (!has_items(input.constraints())).then(|| {
        Finding::new(RuleId::ConstraintsMissing, "No constraints listed")
            .with_detail("List guardrails such as approvals, PII handling or latency limits.")
    })
}

fn tools_without_data_sources(input: &SpecInput) -> Option<Finding> {
    (has_items(input.tools()) && !has_items(input.data_sources())).then(|| {
        Finding::new(
            RuleId::ToolsWithoutDataSources,
            "Tools listed but no data sources",
        )
        .with_detail("Which systems do the tools read from?")
    })
}

fn data_sources_without_tools(input: &SpecInput) -> Option<Finding> {
    (has_items(input.data_sources()) && !has_items(input.tools())).then(|| {
        Finding::new(
            RuleId::DataSourcesWithoutTools,
            "Data sources listed but no tools",
        )
        .with_detail("How does the agent access these sources?")
    })
}

fn non_goals_missing(input: &SpecInput) -> Option<Finding> {
    (has_items(input.tools()) && !has_items(input.non_goals())).then(|| {
        Finding::new(RuleId::NonGoalsMissing, "No non-goals")
            .with_detail("With tools in play, say what the agent must not do to keep scope clear.")
    })
}

fn risks_missing(input: &SpecInput) -> Option<Finding> {
    (!has_items(input.risks())).then(|| {
        Finding::new(RuleId::RisksMissing, "No risks or open questions")
            .with_detail("Note failure modes such as hallucinations or over-escalation.")
    })
}

fn write_tools_without_approval(input: &SpecInput) -> Option<Finding> {
    let mentions_approval = |item: &str| item.to_lowercase().contains(APPROVAL_KEYWORD);
    let gated = input.tools().any(mentions_approval) || input.constraints().any(mentions_approval);
    if gated {
        return None;
    }

    let write_tools: Vec<&str> = input
        .tools()
        .filter(|tool| {
            let lower = tool.to_lowercase();
            WRITE_ACTION_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .collect();
    if write_tools.is_empty() {
        return None;
    }

    Some(
        Finding::new(
            RuleId::WriteToolsWithoutApproval,
            "Write actions without an approval step",
        )
        .with_detail(format!(
            "Consider requiring human approval for: {}",
            write_tools.join(", ")
        )),
    )
}

fn budget_missing(input: &SpecInput) -> Option<Finding> {
    (has_items(input.tools()) && input.has_no_budget()).then(|| {
        Finding::new(RuleId::BudgetMissing, "No cost / latency budget")
            .with_detail("Set a p95 latency, a daily cost ceiling, retries and a degradation path.")
    })
}

fn max_retries_not_numeric(input: &SpecInput) -> Option<Finding> {
    let raw = input.max_retries.trim();
    (!raw.is_empty() && !raw.bytes().all(|b| b.is_ascii_digit())).then(|| {
        Finding::new(RuleId::MaxRetriesNotNumeric, "Max retries is not a number")
            .with_detail(format!("Got {:?}; use a whole number such as 2.", raw))
    })
}

fn retries_without_degradation(input: &SpecInput) -> Option<Finding> {
    (!is_blank(&input.max_retries) && is_blank(&input.degrade_to)).then(|| {
        Finding::new(
            RuleId::RetriesWithoutDegradation,
            "Retries set but no degradation path",
        )
        .with_detail("What happens after the last retry fails?")
    })
}
