//! # Data Model
//!
//! [`SpecInput`] is the snapshot every core component works on: a fixed set of
//! text fields, every one of them defaulting to the empty string. There is no
//! identity beyond the field values; callers build a new snapshot whenever the
//! form changes.
//!
//! Fields come in two kinds:
//!
//! - **Scalar** fields hold a single value (name, objective, budget entries...).
//! - **List** fields hold newline-delimited items. Their logical value is the
//!   sequence of trimmed, non-blank lines, exposed lazily through [`ListItems`].
//!
//! The [`Field`] registry enumerates every field with its JSON key and label so
//! the codec, the CLI and the tests never hand-list fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The full structured snapshot of user-entered fields.
///
/// Deserialization is total: any missing key takes its default, so a partial
/// JSON document still produces a complete record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecInput {
    pub app_name: String,
    pub objective: String,
    pub primary_users: String,
    pub context: String,
    pub tools: String,
    pub data_sources: String,
    pub constraints: String,
    pub success_metrics: String,
    pub non_goals: String,
    pub risks: String,
    pub p95_latency: String,
    pub max_cost_per_day: String,
    pub max_retries: String,
    pub degrade_to: String,
}

impl SpecInput {
    pub fn tools(&self) -> ListItems<'_> {
        ListItems::new(&self.tools)
    }

    pub fn data_sources(&self) -> ListItems<'_> {
        ListItems::new(&self.data_sources)
    }

    pub fn constraints(&self) -> ListItems<'_> {
        ListItems::new(&self.constraints)
    }

    pub fn success_metrics(&self) -> ListItems<'_> {
        ListItems::new(&self.success_metrics)
    }

    pub fn non_goals(&self) -> ListItems<'_> {
        ListItems::new(&self.non_goals)
    }

    pub fn risks(&self) -> ListItems<'_> {
        ListItems::new(&self.risks)
    }

    /// True when the budget fields are all blank.
    pub fn has_no_budget(&self) -> bool {
        Field::BUDGET.iter().all(|f| is_blank(f.get(self)))
    }

    /// True when every field is blank.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| is_blank(f.get(self)))
    }
}

/// Returns true for empty or whitespace-only text.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Lazily yields the trimmed, non-blank lines of a list field.
#[derive(Debug, Clone)]
pub struct ListItems<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> ListItems<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { lines: raw.lines() }
    }
}

impl<'a> Iterator for ListItems<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.by_ref().map(str::trim).find(|line| !line.is_empty())
    }
}

/// Joins list items back into the raw newline-delimited form.
pub fn join_items<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    items.into_iter().collect::<Vec<_>>().join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    List,
}

/// Every field of [`SpecInput`], in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AppName,
    Objective,
    PrimaryUsers,
    Context,
    Tools,
    DataSources,
    Constraints,
    SuccessMetrics,
    NonGoals,
    Risks,
    P95Latency,
    MaxCostPerDay,
    MaxRetries,
    DegradeTo,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::AppName,
        Field::Objective,
        Field::PrimaryUsers,
        Field::Context,
        Field::Tools,
        Field::DataSources,
        Field::Constraints,
        Field::SuccessMetrics,
        Field::NonGoals,
        Field::Risks,
        Field::P95Latency,
        Field::MaxCostPerDay,
        Field::MaxRetries,
        Field::DegradeTo,
    ];

    pub const BUDGET: [Field; 4] = [
        Field::P95Latency,
        Field::MaxCostPerDay,
        Field::MaxRetries,
        Field::DegradeTo,
    ];

    /// The JSON key, shared with share tokens and input files.
    pub fn key(&self) -> &'static str {
        match self {
            Field::AppName => "appName",
            Field::Objective => "objective",
            Field::PrimaryUsers => "primaryUsers",
            Field::Context => "context",
            Field::Tools => "tools",
            Field::DataSources => "dataSources",
            Field::Constraints => "constraints",
            Field::SuccessMetrics => "successMetrics",
            Field::NonGoals => "nonGoals",
            Field::Risks => "risks",
            Field::P95Latency => "p95Latency",
            Field::MaxCostPerDay => "maxCostPerDay",
            Field::MaxRetries => "maxRetries",
            Field::DegradeTo => "degradeTo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::AppName => "App / Spec name",
            Field::Objective => "Objective",
            Field::PrimaryUsers => "Primary users",
            Field::Context => "Problem / Context",
            Field::Tools => "Tools",
            Field::DataSources => "Data sources",
            Field::Constraints => "Constraints",
            Field::SuccessMetrics => "Success metrics",
            Field::NonGoals => "Non-goals",
            Field::Risks => "Risks / Open questions",
            Field::P95Latency => "p95 latency",
            Field::MaxCostPerDay => "Max cost/day",
            Field::MaxRetries => "Max retries",
            Field::DegradeTo => "Degrade to",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Tools
            | Field::DataSources
            | Field::Constraints
            | Field::SuccessMetrics
            | Field::NonGoals
            | Field::Risks => FieldKind::List,
            _ => FieldKind::Scalar,
        }
    }

    pub fn get<'a>(&self, input: &'a SpecInput) -> &'a str {
        self.slot(input).as_str()
    }

    pub fn set(&self, input: &mut SpecInput, value: impl Into<String>) {
        *self.slot_mut(input) = value.into();
    }

    fn slot<'a>(&self, input: &'a SpecInput) -> &'a String {
        match self {
            Field::AppName => &input.app_name,
            Field::Objective => &input.objective,
            Field::PrimaryUsers => &input.primary_users,
            Field::Context => &input.context,
            Field::Tools => &input.tools,
            Field::DataSources => &input.data_sources,
            Field::Constraints => &input.constraints,
            Field::SuccessMetrics => &input.success_metrics,
            Field::NonGoals => &input.non_goals,
            Field::Risks => &input.risks,
            Field::P95Latency => &input.p95_latency,
            Field::MaxCostPerDay => &input.max_cost_per_day,
            Field::MaxRetries => &input.max_retries,
            Field::DegradeTo => &input.degrade_to,
        }
    }

    fn slot_mut<'a>(&self, input: &'a mut SpecInput) -> &'a mut String {
        match self {
            Field::AppName => &mut input.app_name,
            Field::Objective => &mut input.objective,
            Field::PrimaryUsers => &mut input.primary_users,
            Field::Context => &mut input.context,
            Field::Tools => &mut input.tools,
            Field::DataSources => &mut input.data_sources,
            Field::Constraints => &mut input.constraints,
            Field::SuccessMetrics => &mut input.success_metrics,
            Field::NonGoals => &mut input.non_goals,
            Field::Risks => &mut input.risks,
            Field::P95Latency => &mut input.p95_latency,
            Field::MaxCostPerDay => &mut input.max_cost_per_day,
            Field::MaxRetries => &mut input.max_retries,
            Field::DegradeTo => &mut input.degrade_to,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts the JSON key (`successMetrics`) as well as `success-metrics`
    /// and `success_metrics`. `name` is accepted for `appName`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        if wanted == "name" {
            return Ok(Field::AppName);
        }
        Field::ALL
            .iter()
            .find(|f| f.key().to_lowercase() == wanted)
            .copied()
            .ok_or_else(|| format!("Unknown field: {}", s))
    }
}

/// A named, pre-filled input used as a starting template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub data: SpecInput,
}
