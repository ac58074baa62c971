use super::PresetCatalog;
use crate::model::{Preset, SpecInput};
use once_cell::sync::Lazy;

static BUILTIN_PRESETS: Lazy<Vec<Preset>> = Lazy::new(|| vec![support_triage(), sales_rfp()]);

/// The presets shipped with agentspec.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl PresetCatalog for BuiltinCatalog {
    fn presets(&self) -> &[Preset] {
        &BUILTIN_PRESETS
    }
}

fn lines(items: &[&str]) -> String {
    items.join("\n")
}

fn support_triage() -> Preset {
    Preset {
        id: "support-triage".into(),
        label: "Support Triage Agent".into(),
        data: SpecInput {
            app_name: "Support Triage Agent Spec".into(),
            objective: "Reduce time-to-first-response by auto-triaging inbound tickets, \
                        suggesting replies, and routing to the right queue with human approval."
                .into(),
            primary_users: "Support reps, support lead, on-call engineer".into(),
            context: "Inbound tickets arrive via Zendesk. The agent reads the ticket + customer \
                      history, classifies severity, suggests a draft response, and \
                      routes/escalates based on policy."
                .into(),
            tools: lines(&[
                "Zendesk: read ticket",
                "Zendesk: add internal note",
                "Zendesk: update ticket fields (requires approval)",
                "Knowledge base search",
                "PagerDuty: create incident (requires approval)",
            ]),
            data_sources: lines(&[
                "Zendesk tickets",
                "Customer CRM (read-only)",
                "Product/ops knowledge base",
                "Incident runbooks",
            ]),
            constraints: lines(&[
                "No automated external responses without explicit human approval",
                "Respect PII handling policies",
                "Latency: < 10s for suggested triage",
            ]),
            success_metrics: lines(&[
                "Time-to-first-response reduced by 30%",
                "Correct routing accuracy >= 90%",
                "Escalation precision (avoid false pages)",
            ]),
            non_goals: lines(&["Fully autonomous ticket closure", "Training custom models"]),
            risks: lines(&[
                "Misclassification causing missed SLAs",
                "Over-escalation to on-call",
                "PII leakage in logs",
            ]),
            ..Default::default()
        },
    }
}

fn sales_rfp() -> Preset {
    Preset {
        id: "sales-rfp".into(),
        label: "RFP / Security Questionnaire Agent".into(),
        data: SpecInput {
            app_name: "RFP Agent Spec".into(),
            objective: "Speed up completion of RFPs/security questionnaires by extracting \
                        relevant answers from approved sources and generating drafts for review."
                .into(),
            primary_users: "Sales engineer, security/compliance, legal".into(),
            context: "Prospects send documents with long lists of questions. The agent searches \
                      approved sources (SOC2, policies, product docs) and drafts answers with \
                      citations."
                .into(),
            tools: lines(&[
                "Document upload + text extraction",
                "Search in approved policy docs",
                "Citation formatter",
                "Export answers to CSV/Doc",
            ]),
            data_sources: lines(&[
                "Security policies",
                "SOC2 report (restricted)",
                "Product documentation",
                "Prior approved questionnaires",
            ]),
            constraints: lines(&[
                "Only use approved sources; no guessing",
                "Citations required for each answer",
                "Access control: SOC2 restricted",
            ]),
            success_metrics: lines(&[
                "Draft completion time reduced by 50%",
                "Fewer back-and-forth clarifications",
            ]),
            non_goals: lines(&[
                "Sending answers directly to customers",
                "Editing source-of-truth documents",
            ]),
            risks: lines(&[
                "Hallucinated claims without citations",
                "Accidental disclosure of restricted content",
            ]),
            ..Default::default()
        },
    }
}
