use crate::config::AgentSpecConfig;
use crate::error::{AgentSpecError, Result};
use crate::lint::Finding;
use crate::model::{Preset, SpecInput};
use serde::Serialize;
use std::path::PathBuf;

pub mod check;
pub mod config;
pub mod generate;
pub mod link;
pub mod load;
pub mod presets;

/// Where configuration lives: the project directory or the user's data dir.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Project,
    Global,
}

#[derive(Debug, Clone)]
pub struct SpecPaths {
    pub project: Option<PathBuf>,
    /// `None` when the platform has no user data directory.
    pub global: Option<PathBuf>,
}

impl SpecPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| AgentSpecError::Config("Project scope is not available".to_string())),
            Scope::Global => self.global.clone().ok_or_else(|| {
                AgentSpecError::Config("Could not determine the global data directory".to_string())
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub input: Option<SpecInput>,
    pub markdown: Option<String>,
    pub findings: Vec<Finding>,
    pub token: Option<String>,
    pub share_url: Option<String>,
    pub written_paths: Vec<PathBuf>,
    pub presets: Vec<Preset>,
    pub config: Option<AgentSpecConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_messages(mut self, messages: Vec<CmdMessage>) -> Self {
        self.messages.extend(messages);
        self
    }

    pub fn with_input(mut self, input: SpecInput) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_markdown(mut self, markdown: String) -> Self {
        self.markdown = Some(markdown);
        self
    }

    pub fn with_findings(mut self, findings: Vec<Finding>) -> Self {
        self.findings = findings;
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    pub fn with_config(mut self, config: AgentSpecConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
