//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for agentspec operations, whatever the UI.
//!
//! It resolves the input snapshot for each call (through
//! [`commands::load`]), dispatches to the command, and returns a
//! [`CmdResult`]. It does no printing and holds no presentation logic.
//!
//! `AgentSpecApi<C: PresetCatalog>` is generic over the preset catalog:
//! the binary uses the built-in or a file catalog, tests can pass their own.

use crate::catalog::PresetCatalog;
use crate::commands;
use crate::config::AgentSpecConfig;
use crate::error::Result;
use std::path::Path;

pub struct AgentSpecApi<C: PresetCatalog> {
    catalog: C,
    paths: commands::SpecPaths,
    config: AgentSpecConfig,
}

impl<C: PresetCatalog> AgentSpecApi<C> {
    pub fn new(catalog: C, paths: commands::SpecPaths, config: AgentSpecConfig) -> Self {
        Self {
            catalog,
            paths,
            config,
        }
    }

    /// Resolves the request into a snapshot without doing anything else.
    pub fn load(&self, request: &InputRequest) -> Result<CmdResult> {
        let loaded = commands::load::run(&self.catalog, request)?;
        Ok(CmdResult::default()
            .with_input(loaded.input)
            .with_messages(loaded.messages))
    }

    pub fn render(&self, request: &InputRequest) -> Result<CmdResult> {
        let loaded = commands::load::run(&self.catalog, request)?;
        Ok(commands::generate::render(&loaded.input).with_messages(loaded.messages))
    }

    pub fn lint(&self, request: &InputRequest) -> Result<CmdResult> {
        let loaded = commands::load::run(&self.catalog, request)?;
        Ok(prepend(loaded.messages, commands::check::run(&loaded.input)))
    }

    pub fn export(&self, request: &InputRequest, dir: &Path, force: bool) -> Result<CmdResult> {
        let loaded = commands::load::run(&self.catalog, request)?;
        let result = commands::generate::export(&loaded.input, dir, force)?;
        Ok(prepend(loaded.messages, result))
    }

    pub fn share(&self, request: &InputRequest) -> Result<CmdResult> {
        let loaded = commands::load::run(&self.catalog, request)?;
        Ok(prepend(
            loaded.messages,
            commands::link::share(&loaded.input, &self.config),
        ))
    }

    pub fn decode(&self, token: &str) -> Result<CmdResult> {
        commands::link::decode(token)
    }

    pub fn presets(&self) -> CmdResult {
        commands::presets::run(&self.catalog)
    }

    pub fn template(&self) -> CmdResult {
        CmdResult::default().with_input(commands::load::skeleton())
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }
}

/// Puts load messages ahead of the command's own.
fn prepend(mut messages: Vec<commands::CmdMessage>, mut result: CmdResult) -> CmdResult {
    messages.append(&mut result.messages);
    result.messages = messages;
    result
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::load::{FieldOverride, InputRequest, InputSource};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, Scope, SpecPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleId;
    use crate::model::{Preset, SpecInput};

    struct OneCatalog(Vec<Preset>);

    impl PresetCatalog for OneCatalog {
        fn presets(&self) -> &[Preset] {
            &self.0
        }
    }

    fn api(root: &Path) -> AgentSpecApi<OneCatalog> {
        let preset = Preset {
            id: "mini".into(),
            label: "Mini".into(),
            data: SpecInput {
                app_name: "Mini Spec".into(),
                tools: "Lookup".into(),
                ..Default::default()
            },
        };
        AgentSpecApi::new(
            OneCatalog(vec![preset]),
            SpecPaths {
                project: Some(root.join(".agentspec")),
                global: Some(root.join("global")),
            },
            AgentSpecConfig::default(),
        )
    }

    fn example(id: &str) -> InputRequest {
        InputRequest::new(InputSource::Example(id.into()))
    }

    #[test]
    fn test_render_uses_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path()).render(&example("mini")).unwrap();
        assert!(result.markdown.unwrap().starts_with("# Mini Spec\n"));
    }

    #[test]
    fn test_unknown_example_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(api(dir.path()).lint(&example("support-triage")).is_err());
    }

    #[test]
    fn test_lint_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path()).lint(&example("mini")).unwrap();
        assert!(result
            .findings
            .iter()
            .any(|f| f.id == RuleId::ToolsWithoutDataSources));
    }

    #[test]
    fn test_load_messages_come_first() {
        let dir = tempfile::tempdir().unwrap();
        let config = AgentSpecConfig {
            max_url_length: 5,
            ..Default::default()
        };
        let api = AgentSpecApi::new(
            OneCatalog(Vec::new()),
            SpecPaths {
                project: None,
                global: Some(dir.path().to_path_buf()),
            },
            config,
        );
        let request = InputRequest::new(InputSource::Url("?s=broken".into()));
        let result = api.share(&request).unwrap();
        assert_eq!(result.messages.len(), 2);
        assert!(result.messages[0].content.contains("could not be decoded"));
        assert!(result.messages[1].content.contains("above the limit"));
    }

    #[test]
    fn test_share_then_decode() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(dir.path());
        let shared = api.share(&example("mini")).unwrap();
        let decoded = api.decode(&shared.share_url.unwrap()).unwrap();
        assert_eq!(decoded.input.unwrap().app_name, "Mini Spec");
    }

    #[test]
    fn test_export_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path())
            .export(&example("mini"), dir.path(), false)
            .unwrap();
        assert_eq!(result.written_paths, vec![dir.path().join("mini-spec.md")]);
    }

    #[test]
    fn test_presets_and_template() {
        let dir = tempfile::tempdir().unwrap();
        let api = api(dir.path());
        assert_eq!(api.presets().presets.len(), 1);
        assert_eq!(api.template().input, Some(SpecInput::default()));
    }

    #[test]
    fn test_config_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let result = api(dir.path())
            .config(Scope::Project, ConfigAction::ShowAll)
            .unwrap();
        assert!(result.config.is_some());
    }
}
