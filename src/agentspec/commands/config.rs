use crate::commands::{CmdMessage, CmdResult, Scope, SpecPaths};
use crate::config::AgentSpecConfig;
use crate::error::Result;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &SpecPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = AgentSpecConfig::load(&dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(&dir)?;
            info!(key = %key, dir = %dir.display(), "config updated");
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            Ok(result.with_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn paths(root: &std::path::Path) -> SpecPaths {
        SpecPaths {
            project: Some(root.join(".agentspec")),
            global: Some(root.join("global")),
        }
    }

    #[test]
    fn test_show_all_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&paths(dir.path()), Scope::Project, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(AgentSpecConfig::default()));
    }

    #[test]
    fn test_set_then_show_key() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        let result = run(
            &paths,
            Scope::Project,
            ConfigAction::Set("max-url-length".into(), "1500".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(dir.path().join(".agentspec/config.json").exists());

        let result = run(
            &paths,
            Scope::Project,
            ConfigAction::ShowKey("max-url-length".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "1500");
    }

    #[test]
    fn test_scopes_are_separate() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths(dir.path());
        run(
            &paths,
            Scope::Global,
            ConfigAction::Set("share-base-url".into(), "https://g.example/".into()),
        )
        .unwrap();

        let project = run(&paths, Scope::Project, ConfigAction::ShowAll).unwrap();
        assert_eq!(
            project.config.unwrap().share_base_url,
            "http://localhost:3000/"
        );
        let global = run(&paths, Scope::Global, ConfigAction::ShowAll).unwrap();
        assert_eq!(global.config.unwrap().share_base_url, "https://g.example/");
    }

    #[test]
    fn test_invalid_set_reports_error_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            &paths(dir.path()),
            Scope::Project,
            ConfigAction::Set("max-url-length".into(), "-4".into()),
        )
        .unwrap();
        assert!(result.has_errors());
        assert!(!dir.path().join(".agentspec/config.json").exists());
    }

    #[test]
    fn test_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            &paths(dir.path()),
            Scope::Project,
            ConfigAction::ShowKey("colour".into()),
        )
        .unwrap();
        assert!(result.has_errors());
    }

    #[test]
    fn test_missing_project_scope() {
        let paths = SpecPaths {
            project: None,
            global: Some(std::env::temp_dir()),
        };
        assert!(run(&paths, Scope::Project, ConfigAction::ShowAll).is_err());
    }

    #[test]
    fn test_missing_global_scope() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SpecPaths {
            project: Some(dir.path().join(".agentspec")),
            global: None,
        };
        assert!(run(&paths, Scope::Global, ConfigAction::ShowAll).is_err());
        assert!(run(&paths, Scope::Project, ConfigAction::ShowAll).is_ok());
    }
}
