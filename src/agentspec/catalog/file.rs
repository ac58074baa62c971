use super::PresetCatalog;
use crate::error::{AgentSpecError, Result};
use crate::model::Preset;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Presets read from a JSON file.
///
/// The file holds an array of presets. Each preset's `data` is a partial
/// input; missing fields take their defaults.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
    presets: Vec<Preset>,
}

impl FileCatalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|e| {
            AgentSpecError::Config(format!(
                "Could not read preset catalog {}: {}",
                path.display(),
                e
            ))
        })?;
        let presets = Self::parse(&content).map_err(|e| {
            AgentSpecError::Config(format!("Invalid preset catalog {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), count = presets.len(), "loaded preset catalog");
        Ok(Self { path, presets })
    }

    pub fn parse(content: &str) -> Result<Vec<Preset>> {
        let presets: Vec<Preset> =
            serde_json::from_str(content).map_err(AgentSpecError::Serialization)?;

        let mut seen = HashSet::new();
        for preset in &presets {
            if preset.id.trim().is_empty() {
                return Err(AgentSpecError::Config(
                    "Preset catalog contains a preset without an id".to_string(),
                ));
            }
            if !seen.insert(preset.id.as_str()) {
                return Err(AgentSpecError::Config(format!(
                    "Preset catalog contains duplicate id: {}",
                    preset.id
                )));
            }
        }
        Ok(presets)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PresetCatalog for FileCatalog {
    fn presets(&self) -> &[Preset] {
        &self.presets
    }
}
