use crate::artifact::Artifact;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AgentSpecError, Result};
use crate::markdown;
use crate::model::SpecInput;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub fn render(input: &SpecInput) -> CmdResult {
    CmdResult::default().with_markdown(markdown::render(input))
}

/// Writes the Markdown document into `dir` under its suggested filename.
///
/// An existing file is left alone unless `force` is set.
pub fn export(input: &SpecInput, dir: &Path, force: bool) -> Result<CmdResult> {
    let artifact = Artifact::from_input(input);
    let path = dir.join(&artifact.filename);
    let mut result = CmdResult::default().with_markdown(artifact.markdown.clone());

    if path.exists() && !force {
        debug!(path = %path.display(), "export target exists, not overwriting");
        result.add_message(CmdMessage::error(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
        return Ok(result);
    }

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(AgentSpecError::Io)?;
    }
    fs::write(&path, &artifact.markdown).map_err(AgentSpecError::Io)?;
    info!(path = %path.display(), bytes = artifact.markdown.len(), "exported spec");

    result.add_message(CmdMessage::success(format!("Exported to {}", path.display())));
    result.written_paths.push(path);
    Ok(result)
}
