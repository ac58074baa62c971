use crate::error::{AgentSpecError, Result};
#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
use std::io::Write;
#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
use std::process::{Child, Command, Stdio};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_into(spawn("pbcopy", &[])?, "pbcopy", text)
    }

    #[cfg(target_os = "linux")]
    {
        // xclip first, xsel as fallback
        let child = match spawn("xclip", &["-selection", "clipboard"]) {
            Ok(child) => child,
            Err(_) => spawn("xsel", &["--clipboard", "--input"]).map_err(|e| {
                AgentSpecError::Clipboard(format!("{}. Install xclip or xsel.", e))
            })?,
        };
        pipe_into(child, "clipboard command", text)
    }

    #[cfg(target_os = "windows")]
    {
        pipe_into(spawn("clip", &[])?, "clip", text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(AgentSpecError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn spawn(program: &str, args: &[&str]) -> Result<Child> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| AgentSpecError::Clipboard(format!("Failed to spawn {}: {}", program, e)))
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_into(mut child: Child, name: &str, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| AgentSpecError::Clipboard(format!("Failed to write to {}: {}", name, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| AgentSpecError::Clipboard(format!("Failed to wait for {}: {}", name, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(AgentSpecError::Clipboard(format!("{} exited with error", name)))
    }
}
