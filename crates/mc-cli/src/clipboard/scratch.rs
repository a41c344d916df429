use crate::clipboard::{ClipboardError, ClipboardResult, ClipboardWriter};

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const SCRATCH_PREFIX: &str = "mcdash-clip-";

/// Legacy copy path: stage the text in a scratch file and feed it to a copy command.
///
/// The scratch file is created and removed within a single `write_text` call.
#[derive(Debug, Clone)]
pub struct ScratchFileClipboard {
    scratch_dir: PathBuf,
    program: String,
    args: Vec<String>,
}

impl ScratchFileClipboard {
    pub fn new(scratch_dir: impl Into<PathBuf>, program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            scratch_dir: scratch_dir.into(),
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn platform_default() -> Self {
        let dir = std::env::temp_dir();
        if cfg!(windows) {
            Self::new(dir, "clip", &[])
        } else {
            Self::new(dir, "xsel", &["--clipboard", "--input"])
        }
    }
}

impl ClipboardWriter for ScratchFileClipboard {
    fn write_text(&self, text: &str) -> ClipboardResult<()> {
        // Dropping `scratch` deletes the file on every return path.
        let mut scratch = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempfile_in(&self.scratch_dir)
            .map_err(ClipboardError::scratch)?;

        scratch
            .write_all(text.as_bytes())
            .map_err(ClipboardError::scratch)?;
        scratch.flush().map_err(ClipboardError::scratch)?;

        let input = scratch.reopen().map_err(ClipboardError::scratch)?;

        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::from(input))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ClipboardError::spawn(self.program.as_str(), e))?;

        if !status.success() {
            return Err(ClipboardError::exit_status(self.program.as_str(), status));
        }

        Ok(())
    }
}
