use crate::clipboard::{ClipboardError, ClipboardResult, ClipboardWriter};

use std::io::Write;
use std::process::{Command, Stdio};

use log::warn;

/// Pipes text into the platform clipboard tool.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    command: Option<(String, Vec<String>)>,
}

impl SystemClipboard {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            command: Some((
                program.into(),
                args.iter().map(|a| a.to_string()).collect(),
            )),
        }
    }

    /// A clipboard with no backing tool; every write reports `Unavailable`.
    pub fn unavailable() -> Self {
        Self { command: None }
    }

    /// Pick the clipboard tool for the current platform.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", &[])
        } else if cfg!(windows) {
            Self::new("clip", &[])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", &[])
        } else if std::env::var_os("DISPLAY").is_some() {
            Self::new("xclip", &["-selection", "clipboard"])
        } else {
            Self::unavailable()
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> ClipboardResult<()> {
        let Some((program, args)) = &self.command else {
            return Err(ClipboardError::unavailable("no display or clipboard tool"));
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::spawn(program.as_str(), e))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                // The tool quit early; reap it before reporting.
                drop(stdin);
                if let Err(kill_err) = child.kill() {
                    warn!("Failed to kill {program}: {kill_err}");
                }
                if let Err(wait_err) = child.wait() {
                    warn!("Failed to reap {program}: {wait_err}");
                }
                return Err(ClipboardError::spawn(program.as_str(), e));
            }
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::spawn(program.as_str(), e))?;
        if !status.success() {
            return Err(ClipboardError::exit_status(program.as_str(), status));
        }

        Ok(())
    }
}
