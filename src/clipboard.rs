use std::{
    io::Write,
    process::{Command, Stdio},
};

use crate::error::ClipboardError;

/// Destination for extracted text. Failures never affect the extraction itself.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Pipes text into the first external tool that accepts it.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    commands: Vec<Vec<String>>,
}

impl CommandClipboard {
    pub fn new(commands: Vec<Vec<String>>) -> Self {
        let commands = commands.into_iter().filter(|c| !c.is_empty()).collect();
        Self { commands }
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.commands.is_empty() {
            return Err(ClipboardError::NoCommands);
        }

        let mut last = None;
        for cmd in &self.commands {
            match run_one(cmd, text) {
                Ok(()) => {
                    tracing::debug!(program = cmd[0].as_str(), "copied to clipboard");
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard command failed; trying next");
                    last = Some(e);
                }
            }
        }

        Err(ClipboardError::AllFailed {
            last: last.map(|e| e.to_string()).unwrap_or_default(),
        })
    }
}

fn run_one(cmd: &[String], text: &str) -> Result<(), ClipboardError> {
    let program = cmd[0].clone();
    let spawn_err = |source| ClipboardError::Spawn {
        program: program.clone(),
        source,
    };

    let mut child = Command::new(&cmd[0])
        .args(&cmd[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(spawn_err)?;

    // Dropping stdin closes the pipe; the child is always reaped before reporting.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait().map_err(spawn_err)?;
    if let Err(source) = written {
        return Err(ClipboardError::Write { program, source });
    }
    if !status.success() {
        return Err(ClipboardError::Exit {
            program,
            status: status.to_string(),
        });
    }
    Ok(())
}
