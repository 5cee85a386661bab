use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Opens a file in the user's editor and reports its exit status. The one
/// subprocess this tool ever runs, kept behind a trait so the interactive
/// flow can be exercised with a recorder in tests.
pub trait EditorLauncher {
    fn open(&self, path: &Path) -> io::Result<i32>;
}

/// Runs the configured editor command directly, argument-vector style. The
/// command string is split on whitespace so `code -w` works; the note path
/// is appended as the final argument and never passes through a shell.
pub struct CommandLauncher {
    editor: String,
}

impl CommandLauncher {
    pub fn new(editor: &str) -> Self {
        Self {
            editor: editor.to_string(),
        }
    }
}

impl EditorLauncher for CommandLauncher {
    fn open(&self, path: &Path) -> io::Result<i32> {
        let mut parts = self.editor.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| io::Error::other("editor command is empty"))?;
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        // Killed by a signal on unix; treat like a failed edit.
        Ok(status.code().unwrap_or(1))
    }
}
