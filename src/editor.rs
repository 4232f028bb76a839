//! Editor launching
//!
//! The editor runs as a blocking child process that shares the terminal
//! with us. Which editor and which arguments is plain configuration, built
//! once at the entry point and passed down.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::constants as C;
use crate::error::{CardError, Result};

/// Environment variable naming the preferred editor
pub const ENV_EDITOR: &str = "EDITOR";

/// Editor program and the arguments placed before the file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorConfig {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `$EDITOR` (fallback `vim`) with the vim arguments for card editing
    pub fn from_env(snippet_dir: &Path) -> Self {
        let program = std::env::var(ENV_EDITOR)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| C::FALLBACK_EDITOR.to_string());
        Self::new(program, vim_args(snippet_dir))
    }

    /// Full argument vector: program, arguments, then the file
    pub fn command_line(&self, path: &Path) -> Vec<String> {
        let mut line = Vec::with_capacity(self.args.len() + 2);
        line.push(self.program.clone());
        line.extend(self.args.iter().cloned());
        line.push(path.to_string_lossy().into_owned());
        line
    }
}

/// Default vim arguments:
/// cursor just below the question frame, anki_vim snippets, LaTeX highlighting.
/// Targets vim 7.4 and later; other editors need their own arguments.
pub fn vim_args(snippet_dir: &Path) -> Vec<String> {
    vec![
        format!("-c {}", C::VIM_CURSOR_SEARCH),
        "-c set filetype=anki_vim".to_string(),
        "-c set syntax=tex".to_string(),
        format!(
            "-c let b:UltiSnipsSnippetDirectories=[\"UltiSnips\", \"{}\"]",
            snippet_dir.display()
        ),
    ]
}

/// Open `path` in the configured editor and wait for it to exit.
///
/// A non-zero exit from normal editor use is not an error. Failing to
/// start the program, or a shell reporting it as missing or not executable,
/// is [`CardError::EditorLaunch`].
pub fn open_in_editor(path: &Path, config: &EditorConfig) -> Result<()> {
    let command = config.command_line(path).join(" ");
    debug!(%command, "launching editor");

    let status = Command::new(&config.program)
        .args(&config.args)
        .arg(path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| CardError::EditorLaunch {
            command: command.clone(),
            source,
        })?;

    match status.code() {
        Some(code @ (C::EXIT_NOT_EXECUTABLE | C::EXIT_NOT_FOUND)) => Err(CardError::EditorLaunch {
            command,
            source: launch_failure(code),
        }),
        _ if !status.success() => {
            warn!(%status, "editor exited unsuccessfully");
            Ok(())
        }
        _ => Ok(()),
    }
}

// Shell exit status for a program it could not run
fn launch_failure(code: i32) -> io::Error {
    let kind = if code == C::EXIT_NOT_EXECUTABLE {
        io::ErrorKind::PermissionDenied
    } else {
        io::ErrorKind::NotFound
    };
    io::Error::new(kind, format!("editor exited with status {}", code))
}
