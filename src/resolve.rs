//! Settings resolution
//!
//! Everything read from the environment is read here, once, and turned into
//! a [`Settings`] value the commands receive. Priority for each value:
//! command-line flag, then environment variable, then built-in default.
//!
//! - `ANKI_VIM_DECKS`: root directory of all decks (default: ./decks)
//! - `ANKI_VIM_SNIPPETS`: UltiSnips directory for vim (default: <data dir>/anki-vim/UltiSnips)
//! - `EDITOR`: editor program (default: vim)

use std::io;
use std::path::{Path, PathBuf};

use crate::constants as C;
use crate::deck::Deck;
use crate::editor::EditorConfig;
use crate::session::SessionSettings;
use crate::template::Headers;
use crate::util;

/// Environment variable names
pub const ENV_DECKS_ROOT: &str = "ANKI_VIM_DECKS";
pub const ENV_SNIPPETS: &str = "ANKI_VIM_SNIPPETS";

/// Explicit overrides, usually straight from the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub decks_root: Option<String>,
    pub editor: Option<String>,
    /// Replaces the default editor arguments when non-empty
    pub editor_args: Vec<String>,
    pub snippets: Option<String>,
    pub question_header: Option<String>,
    pub answer_header: Option<String>,
}

/// Resolved configuration for a run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Absolute root directory of all decks
    pub decks_root: PathBuf,
    pub session: SessionSettings,
}

impl Settings {
    /// Resolve settings from overrides and the process environment
    pub fn resolve(overrides: Overrides) -> io::Result<Self> {
        let decks_root = util::absolute_path(&decks_root(overrides.decks_root.as_deref()))?;
        let snippets = snippets_dir(overrides.snippets.as_deref());

        let mut editor = EditorConfig::from_env(&snippets);
        if let Some(program) = overrides.editor {
            editor.program = program;
        }
        if !overrides.editor_args.is_empty() {
            editor.args = overrides.editor_args;
        }

        let defaults = Headers::default();
        let headers = Headers::new(
            overrides.question_header.unwrap_or(defaults.question),
            overrides.answer_header.unwrap_or(defaults.answer),
        );

        Ok(Self {
            decks_root,
            session: SessionSettings::new(editor, headers),
        })
    }

    /// Resolve a deck by name below the decks root
    pub fn deck(&self, name: &str) -> io::Result<Deck> {
        Deck::resolve(name, &self.decks_root)
    }
}

/// Decks root: flag, then `$ANKI_VIM_DECKS`, then `./decks`
pub fn decks_root(flag: Option<&str>) -> PathBuf {
    if let Some(p) = flag {
        return PathBuf::from(p);
    }
    if let Some(p) = env_non_empty(ENV_DECKS_ROOT) {
        return PathBuf::from(p);
    }
    PathBuf::from(C::DEFAULT_DECKS_DIR)
}

/// Snippet directory: flag, then `$ANKI_VIM_SNIPPETS`, then the platform data dir
pub fn snippets_dir(flag: Option<&str>) -> PathBuf {
    if let Some(p) = flag {
        return PathBuf::from(p);
    }
    if let Some(p) = env_non_empty(ENV_SNIPPETS) {
        return PathBuf::from(p);
    }
    default_snippets_dir()
}

fn default_snippets_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(C::APP_DATA_DIR)
        .join(C::SNIPPETS_SUBDIR)
}

// Treat empty strings as unset
fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
