//! Constants for anki-vim
//!
//! File names, template pieces and default editor settings shared across
//! the crate.

// === File and Directory Names ===

/// Record file inside every deck directory
pub const RECORDS_FILENAME: &str = "raw_cards.txt";

/// Default decks root, relative to the working directory
pub const DEFAULT_DECKS_DIR: &str = "decks";

/// Suffix of the scratch file handed to the editor (vim picks the filetype up from it)
pub const SCRATCH_SUFFIX: &str = ".anki_vim";

/// Application directory below the platform data dir
pub const APP_DATA_DIR: &str = "anki-vim";

/// Snippet directory name below the application data dir
pub const SNIPPETS_SUBDIR: &str = "UltiSnips";

// === Template ===

/// First character of every marker line
pub const MARKER_CHAR: char = '%';

/// Number of marker characters in a delimiter line
pub const DELIMITER_WIDTH: usize = 49;

/// Padding line inside a frame
pub const PADDING_LINE: &str = "%\t\t\t\t\t\t%";

/// Blank padding lines above the header text
pub const PADDING_ABOVE: usize = 2;

/// Blank padding lines below the header text
pub const PADDING_BELOW: usize = 3;

/// Blank lines reserved for user content after each frame
pub const CONTENT_GAP: &str = "\n\n\n";

/// Default question header
pub const QUESTION_HEADER: &str = "QUESTION";

/// Default answer header (trailing tab keeps the right border aligned)
pub const ANSWER_HEADER: &str = "ANSWER\t";

// === Record Format ===

/// Replacement for newlines inside a stored field
pub const LINEBREAK_MARKER: &str = "<br />";

/// Separator between question and answer in a record
pub const FIELD_SEPARATOR: &str = "\t";

// === Editor ===

/// Editor used when $EDITOR is unset
pub const FALLBACK_EDITOR: &str = "vim";

/// Vim search that puts the cursor on the first line after the question frame
pub const VIM_CURSOR_SEARCH: &str = r"/\v\%\n\zs(^$|^[^\%]{1}.*$)";

/// Exit status a shell reports for a command that is not executable
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Exit status a shell reports for a command that was not found
pub const EXIT_NOT_FOUND: i32 = 127;
