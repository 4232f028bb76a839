//! One card-creation attempt
//!
//! render scaffold -> scratch file -> editor -> change check -> parse -> append.
//! The scratch file is removed on every exit path; the deck is only written
//! after the edit parsed cleanly.

use std::fs;
use std::io::Write;

use tempfile::Builder;
use tracing::debug;

use crate::constants as C;
use crate::deck::Deck;
use crate::editor::{open_in_editor, EditorConfig};
use crate::error::Result;
use crate::parse::{parse_qa, was_modified};
use crate::template::{render_scaffold, Headers};

/// Everything a session needs besides the deck
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub editor: EditorConfig,
    pub headers: Headers,
}

impl SessionSettings {
    pub fn new(editor: EditorConfig, headers: Headers) -> Self {
        Self { editor, headers }
    }
}

/// Let the user write one card in the editor and append it to `deck`.
///
/// Returns `Ok(false)` when the editor was closed without changes, in which
/// case nothing is written.
pub fn create_card(deck: &Deck, settings: &SessionSettings) -> Result<bool> {
    deck.create()?;

    let scaffold = render_scaffold(&settings.headers);

    let mut scratch = Builder::new().suffix(C::SCRATCH_SUFFIX).tempfile()?;
    scratch.write_all(scaffold.as_bytes())?;
    scratch.flush()?;
    // Close our handle; the path is deleted when `scratch` drops
    let scratch = scratch.into_temp_path();
    debug!(path = %scratch.display(), "scaffold written");

    open_in_editor(&scratch, &settings.editor)?;

    // Editors may replace the file instead of rewriting it, so read by path
    let edited = fs::read_to_string(&scratch)?;
    if !was_modified(&scaffold, &edited) {
        debug!("scaffold left untouched");
        return Ok(false);
    }

    let card = parse_qa(&edited)?;
    deck.append_card(&card)?;
    Ok(true)
}
