//! Add cards command module

use anki_vim::util;
use anki_vim::{create_card, Result, Settings};
use tracing::info;

/// Open the editor for new cards until one comes back unchanged (or once with `once`)
pub fn run(settings: &Settings, deck_name: &str, once: bool) -> Result<()> {
    let deck = settings.deck(deck_name)?;
    info!(deck = %deck.name, path = %util::display_path(deck.path()), "writing cards");

    let mut added = 0usize;
    while create_card(&deck, &settings.session)? {
        added += 1;
        if once {
            break;
        }
    }

    println!(
        "{} card(s) added to {}",
        added,
        util::display_path(&deck.records_path())
    );
    Ok(())
}
