use anki_vim::util;
use anki_vim::{Deck, Result, Settings};

pub fn run(settings: &Settings) -> Result<()> {
    let decks = Deck::list_all(&settings.decks_root)?;
    println!("Decks in {}:", util::display_path(&settings.decks_root));
    if decks.is_empty() {
        println!("  (none)");
    } else {
        for name in decks {
            println!("  - {}", name);
        }
    }
    Ok(())
}
