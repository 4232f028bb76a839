use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants as C;
use crate::parse::Card;

/// A Deck is a directory holding one append-only file of tab-separated
/// records, directly importable by Anki as plaintext
#[derive(Debug, Clone)]
pub struct Deck {
    /// Name of the deck
    pub name: String,
    /// Path to the deck directory
    pub path: PathBuf,
}

impl Deck {
    /// Create a new Deck with the given name below the decks root
    pub fn new(name: impl Into<String>, decks_root: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let path = decks_root.into().join(&name);
        Self { name, path }
    }

    /// Resolve a deck name under the decks root, refusing names that escape it
    pub fn resolve(name: &str, decks_root: &Path) -> io::Result<Self> {
        let path = crate::util::secure_path(decks_root, name)?;
        Ok(Self {
            name: name.to_string(),
            path,
        })
    }

    /// Get the path to this deck
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the record file
    pub fn records_path(&self) -> PathBuf {
        self.path.join(C::RECORDS_FILENAME)
    }

    /// Check if this deck exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create this deck directory (no-op if it exists)
    pub fn create(&self) -> io::Result<()> {
        if !self.exists() {
            debug!(path = %self.path.display(), "creating deck directory");
        }
        fs::create_dir_all(&self.path)
    }

    /// Append one card as a single record line
    pub fn append_card(&self, card: &Card) -> io::Result<()> {
        append_record(&self.path, &card.question, &card.answer)?;
        info!(deck = %self.name, "card added");
        Ok(())
    }

    /// List all decks in the given root directory.
    ///
    /// A top-level directory is a deck if it holds a record file or nothing
    /// deck-like below it; otherwise its subdirectories with a record file
    /// are listed as `group/name`. Deeper nesting is not searched.
    pub fn list_all(decks_root: impl AsRef<Path>) -> io::Result<Vec<String>> {
        let mut decks = Vec::new();
        if decks_root.as_ref().exists() {
            for (name, path) in subdirectories(decks_root.as_ref())? {
                let nested: Vec<String> = subdirectories(&path)?
                    .into_iter()
                    .filter(|(_, p)| p.join(C::RECORDS_FILENAME).is_file())
                    .map(|(sub, _)| format!("{}/{}", name, sub))
                    .collect();

                if path.join(C::RECORDS_FILENAME).is_file() || nested.is_empty() {
                    decks.push(name);
                }
                decks.extend(nested);
            }
        }
        decks.sort();
        Ok(decks)
    }
}

// Named subdirectories of `dir`, skipping names that are not UTF-8
fn subdirectories(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                dirs.push((name.to_string(), path));
            }
        }
    }
    Ok(dirs)
}

/// Append `question\tanswer\n` to `deck_path/raw_cards.txt`, creating the
/// deck directory first if needed. Fields are written verbatim.
pub fn append_record(deck_path: &Path, question: &str, answer: &str) -> io::Result<()> {
    fs::create_dir_all(deck_path)?;

    let record = Card::new(question, answer).to_record();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(deck_path.join(C::RECORDS_FILENAME))?;

    // One write per record, no partial lines from this process
    file.write_all(record.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_directory() {
        let root = TempDir::new().unwrap();
        let deck_path = root.path().join("nested").join("spanish");

        append_record(&deck_path, "hola", "hello").unwrap();

        assert!(deck_path.is_dir());
        let content = fs::read_to_string(deck_path.join("raw_cards.txt")).unwrap();
        assert_eq!(content, "hola\thello\n");
    }

    #[test]
    fn test_append_keeps_existing_records() {
        let root = TempDir::new().unwrap();
        let deck = Deck::new("math", root.path());

        deck.append_card(&Card::new("1+1", "2")).unwrap();
        deck.append_card(&Card::new("2+2<br />", "<br />4")).unwrap();

        let content = fs::read_to_string(deck.records_path()).unwrap();
        assert_eq!(content, "1+1\t2\n2+2<br />\t<br />4\n");
    }

    #[test]
    fn test_fields_written_verbatim() {
        let root = TempDir::new().unwrap();
        append_record(root.path(), "a\tb", "c").unwrap();
        let content = fs::read_to_string(root.path().join("raw_cards.txt")).unwrap();
        assert_eq!(content, "a\tb\tc\n");
    }

    #[test]
    fn test_create_is_idempotent() {
        let root = TempDir::new().unwrap();
        let deck = Deck::new("bio", root.path());
        assert!(!deck.exists());
        deck.create().unwrap();
        deck.create().unwrap();
        assert!(deck.exists());
    }

    #[test]
    fn test_list_all_sorted_dirs_only() {
        let root = TempDir::new().unwrap();
        Deck::new("zoology", root.path()).create().unwrap();
        Deck::new("art", root.path()).create().unwrap();
        fs::write(root.path().join("notes.txt"), "x").unwrap();

        let decks = Deck::list_all(root.path()).unwrap();
        assert_eq!(decks, vec!["art".to_string(), "zoology".to_string()]);
    }

    #[test]
    fn test_list_all_nested_decks() {
        let root = TempDir::new().unwrap();
        Deck::new("lang/spanish", root.path()).append_card(&Card::new("hola", "hello")).unwrap();
        Deck::new("lang/french", root.path()).append_card(&Card::new("oui", "yes")).unwrap();
        Deck::new("math", root.path()).append_card(&Card::new("1+1", "2")).unwrap();
        Deck::new("math/extra", root.path()).create().unwrap();

        let decks = Deck::list_all(root.path()).unwrap();
        assert_eq!(decks, vec!["lang/french", "lang/spanish", "math"]);
    }

    #[test]
    fn test_list_all_missing_root() {
        let root = TempDir::new().unwrap();
        let decks = Deck::list_all(root.path().join("missing")).unwrap();
        assert!(decks.is_empty());
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let root = TempDir::new().unwrap();
        assert!(Deck::resolve("../outside", root.path()).is_err());
        let deck = Deck::resolve("french", root.path()).unwrap();
        assert_eq!(deck.path(), root.path().join("french"));
    }
}
