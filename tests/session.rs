//! End-to-end card sessions with `sh` standing in for the editor.
#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

use anki_vim::{create_card, render_frame, CardError, Deck, EditorConfig, Headers, SessionSettings};
use tempfile::TempDir;

/// An "editor" that overwrites the file it is given with `edited`
/// and leaves the path it was called with in `seen`
fn scripted_editor(dir: &Path, edited: &str, exit_code: i32) -> (EditorConfig, PathBuf) {
    let source = dir.join("edited.txt");
    let seen = dir.join("seen.txt");
    fs::write(&source, edited).unwrap();
    let script = format!(
        "printf '%s' \"$0\" > '{}'; cp '{}' \"$0\"; exit {}",
        seen.display(),
        source.display(),
        exit_code
    );
    (EditorConfig::new("sh", vec!["-c".to_string(), script]), seen)
}

fn settings(editor: EditorConfig) -> SessionSettings {
    SessionSettings::new(editor, Headers::default())
}

fn filled_scaffold() -> String {
    format!(
        "{}first line\nsecond line\n\n\n\n{}the answer\n\n\n\n",
        render_frame("QUESTION"),
        render_frame("ANSWER\t")
    )
}

#[test]
fn test_edit_appends_one_record() {
    let work = TempDir::new().unwrap();
    let deck = Deck::new("spanish", work.path().join("decks"));
    let (editor, _) = scripted_editor(work.path(), &filled_scaffold(), 0);

    assert!(create_card(&deck, &settings(editor)).unwrap());

    let records = fs::read_to_string(deck.records_path()).unwrap();
    assert_eq!(
        records,
        "first line<br />second line<br /><br /><br /><br />\tthe answer<br /><br /><br /><br />\n"
    );
    assert_eq!(records.lines().count(), 1);
}

#[test]
fn test_second_card_is_appended() {
    let work = TempDir::new().unwrap();
    let deck = Deck::new("spanish", work.path().join("decks"));
    let (editor, _) = scripted_editor(work.path(), &filled_scaffold(), 0);
    let settings = settings(editor);

    assert!(create_card(&deck, &settings).unwrap());
    assert!(create_card(&deck, &settings).unwrap());

    let records = fs::read_to_string(deck.records_path()).unwrap();
    assert_eq!(records.lines().count(), 2);
}

#[test]
fn test_untouched_scaffold_adds_nothing() {
    let work = TempDir::new().unwrap();
    let deck = Deck::new("math", work.path().join("decks"));
    let editor = EditorConfig::new("true", Vec::new());

    assert!(!create_card(&deck, &settings(editor)).unwrap());
    assert!(deck.exists());
    assert!(!deck.records_path().exists());
}

#[test]
fn test_damaged_header_writes_nothing() {
    let work = TempDir::new().unwrap();
    let deck = Deck::new("math", work.path().join("decks"));
    let (editor, seen) = scripted_editor(work.path(), "%%%%\nwhat is 1+1?\n", 0);

    let err = create_card(&deck, &settings(editor)).unwrap_err();
    assert!(matches!(err, CardError::HeaderNotIntact { marker_lines: 1 }));
    assert!(!deck.records_path().exists());

    // Scratch file is gone even though parsing failed
    let scratch = fs::read_to_string(seen).unwrap();
    assert!(scratch.ends_with(".anki_vim"));
    assert!(!Path::new(&scratch).exists());
}

#[test]
fn test_scratch_file_removed_after_success() {
    let work = TempDir::new().unwrap();
    let deck = Deck::new("bio", work.path().join("decks"));
    let (editor, seen) = scripted_editor(work.path(), &filled_scaffold(), 0);

    assert!(create_card(&deck, &settings(editor)).unwrap());

    let scratch = fs::read_to_string(seen).unwrap();
    assert!(!Path::new(&scratch).exists());
}

#[test]
fn test_missing_editor_writes_nothing() {
    let work = TempDir::new().unwrap();
    let deck = Deck::new("bio", work.path().join("decks"));
    let editor = EditorConfig::new(work.path().join("no-such-editor").display().to_string(), Vec::new());

    let err = create_card(&deck, &settings(editor)).unwrap_err();
    assert!(matches!(err, CardError::EditorLaunch { .. }));
    assert!(!deck.records_path().exists());
}

#[test]
fn test_nonzero_exit_still_reads_edit() {
    let work = TempDir::new().unwrap();
    let deck = Deck::new("bio", work.path().join("decks"));
    let (editor, _) = scripted_editor(work.path(), &filled_scaffold(), 1);

    assert!(create_card(&deck, &settings(editor)).unwrap());
    assert!(deck.records_path().exists());
}
