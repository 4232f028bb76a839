use clap::Parser;

use crate::resolve::Overrides;

/// anki-vim - write Anki flashcards in your editor
///
/// Opens a template with a QUESTION and an ANSWER frame in your editor.
/// Write the question below the first frame and the answer below the second,
/// then save and quit. The card is appended to
/// `<decks-root>/<deck>/raw_cards.txt`, ready for Anki's plaintext import
/// (fields separated by tab). Another template opens right away; quit
/// without changes to stop.
///
/// ```bash
/// anki-vim --deck spanish                 # Write cards until you quit unchanged
/// anki-vim --deck spanish --once          # Write a single card
/// anki-vim -d math -e nano -a --restricted # Other editor, own arguments
/// anki-vim --list                         # List existing decks
/// ```
///
/// ## Environment Variables
///
/// - `EDITOR`: editor program (default: vim)
/// - `ANKI_VIM_DECKS`: root directory of all decks (default: ./decks)
/// - `ANKI_VIM_SNIPPETS`: UltiSnips directory passed to vim
/// - `RUST_LOG`: log filter, overrides --verbose
#[derive(Parser, Debug)]
#[command(name = "anki-vim")]
#[command(version)]
#[command(about = "Write Anki flashcards in your editor")]
pub struct Cli {
    /// Name of the deck we write these cards for
    #[arg(short, long, value_name = "DECK", required_unless_present = "list")]
    pub deck: Option<String>,

    /// Root directory of all decks (default: ./decks or $ANKI_VIM_DECKS)
    #[arg(long, value_name = "PATH")]
    pub decks_root: Option<String>,

    /// Editor program (default: $EDITOR or vim)
    #[arg(short, long, value_name = "PROGRAM")]
    pub editor: Option<String>,

    /// Editor argument placed before the file; repeat for several, replaces the vim defaults
    #[arg(short = 'a', long = "editor-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub editor_args: Vec<String>,

    /// UltiSnips directory for the anki_vim filetype (default: $ANKI_VIM_SNIPPETS)
    #[arg(long, value_name = "DIR")]
    pub snippets: Option<String>,

    /// Header of the question frame
    #[arg(long, value_name = "TEXT")]
    pub question_header: Option<String>,

    /// Header of the answer frame
    #[arg(long, value_name = "TEXT")]
    pub answer_header: Option<String>,

    /// Write a single card instead of looping until the editor is closed unchanged
    #[arg(long)]
    pub once: bool,

    /// List existing decks and exit
    #[arg(short, long, conflicts_with = "once")]
    pub list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Settings overrides given on the command line
    pub fn overrides(&self) -> Overrides {
        Overrides {
            decks_root: self.decks_root.clone(),
            editor: self.editor.clone(),
            editor_args: self.editor_args.clone(),
            snippets: self.snippets.clone(),
            question_header: self.question_header.clone(),
            answer_header: self.answer_header.clone(),
        }
    }

    /// Log filter matching the verbosity flag
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
