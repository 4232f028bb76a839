pub mod cli;
pub mod constants;
pub mod deck;
pub mod editor;
pub mod error;
pub mod parse;
pub mod resolve;
pub mod session;
pub mod template;
pub mod util;

pub use cli::Cli;
pub use deck::{append_record, Deck};
pub use editor::{open_in_editor, EditorConfig};
pub use error::{CardError, Result};
pub use parse::{parse_qa, was_modified, Card};
pub use resolve::{Overrides, Settings};
pub use session::{create_card, SessionSettings};
pub use template::{render_frame, render_scaffold, Headers};
