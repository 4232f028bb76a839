//! Reading the edited scaffold back
//!
//! Lines are classified by how many marker lines (lines starting with `%`)
//! were seen before them:
//!
//! - inside or after the question frame, up to the answer frame's closing
//!   delimiter: question body
//! - past the question frame otherwise: answer body
//! - before the first marker line: dropped
//!
//! The two ranges overlap: a line inside a damaged answer frame still
//! counts towards the question.

use tracing::{debug, trace};

use crate::constants as C;
use crate::error::{CardError, Result};
use crate::template::FRAME_LINES;

/// Marker lines that close the question frame
const QUESTION_FRAME_END: usize = FRAME_LINES;

/// Question lines stop once this many marker lines were seen
/// (the answer frame minus its closing delimiter)
const QUESTION_REGION_LIMIT: usize = 2 * FRAME_LINES - 1;

/// A parsed card, fields already carry `<br />` instead of newlines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// The deck record line, including the terminating newline
    pub fn to_record(&self) -> String {
        format!("{}{}{}\n", self.question, C::FIELD_SEPARATOR, self.answer)
    }
}

/// Whether the user touched the scaffold at all. Exact comparison: one added space counts.
pub fn was_modified(original: &str, after_edit: &str) -> bool {
    original != after_edit
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Question,
    Answer,
}

fn classify(marker_lines: usize) -> Option<Field> {
    if marker_lines > 0 && marker_lines < QUESTION_REGION_LIMIT {
        Some(Field::Question)
    } else if marker_lines > QUESTION_FRAME_END {
        Some(Field::Answer)
    } else {
        None
    }
}

/// Extract question and answer from an edited scaffold.
///
/// Fails with [`CardError::HeaderNotIntact`] when fewer marker lines than
/// one full frame survived the edit, the empty document included.
pub fn parse_qa(document: &str) -> Result<Card> {
    let mut question = String::new();
    let mut answer = String::new();
    let mut marker_lines = 0;

    for line in document.split_inclusive('\n') {
        if line.starts_with(C::MARKER_CHAR) {
            marker_lines += 1;
            continue;
        }

        let target = match classify(marker_lines) {
            Some(Field::Question) => &mut question,
            Some(Field::Answer) => &mut answer,
            None => {
                trace!(line, "dropping line before first marker");
                continue;
            }
        };

        match line.strip_suffix('\n') {
            Some(body) => {
                target.push_str(body);
                target.push_str(C::LINEBREAK_MARKER);
            }
            None => target.push_str(line),
        }
    }

    if marker_lines < QUESTION_FRAME_END {
        return Err(CardError::HeaderNotIntact { marker_lines });
    }

    debug!(marker_lines, question_len = question.len(), answer_len = answer.len(), "parsed card");
    Ok(Card { question, answer })
}
