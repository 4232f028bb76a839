//! Scaffold rendering
//!
//! The scaffold is the text the user sees when the editor opens: a framed
//! QUESTION header, room for the question, a framed ANSWER header and room
//! for the answer. It must be byte-identical between calls, the change
//! detection compares the edited file against it.

use crate::constants as C;

/// Lines in one rendered frame: two delimiter lines, the padding and the header line
pub const FRAME_LINES: usize = C::PADDING_ABOVE + C::PADDING_BELOW + 3;

/// Header texts shown inside the two frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headers {
    pub question: String,
    pub answer: String,
}

impl Headers {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl Default for Headers {
    fn default() -> Self {
        Self::new(C::QUESTION_HEADER, C::ANSWER_HEADER)
    }
}

/// Render one decorated block around `content`.
///
/// ```text
/// %%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
/// %                                               %
/// %                                               %
/// %                       QUESTION                %
/// %                                               %
/// %                                               %
/// %                                               %
/// %%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%
/// ```
///
/// Every line, the last one included, ends with a newline.
pub fn render_frame(content: &str) -> String {
    let delimiter = delimiter_line();
    let mut frame = String::new();

    frame.push_str(&delimiter);
    frame.push('\n');
    for _ in 0..C::PADDING_ABOVE {
        frame.push_str(C::PADDING_LINE);
        frame.push('\n');
    }
    frame.push_str(&format!("{}\t\t\t{}\t\t{}\n", C::MARKER_CHAR, content, C::MARKER_CHAR));
    for _ in 0..C::PADDING_BELOW {
        frame.push_str(C::PADDING_LINE);
        frame.push('\n');
    }
    frame.push_str(&delimiter);
    frame.push('\n');

    frame
}

/// Render the full scaffold: question frame, blank lines, answer frame, blank lines
pub fn render_scaffold(headers: &Headers) -> String {
    format!(
        "{}{gap}{}{gap}",
        render_frame(&headers.question),
        render_frame(&headers.answer),
        gap = C::CONTENT_GAP,
    )
}

fn delimiter_line() -> String {
    std::iter::repeat(C::MARKER_CHAR).take(C::DELIMITER_WIDTH).collect()
}
