//! Lexical classifier for Brio syntax highlighting.
//!
//! Single-pass, restartable, and total: every character of input lands in
//! exactly one [`Lexeme`], each tagged with one [`Category`] from the
//! closed set, and no input can make classification fail. The scanner is
//! re-entered from column 0 of each line with fresh state — Brio has no
//! multi-line comments or strings — so an editor can rescan any line in
//! isolation on every keystroke.
//!
//! ```
//! use brio_highlight::{classify_line, Category};
//!
//! let line = "let area = 3.14 * r ^ 2";
//! let lexemes = classify_line(line);
//! let total: u32 = lexemes.iter().map(|l| l.len).sum();
//! assert_eq!(total as usize, line.len()); // lexemes cover the line exactly
//! assert_eq!(lexemes[0].category, Category::Keyword); // let
//! ```

pub mod category;
mod classify;
pub mod vocab;

pub use category::Category;

use brio_scan::{ScanBuffer, Scanner, Shape};
use classify::Classifier;

/// One classified span of source text.
///
/// Lexemes partition their input contiguously and exhaustively: lengths
/// sum to the input length, so a running offset recovers each lexeme's
/// text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Lexeme {
    /// Byte length of the span.
    pub len: u32,
    /// Its highlight category.
    pub category: Category,
}

/// Streaming classifier over one buffer.
///
/// Yields one lexeme per call, in text order. Dropping it mid-text is the
/// cancellation story: there is nothing to clean up.
pub struct Highlighter<'src> {
    scanner: Scanner<'src>,
    classifier: Classifier<'src>,
    offset: u32,
}

impl<'src> Highlighter<'src> {
    /// Start classifying at the beginning of `buf`.
    pub fn new(buf: &'src ScanBuffer) -> Self {
        Self {
            scanner: Scanner::new(buf.cursor()),
            classifier: Classifier::new(buf.as_bytes()),
            offset: 0,
        }
    }

    /// Produce the next lexeme, or `None` at end of input.
    pub fn next_lexeme(&mut self) -> Option<Lexeme> {
        let tok = self.scanner.next_token();
        if tok.shape == Shape::Eof {
            return None;
        }
        let category = self.classifier.classify(tok.shape, self.offset, tok.len);
        self.offset += tok.len;
        Some(Lexeme {
            len: tok.len,
            category,
        })
    }
}

impl Iterator for Highlighter<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        self.next_lexeme()
    }
}

/// Classify a single line of source.
///
/// The line may contain newlines (state resets at each one); the name
/// reflects the editor calling convention of feeding one visible line at a
/// time.
pub fn classify_line(line: &str) -> Vec<Lexeme> {
    classify_source(line)
}

/// Classify a whole source text. Newlines appear as their own
/// [`Category::None`] lexemes so the output still covers every byte.
pub fn classify_source(source: &str) -> Vec<Lexeme> {
    let buf = ScanBuffer::new(source);
    Highlighter::new(&buf).collect()
}
