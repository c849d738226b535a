//! Shape-to-category cooking with the contextual guards.
//!
//! The classifier sits between the shape scanner (`brio_scan`) and the
//! presentation layer:
//!
//! ```text
//! source → Scanner → (Shape, len) → Classifier → Category
//! ```
//!
//! Most shapes map directly. The interesting work is word resolution,
//! where several categories share the identifier shape and are separated
//! by fixed-priority rules with two guards:
//!
//! - **trailing-paren lookahead**: built-ins and method calls only count
//!   when `(` is the next non-space character, so `min(1, 2)` is a call
//!   but `let min = 5` is a variable;
//! - **leading-dot lookbehind**: methods and properties require the
//!   immediately preceding token to be `.`, so `sort` with no dot is a
//!   variable even though the spelling is in both name sets.
//!
//! Context never crosses a line: the previous-token state resets on every
//! newline, which is what makes per-line rescanning safe.

use brio_scan::Shape;

use crate::category::Category;
use crate::vocab;

/// What the previous significant token was, as far as word resolution
/// cares. Carried within a single line only.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Prev {
    /// Start of line, or any token with no bearing on the next word.
    Plain,
    /// A `.` with nothing after it yet. Whitespace clears this: the dot
    /// guard is "immediately preceding", so `x. sort` gets no dot context.
    Dot,
    /// The `func` keyword, possibly followed by whitespace. The next word
    /// on the line is the name being declared.
    FuncHeader,
}

/// Cooks `(Shape, offset, len)` triples into categories.
///
/// Stateless apart from the one-token lookbehind; each instance is built
/// per scan pass and thrown away. The same `(shape, offset, len)` sequence
/// always cooks to the same categories.
pub(crate) struct Classifier<'src> {
    source: &'src [u8],
    prev: Prev,
}

impl<'src> Classifier<'src> {
    /// Create a classifier over the source the shapes were scanned from.
    pub(crate) fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            prev: Prev::Plain,
        }
    }

    /// Classify one token. `offset` and `len` locate it in the source.
    pub(crate) fn classify(&mut self, shape: Shape, offset: u32, len: u32) -> Category {
        match shape {
            Shape::LineComment => self.plain(Category::Comment),
            Shape::Str | Shape::StrOpen => self.plain(Category::String),
            Shape::Int | Shape::Float => self.plain(Category::Number),
            Shape::Word => self.word(offset, len),
            Shape::Dot => {
                self.prev = Prev::Dot;
                Category::Operator
            }
            Shape::Whitespace => {
                // Whitespace defeats the dot guard but not the func header.
                if self.prev == Prev::Dot {
                    self.prev = Prev::Plain;
                }
                Category::None
            }
            Shape::Newline => {
                self.prev = Prev::Plain;
                Category::None
            }
            s if s.is_operator() => self.plain(Category::Operator),
            // Punctuation, Other, interior junk: valid but unstyled.
            _ => self.plain(Category::None),
        }
    }

    /// Emit `category` and clear any word-resolution context.
    fn plain(&mut self, category: Category) -> Category {
        self.prev = Prev::Plain;
        category
    }

    /// Resolve a word using the fixed priority order.
    fn word(&mut self, offset: u32, len: u32) -> Category {
        let text = self.text(offset, len);
        let called = has_lparen_lookahead(&self.source[(offset + len) as usize..]);

        let category = if vocab::is_keyword(text) {
            Category::Keyword
        } else if vocab::is_math_function(text) {
            Category::MathFunction
        } else if called && vocab::is_builtin(text) {
            Category::BuiltinFunction
        } else if vocab::is_type_identifier(text) {
            Category::TypeIdentifier
        } else if self.prev == Prev::Dot && called && vocab::is_method_name(text) {
            Category::MethodCall
        } else if self.prev == Prev::Dot && !called && vocab::is_property_name(text) {
            Category::PropertyAccess
        } else if self.prev == Prev::FuncHeader {
            Category::FunctionDefinition
        } else {
            Category::Variable
        };

        self.prev = if text == vocab::FUNC_KEYWORD {
            Prev::FuncHeader
        } else {
            Prev::Plain
        };
        category
    }

    /// Slice the word's text out of the source.
    fn text(&self, offset: u32, len: u32) -> &'src str {
        let bytes = &self.source[offset as usize..(offset + len) as usize];
        // Word tokens are ASCII by construction ([A-Za-z0-9_] runs), so
        // this never fails; the fallback keeps the classifier total anyway.
        std::str::from_utf8(bytes).unwrap_or("")
    }
}

/// Check if the next non-horizontal-whitespace byte is `(`.
///
/// Skips only `' '` and `'\t'` — a newline or any other byte stops the
/// scan, so a call must open on the same line as its name.
#[inline]
fn has_lparen_lookahead(rest: &[u8]) -> bool {
    for &b in rest {
        match b {
            b' ' | b'\t' => {}
            b'(' => return true,
            _ => return false,
        }
    }
    false
}
