//! Lexical shapes and the `(shape, len)` token pair.
//!
//! A [`Shape`] says what kind of text a token is made of — word, number,
//! string, a specific operator glyph — without resolving what it *means*.
//! Discriminants are grouped into semantic ranges so a tag can be bucketed
//! with a single comparison.

/// Lexical shape of a scanned token.
///
/// `repr(u8)` with ranged discriminants:
///
/// - `0..=15`: words & literals
/// - `32..=63`: operator glyphs
/// - `80..=95`: punctuation (valid, but carries no highlight)
/// - `112..=119`: spacing
/// - `240`: fallback
/// - `255`: end of input
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Shape {
    // === Words & Literals ===
    /// Maximal run of `[A-Za-z0-9_]` starting with a letter or underscore.
    Word = 0,
    /// Integer literal, optionally with a leading minus.
    Int = 1,
    /// Decimal literal (`digits.digits`), optionally with a leading minus.
    Float = 2,
    /// String literal closed by its opening quote character.
    Str = 3,
    /// String literal that ran to end of line (or input) without closing.
    /// Not an error: a live-typing highlighter must style half-typed input.
    StrOpen = 4,

    // === Operators ===
    /// `+`
    Plus = 32,
    /// `-`
    Minus = 33,
    /// `*`
    Star = 34,
    /// `/`
    Slash = 35,
    /// `%`
    Percent = 36,
    /// `^`
    Caret = 37,
    /// `=`
    Equal = 38,
    /// `==`
    EqualEqual = 39,
    /// `!`
    Bang = 40,
    /// `!=`
    BangEqual = 41,
    /// `<`
    Less = 42,
    /// `<=`
    LessEqual = 43,
    /// `>`
    Greater = 44,
    /// `>=`
    GreaterEqual = 45,
    /// `->`
    Arrow = 46,
    /// `&&`
    AmpAmp = 47,
    /// `||`
    PipePipe = 48,
    /// `.`
    Dot = 49,

    // === Punctuation ===
    /// `(`
    LParen = 80,
    /// `)`
    RParen = 81,
    /// `[`
    LBracket = 82,
    /// `]`
    RBracket = 83,
    /// `{`
    LBrace = 84,
    /// `}`
    RBrace = 85,
    /// `,`
    Comma = 86,
    /// `:`
    Colon = 87,
    /// `;`
    Semicolon = 88,
    /// Lone `&` (only `&&` is an operator in Brio).
    Amp = 89,
    /// Lone `|` (only `||` is an operator in Brio).
    Pipe = 90,

    // === Spacing ===
    /// Run of spaces and tabs (including a lone `\r`).
    Whitespace = 112,
    /// `\n` or `\r\n`.
    Newline = 113,
    /// `//` to end of line.
    LineComment = 114,

    // === Fallback ===
    /// One unrecognized character (full UTF-8 code point). Guarantees
    /// forward progress on any input.
    Other = 240,

    // === Control ===
    /// End of input. Always `len == 0`; repeats on further calls.
    Eof = 255,
}

impl Shape {
    /// The fixed spelling of this shape, for shapes that have one.
    ///
    /// Variable-width shapes (words, literals, spacing, `Other`) return
    /// `None`.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Shape::Plus => Some("+"),
            Shape::Minus => Some("-"),
            Shape::Star => Some("*"),
            Shape::Slash => Some("/"),
            Shape::Percent => Some("%"),
            Shape::Caret => Some("^"),
            Shape::Equal => Some("="),
            Shape::EqualEqual => Some("=="),
            Shape::Bang => Some("!"),
            Shape::BangEqual => Some("!="),
            Shape::Less => Some("<"),
            Shape::LessEqual => Some("<="),
            Shape::Greater => Some(">"),
            Shape::GreaterEqual => Some(">="),
            Shape::Arrow => Some("->"),
            Shape::AmpAmp => Some("&&"),
            Shape::PipePipe => Some("||"),
            Shape::Dot => Some("."),
            Shape::LParen => Some("("),
            Shape::RParen => Some(")"),
            Shape::LBracket => Some("["),
            Shape::RBracket => Some("]"),
            Shape::LBrace => Some("{"),
            Shape::RBrace => Some("}"),
            Shape::Comma => Some(","),
            Shape::Colon => Some(":"),
            Shape::Semicolon => Some(";"),
            Shape::Amp => Some("&"),
            Shape::Pipe => Some("|"),
            _ => None,
        }
    }

    /// Returns `true` for shapes in the operator glyph range.
    #[inline]
    pub fn is_operator(self) -> bool {
        matches!(self as u8, 32..=63)
    }

    /// Returns `true` for spacing shapes (whitespace and newlines, not
    /// comments — comments carry a highlight of their own).
    #[inline]
    pub fn is_spacing(self) -> bool {
        matches!(self, Shape::Whitespace | Shape::Newline)
    }
}

/// One scanned token: a shape and its byte length.
///
/// The scanner emits these in source order; lengths always sum to the
/// source length, so the caller can reconstruct every lexeme's text from a
/// running offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScanToken {
    /// What kind of text this token is.
    pub shape: Shape,
    /// Byte length of the token. Zero only for [`Shape::Eof`].
    pub len: u32,
}
