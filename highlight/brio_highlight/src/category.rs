//! The closed set of highlight categories.

/// Highlight category assigned to one lexeme.
///
/// This set is closed: the classifier never produces anything outside it,
/// and presentation layers key their style tables on [`name()`](Self::name)
/// strings that are stable across releases. [`Category::None`] means "valid
/// text, no semantic classification, render plain".
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    /// `//` line comment.
    Comment = 0,
    /// String literal, terminated or not.
    String = 1,
    /// Reserved word (`if`, `let`, `func`, …).
    Keyword = 2,
    /// Math function name (`sin`, `round`, …), styled wherever it appears.
    MathFunction = 3,
    /// Built-in function name at a call site (`min(…)`, `randInt(…)`).
    BuiltinFunction = 4,
    /// Type name (`number`, `text`, `list`, `dict`).
    TypeIdentifier = 5,
    /// Known method name after `.` and before `(`.
    MethodCall = 6,
    /// Known property name after `.` with no call parens.
    PropertyAccess = 7,
    /// The identifier being declared in a `func` header.
    FunctionDefinition = 8,
    /// Integer or decimal literal.
    Number = 9,
    /// Operator glyph (`==`, `->`, `+`, `.` …).
    Operator = 10,
    /// Any other identifier — the universal fallback for user names.
    Variable = 11,
    /// No classification: whitespace, delimiters, unsupported characters.
    None = 12,
}

impl Category {
    /// Every category, in discriminant order.
    pub const ALL: [Category; 13] = [
        Category::Comment,
        Category::String,
        Category::Keyword,
        Category::MathFunction,
        Category::BuiltinFunction,
        Category::TypeIdentifier,
        Category::MethodCall,
        Category::PropertyAccess,
        Category::FunctionDefinition,
        Category::Number,
        Category::Operator,
        Category::Variable,
        Category::None,
    ];

    /// Stable lowercase name for presentation-layer style tables.
    pub fn name(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Keyword => "keyword",
            Category::MathFunction => "math-function",
            Category::BuiltinFunction => "builtin-function",
            Category::TypeIdentifier => "type-identifier",
            Category::MethodCall => "method-call",
            Category::PropertyAccess => "property-access",
            Category::FunctionDefinition => "function-definition",
            Category::Number => "number",
            Category::Operator => "operator",
            Category::Variable => "variable",
            Category::None => "none",
        }
    }
}
