//! The Brio vocabulary: six name sets plus the operator glyph set.
//!
//! This is the language's entire lexical "configuration" — the sets are
//! enumerated literally and adding a name here is the only change needed to
//! teach the highlighter a new word. All lookups are pure membership tests:
//! an unknown name returns `false` everywhere, which the classifier reads
//! as "plain identifier".
//!
//! Lookup functions use the name's length as a first-pass filter, then
//! match against the names of that length. The two overlap-prone sets
//! (built-ins and properties) share spellings (`bin`, `hexa`) and one
//! spelling (`sort`) appears in both the method and property sets; the
//! classifier's trailing-paren and leading-dot guards keep every
//! overlapping spelling unambiguous.

/// The function-declaration keyword. The classifier tracks it to style the
/// declared name as a function definition.
pub const FUNC_KEYWORD: &str = "func";

/// Reserved words, always styled as keywords.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    match text.len() {
        2 => matches!(text, "by" | "do" | "if" | "in" | "to"),
        3 => matches!(text, "for" | "let"),
        4 => matches!(text, "each" | "elif" | "else" | "func" | "glob"),
        5 => matches!(text, "break" | "print" | "while"),
        6 => text == "return",
        _ => false,
    }
}

/// Math function names, styled wherever they appear as a whole word.
///
/// No trailing-paren requirement: these names are reserved for the math
/// library and never double as properties or user variables.
#[inline]
pub fn is_math_function(text: &str) -> bool {
    match text.len() {
        3 => matches!(text, "abs" | "cos" | "exp" | "log" | "neg" | "sin" | "tan"),
        4 => matches!(text, "acos" | "asin" | "atan" | "ceil" | "root"),
        5 => matches!(text, "floor" | "round"),
        _ => false,
    }
}

/// Sorted list of built-in function names.
///
/// These are only styled at a call site — the classifier requires `(` as
/// the next non-space character — so `let min = 5` keeps `min` usable as a
/// plain variable. Sorted for binary search. `bin` and `hexa` also appear
/// in [`is_property_name`]; the guards keep the two readings apart.
const CALL_GATED_BUILTINS: [&str; 6] = ["bin", "hexa", "max", "min", "randFloat", "randInt"];

/// Fast pre-filter: can this name possibly be a built-in?
///
/// Checks length (3, 4, 7, or 9) and first byte (`b`, `h`, `m`, `r`).
/// Rejects most identifiers before the binary search in [`is_builtin`].
#[inline]
pub fn could_be_builtin(text: &str) -> bool {
    let bytes = text.as_bytes();
    matches!(bytes.len(), 3 | 4 | 7 | 9) && matches!(bytes[0], b'b' | b'h' | b'm' | b'r')
}

/// Built-in function names (call-position only; the paren guard lives in
/// the classifier).
#[inline]
pub fn is_builtin(text: &str) -> bool {
    could_be_builtin(text) && CALL_GATED_BUILTINS.binary_search(&text).is_ok()
}

/// Type identifier names.
#[inline]
pub fn is_type_identifier(text: &str) -> bool {
    matches!(text, "dict" | "list" | "number" | "text")
}

/// Method names: styled after `.` and before `(`.
#[inline]
pub fn is_method_name(text: &str) -> bool {
    match text.len() {
        3 => text == "add",
        4 => text == "sort",
        5 => text == "split",
        6 => text == "remove",
        8 => text == "contains",
        10 => text == "startsWith",
        _ => false,
    }
}

/// Property names: styled after `.` when no call parens follow.
///
/// `sort` is also a method (`x.sort()` sorts, `x.sort` is the sorted view),
/// and `bin`/`hexa` are also call-gated built-ins.
#[inline]
pub fn is_property_name(text: &str) -> bool {
    match text.len() {
        3 => text == "bin",
        4 => matches!(text, "hexa" | "keys" | "sort" | "trim"),
        5 => matches!(text, "lower" | "upper"),
        6 => text == "values",
        7 => matches!(text, "listLen" | "textLen"),
        _ => false,
    }
}

/// Operator glyph set, two-character glyphs and one-character glyphs.
///
/// The scanner already matches compound glyphs greedily; this predicate is
/// the string-level membership test for callers that hold text rather than
/// shapes. The dot is a member: `.` before a non-method, non-property word
/// still styles as an operator.
#[inline]
pub fn is_operator_glyph(text: &str) -> bool {
    matches!(
        text,
        "==" | "!="
            | "<="
            | ">="
            | "->"
            | "&&"
            | "||"
            | "+"
            | "-"
            | "*"
            | "/"
            | "^"
            | "%"
            | "="
            | "<"
            | ">"
            | "!"
            | "."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Keywords ===

    #[test]
    fn all_sixteen_keywords_recognized() {
        for kw in [
            "if", "elif", "else", "func", "let", "glob", "return", "print", "for", "each", "to",
            "by", "in", "while", "do", "break",
        ] {
            assert!(is_keyword(kw), "{kw} must be a keyword");
        }
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert!(!is_keyword("If"));
        assert!(!is_keyword("FUNC"));
        assert!(!is_keyword("Return"));
    }

    #[test]
    fn keyword_prefixes_and_extensions_rejected() {
        assert!(!is_keyword("i"));
        assert!(!is_keyword("iff"));
        assert!(!is_keyword("elseif"));
        assert!(!is_keyword("returns"));
        assert!(!is_keyword(""));
    }

    // === Math functions ===

    #[test]
    fn all_fourteen_math_functions_recognized() {
        for f in [
            "root", "abs", "neg", "log", "exp", "round", "ceil", "floor", "sin", "cos", "tan",
            "asin", "acos", "atan",
        ] {
            assert!(is_math_function(f), "{f} must be a math function");
        }
    }

    #[test]
    fn math_set_does_not_contain_builtins() {
        // bin/hexa live in the builtin and property tiers, never math —
        // the math tier has no guards, so overlap there would shadow both
        // contextual readings.
        assert!(!is_math_function("bin"));
        assert!(!is_math_function("hexa"));
        assert!(!is_math_function("min"));
        assert!(!is_math_function("max"));
    }

    // === Built-ins ===

    #[test]
    fn builtins_recognized() {
        for f in ["randInt", "randFloat", "min", "max", "bin", "hexa"] {
            assert!(is_builtin(f), "{f} must be a builtin");
        }
    }

    #[test]
    fn builtins_are_case_sensitive() {
        assert!(!is_builtin("randint"));
        assert!(!is_builtin("RandFloat"));
        assert!(!is_builtin("MIN"));
    }

    #[test]
    fn prefilter_accepts_all_builtins() {
        for f in ["randInt", "randFloat", "min", "max", "bin", "hexa"] {
            assert!(could_be_builtin(f), "prefilter must pass {f}");
        }
    }

    #[test]
    fn prefilter_rejects_wrong_length_or_first_byte() {
        assert!(!could_be_builtin("xy")); // len 2
        assert!(!could_be_builtin("floor")); // len 5
        assert!(!could_be_builtin("abs")); // len 3, starts with 'a'
        assert!(!could_be_builtin("tan")); // len 3, starts with 't'
    }

    // === Types ===

    #[test]
    fn type_identifiers_recognized() {
        for t in ["number", "text", "list", "dict"] {
            assert!(is_type_identifier(t), "{t} must be a type identifier");
        }
        assert!(!is_type_identifier("string"));
        assert!(!is_type_identifier("Number"));
    }

    // === Methods & properties ===

    #[test]
    fn method_names_recognized() {
        for m in ["startsWith", "contains", "split", "add", "remove", "sort"] {
            assert!(is_method_name(m), "{m} must be a method name");
        }
        assert!(!is_method_name("startswith"));
        assert!(!is_method_name("splits"));
    }

    #[test]
    fn property_names_recognized() {
        for p in [
            "textLen", "trim", "upper", "lower", "listLen", "keys", "values", "sort", "bin",
            "hexa",
        ] {
            assert!(is_property_name(p), "{p} must be a property name");
        }
        assert!(!is_property_name("length"));
        assert!(!is_property_name("TextLen"));
    }

    #[test]
    fn overlapping_spellings_live_in_both_sets() {
        // sort: method and property
        assert!(is_method_name("sort") && is_property_name("sort"));
        // bin/hexa: builtin and property
        assert!(is_builtin("bin") && is_property_name("bin"));
        assert!(is_builtin("hexa") && is_property_name("hexa"));
    }

    #[test]
    fn builtins_table_is_sorted() {
        let mut sorted = CALL_GATED_BUILTINS;
        sorted.sort_unstable();
        assert_eq!(sorted, CALL_GATED_BUILTINS, "binary search needs order");
    }

    // === Operator glyphs ===

    #[test]
    fn compound_glyphs_are_members() {
        for op in ["==", "!=", "<=", ">=", "->", "&&", "||"] {
            assert!(is_operator_glyph(op), "{op} must be an operator glyph");
        }
    }

    #[test]
    fn single_glyphs_are_members() {
        for op in ["+", "-", "*", "/", "^", "%", "=", "<", ">", "!", "."] {
            assert!(is_operator_glyph(op), "{op} must be an operator glyph");
        }
    }

    #[test]
    fn non_operators_rejected() {
        for s in ["(", ")", "{", "}", ",", ";", ":", "&", "|", "@", "a", ""] {
            assert!(!is_operator_glyph(s), "{s:?} must not be an operator glyph");
        }
    }

    // === Unknown names ===

    #[test]
    fn unknown_name_is_false_everywhere() {
        for name in ["foo", "myVariable", "Sort", "", "_"] {
            assert!(!is_keyword(name));
            assert!(!is_math_function(name));
            assert!(!is_builtin(name));
            assert!(!is_type_identifier(name));
            assert!(!is_method_name(name));
            assert!(!is_property_name(name));
        }
    }
}
