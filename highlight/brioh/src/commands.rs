//! CLI commands: render a file with ANSI styles, or dump the lexeme table.

use std::process::ExitCode;

use brio_highlight::{classify_source, Category, Lexeme};
use owo_colors::OwoColorize;

use crate::theme::{style_for, Style};

/// Read `path`, classify it, and print it with ANSI styling.
///
/// With `color` off the file is printed as-is (useful for piping), which
/// also doubles as a coverage check: the classified output must reproduce
/// the input byte for byte.
pub fn highlight_file(path: &str, color: bool) -> ExitCode {
    let Some(source) = read_source(path) else {
        return ExitCode::FAILURE;
    };

    let lexemes = classify_source(&source);
    tracing::debug!(path, lexemes = lexemes.len(), "classified source");

    let mut offset = 0usize;
    for Lexeme { len, category } in lexemes {
        let text = &source[offset..offset + len as usize];
        offset += len as usize;
        if color {
            print!("{}", paint(text, style_for(category)));
        } else {
            print!("{text}");
        }
    }
    ExitCode::SUCCESS
}

/// Read `path` and print one `category<TAB>lexeme` row per classified span,
/// skipping spacing rows to keep the table readable.
pub fn dump_tokens(path: &str) -> ExitCode {
    let Some(source) = read_source(path) else {
        return ExitCode::FAILURE;
    };

    let mut offset = 0usize;
    for Lexeme { len, category } in classify_source(&source) {
        let text = &source[offset..offset + len as usize];
        offset += len as usize;
        if category == Category::None && text.trim().is_empty() {
            continue;
        }
        println!("{}\t{}", category.name(), text);
    }
    ExitCode::SUCCESS
}

/// Apply a theme style to a span of text.
fn paint(text: &str, style: Style) -> String {
    if style.color.is_none() && !style.bold && !style.italic {
        return text.to_string();
    }
    let mut ansi = owo_colors::Style::new();
    if let Some(rgb) = style.color {
        ansi = ansi.truecolor(rgb.0, rgb.1, rgb.2);
    }
    if style.bold {
        ansi = ansi.bold();
    }
    if style.italic {
        ansi = ansi.italic();
    }
    text.style(ansi).to_string()
}

fn read_source(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(err) => {
            eprintln!("error: cannot read {path}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn paint_styles_and_preserves_text() {
        let painted = paint("let", style_for(Category::Keyword));
        assert!(painted.contains("let"));
        assert!(painted.contains('\x1b'), "keyword style should emit ANSI");
    }

    #[test]
    fn paint_plain_category_adds_no_escapes() {
        let painted = paint("  ", style_for(Category::None));
        assert_eq!(painted, "  ");
    }
}
