//! Category-to-style mapping.
//!
//! This table is the presentation half of the contract: the classifier
//! guarantees the closed category set, and everything visual lives here.
//! The palette follows the Brio editor's light theme.

use brio_highlight::Category;

/// 24-bit color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Visual attributes for one category.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Style {
    /// Foreground color, or `None` for the terminal default.
    pub color: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
}

impl Style {
    const fn plain() -> Self {
        Self {
            color: None,
            bold: false,
            italic: false,
        }
    }

    const fn color(rgb: Rgb) -> Self {
        Self {
            color: Some(rgb),
            bold: false,
            italic: false,
        }
    }

    const fn bold(rgb: Rgb) -> Self {
        Self {
            color: Some(rgb),
            bold: true,
            italic: false,
        }
    }

    const fn italic(rgb: Rgb) -> Self {
        Self {
            color: Some(rgb),
            bold: false,
            italic: true,
        }
    }
}

/// Style for one category.
pub fn style_for(category: Category) -> Style {
    match category {
        Category::Comment => Style::italic(Rgb(0x64, 0x74, 0x8b)),
        Category::String => Style::color(Rgb(0x63, 0x66, 0xf1)),
        Category::Keyword => Style::color(Rgb(0xd9, 0x46, 0xef)),
        Category::MathFunction => Style::color(Rgb(0x10, 0xb9, 0x81)),
        Category::BuiltinFunction => Style::color(Rgb(0x05, 0x96, 0x69)),
        Category::TypeIdentifier => Style::color(Rgb(0x0e, 0xa5, 0xe9)),
        Category::MethodCall => Style::color(Rgb(0x10, 0xb9, 0x81)),
        Category::PropertyAccess => Style::color(Rgb(0x0d, 0x94, 0x88)),
        Category::FunctionDefinition => Style::bold(Rgb(0x10, 0xb9, 0x81)),
        Category::Number => Style::color(Rgb(0xea, 0x58, 0x0c)),
        Category::Operator => Style::color(Rgb(0xf5, 0x9e, 0x0b)),
        Category::Variable => Style::color(Rgb(0x33, 0x41, 0x55)),
        Category::None => Style::plain(),
    }
}
