//! Shape-level scanner for Brio source text.
//!
//! This crate recognizes lexical *shapes* — words, numbers, strings,
//! comments, operator glyphs — without knowing anything about the Brio
//! vocabulary. It never errors: every byte of input ends up inside exactly
//! one token, and anything unrecognizable becomes a one-character
//! [`Shape::Other`] token. Keyword and function-name resolution happens in
//! the classification layer (`brio_highlight`), which consumes the
//! `(Shape, len)` pairs produced here.
//!
//! # Pipeline
//!
//! ```text
//! source → ScanBuffer → Cursor → Scanner → (Shape, len)
//! ```

mod buffer;
mod cursor;
mod scanner;
mod shape;

pub use buffer::ScanBuffer;
pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner};
pub use shape::{ScanToken, Shape};
