//! Terminal highlighter for Brio source files.
//!
//! `brio_highlight` owns the classification; this crate owns everything
//! visual — the category-to-style table and the ANSI rendering.

pub mod commands;
pub mod theme;
