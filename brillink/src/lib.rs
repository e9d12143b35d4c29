// SPDX-License-Identifier: MIT OR Apache-2.0
//! [![Repository](https://img.shields.io/badge/repository-GitHub-brightgreen.svg)](https://github.com/1e1001/rsutil/tree/main/brillink)
//! [![Crates.io](https://img.shields.io/crates/v/brillink)](https://crates.io/crates/brillink)
//! [![docs.rs](https://img.shields.io/docsrs/brillink)](https://docs.rs/brillink)
//! [![MIT OR Apache-2.0](https://img.shields.io/crates/l/brillink)](#License)
//!
//! Incremental line lexer for brillink, a prose format with a small embedded
//! language for naming sections ("stitches") and attaching properties and
//! links to tags and headers.
//!
//! The lexer only classifies text for highlighting, it never builds a tree
//! and never checks that a linked stitch exists. Each call to [`step`]
//! consumes a bit of one line and returns a [`Style`], carrying a tiny
//! [`LexerState`] across calls and lines:
//! ```
//! # use brillink::{LexerState, LineCursor, Style, StrCursor, step};
//! let mut state = LexerState::new();
//! let mut cursor = StrCursor::new("! ask name -> target");
//! let mut styles = Vec::new();
//! while !cursor.is_eol() {
//! 	styles.push(step(&mut cursor, &mut state));
//! }
//! assert_eq!(styles, [
//! 	Style::MarkupTag,
//! 	Style::VariableArg,
//! 	Style::Arrow,
//! 	Style::SectionTag,
//! ]);
//! ```
//! For whole documents, [`Highlighter`] keeps a state snapshot per line and
//! only re-lexes what an edit actually changed.
//!
//! [`Highlighter`]: highlight::Highlighter

pub mod cursor;
pub mod highlight;
pub mod lexer;
pub mod scan;
pub mod state;
pub mod style;
pub mod trace;


pub use cursor::{LineCursor, StrCursor};
pub use lexer::{step, step_traced};
pub use state::{LexerState, Obligation};
pub use style::Style;
