// SPDX-License-Identifier: MIT OR Apache-2.0
//! Highlight whole documents, re-lexing only what edits change.
//!
//! You probably want to start at [`Highlighter`].

use core::ops::Range;

use thiserror::Error;

use crate::cursor::{LineCursor, StrCursor};
use crate::lexer::step_traced;
use crate::state::LexerState;
use crate::style::Style;
use crate::trace::{LogTrace, Trace};

#[cfg(test)]
mod tests;

/// Settings for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
	/// Columns per tab when measuring indentation.
	pub tab_width: usize,
	/// Send every lexer decision to [`log`] at trace level.
	pub trace: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			tab_width: 4,
			trace: false,
		}
	}
}

/// A styled piece of a line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
	/// How to style it.
	pub style: Style,
	/// Byte range within the line.
	pub span: Range<usize>,
}

/// An error while editing a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HighlightError {
	#[error("Invalid line range {0:?} in a document of {1} lines")]
	#[doc = "Invalid line range {0:?} in a document of {1} lines"]
	InvalidRange(Range<usize>, usize),
}

/// Lex a single line starting from `state`, leaving `state` ready for the
/// next line.
pub fn tokenize_line(line: &str, state: &mut LexerState, settings: &Settings) -> Vec<Token> {
	let mut log = LogTrace;
	let trace: &mut dyn Trace = if settings.trace { &mut log } else { &mut () };
	let mut cursor = StrCursor::new(line).with_tab_width(settings.tab_width);
	let mut tokens = Vec::new();
	while !cursor.is_eol() {
		let start = cursor.position();
		let style = step_traced(&mut cursor, state, trace);
		debug_assert!(cursor.position() > start, "lexer stuck at {start} in {line:?}");
		tokens.push(Token {
			style,
			span: start..cursor.position(),
		});
	}
	state.end_line();
	tokens
}

#[derive(Debug, Clone)]
struct Line {
	text: String,
	// state before lexing this line
	start: LexerState,
	tokens: Vec<Token>,
}

impl Line {
	fn new<T: Into<String>>(text: T) -> Self {
		Self {
			text: text.into(),
			start: LexerState::new(),
			tokens: Vec::new(),
		}
	}
}

/// Document highlighter with a lexer state snapshot per line.
///
/// Edits re-lex from the first changed line and stop as soon as a following
/// line would start from the same state it already had.
/// ```
/// # use brillink::Style;
/// # use brillink::highlight::{Highlighter, Settings};
/// let mut doc = Highlighter::from_text("{- start\nstill comment\n-} done", Settings::default());
/// assert_eq!(doc.tokens(1).unwrap()[0].style, Style::MarkupComment);
/// // closing the comment early changes the lines after it
/// doc.replace_lines(0..1, ["{- start -}"]).unwrap();
/// assert_eq!(doc.tokens(1).unwrap()[0].style, Style::None);
/// ```
#[derive(Debug, Clone)]
pub struct Highlighter {
	settings: Settings,
	lines: Vec<Line>,
	end: LexerState,
}

impl Highlighter {
	/// Create an empty document.
	pub const fn new(settings: Settings) -> Self {
		Self {
			settings,
			lines: Vec::new(),
			end: LexerState::new(),
		}
	}
	/// Create and lex a document from text.
	pub fn from_text(text: &str, settings: Settings) -> Self {
		let mut this = Self::new(settings);
		this.lines = text.lines().map(Line::new).collect();
		let count = this.lines.len();
		this.relex(0, count, LexerState::new());
		this
	}
	/// Replace the lines in `range` with `lines`, returns how many lines had
	/// to be lexed again.
	/// # Errors
	/// If `range` isn't a valid range of lines.
	pub fn replace_lines<I>(
		&mut self,
		range: Range<usize>,
		lines: I,
	) -> Result<usize, HighlightError>
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		let before = self.lines.len();
		if range.start > range.end || range.end > before {
			return Err(HighlightError::InvalidRange(range, before));
		}
		let resume = self.lines.get(range.start).map_or(self.end, |line| line.start);
		self.lines.splice(range.clone(), lines.into_iter().map(Line::new));
		let inserted_end = self.lines.len() + range.end - before;
		Ok(self.relex(range.start, inserted_end, resume))
	}
	// lines before `fresh_until` have never been lexed with their text
	fn relex(&mut self, from: usize, fresh_until: usize, mut state: LexerState) -> usize {
		let mut lexed = 0_usize;
		for (index, line) in self.lines.iter_mut().enumerate().skip(from) {
			if index >= fresh_until && line.start == state {
				log::debug!("re-lexed {lexed} lines from {from}, converged at {index}");
				return lexed;
			}
			line.start = state;
			line.tokens = tokenize_line(&line.text, &mut state, &self.settings);
			lexed += 1;
		}
		self.end = state;
		log::debug!("re-lexed {lexed} lines from {from} to the end");
		lexed
	}
	/// Settings in use.
	pub const fn settings(&self) -> &Settings { &self.settings }
	/// Number of lines in the document.
	pub fn line_count(&self) -> usize { self.lines.len() }
	/// Text of line `index`.
	pub fn line(&self, index: usize) -> Option<&str> {
		self.lines.get(index).map(|line| line.text.as_str())
	}
	/// Tokens of line `index`.
	pub fn tokens(&self, index: usize) -> Option<&[Token]> {
		self.lines.get(index).map(|line| line.tokens.as_slice())
	}
	/// Every line's text with its tokens.
	pub fn lines(&self) -> impl Iterator<Item = (&str, &[Token])> {
		self.lines
			.iter()
			.map(|line| (line.text.as_str(), line.tokens.as_slice()))
	}
	/// State before line `index`, where `index == line_count()` gives the
	/// state at the end of the document.
	pub fn state_before(&self, index: usize) -> Option<LexerState> {
		match self.lines.get(index) {
			Some(line) => Some(line.start),
			None => (index == self.lines.len()).then_some(self.end),
		}
	}
	/// State after the last line.
	pub const fn end_state(&self) -> LexerState { self.end }
}
