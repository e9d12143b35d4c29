// SPDX-License-Identifier: MIT OR Apache-2.0
//! Access to the line being lexed.
//!
//! The host owns the document text, the lexer only ever sees one line at a
//! time through a [`LineCursor`]. Use [`StrCursor`] if you just have a `&str`.

use crate::scan;

#[cfg(test)]
mod tests;

/// Cursor over a single line of text, provided by the host.
///
/// Only [`is_sol`], [`rest`], [`advance`], [`back_up`], and [`indentation`]
/// need implementing, everything else is built on those.
///
/// [`is_sol`]: LineCursor::is_sol
/// [`rest`]: LineCursor::rest
/// [`advance`]: LineCursor::advance
/// [`back_up`]: LineCursor::back_up
/// [`indentation`]: LineCursor::indentation
pub trait LineCursor {
	/// Whether nothing on this line has been consumed yet.
	fn is_sol(&self) -> bool;
	/// Text from the cursor to the end of the line (without the line break).
	fn rest(&self) -> &str;
	/// Consume `len` bytes, always on a char boundary of [`rest`].
	///
	/// [`rest`]: LineCursor::rest
	fn advance(&mut self, len: usize);
	/// Un-consume up to `chars` characters.
	fn back_up(&mut self, chars: usize);
	/// Column of the first non-whitespace character on the line.
	fn indentation(&self) -> usize;

	/// Whether the whole line has been consumed.
	fn is_eol(&self) -> bool { self.rest().is_empty() }
	/// Next character, without consuming it.
	fn peek(&self) -> Option<char> { self.rest().chars().next() }
	/// Consume and return the next character.
	fn next_char(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.advance(ch.len_utf8());
		Some(ch)
	}
	/// Check for literal `text` at the cursor, consuming it if `consume`.
	fn match_str(&mut self, text: &str, consume: bool) -> bool {
		let found = self.rest().starts_with(text);
		if found && consume {
			self.advance(text.len());
		}
		found
	}
	/// Run a recognizer (see [`scan`]) at the cursor, consuming the matched
	/// length if `consume`.
	fn match_with<F>(&mut self, pattern: F, consume: bool) -> bool
	where
		F: FnOnce(&str) -> Option<usize>,
	{
		let Some(len) = pattern(self.rest()) else {
			return false;
		};
		if consume {
			self.advance(len);
		}
		true
	}
	/// Skip spaces and tabs, returns whether anything was skipped.
	fn eat_space(&mut self) -> bool {
		let len = scan::spaces(self.rest());
		self.advance(len);
		len > 0
	}
	/// Consume the rest of the line.
	fn skip_to_end(&mut self) {
		let len = self.rest().len();
		self.advance(len);
	}
}

/// [`LineCursor`] over a borrowed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrCursor<'line> {
	line: &'line str,
	pos: usize,
	tab_width: usize,
}

impl<'line> StrCursor<'line> {
	/// Create a cursor at the start of `line`, which shouldn't contain a line
	/// break.
	pub const fn new(line: &'line str) -> Self {
		Self {
			line,
			pos: 0,
			tab_width: 4,
		}
	}
	/// Set how many columns a tab counts as for [`indentation`].
	///
	/// [`indentation`]: LineCursor::indentation
	#[must_use]
	pub const fn with_tab_width(mut self, tab_width: usize) -> Self {
		self.tab_width = tab_width;
		self
	}
	/// Byte offset of the cursor within the line.
	pub const fn position(&self) -> usize { self.pos }
	/// The whole line.
	pub const fn line(&self) -> &'line str { self.line }
	/// Everything consumed so far.
	pub fn consumed(&self) -> &'line str { &self.line[..self.pos] }
}

impl LineCursor for StrCursor<'_> {
	fn is_sol(&self) -> bool { self.pos == 0 }
	fn rest(&self) -> &str { &self.line[self.pos..] }
	fn advance(&mut self, len: usize) {
		let pos = self.pos.saturating_add(len).min(self.line.len());
		debug_assert!(
			self.line.is_char_boundary(pos),
			"advanced into the middle of a character"
		);
		self.pos = pos;
	}
	fn back_up(&mut self, chars: usize) {
		let len: usize = self.line[..self.pos]
			.chars()
			.rev()
			.take(chars)
			.map(char::len_utf8)
			.sum();
		self.pos -= len;
	}
	fn indentation(&self) -> usize {
		let mut column = 0;
		for ch in self.line.chars() {
			match ch {
				' ' => column += 1,
				'\t' => column += self.tab_width - column % self.tab_width.max(1),
				_ => break,
			}
		}
		column
	}
}
