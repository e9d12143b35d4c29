// SPDX-License-Identifier: MIT OR Apache-2.0
//! State carried between lexer calls.

/// What the very next token on the current line has to be.
///
/// Only meaningful between calls on the same line, any obligation left at the
/// end of a line is dropped before the next one starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Obligation {
	/// Nothing pending, dispatch normally.
	#[default]
	None,
	/// Stitch name after a `##` header.
	StitchName,
	/// Property list after a tag, a header label, or a previous property.
	Properties,
	/// Link target after `->`.
	ArrowTarget,
	/// Rest of a string literal that never closes on this line.
	StringTail,
}

/// Lexer state at some point in a document.
///
/// Plain data, so hosts can snapshot it at line boundaries and resume from
/// any snapshot later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LexerState {
	/// Number of `{-` comments currently open.
	pub comment_depth: usize,
	/// Pending obligation for the rest of the line.
	pub obligation: Obligation,
}

impl LexerState {
	/// State at the start of a document.
	pub const fn new() -> Self {
		Self {
			comment_depth: 0,
			obligation: Obligation::None,
		}
	}
	/// Whether the lexer is inside a (possibly nested) block comment.
	pub const fn in_comment(&self) -> bool { self.comment_depth > 0 }
	/// Drop any obligation left over at the end of a line.
	pub const fn end_line(&mut self) { self.obligation = Obligation::None; }
	/// Take the pending obligation, leaving none behind.
	pub(crate) const fn take_obligation(&mut self) -> Obligation {
		let obligation = self.obligation;
		self.obligation = Obligation::None;
		obligation
	}
}
