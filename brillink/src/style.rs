// SPDX-License-Identifier: MIT OR Apache-2.0
//! Style tags handed back to the host.

use core::fmt;

/// How a span of text should be highlighted.
///
/// This is the entire vocabulary the lexer exposes, the host maps each tag
/// onto its own theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
	/// `#` / `##` header text.
	Header,
	/// `!` or `?` tag marker with its name.
	MarkupTag,
	/// Stitch name, either after `##` or as a link target.
	SectionTag,
	/// `|>` property label.
	MarkupLabel,
	/// Integer property value.
	LiteralArg,
	/// Bareword property value.
	VariableArg,
	/// Quoted property value.
	LiteralString,
	/// `->` link marker.
	Arrow,
	/// Anything inside `{- -}`.
	MarkupComment,
	/// Malformed text.
	Error,
	/// Plain prose, the host's default styling.
	None,
}

impl Style {
	/// Every style, in declaration order.
	pub const ALL: [Self; 11] = [
		Self::Header,
		Self::MarkupTag,
		Self::SectionTag,
		Self::MarkupLabel,
		Self::LiteralArg,
		Self::VariableArg,
		Self::LiteralString,
		Self::Arrow,
		Self::MarkupComment,
		Self::Error,
		Self::None,
	];
	/// External tag name, as expected by editor themes.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Header => "header",
			Self::MarkupTag => "markup-tag",
			Self::SectionTag => "sectiontag",
			Self::MarkupLabel => "markup-label",
			Self::LiteralArg => "literal-arg",
			Self::VariableArg => "variable-arg",
			Self::LiteralString => "literal-string",
			Self::Arrow => "arrow",
			Self::MarkupComment => "markup-comment",
			Self::Error => "error",
			Self::None => "none",
		}
	}
	/// Whether the host should apply any styling at all.
	pub const fn is_styled(self) -> bool { !matches!(self, Self::None) }
}

impl fmt::Display for Style {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}
