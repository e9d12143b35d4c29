// SPDX-License-Identifier: MIT OR Apache-2.0
//! Recognizers for the small lexical forms of brillink.
//!
//! Each takes the rest of a line and returns the byte length of the form at
//! its start, or [`None`] if it isn't there. They're meant to be passed to
//! [`LineCursor::match_with`].
//!
//! [`LineCursor::match_with`]: crate::LineCursor::match_with


/// `{-`
pub const COMMENT_OPEN: &str = "{-";
/// `-}`
pub const COMMENT_CLOSE: &str = "-}";
/// `|>`
pub const LABEL_MARKER: &str = "|>";
/// `->`
pub const ARROW: &str = "->";

const fn is_space(ch: char) -> bool { matches!(ch, ' ' | '\t') }

const fn is_ident_tail(ch: char) -> bool {
	matches!(ch, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-')
}

const fn is_string_body(ch: char) -> bool {
	matches!(ch,
		'a'..='z' | 'A'..='Z' | '0'..='9'
		| '(' | ')' | '/' | '\\' | ' ' | '_' | ',' | '.' | '!' | '?' | '\'' | '-'
	)
}

/// Run of spaces and tabs, possibly empty.
pub fn spaces(text: &str) -> usize { text.len() - text.trim_start_matches(is_space).len() }

/// Lowercase-led identifier, `[a-z][A-Za-z0-9_-]*`.
pub fn ident(text: &str) -> Option<usize> {
	let rest = text.strip_prefix(|ch: char| ch.is_ascii_lowercase())?;
	Some(text.len() - rest.trim_start_matches(is_ident_tail).len())
}

/// Tag name after `!` / `?`: an identifier, optionally preceded by spaces.
pub fn tag_name(text: &str) -> Option<usize> {
	let lead = spaces(text);
	Some(lead + ident(&text[lead..])?)
}

/// Property label, `|>` then an identifier, optionally space-separated.
pub fn label(text: &str) -> Option<usize> {
	let rest = text.strip_prefix(LABEL_MARKER)?;
	Some(LABEL_MARKER.len() + tag_name(rest)?)
}

/// Decimal digits.
pub fn integer(text: &str) -> Option<usize> {
	let len = text.len() - text.trim_start_matches(|ch: char| ch.is_ascii_digit()).len();
	(len > 0).then_some(len)
}

/// Double-quoted string closed on the same line, with a restricted body.
///
/// There are no escapes, `\` is just another body character.
pub fn string(text: &str) -> Option<usize> {
	let body = text.strip_prefix('"')?;
	let rest = body.trim_start_matches(is_string_body);
	rest.starts_with('"').then(|| text.len() - rest.len() + 1)
}

/// A `"` that has no closing quote anywhere later on the line.
pub fn unterminated_string(text: &str) -> bool {
	text.strip_prefix('"').is_some_and(|body| !body.contains('"'))
}

/// `->`
pub fn arrow(text: &str) -> Option<usize> { text.starts_with(ARROW).then_some(ARROW.len()) }

/// `{-`
pub fn comment_open(text: &str) -> Option<usize> {
	text.starts_with(COMMENT_OPEN).then_some(COMMENT_OPEN.len())
}

/// `{-` after any leading spaces, used at the start of a line.
pub fn indented_comment_open(text: &str) -> Option<usize> {
	let lead = spaces(text);
	Some(lead + comment_open(&text[lead..])?)
}

/// Extend a recognizer to also take any spaces after its match.
pub fn then_spaces(pattern: fn(&str) -> Option<usize>) -> impl Fn(&str) -> Option<usize> {
	move |text| {
		let len = pattern(text)?;
		Some(len + spaces(&text[len..]))
	}
}
