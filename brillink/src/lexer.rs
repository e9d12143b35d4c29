// SPDX-License-Identifier: MIT OR Apache-2.0
//! Turn lines of text into styled tokens.
//!
//! You probably want to start at [`step`].
//!
//! Each call runs the first rule that claims the cursor, in order:
//! 1. block comments (`{- -}`, nested)
//! 2. the line-start dispatcher (headers and tags, only at column zero)
//! 3. whatever obligation an earlier call on this line left pending
//! 4. a single character of plain prose

use crate::cursor::LineCursor;
use crate::scan;
use crate::state::{LexerState, Obligation};
use crate::style::Style;
use crate::trace::{Decision, LineKind, PropertyKind, Trace};


// in priority order, prose is the fallback
fn rules<C, T>() -> [fn(&mut C, &mut LexerState, &mut T) -> Option<Style>; 3]
where
	C: LineCursor,
	T: Trace + ?Sized,
{
	[comment::<C, T>, line_start::<C, T>, resolve::<C, T>]
}

/// Lex one token from `cursor`, updating `state`.
///
/// Always consumes at least one character, unless the cursor is already at
/// the end of the line, in which case it returns [`Style::None`] and drops any
/// pending obligation. Call it until [`LineCursor::is_eol`], then move on to
/// the next line with the same state.
pub fn step<C: LineCursor>(cursor: &mut C, state: &mut LexerState) -> Style {
	step_traced(cursor, state, &mut ())
}

/// [`step`], reporting each decision to `trace`.
pub fn step_traced<C, T>(cursor: &mut C, state: &mut LexerState, trace: &mut T) -> Style
where
	C: LineCursor,
	T: Trace + ?Sized,
{
	if cursor.is_eol() {
		state.end_line();
		trace.decision(Decision::EndOfLine);
		return Style::None;
	}
	if cursor.is_sol() {
		// whatever the previous line left pending is stale
		state.end_line();
	}
	rules()
		.into_iter()
		.find_map(|rule| rule(cursor, state, trace))
		.unwrap_or_else(|| prose(cursor, trace))
}

/// Arm `obligation` unless there's nothing left on the line for it.
fn arm<C: LineCursor>(cursor: &C, state: &mut LexerState, obligation: Obligation) {
	if !cursor.is_eol() {
		state.obligation = obligation;
	}
}

fn comment<C, T>(cursor: &mut C, state: &mut LexerState, trace: &mut T) -> Option<Style>
where
	C: LineCursor,
	T: Trace + ?Sized,
{
	if state.in_comment() {
		if cursor.match_str(scan::COMMENT_CLOSE, true) {
			state.comment_depth -= 1;
		} else if cursor.match_str(scan::COMMENT_OPEN, true) {
			state.comment_depth += 1;
		} else {
			cursor.next_char();
		}
		trace.decision(Decision::Comment {
			depth: state.comment_depth,
		});
		return Some(Style::MarkupComment);
	}
	let opener: fn(&str) -> Option<usize> = if cursor.is_sol() {
		scan::indented_comment_open
	} else {
		scan::comment_open
	};
	if cursor.match_with(opener, true) {
		state.comment_depth = 1;
		trace.decision(Decision::CommentOpen);
		return Some(Style::MarkupComment);
	}
	None
}

fn line_start<C, T>(cursor: &mut C, state: &mut LexerState, trace: &mut T) -> Option<Style>
where
	C: LineCursor,
	T: Trace + ?Sized,
{
	if !cursor.is_sol() {
		return None;
	}
	let indentation = cursor.indentation();
	let indented = cursor.eat_space();
	let (kind, style) = if cursor.match_str("##", true) {
		cursor.eat_space();
		let kind = if cursor.is_eol() {
			LineKind::BareHeader
		} else if cursor.match_str(scan::LABEL_MARKER, false) {
			state.obligation = Obligation::Properties;
			LineKind::LabeledHeader
		} else {
			state.obligation = Obligation::StitchName;
			LineKind::StitchHeader
		};
		(kind, Style::Header)
	} else if cursor.match_str("#", true) {
		if let Some(label) = cursor.rest().find(scan::LABEL_MARKER) {
			cursor.advance(label);
			state.obligation = Obligation::Properties;
			(LineKind::TitleWithLabel, Style::Header)
		} else {
			cursor.skip_to_end();
			(LineKind::Title, Style::Header)
		}
	} else if matches!(cursor.peek(), Some('!' | '?')) {
		cursor.next_char();
		if cursor.match_with(scan::then_spaces(scan::tag_name), true) {
			arm(cursor, state, Obligation::Properties);
			(LineKind::Tag, Style::MarkupTag)
		} else {
			// just the marker, the rest is prose
			(LineKind::MalformedTag, Style::Error)
		}
	} else {
		trace.decision(Decision::LineStart {
			kind: LineKind::Prose,
			indentation,
		});
		// nothing claimed but the indentation, if any
		return indented.then_some(Style::None);
	};
	trace.decision(Decision::LineStart { kind, indentation });
	Some(style)
}

fn resolve<C, T>(cursor: &mut C, state: &mut LexerState, trace: &mut T) -> Option<Style>
where
	C: LineCursor,
	T: Trace + ?Sized,
{
	let obligation = state.take_obligation();
	if obligation != Obligation::None {
		trace.decision(Decision::Resolve(obligation));
	}
	Some(match obligation {
		Obligation::None => return None,
		Obligation::StitchName | Obligation::ArrowTarget => {
			if cursor.match_with(scan::then_spaces(scan::ident), true) {
				Style::SectionTag
			} else {
				cursor.next_char();
				Style::Error
			}
		}
		Obligation::Properties => properties(cursor, state, trace),
		Obligation::StringTail => {
			cursor.next_char();
			arm(cursor, state, Obligation::StringTail);
			Style::Error
		}
	})
}

fn properties<C, T>(cursor: &mut C, state: &mut LexerState, trace: &mut T) -> Style
where
	C: LineCursor,
	T: Trace + ?Sized,
{
	let (kind, style) = if cursor.match_with(scan::then_spaces(scan::label), true) {
		(PropertyKind::Label, Style::MarkupLabel)
	} else if cursor.match_with(scan::then_spaces(scan::integer), true) {
		(PropertyKind::Integer, Style::LiteralArg)
	} else if cursor.match_with(scan::then_spaces(scan::ident), true) {
		(PropertyKind::Bareword, Style::VariableArg)
	} else if cursor.match_with(scan::then_spaces(scan::string), true) {
		(PropertyKind::String, Style::LiteralString)
	} else if cursor.match_with(scan::then_spaces(scan::arrow), true) {
		// a dangling arrow ends the list
		arm(cursor, state, Obligation::ArrowTarget);
		trace.decision(Decision::Property(PropertyKind::Arrow));
		return Style::Arrow;
	} else if scan::unterminated_string(cursor.rest()) {
		cursor.next_char();
		arm(cursor, state, Obligation::StringTail);
		trace.decision(Decision::Property(PropertyKind::UnterminatedString));
		return Style::Error;
	} else if cursor.next_char().is_some() {
		(PropertyKind::Malformed, Style::Error)
	} else {
		trace.decision(Decision::Property(PropertyKind::Exhausted));
		return Style::None;
	};
	arm(cursor, state, Obligation::Properties);
	trace.decision(Decision::Property(kind));
	style
}

fn prose<C, T>(cursor: &mut C, trace: &mut T) -> Style
where
	C: LineCursor,
	T: Trace + ?Sized,
{
	cursor.next_char();
	trace.decision(Decision::Prose);
	Style::None
}
