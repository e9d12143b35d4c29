// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::cursor::{LineCursor, StrCursor};
use crate::scan;

#[test]
fn start_and_end() {
	let mut cursor = StrCursor::new("ab");
	assert!(cursor.is_sol(), "fresh cursor is at start");
	assert!(!cursor.is_eol(), "fresh cursor has text left");
	assert_eq!(cursor.next_char(), Some('a'));
	assert!(!cursor.is_sol(), "consumed a character");
	assert_eq!(cursor.next_char(), Some('b'));
	assert!(cursor.is_eol(), "consumed everything");
	assert_eq!(cursor.next_char(), None);
	assert_eq!(cursor.position(), 2);
}

#[test]
fn empty_line() {
	let cursor = StrCursor::new("");
	assert!(cursor.is_sol(), "empty line starts");
	assert!(cursor.is_eol(), "empty line also ends");
	assert_eq!(cursor.peek(), None);
}

#[test]
fn peek_and_multibyte() {
	let mut cursor = StrCursor::new("λx");
	assert_eq!(cursor.peek(), Some('λ'));
	assert_eq!(cursor.position(), 0, "peek doesn't consume");
	assert_eq!(cursor.next_char(), Some('λ'));
	assert_eq!(cursor.position(), 2, "positions are in bytes");
	assert_eq!(cursor.rest(), "x");
	assert_eq!(cursor.consumed(), "λ");
}

#[test]
fn match_without_consuming() {
	let mut cursor = StrCursor::new("->x");
	assert!(cursor.match_str("->", false), "arrow is there");
	assert_eq!(cursor.position(), 0, "lookahead only");
	assert!(!cursor.match_str("x", true), "x isn't first");
	assert!(cursor.match_str("->", true), "arrow is still there");
	assert_eq!(cursor.rest(), "x");
}

#[test]
fn match_with_recognizer() {
	let mut cursor = StrCursor::new("name  rest");
	assert!(!cursor.match_with(scan::integer, true), "not a number");
	assert!(cursor.match_with(scan::ident, false), "an identifier");
	assert_eq!(cursor.position(), 0, "lookahead only");
	assert!(cursor.match_with(scan::then_spaces(scan::ident), true), "identifier again");
	assert_eq!(cursor.rest(), "rest");
}

#[test]
fn eat_space_and_skip() {
	let mut cursor = StrCursor::new(" \t x y");
	assert!(cursor.eat_space(), "ate some space");
	assert!(!cursor.eat_space(), "nothing left to eat");
	assert_eq!(cursor.peek(), Some('x'));
	cursor.skip_to_end();
	assert!(cursor.is_eol(), "skipped everything");
	assert_eq!(cursor.consumed(), " \t x y");
}

#[test]
fn back_up() {
	let mut cursor = StrCursor::new("aλb");
	cursor.skip_to_end();
	cursor.back_up(2);
	assert_eq!(cursor.rest(), "λb");
	cursor.back_up(5);
	assert!(cursor.is_sol(), "backing up stops at the start");
}

#[test]
fn advance_clamps() {
	let mut cursor = StrCursor::new("abc");
	cursor.advance(10);
	assert!(cursor.is_eol(), "clamped to the end");
	assert_eq!(cursor.position(), 3);
}

#[test]
fn indentation() {
	assert_eq!(StrCursor::new("abc").indentation(), 0);
	assert_eq!(StrCursor::new("   abc").indentation(), 3);
	assert_eq!(StrCursor::new("\tabc").indentation(), 4);
	assert_eq!(StrCursor::new("  \tabc").indentation(), 4);
	assert_eq!(StrCursor::new(" \t abc").with_tab_width(2).indentation(), 3);
	// measured from the line start, wherever the cursor is
	let mut cursor = StrCursor::new("  abc");
	cursor.skip_to_end();
	assert_eq!(cursor.indentation(), 2);
}
