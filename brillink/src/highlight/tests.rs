// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::highlight::{HighlightError, Highlighter, Settings, Token, tokenize_line};
use crate::state::{LexerState, Obligation};
use crate::style::Style;

const DOCUMENT: &str = "# The inn
## arrival
You walk in. {- draft -}
! ask keeper |> mood grumpy -> keeper-talk
{- the rest
   is unfinished
-}
? leave -> outside";

fn styles(highlighter: &Highlighter, index: usize) -> Vec<Style> {
	highlighter
		.tokens(index)
		.unwrap_or_default()
		.iter()
		.map(|token| token.style)
		.collect()
}

fn assert_fresh(highlighter: &Highlighter) {
	let text = highlighter
		.lines()
		.map(|(line, _)| line)
		.collect::<Vec<_>>()
		.join("\n");
	let fresh = Highlighter::from_text(&text, *highlighter.settings());
	for index in 0..=highlighter.line_count() {
		assert_eq!(
			highlighter.state_before(index),
			fresh.state_before(index),
			"state before line {index}"
		);
		assert_eq!(
			highlighter.tokens(index),
			fresh.tokens(index),
			"tokens of line {index}"
		);
	}
}

#[test]
fn tokenize_spans() {
	let mut state = LexerState::new();
	let tokens = tokenize_line("## intro", &mut state, &Settings::default());
	assert_eq!(
		tokens,
		[
			Token {
				style: Style::Header,
				span: 0..3,
			},
			Token {
				style: Style::SectionTag,
				span: 3..8,
			},
		],
		"wrong tokens"
	);
	assert_eq!(state, LexerState::new(), "nothing left pending");
}

#[test]
fn tokenize_drops_obligation() {
	let mut state = LexerState::new();
	let tokens = tokenize_line("! tag ->", &mut state, &Settings::default());
	assert_eq!(tokens.len(), 2, "tag and arrow");
	assert_eq!(state.obligation, Obligation::None, "line ended");
}

#[test]
fn tokenize_traced() {
	let settings = Settings {
		trace: true,
		..Settings::default()
	};
	let mut traced = LexerState::new();
	let mut silent = LexerState::new();
	assert_eq!(
		tokenize_line("! a 1 \"x", &mut traced, &settings),
		tokenize_line("! a 1 \"x", &mut silent, &Settings::default()),
		"tracing doesn't change tokens"
	);
}

#[test]
fn whole_document() {
	let highlighter = Highlighter::from_text(DOCUMENT, Settings::default());
	assert_eq!(highlighter.line_count(), 8);
	assert_eq!(styles(&highlighter, 0), [Style::Header]);
	assert_eq!(styles(&highlighter, 1), [Style::Header, Style::SectionTag]);
	assert_eq!(
		styles(&highlighter, 3),
		[
			Style::MarkupTag,
			Style::VariableArg,
			Style::MarkupLabel,
			Style::VariableArg,
			Style::Arrow,
			Style::SectionTag,
		]
	);
	assert!(
		styles(&highlighter, 5)
			.iter()
			.all(|&style| style == Style::MarkupComment),
		"inside the comment"
	);
	assert_eq!(highlighter.state_before(5).map(|state| state.comment_depth), Some(1));
	assert_eq!(
		styles(&highlighter, 7),
		[Style::MarkupTag, Style::Arrow, Style::SectionTag]
	);
	assert_eq!(highlighter.end_state(), LexerState::new());
	assert_eq!(highlighter.state_before(8), Some(LexerState::new()));
	assert_eq!(highlighter.state_before(9), None);
	assert_eq!(highlighter.tokens(8), None);
}

#[test]
fn local_edit_converges() {
	let mut highlighter = Highlighter::from_text(DOCUMENT, Settings::default());
	let lexed = highlighter
		.replace_lines(2..3, ["You stroll in."])
		.expect("valid range");
	assert_eq!(lexed, 1, "only the edited line");
	assert_eq!(highlighter.line(2), Some("You stroll in."));
	assert_fresh(&highlighter);
}

#[test]
fn opening_comment_relexes_rest() {
	let mut highlighter = Highlighter::from_text(DOCUMENT, Settings::default());
	let lexed = highlighter
		.replace_lines(1..2, ["{- ## arrival"])
		.expect("valid range");
	assert_eq!(lexed, 7, "every line after the edit changed state");
	assert_eq!(highlighter.end_state().comment_depth, 1, "one comment never closes");
	assert_fresh(&highlighter);
	assert_eq!(styles(&highlighter, 7).first(), Some(&Style::MarkupComment));
}

#[test]
fn closing_comment_relexes_rest() {
	let mut highlighter = Highlighter::from_text(DOCUMENT, Settings::default());
	highlighter
		.replace_lines(6..7, Vec::<String>::new())
		.expect("valid range");
	assert_eq!(highlighter.line_count(), 7);
	assert_eq!(highlighter.end_state().comment_depth, 1);
	highlighter
		.replace_lines(4..5, ["{- the rest -}"])
		.expect("valid range");
	assert_eq!(highlighter.end_state(), LexerState::new());
	assert_fresh(&highlighter);
}

#[test]
fn insert_and_append() {
	let mut highlighter = Highlighter::new(Settings::default());
	assert_eq!(highlighter.replace_lines(0..0, ["! a", "b"]), Ok(2));
	assert_eq!(highlighter.replace_lines(2..2, ["{-"]), Ok(1));
	assert_eq!(highlighter.end_state().comment_depth, 1);
	assert_eq!(highlighter.replace_lines(1..1, ["## x"]), Ok(1), "converges right away");
	assert_eq!(highlighter.line_count(), 4);
	assert_fresh(&highlighter);
}

#[test]
fn invalid_ranges() {
	let mut highlighter = Highlighter::from_text("a\nb", Settings::default());
	assert_eq!(
		highlighter.replace_lines(1..3, ["x"]),
		Err(HighlightError::InvalidRange(1..3, 2))
	);
	let (start, end) = (2, 1);
	assert_eq!(
		highlighter.replace_lines(start..end, ["x"]),
		Err(HighlightError::InvalidRange(start..end, 2))
	);
	assert_eq!(
		HighlightError::InvalidRange(1..3, 2).to_string(),
		"Invalid line range 1..3 in a document of 2 lines"
	);
	assert_eq!(highlighter.line(1), Some("b"), "document untouched");
}
