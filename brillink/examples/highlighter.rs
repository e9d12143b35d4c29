// SPDX-License-Identifier: MIT OR Apache-2.0
//! Basic demo of the lexer, reads from stdin and prints with ANSI colors
#![expect(clippy::print_stdout, reason = "binary")]

use std::io::{Read, stdin};

use brillink::Style;
use brillink::highlight::{Highlighter, Settings};

fn color(style: Style) -> &'static str {
	match style {
		Style::Header => "1;34",
		Style::MarkupTag => "35",
		Style::SectionTag => "4;36",
		Style::MarkupLabel => "33",
		Style::LiteralArg | Style::LiteralString => "32",
		Style::VariableArg => "36",
		Style::Arrow => "1;35",
		Style::MarkupComment => "2",
		Style::Error => "31",
		Style::None => "0",
	}
}

fn main() {
	let mut text = String::new();
	stdin()
		.read_to_string(&mut text)
		.expect("failed to read input");
	let highlighter = Highlighter::from_text(&text, Settings::default());
	for (line, tokens) in highlighter.lines() {
		// in a real world use you'd map styles onto the editor's theme instead
		for token in tokens {
			print!("\x1b[{}m{}", color(token.style), &line[token.span.clone()]);
		}
		println!("\x1b[0m");
	}
}
