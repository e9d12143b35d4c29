// SPDX-License-Identifier: MIT OR Apache-2.0
//! Observing what the lexer decides.
//!
//! Pass a [`Trace`] to [`step_traced`] to see each dispatch decision, e.g.
//! [`LogTrace`] to send them to [`log`], or a `Vec<Decision>` to collect them.
//!
//! [`step_traced`]: crate::step_traced

use crate::state::Obligation;

/// What kind of line the line-start dispatcher found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
	/// `##` header followed by a stitch name.
	StitchHeader,
	/// `##` header followed by a property list.
	LabeledHeader,
	/// `##` header with nothing after it.
	BareHeader,
	/// `#` header containing a property list.
	TitleWithLabel,
	/// `#` header.
	Title,
	/// `!` / `?` tag with a name.
	Tag,
	/// `!` / `?` without a usable name.
	MalformedTag,
	/// Anything else.
	Prose,
}

/// Which property-list rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
	/// `|> name`
	Label,
	/// `123`
	Integer,
	/// `name`
	Bareword,
	/// `"text"`
	String,
	/// `"` without a closing quote.
	UnterminatedString,
	/// `->`
	Arrow,
	/// One character that fits no rule.
	Malformed,
	/// Nothing left on the line.
	Exhausted,
}

/// A single decision made by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
	/// Inside a block comment, with the depth after this call.
	Comment {
		/// Comment depth after this call.
		depth: usize,
	},
	/// Opened a block comment outside of one.
	CommentOpen,
	/// Classified a line at its start.
	LineStart {
		/// Line classification.
		kind: LineKind,
		/// Column of the first non-space character.
		indentation: usize,
	},
	/// Resolved a pending obligation.
	Resolve(Obligation),
	/// Ran the property-list scanner.
	Property(PropertyKind),
	/// Consumed a character of unclaimed prose.
	Prose,
	/// Nothing left on the line.
	EndOfLine,
}

/// Receiver of lexer decisions.
pub trait Trace {
	/// Called once for each decision.
	fn decision(&mut self, decision: Decision);
}

/// Ignore everything.
impl Trace for () {
	fn decision(&mut self, _decision: Decision) {}
}

/// Collect every decision.
impl Trace for Vec<Decision> {
	fn decision(&mut self, decision: Decision) { self.push(decision); }
}

/// Forward decisions to [`log`] at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl Trace for LogTrace {
	fn decision(&mut self, decision: Decision) {
		log::trace!(target: "brillink::lexer", "{decision:?}");
	}
}
