use serde::Serialize;

use std::ops::Range;

use crate::RouteGrammar;
use crate::lexer::Lexed;
use crate::lexer::lex;
use crate::tokens::SpannedToken;
use crate::tokens::Token;

/// A router file split around its routes block.
///
/// `prefix` runs up to and including the line that opens the block, `body`
/// holds the lines inside it (each with its own line terminator, blank lines
/// included) and `suffix` starts at the line holding the closing brace.
/// Concatenating the three reproduces the original content byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterDocument {
	pub prefix: String,
	pub body: Vec<String>,
	pub suffix: String,
	opening_indent: String,
	line_ending: &'static str,
	/// Body lines that start inside a comment or string opened on an
	/// earlier line.
	inert: Vec<bool>,
}

/// An entry found inside the routes block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedEntry {
	/// The resource token named by the entry.
	pub token: String,
	/// 1-indexed line number of the entry in the router file.
	pub line: usize,
}

impl RouterDocument {
	/// Leading whitespace of the line that opens the block.
	pub fn opening_indent(&self) -> &str {
		&self.opening_indent
	}

	/// Line terminator of the opening line, reused for inserted lines.
	pub fn line_ending(&self) -> &'static str {
		self.line_ending
	}

	/// Reassemble the document with a replacement body.
	pub fn render_with(&self, body: &[String]) -> String {
		let body_len: usize = body.iter().map(String::len).sum();
		let mut content = String::with_capacity(self.prefix.len() + body_len + self.suffix.len());
		content.push_str(&self.prefix);
		for line in body {
			content.push_str(line);
		}
		content.push_str(&self.suffix);
		content
	}

	/// Reassemble the document unchanged.
	pub fn render(&self) -> String {
		self.render_with(&self.body)
	}

	/// Body lines with their index, leaving out lines that continue a
	/// multi-line comment or string. Only these lines can hold entries.
	pub fn live_lines(&self) -> impl Iterator<Item = (usize, &str)> {
		self.body
			.iter()
			.enumerate()
			.filter(|(idx, _)| !self.inert.get(*idx).copied().unwrap_or(false))
			.map(|(idx, line)| (idx, line.as_str()))
	}

	/// List every entry line in the block, in body order.
	pub fn entries(&self, grammar: &RouteGrammar) -> Vec<ListedEntry> {
		let first_line = self.prefix.matches('\n').count() + 1;

		self.live_lines()
			.filter_map(|(idx, line)| {
				grammar.entry_token(line).map(|token| {
					ListedEntry {
						token,
						line: first_line + idx,
					}
				})
			})
			.collect()
	}
}

/// Find the routes block in `content` and split the document around it.
///
/// Returns `None` when no well-formed block exists: the opening call is
/// missing, its braces never balance, the opening `{` does not end its line
/// (a comment that starts there must close there too) or the closing `}` is
/// not the first thing on its line. When several blocks exist the first one
/// wins.
pub fn locate(content: &str, grammar: &RouteGrammar) -> Option<RouterDocument> {
	let Lexed { tokens, comments } = lex(content);
	let mut candidates =
		(0..tokens.len()).filter_map(|idx| grammar.match_opening(&tokens, idx));

	let Some(open_idx) = candidates.next() else {
		tracing::debug!("no routes block found");
		return None;
	};

	if let Some(duplicate) = candidates.next() {
		let line = line_number(content, tokens[duplicate].span.start);
		tracing::warn!(line, "multiple routes blocks found, using the first one");
	}

	let close_idx = find_closing_brace(&tokens, open_idx)?;
	let open = &tokens[open_idx];
	let close = &tokens[close_idx];

	// The opening brace must end its line.
	let open_line_end = open.span.end + content[open.span.end..].find('\n')?;
	if let Some(next) = tokens.get(open_idx + 1) {
		if next.span.start < open_line_end {
			tracing::debug!(token = %next.token, "routes block opening line has trailing code");
			return None;
		}
	}

	// A comment opened on the opening line must also close on it.
	let crosses_line_end = comments
		.iter()
		.any(|comment| comment.start < open_line_end && comment.end > open_line_end);
	if crosses_line_end {
		tracing::debug!("routes block opening line starts a multi-line comment");
		return None;
	}

	// The closing brace must start its line.
	let close_line_start = content[..close.span.start].rfind('\n').map_or(0, |idx| idx + 1);
	if !content[close_line_start..close.span.start].trim().is_empty() {
		tracing::debug!("routes block closing brace shares a line with other code");
		return None;
	}

	let prefix_end = open_line_end + 1;
	let open_line_start = content[..open.span.start].rfind('\n').map_or(0, |idx| idx + 1);
	let opening_line = &content[open_line_start..open_line_end];
	let opening_indent = &opening_line[..opening_line.len() - opening_line.trim_start().len()];
	let line_ending = if content[..prefix_end].ends_with("\r\n") {
		"\r\n"
	} else {
		"\n"
	};

	let body = content[prefix_end..close_line_start]
		.split_inclusive('\n')
		.map(String::from)
		.collect::<Vec<_>>();

	let inert = inert_lines(&body, prefix_end, &tokens, &comments);

	tracing::debug!(
		line = line_number(content, open.span.start),
		body_lines = body.len(),
		"located routes block"
	);

	Some(RouterDocument {
		prefix: content[..prefix_end].to_string(),
		body,
		suffix: content[close_line_start..].to_string(),
		opening_indent: opening_indent.to_string(),
		line_ending,
		inert,
	})
}

/// Find the index of the `}` that balances the `{` at `open_idx`.
fn find_closing_brace(tokens: &[SpannedToken], open_idx: usize) -> Option<usize> {
	let mut depth = 1usize;

	for (idx, spanned) in tokens.iter().enumerate().skip(open_idx + 1) {
		match spanned.token {
			Token::BraceOpen => depth += 1,
			Token::BraceClose => {
				depth -= 1;
				if depth == 0 {
					return Some(idx);
				}
			}
			_ => {}
		}
	}

	tracing::debug!("routes block is never closed");
	None
}

/// Flag each body line whose first byte lies inside a comment or string
/// literal that began on an earlier line.
fn inert_lines(
	body: &[String],
	body_start: usize,
	tokens: &[SpannedToken],
	comments: &[Range<usize>],
) -> Vec<bool> {
	let strings = tokens
		.iter()
		.filter(|spanned| matches!(spanned.token, Token::String(..)))
		.map(|spanned| &spanned.span);
	let spans: Vec<&Range<usize>> = comments
		.iter()
		.chain(strings)
		.filter(|span| span.end > body_start)
		.collect();

	let mut line_start = body_start;
	body.iter()
		.map(|line| {
			let inside = spans
				.iter()
				.any(|span| span.start < line_start && line_start < span.end);
			line_start += line.len();
			inside
		})
		.collect()
}

/// 1-indexed line number of a byte offset.
fn line_number(content: &str, offset: usize) -> usize {
	content[..offset].matches('\n').count() + 1
}
