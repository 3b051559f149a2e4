use crate::ResourceToken;
use crate::RouteGrammar;
use crate::RouterDocument;

/// Index of the first body line that is an entry for `token`.
///
/// Matching is exact on the unescaped token, so `users` never matches an
/// entry for `users-profile`. Lines that only resemble an entry (a call split
/// over several lines, extra arguments) are not matched, and neither are
/// lines inside a multi-line comment or string.
pub fn find_entry(
	document: &RouterDocument,
	token: &ResourceToken,
	grammar: &RouteGrammar,
) -> Option<usize> {
	document.live_lines().find_map(|(idx, line)| {
		(grammar.entry_token(line).as_deref() == Some(token.as_str())).then_some(idx)
	})
}

/// Return a new body with an entry for `token` prepended.
///
/// The indentation is copied from the first non-blank line of the body. An
/// empty body is indented one level deeper than the block's opening line.
/// The caller must check [`find_entry`] first.
pub fn prepend_entry(
	document: &RouterDocument,
	token: &ResourceToken,
	grammar: &RouteGrammar,
) -> Vec<String> {
	let indent = document
		.body
		.iter()
		.find(|line| !is_blank(line))
		.map_or_else(
			|| format!("{}{}", document.opening_indent(), grammar.indent()),
			|line| leading_whitespace(line).to_string(),
		);

	let mut body = Vec::with_capacity(document.body.len() + 1);
	body.push(grammar.render_entry(&indent, token, document.line_ending()));
	body.extend(document.body.iter().cloned());
	body
}

/// Return a new body without the line at `index`.
///
/// If the removed line sat between two blank lines, one of them is dropped
/// so the spacing around it does not double. Other blank lines are kept.
pub fn remove_entry_at(body: &[String], index: usize) -> Vec<String> {
	let mut body = body.to_vec();
	if index >= body.len() {
		return body;
	}

	body.remove(index);

	let between_blanks = index > 0
		&& body.get(index - 1).is_some_and(|line| is_blank(line))
		&& body.get(index).is_some_and(|line| is_blank(line));
	if between_blanks {
		body.remove(index);
	}

	body
}

fn is_blank(line: &str) -> bool {
	line.trim().is_empty()
}

fn leading_whitespace(line: &str) -> &str {
	&line[..line.len() - line.trim_start().len()]
}
