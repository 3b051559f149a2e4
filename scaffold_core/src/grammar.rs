use crate::ScaffoldError;
use crate::ScaffoldResult;
use crate::lexer::tokenize;
use crate::tokens::SpannedToken;
use crate::tokens::Token;

/// Default dotted callee that opens the routes block.
pub const DEFAULT_MAP_CALL: &str = "Router.map";
/// Default method used by entry lines, as in `this.resource('users');`.
pub const DEFAULT_ENTRY_CALL: &str = "resource";
/// Default indentation unit used when a block body has no lines to copy from.
pub const DEFAULT_INDENT: &str = "  ";

/// The narrow grammar recognised inside a router file: the block-opening
/// call, and the single-line entry calls inside its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGrammar {
	map_call: Vec<String>,
	entry_call: String,
	indent: String,
}

impl Default for RouteGrammar {
	fn default() -> Self {
		Self {
			map_call: DEFAULT_MAP_CALL.split('.').map(String::from).collect(),
			entry_call: DEFAULT_ENTRY_CALL.to_string(),
			indent: DEFAULT_INDENT.to_string(),
		}
	}
}

impl RouteGrammar {
	/// Build a grammar from a dotted map callee (e.g. `Router.map`), an entry
	/// method name (e.g. `resource`) and the indentation unit.
	pub fn new(
		map_call: impl AsRef<str>,
		entry_call: impl Into<String>,
		indent: impl Into<String>,
	) -> ScaffoldResult<Self> {
		let map_call = map_call.as_ref();
		let segments: Vec<String> = map_call.split('.').map(String::from).collect();
		if !segments.iter().all(|segment| is_identifier(segment)) {
			return Err(ScaffoldError::InvalidMapCall(map_call.to_string()));
		}

		let entry_call = entry_call.into();
		if !is_identifier(&entry_call) {
			return Err(ScaffoldError::InvalidEntryCall(entry_call));
		}

		Ok(Self {
			map_call: segments,
			entry_call,
			indent: indent.into(),
		})
	}

	pub fn entry_call(&self) -> &str {
		&self.entry_call
	}

	/// One level of indentation.
	pub fn indent(&self) -> &str {
		&self.indent
	}

	/// If the tokens starting at `start` spell the block-opening call, return
	/// the index of its `{` token.
	///
	/// Accepts `<map_call>(function() {` and `<map_call>(() => {`.
	pub(crate) fn match_opening(&self, tokens: &[SpannedToken], start: usize) -> Option<usize> {
		let mut cursor = start;

		for (idx, segment) in self.map_call.iter().enumerate() {
			if idx > 0 {
				expect(tokens, &mut cursor, |t| *t == Token::Dot)?;
			}
			expect(tokens, &mut cursor, |t| t.is_ident(segment))?;
		}
		expect(tokens, &mut cursor, |t| *t == Token::ParenOpen)?;

		let is_function = tokens.get(cursor).is_some_and(|t| t.token.is_ident("function"));
		if is_function {
			cursor += 1;
			expect(tokens, &mut cursor, |t| *t == Token::ParenOpen)?;
			expect(tokens, &mut cursor, |t| *t == Token::ParenClose)?;
		} else {
			expect(tokens, &mut cursor, |t| *t == Token::ParenOpen)?;
			expect(tokens, &mut cursor, |t| *t == Token::ParenClose)?;
			expect(tokens, &mut cursor, |t| *t == Token::Arrow)?;
		}

		expect(tokens, &mut cursor, |t| *t == Token::BraceOpen)?;
		Some(cursor - 1)
	}

	/// Return the resource token named by `line` if it is an entry line:
	/// `this.<entry_call>('<token>')` with an optional trailing `;`.
	///
	/// Both quote styles are accepted. Lines with any other shape (extra
	/// arguments, callbacks, template literals, a different method) are not
	/// entries.
	pub fn entry_token(&self, line: &str) -> Option<String> {
		let tokens = tokenize(line);
		let tokens: Vec<&Token> = tokens.iter().map(|t| &t.token).collect();

		let [
			this,
			Token::Dot,
			call,
			Token::ParenOpen,
			Token::String(value, b'\'' | b'"'),
			Token::ParenClose,
			rest @ ..,
		] = tokens.as_slice()
		else {
			return None;
		};

		if !this.is_ident("this") || !call.is_ident(&self.entry_call) {
			return None;
		}

		matches!(rest, [] | [Token::Semicolon]).then(|| value.clone())
	}

	/// Render an entry line in canonical form, terminated by `line_ending`.
	pub fn render_entry(&self, indent: &str, token: &str, line_ending: &str) -> String {
		format!("{indent}this.{}('{token}');{line_ending}", self.entry_call)
	}
}

fn expect(
	tokens: &[SpannedToken],
	cursor: &mut usize,
	predicate: impl Fn(&Token) -> bool,
) -> Option<()> {
	let token = tokens.get(*cursor)?;
	if predicate(&token.token) {
		*cursor += 1;
		Some(())
	} else {
		None
	}
}

/// Check whether `value` is a JavaScript-style identifier.
fn is_identifier(value: &str) -> bool {
	let mut chars = value.chars();
	let Some(first) = chars.next() else {
		return false;
	};

	(first.is_ascii_alphabetic() || first == '_' || first == '$')
		&& chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
}
