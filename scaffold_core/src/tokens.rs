use std::fmt::Display;
use std::ops::Range;

/// Structural tokens of the router grammar. Everything the grammar does not
/// care about collapses into [`Token::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// An identifier, e.g. `Router` or `resource`
	Ident(String),
	/// `.`
	Dot,
	/// `(`
	ParenOpen,
	/// `)`
	ParenClose,
	/// `{`
	BraceOpen,
	/// `}`
	BraceClose,
	/// `,`
	Comma,
	/// `;`
	Semicolon,
	/// `=>`
	Arrow,
	/// A string literal with its unescaped value and quote delimiter.
	String(String, u8),
	/// Any byte sequence outside the grammar.
	Other,
}

impl Token {
	/// Returns true if this token is the identifier `name`.
	pub fn is_ident(&self, name: &str) -> bool {
		matches!(self, Token::Ident(value) if value == name)
	}
}

impl Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Token::Ident(ident) => write!(f, "{ident}"),
			Token::Dot => write!(f, "."),
			Token::ParenOpen => write!(f, "("),
			Token::ParenClose => write!(f, ")"),
			Token::BraceOpen => write!(f, "{{"),
			Token::BraceClose => write!(f, "}}"),
			Token::Comma => write!(f, ","),
			Token::Semicolon => write!(f, ";"),
			Token::Arrow => write!(f, "=>"),
			Token::String(value, delimiter) => {
				let ch = *delimiter as char;
				write!(f, "{ch}{value}{ch}")
			}
			Token::Other => write!(f, "?"),
		}
	}
}

/// A token together with its byte range in the tokenized source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
	pub token: Token,
	pub span: Range<usize>,
}
