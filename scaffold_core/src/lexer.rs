use std::ops::Range;

use logos::Logos;
use snailquote::unescape;

use crate::tokens::SpannedToken;
use crate::tokens::Token;

/// Raw tokens produced by logos for flat tokenization of router source.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
	#[token("//")]
	LineComment,
	#[token("/*")]
	BlockComment,
	#[token(".")]
	Dot,
	#[token("(")]
	ParenOpen,
	#[token(")")]
	ParenClose,
	#[token("{")]
	BraceOpen,
	#[token("}")]
	BraceClose,
	#[token(",")]
	Comma,
	#[token(";")]
	Semicolon,
	#[token("=>")]
	Arrow,
	#[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
	Ident,
	#[regex(r#""([^"\\]|\\.)*""#)]
	DoubleQuotedString,
	#[regex(r"'([^'\\]|\\.)*'")]
	SingleQuotedString,
	#[regex(r"`([^`\\]|\\.)*`")]
	TemplateString,
}

/// Structural tokens of a source together with the byte spans of the
/// comments skipped between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
	pub tokens: Vec<SpannedToken>,
	pub comments: Vec<Range<usize>>,
}

/// Tokenize `source` into structural tokens with their byte spans.
///
/// Comments are consumed and never produce tokens, so braces or quotes
/// inside them do not affect block matching. Bytes that are not part of the
/// narrow router grammar become [`Token::Other`]; tokenizing never fails.
pub fn tokenize(source: &str) -> Vec<SpannedToken> {
	lex(source).tokens
}

/// Like [`tokenize`], but also keeps the span of every comment.
pub fn lex(source: &str) -> Lexed {
	let mut lexer = RawToken::lexer(source);
	let mut tokens = Vec::new();
	let mut comments = Vec::new();

	while let Some(result) = lexer.next() {
		let span = lexer.span();
		let token = match result {
			Ok(RawToken::LineComment) => {
				let rest = lexer.remainder();
				let len = rest.find('\n').unwrap_or(rest.len());
				lexer.bump(len);
				comments.push(span.start..span.end + len);
				continue;
			}
			Ok(RawToken::BlockComment) => {
				let rest = lexer.remainder();
				let len = rest.find("*/").map_or(rest.len(), |idx| idx + 2);
				lexer.bump(len);
				comments.push(span.start..span.end + len);
				continue;
			}
			Ok(RawToken::Dot) => Token::Dot,
			Ok(RawToken::ParenOpen) => Token::ParenOpen,
			Ok(RawToken::ParenClose) => Token::ParenClose,
			Ok(RawToken::BraceOpen) => Token::BraceOpen,
			Ok(RawToken::BraceClose) => Token::BraceClose,
			Ok(RawToken::Comma) => Token::Comma,
			Ok(RawToken::Semicolon) => Token::Semicolon,
			Ok(RawToken::Arrow) => Token::Arrow,
			Ok(RawToken::Ident) => Token::Ident(source[span.clone()].to_string()),
			Ok(RawToken::DoubleQuotedString) => string_token(source, &span, b'"'),
			Ok(RawToken::SingleQuotedString) => string_token(source, &span, b'\''),
			Ok(RawToken::TemplateString) => {
				let inner = &source[span.start + 1..span.end - 1];
				Token::String(inner.to_string(), b'`')
			}
			Err(()) => Token::Other,
		};

		tokens.push(SpannedToken { token, span });
	}

	Lexed { tokens, comments }
}

/// Strip the surrounding quotes and unescape the literal if needed. An
/// escape sequence that cannot be decoded turns the literal into
/// [`Token::Other`] so it never matches an entry.
fn string_token(source: &str, span: &Range<usize>, delimiter: u8) -> Token {
	let inner = &source[span.start + 1..span.end - 1];

	if !inner.contains('\\') {
		return Token::String(inner.to_string(), delimiter);
	}

	match unescape(inner) {
		Ok(value) => Token::String(value, delimiter),
		Err(_) => Token::Other,
	}
}
