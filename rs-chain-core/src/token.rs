use std::collections::VecDeque;
use std::fmt;

use crate::error::{ChainError, Result};

/// Text used for every `Token::Quote`.
pub const QUOTE_TEXT: &str = "'";

/// Kind of a lexer token, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
	Word,
	Integer,
	Floating,
	Quote,
	Paren,
	String,
	Empty,
}

/// A typed lexer token.
///
/// Every variant except `Empty` has a text form, which is what the
/// Markov chain uses as node identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
	Word(String),
	Integer(String),
	Floating(String),
	/// A lone single quote.
	Quote,
	/// Parenthesis or any other single punctuation character.
	Paren(String),
	/// A double-quoted string literal, quotes included.
	Str(String),
	/// End marker; carries no text.
	Empty,
}

impl Token {
	pub fn kind(&self) -> TokenKind {
		match self {
			Token::Word(_) => TokenKind::Word,
			Token::Integer(_) => TokenKind::Integer,
			Token::Floating(_) => TokenKind::Floating,
			Token::Quote => TokenKind::Quote,
			Token::Paren(_) => TokenKind::Paren,
			Token::Str(_) => TokenKind::String,
			Token::Empty => TokenKind::Empty,
		}
	}

	/// Returns the canonical text of the token.
	///
	/// # Errors
	/// Returns `ChainError::UnrecognizedToken` for the end marker.
	pub fn text(&self) -> Result<&str> {
		match self {
			Token::Word(s) | Token::Integer(s) | Token::Floating(s) | Token::Paren(s) | Token::Str(s) => Ok(s.as_str()),
			Token::Quote => Ok(QUOTE_TEXT),
			Token::Empty => Err(ChainError::UnrecognizedToken(TokenKind::Empty)),
		}
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.text() {
			Ok(text) => f.write_str(text),
			Err(_) => Ok(()),
		}
	}
}

/// Ordered, finite sequence of tokens consumed from the front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
	tokens: VecDeque<Token>,
}

impl TokenStream {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, token: Token) {
		self.tokens.push_back(token);
	}

	/// Returns the next token without consuming it.
	pub fn peek(&self) -> Option<&Token> {
		self.tokens.front()
	}

	/// Consumes and returns the next token.
	pub fn pop(&mut self) -> Option<Token> {
		self.tokens.pop_front()
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Token> {
		self.tokens.iter()
	}
}

impl From<Vec<Token>> for TokenStream {
	fn from(tokens: Vec<Token>) -> Self {
		Self { tokens: tokens.into() }
	}
}

impl FromIterator<Token> for TokenStream {
	fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
		Self { tokens: iter.into_iter().collect() }
	}
}

impl IntoIterator for TokenStream {
	type Item = Token;
	type IntoIter = std::collections::vec_deque::IntoIter<Token>;

	fn into_iter(self) -> Self::IntoIter {
		self.tokens.into_iter()
	}
}

/// Splits raw text into typed tokens.
///
/// - Whitespace separates tokens and is dropped
/// - `12` is an integer, `1.5` a float (a trailing `.` stays punctuation)
/// - Words start with a letter and may contain digits, `-` and inner `'`
/// - A lone `'` is a quote marker
/// - `"..."` is a string literal; an unterminated one runs to the end of input
/// - Any other character is a single-character punctuation token
pub fn tokenize(source: &str) -> TokenStream {
	let chars: Vec<char> = source.chars().collect();
	let mut stream = TokenStream::new();
	let mut i = 0;

	while i < chars.len() {
		let c = chars[i];

		if c.is_whitespace() {
			i += 1;
			continue;
		}

		let start = i;
		let token = if c.is_ascii_digit() {
			i = skip_digits(&chars, i);
			if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
				i = skip_digits(&chars, i + 1);
				Token::Floating(chars[start..i].iter().collect())
			} else {
				Token::Integer(chars[start..i].iter().collect())
			}
		} else if c.is_alphabetic() {
			i += 1;
			while i < chars.len() && is_word_char(&chars, i) {
				i += 1;
			}
			Token::Word(chars[start..i].iter().collect())
		} else if c == '\'' {
			i += 1;
			Token::Quote
		} else if c == '"' {
			i += 1;
			while i < chars.len() && chars[i] != '"' {
				i += 1;
			}
			// Include the closing quote when there is one
			i = (i + 1).min(chars.len());
			Token::Str(chars[start..i].iter().collect())
		} else {
			i += 1;
			Token::Paren(c.to_string())
		};

		stream.push(token);
	}

	stream
}

fn skip_digits(chars: &[char], mut i: usize) -> usize {
	while i < chars.len() && chars[i].is_ascii_digit() {
		i += 1;
	}
	i
}

fn is_word_char(chars: &[char], i: usize) -> bool {
	let c = chars[i];
	if c.is_alphanumeric() || c == '-' {
		return true;
	}
	// "don't" is one word, "dogs'" is a word followed by a quote
	c == '\'' && chars.get(i + 1).is_some_and(|next| next.is_alphabetic())
}
