//! Turns raw source text into tokens in a single left-to-right pass.
//!
//! At each offset the lexer tries its pattern classes in a fixed priority
//! order: whitespace (skipped), keywords, identifiers, integer literals,
//! then the single-character tokens `=`, `+ - * /`, `;`, `(`, `)`. Keywords
//! are recognized by maximal munch — the whole word is scanned first and
//! classified afterwards — so `let` and `print` only match as whole words
//! while `letx` stays an identifier. There is no backtracking: a character
//! that starts no class fails the run immediately.

mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use anyhow::Context;
pub(crate) use token::*;

use crate::error::lexer::{LexError, LexerError};

/// A lexer over one source string.
pub(crate) struct Lexer<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points at the character currently being considered
	cursor:      usize,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0 }
	}

	/// Scan all tokens from the source code. The tokens borrow their lexemes
	/// from the source string, not from the lexer itself.
	pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>, LexerError> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			self.scan_token(&mut tokens)?;
		}
		Ok(tokens)
	}

	/// Scan a single token from the source code
	fn scan_token(&mut self, tokens: &mut Vec<Token<'a>>) -> Result<(), LexerError> {
		let next_char = self.advance().context("Unexpected end of input")?;
		let r#type = match next_char {
			' ' | '\r' | '\t' | '\n' => Whitespace,
			'=' => Equals,
			'+' => Operator(BinaryOperator::Add),
			'-' => Operator(BinaryOperator::Sub),
			'*' => Operator(BinaryOperator::Mul),
			'/' => Operator(BinaryOperator::Div),
			';' => Semicolon,
			'(' => LeftParen,
			')' => RightParen,
			c if c.is_ascii_digit() => self.number()?,
			c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
			_ => return Err(LexError::new(self.start, next_char).into()),
		};

		if !r#type.is_ignored() {
			let lexeme = &self.source[self.start..self.cursor];
			tokens.push(Token::new(r#type, lexeme, self.start));
		}

		Ok(())
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Scan an integer literal
	fn number(&mut self) -> Result<TokenType<'a>, LexerError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		let s = &self.source[self.start..self.cursor];
		Ok(Number(s.parse().context("Failed to parse number literal")?))
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		TokenType::keyword_or_identifier(&self.source[self.start..self.cursor])
	}
}
