//! Builds the statement list from the token sequence, checking declarations
//! in the same pass — there is no separate semantic-analysis phase, every
//! identifier use is validated the instant it is parsed.
//!
//! Grammar:
//!
//! ``` BNF
//! program    → statement* ;
//! statement  → assignment | print ;
//! assignment → "let" IDENTIFIER "=" expression ";" ;
//! print      → "print" "(" expression ")" ";" ;
//! expression → operand ( OPERATOR operand )? ;
//! operand    → NUMBER | IDENTIFIER ;
//! ```
//!
//! An expression consumes at most one operator. In `a + b + c` the second
//! `+` is left where it is and the statement rule then reports the `;` it
//! expected — the limitation is deliberate, not silently papered over.

pub(crate) mod expression;
mod symbols;

use std::{iter::Peekable, vec::IntoIter};

use TokenType::*;
use anyhow::anyhow;
use log::trace;

use crate::{
	error::parser::{ParseError, ParserError},
	lexer::{Token, TokenType},
	parser::{
		expression::{Expression, Operand},
		symbols::SymbolTable,
	},
	statement::Statement,
};

/// A recursive-descent parser over one program's tokens.
pub(crate) struct Parser<'a> {
	/// The tokens to parse.
	tokens:  Peekable<IntoIter<Token<'a>>>,
	/// Declarations seen so far, owned by this parse and discarded with it.
	symbols: SymbolTable,
}

impl<'a> Parser<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self {
		Self { tokens: tokens.into_iter().peekable(), symbols: SymbolTable::default() }
	}

	/// Parse the whole program, one statement at a time.
	pub fn parse(&mut self) -> Result<Vec<Statement>, ParserError> {
		let mut statements = Vec::new();
		while self.tokens.peek().is_some() {
			let statement = self.statement()?;
			trace!("Parsed {statement:?}");
			statements.push(statement);
		}
		Ok(statements)
	}

	fn statement(&mut self) -> Result<Statement, ParserError> {
		match self.tokens.peek().map(|token| token.r#type) {
			Some(Let) => self.assignment(),
			Some(Print) => self.print_statement(),
			_ => Err(self.unexpected("'let' or 'print'")),
		}
	}

	/// assignment → "let" IDENTIFIER "=" expression ";"
	///
	/// The name is entered into the symbol table before the initializer is
	/// parsed, and a second `let` of the same name is rejected outright —
	/// reassignment does not exist in this language.
	fn assignment(&mut self) -> Result<Statement, ParserError> {
		self.advance()?; // consume 'let'
		let identifier = self.identifier()?;
		self.symbols.declare(identifier)?;
		self.consume("'='", |r#type| matches!(r#type, Equals))?;
		let value = self.expression()?;
		self.consume("';'", |r#type| matches!(r#type, Semicolon))?;
		Ok(Statement::Assignment { identifier: identifier.to_owned(), value })
	}

	/// print → "print" "(" expression ")" ";"
	fn print_statement(&mut self) -> Result<Statement, ParserError> {
		self.advance()?; // consume 'print'
		self.consume("'('", |r#type| matches!(r#type, LeftParen))?;
		let value = self.expression()?;
		self.consume("')'", |r#type| matches!(r#type, RightParen))?;
		self.consume("';'", |r#type| matches!(r#type, Semicolon))?;
		Ok(Statement::Print(value))
	}

	/// expression → operand ( OPERATOR operand )?
	fn expression(&mut self) -> Result<Expression, ParserError> {
		let left = self.operand()?;
		if let Some(Operator(operator)) = self.tokens.peek().map(|token| token.r#type) {
			self.advance()?;
			let right = self.operand()?;
			return Ok(Expression::Binary { left, operator, right });
		}
		Ok(Expression::Operand(left))
	}

	/// operand → NUMBER | IDENTIFIER
	///
	/// Identifier uses are checked against the symbol table here, the
	/// moment they are consumed.
	fn operand(&mut self) -> Result<Operand, ParserError> {
		match self.tokens.peek().map(|token| token.r#type) {
			Some(Number(value)) => {
				self.advance()?;
				Ok(Operand::Literal(value))
			}
			Some(Identifier(name)) => {
				self.advance()?;
				self.symbols.expect_declared(name)?;
				Ok(Operand::Variable(name.to_owned()))
			}
			_ => Err(self.unexpected("a number or identifier")),
		}
	}

	/// Consume an identifier token and return its name.
	fn identifier(&mut self) -> Result<&'a str, ParserError> {
		match self.tokens.peek().map(|token| token.r#type) {
			Some(Identifier(name)) => {
				self.advance()?;
				Ok(name)
			}
			_ => Err(self.unexpected("an identifier")),
		}
	}

	/// Pop the next token when `accept` matches its kind.
	fn consume(&mut self, expected: &str, accept: fn(TokenType<'a>) -> bool) -> Result<Token<'a>, ParserError> {
		match self.tokens.peek() {
			Some(token) if accept(token.r#type) => self.advance(),
			_ => Err(self.unexpected(expected)),
		}
	}

	/// Advance to the next token. Callers have always peeked first, so an
	/// empty iterator here is an internal fault rather than a parse error.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> {
		self.tokens.next().ok_or_else(|| anyhow!("Unexpected end of input").into())
	}

	/// Build the parse error for a token that doesn't fit the grammar.
	fn unexpected(&mut self, expected: &str) -> ParserError {
		let found = match self.tokens.peek() {
			Some(token) => format!("'{}'", token.lexeme),
			None => "end of input".to_owned(),
		};
		ParseError::new(expected, found).into()
	}
}
