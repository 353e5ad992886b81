/// Lexer related errors
#[derive(thiserror::Error, Debug)]
pub enum LexerError {
	/// Internal error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Error encountered while tokenizing
	#[error(transparent)]
	LexError(#[from] LexError),
}

/// A position in the source where no token pattern matches.
#[derive(thiserror::Error, Debug)]
#[error("Unexpected character '{character}' at offset {position}")]
pub struct LexError {
	/// Byte offset of the offending character.
	position:  usize,
	/// The character no pattern class recognized.
	character: char,
}

impl LexError {
	pub fn new(position: usize, character: char) -> Self { Self { position, character } }

	pub fn position(&self) -> usize { self.position }
}
