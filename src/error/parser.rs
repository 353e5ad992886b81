#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	/// Internal error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// The token sequence violates the grammar
	#[error(transparent)]
	ParseError(#[from] ParseError),
	/// A declaration rule was violated
	#[error(transparent)]
	SemanticError(#[from] SemanticError),
}

/// A grammar violation: what the parser wanted next and what it saw.
///
/// When the token sequence ends mid-statement, `found` reads `end of input`.
#[derive(thiserror::Error, Debug)]
#[error("expected {expected}, found {found}")]
pub struct ParseError {
	expected: String,
	found:    String,
}

impl ParseError {
	pub fn new(expected: impl Into<String>, found: impl Into<String>) -> Self {
		Self { expected: expected.into(), found: found.into() }
	}
}

/// A symbol-table violation detected while parsing.
#[derive(thiserror::Error, Debug)]
#[error("identifier '{identifier}' {kind}")]
pub struct SemanticError {
	kind:       SemanticErrorKind,
	identifier: String,
}

impl SemanticError {
	pub fn new(kind: SemanticErrorKind, identifier: &str) -> Self {
		Self { kind, identifier: identifier.to_owned() }
	}

	pub fn kind(&self) -> SemanticErrorKind { self.kind }

	pub fn identifier(&self) -> &str { &self.identifier }
}

/// The two ways a program can break the declaration rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticErrorKind {
	/// A `let` for a name that already has a declaration.
	Redeclared,
	/// A use of a name with no earlier declaration.
	Undeclared,
}

impl std::fmt::Display for SemanticErrorKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SemanticErrorKind::Redeclared => write!(f, "is already declared"),
			SemanticErrorKind::Undeclared => write!(f, "is not declared"),
		}
	}
}
