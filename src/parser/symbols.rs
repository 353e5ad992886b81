//! The parse-time record of which identifiers have been declared.

use std::collections::HashSet;

use crate::error::parser::{SemanticError, SemanticErrorKind};

/// Grows monotonically while one program parses; there is no block scoping
/// and nothing is ever removed.
#[derive(Debug, Default)]
pub(crate) struct SymbolTable {
	declared: HashSet<String>,
}

impl SymbolTable {
	/// Record a new declaration, rejecting identifiers declared earlier.
	pub fn declare(&mut self, identifier: &str) -> Result<(), SemanticError> {
		if !self.declared.insert(identifier.to_owned()) {
			return Err(SemanticError::new(SemanticErrorKind::Redeclared, identifier));
		}
		Ok(())
	}

	/// Check a use site against the declarations seen so far.
	pub fn expect_declared(&self, identifier: &str) -> Result<(), SemanticError> {
		if !self.declared.contains(identifier) {
			return Err(SemanticError::new(SemanticErrorKind::Undeclared, identifier));
		}
		Ok(())
	}
}
