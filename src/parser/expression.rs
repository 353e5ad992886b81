//! Expression AST nodes.

use crate::lexer::BinaryOperator;

/// A single value position inside an expression.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Operand {
	/// An integer literal.
	Literal(i64),
	/// A reference to a declared variable.
	Variable(String),
}

/// An expression: one operand, or exactly one operation between two.
///
/// The grammar never recurses into sub-expressions, so a binary node's
/// children are operands by type and a nested tree cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expression {
	Operand(Operand),
	Binary { left: Operand, operator: BinaryOperator, right: Operand },
}
