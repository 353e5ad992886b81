//! The tree-walking backend.
//!
//! Executes the statement list directly, no intermediate form: assignments
//! evaluate their initializer and bind it, prints evaluate and emit through
//! the sink. Binary expressions evaluate left first, then right, and
//! combine with the same arithmetic the virtual machine uses, so the two
//! backends cannot drift apart numerically.

use std::collections::HashMap;

use crate::{
	error::interpreter::RuntimeError,
	parser::expression::{Expression, Operand},
	sink::Sink,
	statement::Statement,
};

/// Walks one program's statements against an owned variable map.
pub(crate) struct Interpreter {
	variables: HashMap<String, i64>,
}

impl Interpreter {
	pub fn new() -> Self { Self { variables: HashMap::new() } }

	/// Execute the statements in order, emitting printed values through `sink`.
	pub fn interpret(&mut self, statements: &[Statement], sink: &mut dyn Sink) -> Result<(), RuntimeError> {
		for statement in statements {
			self.execute(statement, sink)?;
		}
		Ok(())
	}

	fn execute(&mut self, statement: &Statement, sink: &mut dyn Sink) -> Result<(), RuntimeError> {
		match statement {
			Statement::Assignment { identifier, value } => {
				let value = self.evaluate(value)?;
				self.variables.insert(identifier.clone(), value);
			}
			Statement::Print(value) => {
				let value = self.evaluate(value)?;
				sink.emit(value);
			}
		}
		Ok(())
	}

	fn evaluate(&self, expression: &Expression) -> Result<i64, RuntimeError> {
		match expression {
			Expression::Operand(operand) => self.operand(operand),
			Expression::Binary { left, operator, right } => {
				let left = self.operand(left)?;
				let right = self.operand(right)?;
				operator.apply(left, right).ok_or(RuntimeError::DivisionByZero)
			}
		}
	}

	fn operand(&self, operand: &Operand) -> Result<i64, RuntimeError> {
		match operand {
			Operand::Literal(value) => Ok(*value),
			Operand::Variable(identifier) => self
				.variables
				.get(identifier)
				.copied()
				.ok_or_else(|| RuntimeError::UndefinedVariable(identifier.clone())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{lexer::Lexer, parser::Parser};

	fn run(input: &str) -> Result<Vec<i64>, RuntimeError> {
		let mut lexer = Lexer::new(input);
		let tokens = lexer.tokenize().unwrap();
		let statements = Parser::new(tokens).parse().unwrap();
		let mut output: Vec<i64> = Vec::new();
		Interpreter::new().interpret(&statements, &mut output)?;
		Ok(output)
	}

	#[test]
	fn empty_program_prints_nothing() {
		assert_eq!(run("").unwrap(), vec![]);
		assert_eq!(run("let x = 1;").unwrap(), vec![]);
	}

	#[test]
	fn prints_in_execution_order() {
		assert_eq!(run("let x = 1; print(x); print(2); print(x + x);").unwrap(), vec![1, 2, 2]);
	}

	#[test]
	fn arithmetic() {
		assert_eq!(run("print(10 + 20);").unwrap(), vec![30]);
		assert_eq!(run("print(5 - 3);").unwrap(), vec![2]);
		assert_eq!(run("print(6 * 7);").unwrap(), vec![42]);
		assert_eq!(run("print(7 / 2);").unwrap(), vec![3]);
	}

	#[test]
	fn variables_feed_expressions() {
		assert_eq!(run("let x = 10; let y = x * 2; print(y - x);").unwrap(), vec![10]);
	}

	#[test]
	fn division_by_zero_fails() {
		assert!(matches!(run("print(1 / 0);"), Err(RuntimeError::DivisionByZero)));
		assert!(matches!(run("let z = 0; print(5 / z);"), Err(RuntimeError::DivisionByZero)));
	}

	#[test]
	fn self_referential_declaration_fails_at_run_time() {
		// `let x = x;` passes the parser (the name is declared before its
		// initializer parses) and must die here instead.
		match run("let x = x;") {
			Err(RuntimeError::UndefinedVariable(name)) => assert_eq!(name, "x"),
			other => panic!("expected undefined variable, got {other:?}"),
		}
	}

	#[test]
	fn output_stops_at_first_failure() {
		let mut lexer = Lexer::new("print(1); print(2 / 0); print(3);");
		let tokens = lexer.tokenize().unwrap();
		let statements = Parser::new(tokens).parse().unwrap();
		let mut output: Vec<i64> = Vec::new();
		let result = Interpreter::new().interpret(&statements, &mut output);
		assert!(matches!(result, Err(RuntimeError::DivisionByZero)));
		assert_eq!(output, vec![1]);
	}
}
