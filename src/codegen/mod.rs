//! Lowers the AST to stack-machine instructions.
//!
//! A pure function of the tree: statements are emitted in program order, an
//! assignment becomes its expression's code followed by `STORE`, a print
//! becomes its expression's code followed by `PRINT`, and a binary
//! expression pushes left then right before its operator instruction. The
//! AST's closed enums leave no unrecognized node to fail on, so generation
//! cannot error.

use crate::{
	bytecode::{Instruction, PushOperand},
	lexer::BinaryOperator,
	parser::expression::{Expression, Operand},
	statement::Statement,
};

/// Accumulates the instruction sequence for one program.
#[derive(Default)]
pub(crate) struct Generator {
	instructions: Vec<Instruction>,
}

impl Generator {
	/// Lower a whole program.
	pub fn generate(mut self, statements: &[Statement]) -> Vec<Instruction> {
		for statement in statements {
			self.statement(statement);
		}
		self.instructions
	}

	fn statement(&mut self, statement: &Statement) {
		match statement {
			Statement::Assignment { identifier, value } => {
				self.expression(value);
				self.instructions.push(Instruction::Store(identifier.clone()));
			}
			Statement::Print(value) => {
				self.expression(value);
				self.instructions.push(Instruction::Print);
			}
		}
	}

	fn expression(&mut self, expression: &Expression) {
		match expression {
			Expression::Operand(operand) => self.operand(operand),
			Expression::Binary { left, operator, right } => {
				self.operand(left);
				self.operand(right);
				self.instructions.push(match operator {
					BinaryOperator::Add => Instruction::Add,
					BinaryOperator::Sub => Instruction::Sub,
					BinaryOperator::Mul => Instruction::Mul,
					BinaryOperator::Div => Instruction::Div,
				});
			}
		}
	}

	fn operand(&mut self, operand: &Operand) {
		let push = match operand {
			Operand::Literal(value) => PushOperand::Immediate(*value),
			Operand::Variable(identifier) => PushOperand::VariableRef(identifier.clone()),
		};
		self.instructions.push(Instruction::Push(push));
	}
}
