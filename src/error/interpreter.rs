/// Errors the tree-walking backend can raise while executing a program
#[derive(thiserror::Error, Debug)]
pub enum RuntimeError {
	/// A variable read with no binding; the parser's declaration checks make
	/// this unreachable except through `let x = x;`
	#[error("Undefined variable '{0}'")]
	UndefinedVariable(String),
	/// Integer division with a zero divisor
	#[error("Division by zero")]
	DivisionByZero,
}
