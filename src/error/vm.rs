/// Errors the bytecode backend can raise while executing instructions
#[derive(thiserror::Error, Debug)]
pub enum VmError {
	/// A pop from an empty operand stack; generated instruction sequences
	/// never leave the stack short, so this guards hand-built ones
	#[error("Operand stack underflow")]
	StackUnderflow,
	/// A `PUSH` of a variable with no binding; the parser's declaration
	/// checks make this unreachable except through `let x = x;`
	#[error("Undefined variable '{0}'")]
	UndefinedVariable(String),
	/// Integer division with a zero divisor
	#[error("Division by zero")]
	DivisionByZero,
}
