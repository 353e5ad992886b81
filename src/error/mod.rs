pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod vm;

/// TinyletError is the top-level error type for the whole pipeline.
///
/// Every error is fatal to the run it occurred in: the first failure in any
/// phase aborts processing and no further output is produced.
#[derive(thiserror::Error, Debug)]
pub enum TinyletError {
	/// Internal error, should never happen
	#[error("CompilerInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Lexer error encountered while tokenizing
	#[error("Lex error: {0}")]
	LexerError(#[from] lexer::LexerError),
	/// Parser or semantic error encountered while building the AST
	#[error("Parse error: {0}")]
	ParserError(#[from] parser::ParserError),
	/// Runtime error raised by the tree-walking backend
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] interpreter::RuntimeError),
	/// Runtime error raised by the bytecode backend
	#[error("Vm error: {0}")]
	VmError(#[from] vm::VmError),
}
