//! # From source text to printed integers
//!
//! Tinylet is a deliberately small language: `let` declarations, `print`
//! statements, integer operands, and at most one arithmetic operation per
//! expression. What makes it interesting is that the whole of a language
//! implementation still fits in view at once.
//!
//! ``` markdown
//! source text
//!   └── Lexer ── tokens
//!         └── Parser (symbol table) ── statements
//!               ├── Interpreter ─────────────────── printed values
//!               └── Generator ── instructions ── VM ── printed values
//! ```
//!
//! ## Lexing
//!
//! The lexer walks the source once, left to right, turning characters into
//! tokens and dropping whitespace. Keywords are found by maximal munch: the
//! whole word is scanned before it is classified, so `let` only matches as
//! a whole word and `letx` is an ordinary identifier.
//!
//! ## Parsing and semantic analysis
//!
//! The parser is recursive descent with the semantic checks folded into the
//! same pass. A symbol table records every `let`; declaring a name twice or
//! using one before its declaration fails the run at the exact token where
//! it happens. There is no separate resolution phase because there is
//! nothing left to resolve afterwards.
//!
//! ## Two backends
//!
//! The statement list can be executed two ways: walked directly by the
//! tree-walking interpreter, or lowered to a linear stack-machine
//! instruction sequence and run on the virtual machine. The backends share
//! one arithmetic routine and must produce identical output for every
//! well-formed program; the bytecode path exists because seeing a program
//! as `PUSH 10 / STORE x / PUSH x / PRINT` is half of understanding how
//! real compilers lower code.
//!
//! Every error — lexical, grammatical, semantic, or runtime — is fatal to
//! its run. Nothing is recovered, retried, or partially delivered.

pub mod cli;

mod bytecode;
mod codegen;
mod error;
mod interpreter;
mod lexer;
mod parser;
mod sink;
mod statement;
mod tinylet;
mod vm;

pub use bytecode::{Instruction, PushOperand, listing};
pub use error::{
	TinyletError,
	interpreter::RuntimeError,
	lexer::{LexError, LexerError},
	parser::{ParseError, ParserError, SemanticError, SemanticErrorKind},
	vm::VmError,
};
pub use sink::{Sink, StdoutSink};
pub use tinylet::{Backend, Tinylet};
