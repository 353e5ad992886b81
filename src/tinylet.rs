use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;
use log::trace;

use crate::{
	TinyletError,
	bytecode::{Instruction, listing},
	codegen::Generator,
	interpreter::Interpreter,
	lexer::Lexer,
	parser::Parser,
	sink::{Sink, StdoutSink},
	statement::Statement,
	vm::VirtualMachine,
};

/// Selects which execution strategy runs a parsed program. The two are
/// observably equivalent on well-formed programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
	/// Walk the syntax tree directly.
	Interpreter,
	/// Lower to stack-machine instructions and run those.
	Vm,
}

/// Tinylet is the main entry point for the language pipeline.
pub struct Tinylet;

impl Tinylet {
	/// Run a source file, printing its output to stdout.
	pub fn run_file<P: AsRef<Path>>(&self, path: P, backend: Backend) -> Result<(), TinyletError> {
		let source = read_to_string(path).context("Failed open source file")?;
		self.run(&source, backend, &mut StdoutSink)
	}

	/// Print the instruction listing a source file compiles to.
	pub fn dump_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TinyletError> {
		let source = read_to_string(path).context("Failed open source file")?;
		println!("{}", listing(&self.compile(&source)?));
		Ok(())
	}

	/// Run the REPL prompt. Each line is an independent program run on the
	/// tree-walking backend with fresh declarations and variables.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited tinylet repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			if let Err(e) = self.run(input.trim(), Backend::Interpreter, &mut StdoutSink) {
				eprintln!("Failed run prompt: {e}");
			}
		}
	}
}

impl Tinylet {
	/// Run a source string on the chosen backend, emitting printed values
	/// through `sink`. The first error anywhere aborts the run.
	pub fn run(&self, source: &str, backend: Backend, sink: &mut dyn Sink) -> Result<(), TinyletError> {
		let statements = self.parse(source)?;
		match backend {
			Backend::Interpreter => {
				trace!("Walking {} statements", statements.len());
				Interpreter::new().interpret(&statements, sink)?;
			}
			Backend::Vm => {
				let instructions = Generator::default().generate(&statements);
				trace!("Executing {} instructions", instructions.len());
				VirtualMachine::new().execute(&instructions, sink)?;
			}
		}
		Ok(())
	}

	/// Lower a source string to its stack-machine instruction sequence
	/// without executing it.
	pub fn compile(&self, source: &str) -> Result<Vec<Instruction>, TinyletError> {
		let statements = self.parse(source)?;
		Ok(Generator::default().generate(&statements))
	}

	fn parse(&self, source: &str) -> Result<Vec<Statement>, TinyletError> {
		trace!("Lexing {source:?}");
		let mut lexer = Lexer::new(source);
		let tokens = lexer.tokenize()?;
		trace!("Parsing {} tokens", tokens.len());
		let mut parser = Parser::new(tokens);
		Ok(parser.parse()?)
	}
}
