use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tinylet", after_long_help = "A two-statement language with two interchangeable backends.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a source file on the tree-walking interpreter
	Run { path: PathBuf },
	/// Run a source file on the bytecode virtual machine
	Vm { path: PathBuf },
	/// Print the stack-machine instruction listing for a source file
	Bytecode { path: PathBuf },
	/// Read and run statements interactively
	Repl,
}
