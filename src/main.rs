use palc::Parser;
use tinylet::{Backend, Tinylet, cli::*};

fn main() {
	let tinylet = Tinylet;

	match Cli::parse().mode {
		Mode::Run { path } => {
			if let Err(e) = tinylet.run_file(&path, Backend::Interpreter) {
				eprintln!("Failed run file: {e}");
			}
		}
		Mode::Vm { path } => {
			if let Err(e) = tinylet.run_file(&path, Backend::Vm) {
				eprintln!("Failed run file: {e}");
			}
		}
		Mode::Bytecode { path } => {
			if let Err(e) = tinylet.dump_file(&path) {
				eprintln!("Failed compile file: {e}");
			}
		}
		Mode::Repl => tinylet.run_prompt(),
	}
}
