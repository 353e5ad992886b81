use tinylet::{Backend, ParserError, SemanticErrorKind, Tinylet, TinyletError, listing};

/// Run a source string on one backend, collecting printed values.
fn run(source: &str, backend: Backend) -> Result<Vec<i64>, TinyletError> {
	let mut output: Vec<i64> = Vec::new();
	Tinylet.run(source, backend, &mut output)?;
	Ok(output)
}

/// Run on both backends and insist they agree before returning the output.
fn run_both(source: &str) -> Vec<i64> {
	let interpreted = run(source, Backend::Interpreter).unwrap();
	let machined = run(source, Backend::Vm).unwrap();
	assert_eq!(interpreted, machined, "backends disagree on {source:?}");
	interpreted
}

fn semantic_kind(error: TinyletError) -> SemanticErrorKind {
	match error {
		TinyletError::ParserError(ParserError::SemanticError(e)) => e.kind(),
		other => panic!("expected semantic error, got {other}"),
	}
}

#[test]
fn backends_are_equivalent() {
	let programs = [
		"",
		"let x = 10; let y = 20; print(x + y);",
		"let x = 5; print(x - 3);",
		"let a = 7; let b = 3; print(a * b); print(a / b); print(a); print(b);",
		"let x = 1; let y = x; print(y + y);",
		"print(0 - 5); print(100 / 7);",
	];
	for program in programs {
		run_both(program);
	}
}

#[test]
fn sum_of_two_variables() {
	assert_eq!(run_both("let x = 10; let y = 20; print(x + y);"), vec![30]);
}

#[test]
fn subtraction_keeps_source_operand_order() {
	assert_eq!(run_both("let x = 5; print(x - 3);"), vec![2]);
}

#[test]
fn undeclared_variable_aborts_with_no_output() {
	for backend in [Backend::Interpreter, Backend::Vm] {
		let mut output: Vec<i64> = Vec::new();
		let error = Tinylet.run("print(x);", backend, &mut output).unwrap_err();
		assert_eq!(semantic_kind(error), SemanticErrorKind::Undeclared);
		assert!(output.is_empty());
	}
}

#[test]
fn redeclaration_aborts_with_no_output() {
	for backend in [Backend::Interpreter, Backend::Vm] {
		let mut output: Vec<i64> = Vec::new();
		let error = Tinylet.run("let x = 1; let x = 2;", backend, &mut output).unwrap_err();
		assert_eq!(semantic_kind(error), SemanticErrorKind::Redeclared);
		assert!(output.is_empty());
	}
}

#[test]
fn bytecode_listing_for_declare_and_print() {
	let instructions = Tinylet.compile("let x = 10; print(x);").unwrap();
	assert_eq!(listing(&instructions), "PUSH 10\nSTORE x\nPUSH x\nPRINT");
}

#[test]
fn whitespace_only_programs_do_nothing() {
	assert!(run_both(" \t \n \r\n ").is_empty());
}

#[test]
fn chained_operators_are_a_parse_error() {
	let result = run("let a = 1; let b = 2; let c = 3; print(a + b + c);", Backend::Interpreter);
	assert!(matches!(result, Err(TinyletError::ParserError(ParserError::ParseError(_)))));
}

#[test]
fn lex_failures_surface_as_lex_errors() {
	let error = run("let x = 10 @", Backend::Interpreter).unwrap_err();
	assert!(matches!(error, TinyletError::LexerError(_)));
}

#[test]
fn self_referential_declaration_fails_identically_on_both_backends() {
	assert!(matches!(run("let x = x;", Backend::Interpreter), Err(TinyletError::RuntimeError(_))));
	assert!(matches!(run("let x = x;", Backend::Vm), Err(TinyletError::VmError(_))));
}

#[test]
fn run_source_file() {
	let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("test.tl");
	let source = std::fs::read_to_string(&path).unwrap();
	assert_eq!(run_both(&source), vec![48, 36, 12]);

	let result = Tinylet.run_file(&path, Backend::Vm);
	assert!(result.is_ok());
}
