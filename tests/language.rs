use std::{cell::RefCell, fs, io, rc::Rc};

use sprig::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{evaluator::core::Context, value::core::Value},
    parse, run,
};
use walkdir::WalkDir;

/// Output sink that can be inspected after the context that owns it writes
/// to it.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("output is valid UTF-8")
    }
}

/// Runs `src` with `print` captured, returning the result and the printed
/// text.
fn run_captured(src: &str) -> (Result<Value, Error>, String) {
    let buffer = SharedBuffer::default();
    let result = match parse(src) {
        Ok(program) => Context::with_output(buffer.clone()).evaluate(&program)
                                                           .map_err(Error::from),
        Err(e) => Err(e.into()),
    };
    (result, buffer.contents())
}

fn assert_value(src: &str, expected: impl Into<Value>) {
    match run(src) {
        Ok(value) => assert_eq!(value, expected.into(), "script: {src}"),
        Err(e) => panic!("Script failed: {src}\n{e}"),
    }
}

fn assert_display(src: &str, expected: &str) {
    match run(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "script: {src}"),
        Err(e) => panic!("Script failed: {src}\n{e}"),
    }
}

fn syntax_error(src: &str) -> ParseError {
    match run(src) {
        Err(Error::Syntax(e)) => e,
        other => panic!("Expected a syntax error for {src}, got {other:?}"),
    }
}

fn semantic_error(src: &str) -> RuntimeError {
    match run(src) {
        Err(Error::Semantic(e)) => e,
        other => panic!("Expected a semantic error for {src}, got {other:?}"),
    }
}

#[test]
fn scripts_produce_expected_results() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "sprig"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let header = source.lines().next().unwrap_or_default();
        count += 1;

        let (result, _) = run_captured(&source);
        if let Some(expected) = header.strip_prefix("# expect:") {
            match result {
                Ok(value) => assert_eq!(value.to_string(), expected.trim(), "in {path:?}"),
                Err(e) => panic!("Script {path:?} failed: {e}"),
            }
        } else if let Some(kind) = header.strip_prefix("# expect-error:") {
            let banner = match kind.trim() {
                "syntax" => "SYNTAX ERROR",
                "semantic" => "SEMANTIC ERROR",
                other => panic!("Unknown error kind '{other}' in {path:?}"),
            };
            match result {
                Err(e) => assert_eq!(e.banner(), banner, "in {path:?}: {e}"),
                Ok(value) => panic!("Script {path:?} succeeded with {value}"),
            }
        } else {
            panic!("Script {path:?} has no expectation header");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn operator_precedence() {
    assert_value("1 + 2 * 3", 7);
    assert_value("2 ** 3 ** 2", 64);
    assert_value("10 - 2 - 3", 5);
    assert_value("7 % 3 * 2", 1);
    assert_value("2 * 3 % 4", 2);
    assert_value("2 ** 3 % 3", 1);
    assert_value("1 + 2 < 4", 1);
    assert_value("not 1 == 2", 1);
    assert_value("not not 3", 1);
    assert_value("1 or 0 and 0", 1);
    assert_value("(1 + 2) * 3", 9);
}

#[test]
fn arithmetic() {
    assert_value("7 / 2", 3.5);
    assert_value("6 / 3", 2.0);
    assert_value("7 // 2", 3);
    assert_value("(0 - 7) // 2", -4);
    assert_value("(0 - 7) % 3", 2);
    assert_value("7 % (0 - 3)", -2);
    assert_value("7.5 // 2", 3.0);
    assert_value("2 ** (0 - 1)", 0.5);
    assert_value("1 + 0.5", 1.5);
    assert_value("2. + .5", 2.5);
}

#[test]
fn arithmetic_failures() {
    assert!(matches!(semantic_error("1 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(semantic_error("1 // 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(semantic_error("1 % 0.0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(semantic_error("0 ** (0 - 1)"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(semantic_error("9223372036854775807 + 1"), RuntimeError::Overflow { .. }));
    assert!(matches!(semantic_error("2 ** 64"), RuntimeError::Overflow { .. }));
    assert!(matches!(semantic_error("1 - \"a\""), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn text_and_list_operators() {
    assert_value(r#""ab" + "cd""#, "abcd");
    assert_value(r#""ab" * 3"#, "ababab");
    assert_value(r#"2 * "xy""#, "xyxy");
    assert_value(r#""ab" * (0 - 1)"#, "");
    assert_value(r#""b" in "abc""#, 1);
    assert_value("2 in [1, 2]", 1);
    assert_value("[2] in [[1], [2]]", 1);
    assert_value("3 in []", 0);
    assert_display("[1, 2] + [3]", "[1, 2, 3]");
    assert_display("[0] * 3", "[0, 0, 0]");
    assert_display("[1, \"a\", [2.5]]", "[1, \"a\", [2.5]]");
}

#[test]
fn comparisons() {
    assert_value(r#""a" < "b""#, 1);
    assert_value("[1, 2] < [1, 3]", 1);
    assert_value("[1, 2] < [1, 2, 0]", 1);
    assert_value("1 == 1.0", 1);
    assert_value(r#"1 == "1""#, 0);
    assert_value("[1, [2]] == [1, [2]]", 1);
    assert_value("1 <> 2", 1);
    assert_value("2 >= 2.0", 1);
    assert!(matches!(semantic_error(r#"1 < "a""#), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn indexing() {
    assert_value("[10, 20, 30][1]", 20);
    assert_value("[10, 20, 30][0 - 1]", 30);
    assert_value("[[1, 2], [3, 4]][1][0]", 3);
    assert_value("[1, 2, 3][2, 0]", 3);
    assert!(matches!(semantic_error("[1][5]"),
                     RuntimeError::IndexOutOfBounds { index: 5, len: 1, .. }));
    assert!(matches!(semantic_error("[1][]"), RuntimeError::MissingIndex { .. }));
    assert!(matches!(semantic_error(r#"[1]["a"]"#), RuntimeError::ExpectedInteger { .. }));
    assert!(matches!(semantic_error("5[0]"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn assignment_creates_and_updates() {
    assert_value("x = 5", 5);
    assert_value("{ a = b = 3; a + b; }", 6);
    assert_value("{ x = 1; { x = 2; }; x; }", 2);
    assert_value("{ x = 0; { x = 5; }; r = { x + 1; }; r; }", 6);
    assert_value("{ order = 1; android = 2; order + android; }", 3);
}

#[test]
fn inner_block_bindings_stay_inner() {
    assert!(matches!(semantic_error("{ {y = 1;}; y; }"),
                     RuntimeError::UnknownVariable { ref name, .. } if name == "y"));
}

#[test]
fn lists_are_shared_between_names() {
    assert_value("{ a = [1, 2, 3]; b = a; b[0] = 9; a[0]; }", 9);
    assert_value("{ a = [1, 2, 3]; a[0 - 1] = 7; a[2]; }", 7);
    assert!(matches!(semantic_error("{ a = [1]; a[1] = 2; }"),
                     RuntimeError::IndexOutOfBounds { .. }));
    assert!(matches!(semantic_error("{ a = 1; a[0] = 2; }"), RuntimeError::ExpectedList { .. }));
}

#[test]
fn loop_body_keeps_its_bindings() {
    let src = "{
        i = 0;
        total = 0;
        while (i < 3) {
            if (i > 0) { total = total + x; }
            x = 7;
            i = i + 1;
        }
        total;
    }";
    assert_value(src, 14);
}

#[test]
fn while_loops_on_truthiness() {
    assert_value("{ n = 3; s = 0; while (n) { s = s + n; n = n - 1; } s; }", 6);
    assert_value("{ xs = [1, 2]; n = 0; while (xs) { xs = []; n = n + 1; } n; }", 1);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_value("{ n = 0; r = (n = 1) or (n = 2); n; }", 2);
    assert_value("1 && 0", 0);

    let (result, output) = run_captured("0 and print(1)");
    assert_eq!(result.unwrap(), Value::Integer(0));
    assert_eq!(output, "1\n");
}

#[test]
fn block_forms() {
    assert_value("{ x = 0; if (1) { x = 1; } else { x = 2; } x; }", 1);
    assert_value("{ x = 0; if (\"\") { x = 1; } else { x = 2; } x; }", 2);
    assert_value("{ x = 0; if (x == 0) { x = 10; } x; }", 10);

    let (result, output) = run_captured("if(0){ print(1); }");
    assert_eq!(result.unwrap(), Value::Unit);
    assert_eq!(output, "");

    let (result, output) = run_captured("if(1){ print(1); } else { print(2); }");
    assert_eq!(result.unwrap(), Value::Unit);
    assert_eq!(output, "1\n");
}

#[test]
fn print_writes_display_form() {
    let (result, output) = run_captured(r#"{ print("hi"); print([1, 2.5]); print(print); }"#);
    assert_eq!(result.unwrap(), Value::Unit);
    assert_eq!(output, "\"hi\"\n[1, 2.5]\n<builtin print>\n");
}

#[test]
fn builtin_calls() {
    assert_value("add(1, 2)", 3);
    assert_value(r#"add("a", "b")"#, "ab");
    assert!(matches!(semantic_error("add(1)"),
                     RuntimeError::ArgumentCountMismatch { expected: 2, found: 1, .. }));
    assert!(matches!(semantic_error("while(1)"), RuntimeError::NotCallable { .. }));
    assert!(matches!(semantic_error("{ x = 1; x(2); }"), RuntimeError::NotCallable { .. }));
    assert!(matches!(semantic_error("print(1) { 2; }"),
                     RuntimeError::NotASpecialForm { blocks: 1, .. }));
    assert!(matches!(semantic_error("while(1) { 2; } else { 3; }"),
                     RuntimeError::UnknownVariable { .. }));
    assert!(matches!(semantic_error("nothing(1)"), RuntimeError::UnknownVariable { .. }));
}

#[test]
fn display_forms_reparse() {
    for src in ["42", "\"hello world\"", "0", "\"\""] {
        let shown = run(src).unwrap().to_string();
        assert_eq!(run(&shown).unwrap(), run(src).unwrap());
    }
    assert_display("3.0", "3.0");
    assert_display("if (1) { 1; }", "None");
}

#[test]
fn comments_are_skipped() {
    assert_value("# leading comment\n1 + @ spans\nseveral lines @ 2 # trailing", 3);
}

#[test]
fn syntax_errors() {
    assert!(matches!(syntax_error("1 +"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(syntax_error("1 2"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(syntax_error(""), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(syntax_error("{ 1 }"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(syntax_error("x + 1 = 2"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(syntax_error("{ if (1) { 2; }; }"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(syntax_error("while(1, 2) { 3; }"),
                     ParseError::InvalidBlockFormHead { found: 2, .. }));
    assert!(matches!(syntax_error("1 + - 2"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn lexing_errors() {
    assert!(matches!(syntax_error("a =< b"), ParseError::Lex(_)));
    assert!(matches!(syntax_error("a <== b"), ParseError::Lex(_)));
    assert!(matches!(syntax_error("\"open"), ParseError::Lex(_)));
    assert!(matches!(syntax_error("99999999999999999999"), ParseError::Lex(_)));
    assert!(matches!(syntax_error("1 $ 2"), ParseError::Lex(_)));
}

#[test]
fn errors_report_lines() {
    let err = semantic_error("{\n  y = 1;\n  z;\n}");
    assert!(matches!(err, RuntimeError::UnknownVariable { line: 3, .. }));
    assert_eq!(err.to_string(), "Error on line 3: Unknown variable 'z'.");

    let err = syntax_error("{\n  1 +\n  ;\n}");
    assert!(matches!(err, ParseError::UnexpectedToken { line: 3, .. }));

    let err = syntax_error("{\n  1 \"spans\ntwo lines\";\n}");
    assert!(matches!(err, ParseError::UnexpectedToken { line: 2, .. }));
}

#[test]
fn self_containing_lists() {
    assert_display("{ a = [1]; a[0] = a; a; }", "[[...]]");
    assert_display("{ a = [1, 2]; a[1] = a; [a, a]; }", "[[1, [...]], [1, [...]]]");
    assert_value("{ a = [1]; a[0] = a; a == a; }", 1);
    assert_value("{ a = [1]; a[0] = a; a <= a; }", 1);
    assert_value("{ a = [1]; a[0] = a; a in a; }", 1);

    let (result, output) = run_captured("{ a = [0]; a[0] = a; print(a); }");
    assert_eq!(result.unwrap(), Value::Unit);
    assert_eq!(output, "[[...]]\n");
}

#[test]
fn oversized_repetition_fails_cleanly() {
    assert!(matches!(semantic_error(r#""ab" * 1000000000000000000"#),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(semantic_error("[0] * 1000000000000000000"),
                     RuntimeError::Overflow { .. }));
    assert_value(r#""" * 1000000000000000000"#, "");
    assert_display("[] * 1000000000000000000", "[]");
}
