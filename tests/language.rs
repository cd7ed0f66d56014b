use std::fs::{self};

use lexis::{
    error::{LexError, ParseError, RuntimeError},
    interpreter::{output::BufferedSink, session::Interpreter, value::Value},
};
use walkdir::WalkDir;

#[test_log::test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_code_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut interpreter = Interpreter::new(BufferedSink::new());
            match interpreter.run(&code) {
                Ok(_) if interpreter.is_success() => {},
                Ok(_) => panic!("Example {} in {:?} failed:\n{}\nErrors: {:?}",
                                i + 1,
                                path,
                                code,
                                interpreter.errors()),
                Err(e) => panic!("Example {} in {:?} failed to parse:\n{}\nError: {e}",
                                 i + 1,
                                 path,
                                 code),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_code_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```lexis") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Runs a script that must parse and log no error; returns what it printed.
fn assert_success(src: &str) -> Vec<String> {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    if let Err(e) = interpreter.run(src) {
        panic!("Script failed to parse: {e}");
    }
    assert!(interpreter.is_success(), "Script failed: {:?}", interpreter.errors());
    interpreter.output().lines.clone()
}

/// Runs a script that must fail to parse or log at least one error.
fn assert_failure(src: &str) {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    if interpreter.run(src).is_ok() && interpreter.is_success() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_prints(src: &str, expected: &[&str]) {
    assert_eq!(assert_success(src), expected, "output of {src:?}");
}

fn value_of(src: &str) -> Option<Value> {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    let value = interpreter.run(src).unwrap_or_else(|e| panic!("Script failed to parse: {e}"));
    assert!(interpreter.is_success(), "Script failed: {:?}", interpreter.errors());
    value
}

#[test_log::test]
fn precedence_and_arithmetic() {
    assert_eq!(value_of("1+2*3"), Some(Value::Integer(7)));
    assert_eq!(value_of("(1+2)*3"), Some(Value::Integer(9)));
    assert_eq!(value_of("8 - 4 - 2"), Some(Value::Integer(2)));
    assert_eq!(value_of("7 / 2"), Some(Value::Integer(3)));
    assert_eq!(value_of("7.0 / 2"), Some(Value::Float(3.5)));
    assert_eq!(value_of("2 * -3"), Some(Value::Integer(-6)));
    assert_eq!(value_of("1 + .5"), Some(Value::Float(1.5)));
}

#[test_log::test]
fn assignment_updates_variables() {
    assert_prints("var x = 5; x = x + 1; print x", &["6"]);
    assert_prints("int a, b = 2; a = a * b; print a; print b", &["4", "2"]);
}

#[test_log::test]
fn functions_with_block_bodies() {
    assert_prints("func int add(int a, int b) { return a + b; } print add(2,3)", &["5"]);
    assert_prints("func int add(int a, int b) { return a + b } print add(2, 3) + add(1, 1)",
                  &["7"]);
}

#[test_log::test]
fn functions_with_implicit_bodies() {
    assert_prints("func int twice(int n) n * 2; print twice(21)", &["42"]);
    assert_prints("func void greet(string who) print \"hi \" + who; greet(\"bob\")",
                  &["hi bob"]);
    assert_prints("func int one() return 1; print one()", &["1"]);
}

#[test_log::test]
fn functions_do_not_see_caller_variables() {
    assert_failure("var secret = 1; func int peek() secret; print peek()");
    assert_prints("var n = 1; func int f(int n) n + 10; print f(5); print n", &["15", "1"]);
}

#[test_log::test]
fn function_overloads_dispatch_on_types() {
    let src = "func string kind(int x) \"int\"; func string kind(float x) \"float\"; \
               print kind(1); print kind(1.5)";
    assert_prints(src, &["int", "float"]);
}

#[test_log::test]
fn return_values_are_checked() {
    assert_prints("func float half(int n) { return n } print half(3)", &["3"]);
    assert_eq!(value_of("func float f(int n) { return n } typeof(f(3))"),
               Some(Value::from("float")));
    assert_failure("func int f() { return \"x\" } print f()");
    assert_prints("func void f() { return 1 } print f()", &["NULL"]);
    assert_prints("func int f() { print 1 } print f()", &["1", "NULL"]);
}

#[test_log::test]
fn return_does_not_stop_the_block() {
    assert_prints("func int f() { return 1; print \"after\"; return 2 } print f()",
                  &["after", "2"]);
}

#[test_log::test]
fn user_operator_overloads() {
    assert_failure("print true + false");
    assert_prints("func bool op_Add(bool a, bool b) { return a } print true + false",
                  &["true"]);
    assert_failure("func int op_Add(int a, int b) { return 0 }");
}

#[test_log::test]
fn inferred_declaration_without_initializer() {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    let error = interpreter.run("var y;").unwrap_err();
    assert!(matches!(error, ParseError::MissingInitializer { .. }));
    assert!(!interpreter.evaluator().scope().contains("y"));
}

#[test_log::test]
fn loops() {
    assert_prints("loop 3 { print \"hi\" }", &["hi", "hi", "hi"]);
    assert_prints("loop -1 { print \"x\" }", &[]);
    assert_prints("loop 0 print \"x\"", &[]);
    assert_prints("var i = 0; loop 4 i = i + 1; print i", &["4"]);
    assert_failure("loop 1.5 { print 1 }");
    assert_failure("loop \"3\" print 1");
}

#[test_log::test]
fn redeclaration_keeps_first_value() {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    interpreter.run("var x = 1; var x = 2;").unwrap();
    assert_eq!(interpreter.errors().len(), 1);
    assert_eq!(interpreter.run("x").unwrap(), None);
    interpreter.run("print x").unwrap();
    assert_eq!(interpreter.output().lines, ["1"]);
}

#[test_log::test]
fn declaration_continues_after_a_failing_name() {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    interpreter.run("var a = 1; var a, b = 2; print a; print b").unwrap();
    assert_eq!(interpreter.errors().len(), 1);
    assert_eq!(interpreter.output().lines, ["1", "2"]);
}

#[test_log::test]
fn assignment_type_rules() {
    assert_failure("int x = 1; x = \"str\"");
    assert_prints("float f = 1.5; f = 2; print f", &["2"]);
    assert_eq!(value_of("float f = 1.5; f = 2; typeof(f)"), Some(Value::from("float")));
    assert_eq!(value_of("bool b = true; b = 0; typeof(b)"), Some(Value::from("bool")));
    assert_prints("bool b = true; b = 3; print b", &["true"]);
    assert_failure("int i = 1; i = 2.5");
    assert_prints("string s = \"a\"; s = null; print s", &["NULL"]);
    assert_failure("y = 1");
}

#[test_log::test]
fn declaration_type_rules() {
    assert_prints("float f = 1; print f + 0.5", &["1.5"]);
    assert_failure("int i = 2.5");
    assert_failure("void v = 1");
    assert_failure("number n = 1");
    assert_failure("var n = null");
    assert_prints("int n; print n", &["NULL"]);
}

#[test_log::test]
fn trailing_tokens_are_fatal() {
    assert!(matches!(Interpreter::new(BufferedSink::new()).run("print 1 2"),
                     Err(ParseError::UnexpectedToken { .. })));
    assert_failure("var x = 1 x");
    assert_failure("print (1 + 2");
    assert_failure("{ print 1 ");
    assert_failure("print 1 }");
}

fn assert_too_deep(src: &str) {
    let result = Interpreter::new(BufferedSink::new()).run(src);
    assert!(matches!(result, Err(ParseError::NestingTooDeep { .. })), "{result:?}");
}

#[test_log::test]
fn deep_nesting_is_a_parse_error() {
    assert_too_deep(&format!("print {}1{}", "(".repeat(20_000), ")".repeat(20_000)));
    assert_too_deep(&format!("{}{}", "{".repeat(20_000), "}".repeat(20_000)));
    assert_too_deep(&format!("print {}1", "-".repeat(20_000)));
    assert_too_deep(&format!("print 1{}", " + 1".repeat(20_000)));
    assert_too_deep(&format!("{}print 1", "loop 1 ".repeat(20_000)));
    assert_too_deep(&format!("if (true) print 1{}", " else if (true) print 1".repeat(20_000)));
}

#[test_log::test]
fn moderate_nesting_still_works() {
    assert_prints(&format!("print {}1{}", "(".repeat(100), ")".repeat(100)), &["1"]);
    assert_prints(&format!("print 0{}", " + 1".repeat(100)), &["100"]);
    assert_prints(&format!("{}print 1{}", "{ ".repeat(50), " }".repeat(50)), &["1"]);
}

#[test_log::test]
fn parse_errors_evaluate_nothing() {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    assert!(interpreter.run("print 1; print 2 3").is_err());
    assert!(interpreter.output().lines.is_empty());
}

#[test_log::test]
fn lexing_errors_abort_the_unit() {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    let error = interpreter.run("print 1; print $").unwrap_err();
    assert_eq!(error,
               ParseError::Lex(LexError::TokenizationFailed { character: '$',
                                                              position:  15,
                                                              line:      1, }));
    assert!(interpreter.output().lines.is_empty());
}

#[test_log::test]
fn runtime_errors_stop_only_their_statement() {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    interpreter.run("print 1; print missing; print 3").unwrap();
    assert_eq!(interpreter.output().lines, ["1", "3"]);
    assert_eq!(interpreter.errors().len(), 1);
    assert_eq!(interpreter.errors()[0].to_string(),
               "Error on line 1: Variable 'missing' has not been declared.");

    interpreter.run("print 4").unwrap();
    assert!(interpreter.is_success());
}

#[test_log::test]
fn blocks_stop_at_the_first_error() {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    interpreter.run("{ print 1; print missing; print 3 }").unwrap();
    assert_eq!(interpreter.output().lines, ["1"]);
}

#[test_log::test]
fn errors_are_reported_to_the_sink() {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    interpreter.run("var a = 1 / 0").unwrap();
    interpreter.report_errors();
    assert!(interpreter.is_success());
    assert_eq!(interpreter.output().errors, ["Error on line 1: Division by zero."]);
}

#[test_log::test]
fn branches() {
    assert_prints("if (true) print 1 else print 2", &["1"]);
    assert_prints("if (false) print 1 else if (true) print 2 else print 3", &["2"]);
    assert_prints("if (false) { print 1 } else { print 2 } print 3", &["2", "3"]);
    assert_prints("if (false) print 1", &[]);
    assert_failure("if (1) print 1");
}

#[test_log::test]
fn strings() {
    assert_prints("print \"n = \" + 4", &["n = 4"]);
    assert_prints("print \"ab\" * 3", &["ababab"]);
    assert_prints("print \"ab\" * 0", &[""]);
    assert_prints("print \"say \\\"hi\\\"\"", &["say \"hi\""]);
    assert_failure("print \"ab\" * 1.5");
    assert_failure("print \"ab\" - 1");
    assert_failure("print 1 + \"ab\"");
}

#[test_log::test]
fn huge_strings_are_errors() {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    interpreter.run("print \"abc\" * 9223372036854775807; print \"ok\"").unwrap();
    assert_eq!(interpreter.output().lines, ["ok"]);
    assert!(matches!(interpreter.errors(), [RuntimeError::StringTooLong { .. }]));

    interpreter.run("var s = \"abcdefgh\"; loop 30 s = s + s; print s * 0").unwrap();
    assert_eq!(interpreter.output().lines, ["ok", ""]);
    assert!(matches!(interpreter.errors(), [RuntimeError::StringTooLong { .. }]));
}

#[test_log::test]
fn missing_operator_overloads_name_the_operand_types() {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    interpreter.run("print \"ab\" - 1; print 1 + \"ab\"").unwrap();
    assert_eq!(interpreter.errors(),
               [RuntimeError::NoMatchingOverload { name:  "op_Subtract".to_string(),
                                                   types: "string, int".to_string(),
                                                   line:  1, },
                RuntimeError::NoMatchingOverload { name:  "op_Add".to_string(),
                                                   types: "int, string".to_string(),
                                                   line:  1, }]);
}

#[test_log::test]
fn typeof_names() {
    assert_eq!(value_of("typeof(1)"), Some(Value::from("int")));
    assert_eq!(value_of("typeof(1.5)"), Some(Value::from("float")));
    assert_eq!(value_of("typeof(3f)"), Some(Value::from("float")));
    assert_eq!(value_of("typeof(true)"), Some(Value::from("bool")));
    assert_eq!(value_of("typeof(\"s\")"), Some(Value::from("string")));
    assert_eq!(value_of("typeof(null)"), Some(Value::from("null")));
}

#[test_log::test]
fn print_null() {
    assert_prints("print null", &["NULL"]);
}

#[test_log::test]
fn lenient_identifier_statement() {
    assert_prints("var x = 1; x; print x", &["1"]);
}

#[test_log::test]
fn comments_are_ignored() {
    assert_prints("print 1 // one\n/* two */ ; print 2", &["1", "2"]);
}

#[test_log::test]
fn arithmetic_errors() {
    assert_failure("print 1 / 0");
    assert_failure("print 1.0 / 0.0");
    assert_failure("print 9223372036854775807 + 1");
    assert_failure("print 9007199254740993 + 0.5");
}

#[test_log::test]
fn deep_recursion_is_an_error() {
    assert_failure("func int f(int n) { return f(n) } print f(1)");
}

#[test_log::test]
fn state_persists_between_units() {
    let mut interpreter = Interpreter::new(BufferedSink::new());
    interpreter.run("func int sq(int n) n * n; var x = 3").unwrap();
    interpreter.run("print sq(x)").unwrap();
    assert_eq!(interpreter.output().lines, ["9"]);
}

#[test]
fn get_result_fails_on_runtime_errors() {
    assert_eq!(lexis::get_result("var y = 2; (y * 3)").unwrap(), Some(Value::Integer(6)));
    assert!(lexis::get_result("var y = x").is_err());
    assert!(lexis::get_result("var y;").is_err());
}
