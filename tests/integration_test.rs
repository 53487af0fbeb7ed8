// Integration tests for the Mollang interpreter

use mollang::compiler::Compilation;
use mollang::interpreter::{run_source, Interpreter, MockTerminal, RuntimeError, Value};
use mollang::parser::parse::ParseError;
use mollang::{CompileError, Error};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn run(source: &str) -> Vec<String> {
    let terminal = run_source(source, MockTerminal::new()).expect("Execution failed");
    terminal.lines
}

fn run_demo(name: &str) -> Vec<String> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name);
    let source = fs::read_to_string(path).expect("Failed to read demo file");
    run(&source)
}

#[test]
fn test_assign_then_print() {
    assert_eq!(run("밥 은 3\n스크럼 밥"), vec!["3"]);
}

#[test]
fn test_function_defined_and_called() {
    let source = r#"
        캠프1 [퇴근 1]
        밥 은 0
        입 밥 같 0 [ 캠프1 ]
        스크럼 "called"
    "#;
    assert_eq!(run(source), vec!["called"]);
}

#[test]
fn test_text_repetition() {
    assert_eq!(run("바압 은 \"hi\"\n바압 은 바압 곱셈 3\n스크럼 바압"), vec!["hihihi"]);
}

#[test]
fn test_non_boolean_condition_is_an_error() {
    let err = run_source("입 1 [ 스크럼 1 ]", MockTerminal::new()).unwrap_err();
    assert!(
        matches!(err, Error::Runtime(RuntimeError::NonBooleanCondition { .. })),
        "got {:?}",
        err
    );
}

#[test]
fn test_unterminated_block_is_a_parse_error() {
    let err = run_source("몰 밥 작 3 [ 스크럼 밥", MockTerminal::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Compile(CompileError::Parse(ParseError::UnexpectedEof { .. }))
    ));
}

#[test]
fn test_input_drives_program() {
    let source = r#"
        밥 은 뭐먹
        입 밥 작 10 [ 스크럼 "small" ]
        바압 은 뭐먹
        스크럼 바압 덧셈 "!"
    "#;
    let compilation = Compilation::new(source).expect("Parsing failed");
    let mut interpreter = Interpreter::new(compilation, MockTerminal::with_input(["7", "몰랭"]));
    interpreter.run().expect("Execution failed");

    assert_eq!(interpreter.global("밥"), Some(&Value::Int(7)));
    assert_eq!(interpreter.console().get_output(), ["small", "몰랭!"]);
}

#[test]
fn test_demo_hello() {
    assert_eq!(run_demo("hello.mol"), vec!["3", "안녕 몰랭"]);
}

#[test]
fn test_demo_stars() {
    assert_eq!(run_demo("stars.mol"), vec!["", "*", "**", "***", "done"]);
}

#[test]
fn test_demo_functions() {
    assert_eq!(run_demo("functions.mol"), vec!["hi", "hi", "big", "12"]);
}

#[test]
fn test_demo_models() {
    assert_eq!(
        run_demo("models.mol"),
        vec![
            "커서는 신이야",
            "지피티는 요즘 애매해",
            "제미나이는 잘 따라가는중",
            "클로드는 LLM 중 코딩 끝판왕",
            "클라인도 레전드입니다… 꼭 쓰세요",
            "그록 누가씀?",
        ]
    );
}
