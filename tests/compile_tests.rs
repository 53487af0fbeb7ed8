// Tests for the generated C++ text

use indoc::indoc;
use mollang::codegen::preamble::RUNTIME_PREAMBLE;
use mollang::parser::parse::ParseError;
use mollang::{translate, CompileError};
use pretty_assertions::assert_eq;

/// Generated code after the runtime preamble
fn body(source: &str) -> String {
    let code = translate(source).expect("Translation failed");
    code.strip_prefix(RUNTIME_PREAMBLE)
        .expect("missing runtime preamble")
        .to_string()
}

#[test]
fn test_assign_and_print_program() {
    let expected = indoc! {r#"


        MolObject var_0;

        int main() {
            try {
                var_0 = MolObject(3);
                mollang_print(var_0);
            } catch (const MolRuntimeError& e) {
                std::cout.flush();
                std::cerr << "runtime error: " << e.what() << std::endl;
                return 1;
            }
            return 0;
        }
    "#};
    assert_eq!(body("밥 은 3\n스크럼 밥"), expected);
}

#[test]
fn test_function_program() {
    let expected = indoc! {r#"

        MolObject func_0();

        MolObject var_0;
        MolObject var_1;

        MolObject func_0() {
            return MolObject(1);
            return MolObject();
        }

        int main() {
            try {
                var_0 = var_1;
                func_0();
            } catch (const MolRuntimeError& e) {
                std::cout.flush();
                std::cerr << "runtime error: " << e.what() << std::endl;
                return 1;
            }
            return 0;
        }
    "#};
    // `캠프1` in expression position is a variable read, not a call.
    assert_eq!(body("캠프1 [퇴근 1]\n밥 은 캠프1\n캠프1"), expected);
}

#[test]
fn test_non_boolean_condition_is_checked_at_run_time() {
    let code = translate("입 1 [ 스크럼 1 ]").unwrap();
    assert!(code.contains("if (mollang_truth(MolObject(1))) {"));
    assert!(code.contains("throw MolRuntimeError(\"condition is not a boolean\");"));
}

#[test]
fn test_text_repeat_program() {
    let code = body("바압 은 \"hi\"\n바압 은 바압 곱셈 3\n스크럼 바압");
    assert!(code.contains(concat!(
        "        var_0 = MolObject(std::string(\"hi\"));\n",
        "        var_0 = (var_0 * MolObject(3));\n",
        "        mollang_print(var_0);\n",
    )));
}

#[test]
fn test_identifiers_follow_first_appearance() {
    let code = body("바아압 은 1\n밥 은 2\n바압 은 바아압\n캠프나중\n캠프먼저 [ ]\n캠프나중 [ ]");
    assert!(code.contains("MolObject var_0;\nMolObject var_1;\nMolObject var_2;\n"));
    assert!(code.contains("var_2 = var_0;"));
    assert!(code.contains("MolObject func_0();\nMolObject func_1();\n"));
    // Definitions are emitted in source order.
    assert!(code.find("MolObject func_1() {").unwrap() < code.find("MolObject func_0() {").unwrap());
}

#[test]
fn test_translation_is_deterministic() {
    let source = "밥 은 뭐먹\n몰 밥 작 10 [ 밥 은 밥 덧셈 1 ]\n스크럼 밥";
    assert_eq!(translate(source).unwrap(), translate(source).unwrap());
}

#[test]
fn test_parse_errors_produce_no_code() {
    for source in ["밥 은", "입 밥 [", "스크럼 1 은 2", "]", "캠프 [ 캠프 [ ] ]"] {
        let err = translate(source).unwrap_err();
        assert!(matches!(err, CompileError::Parse(_)), "{:?} gave {:?}", source, err);
    }
}

#[test]
fn test_parse_error_message() {
    let err = translate("스크럼 1\n  \"x\"").unwrap_err();
    assert_eq!(
        err,
        CompileError::Parse(ParseError::InvalidStatementStart {
            text: "x".to_string(),
            location: mollang::parser::ast::SourceLocation::new(2, 3),
        })
    );
    assert_eq!(err.to_string(), "Parse error at line 2, column 3: invalid statement start 'x'");
}

#[test]
fn test_oversized_programs_are_rejected() {
    let long = format!("스크럼 1{}", " 덧셈 1".repeat(20_000));
    let err = translate(&long).unwrap_err();
    assert!(
        matches!(err, CompileError::Parse(ParseError::ExpressionTooLong { .. })),
        "{:?}",
        err
    );

    let deep = format!("{}{}", "입 밥 [ ".repeat(20_000), "] ".repeat(20_000));
    let err = translate(&deep).unwrap_err();
    assert!(
        matches!(err, CompileError::Parse(ParseError::NestingTooDeep { .. })),
        "{:?}",
        err
    );
}
