//! Fixed vocabulary of the Mollang surface syntax
//!
//! Everything the lexer and parser need to recognise by spelling lives here:
//! the closed keyword set, the operator words, the six constant-producing
//! words and the variable naming rule.
//!
//! # Variable names
//!
//! A token names a variable when it is the shorthand word `밥`, or when it is
//! `바`, followed by any number of `아`, followed by `압`:
//!
//! ```text
//! 바압  바아압  바아아압  ...
//! ```

use crate::parser::ast::BinOp;

pub const ASSIGN: &str = "은";
pub const IF: &str = "입";
pub const WHILE: &str = "몰";
pub const PRINT: &str = "스크럼";
pub const RETURN: &str = "퇴근";
pub const INPUT: &str = "뭐먹";

/// Every function name starts with this word; the bare word is itself a keyword.
pub const FUNCTION_PREFIX: &str = "캠프";

pub const BLOCK_OPEN: &str = "[";
pub const BLOCK_CLOSE: &str = "]";

const SHORTHAND_VARIABLE: &str = "밥";
const VARIABLE_PREFIX: char = '바';
const VARIABLE_FILLER: char = '아';
const VARIABLE_SUFFIX: char = '압';

/// Operator words and the operator each one spells.
const OPERATORS: [(&str, BinOp); 9] = [
    ("덧셈", BinOp::Add),
    ("합", BinOp::Add),
    ("더하기", BinOp::Add),
    ("곱셈", BinOp::Mul),
    ("곱", BinOp::Mul),
    ("같", BinOp::Eq),
    ("작", BinOp::Lt),
    ("같작", BinOp::Le),
    ("작같", BinOp::Le),
];

/// Words that evaluate to a fixed piece of text.
const CONSTANTS: [(&str, &str); 6] = [
    ("커서", "커서는 신이야"),
    ("지피티", "지피티는 요즘 애매해"),
    ("제미나이", "제미나이는 잘 따라가는중"),
    ("클로드", "클로드는 LLM 중 코딩 끝판왕"),
    ("클라인", "클라인도 레전드입니다… 꼭 쓰세요"),
    ("그록", "그록 누가씀?"),
];

/// Keywords that begin a statement (or the assign marker); an expression never
/// continues past one of these.
const STATEMENT_KEYWORDS: [&str; 6] = [ASSIGN, IF, WHILE, PRINT, FUNCTION_PREFIX, RETURN];

/// Returns true if `text` is one of the reserved keyword words.
pub fn is_keyword(text: &str) -> bool {
    matches!(text, ASSIGN | IF | WHILE | FUNCTION_PREFIX | RETURN | PRINT | INPUT)
        || OPERATORS.iter().any(|(word, _)| *word == text)
        || CONSTANTS.iter().any(|(word, _)| *word == text)
}

/// Returns true if `text` may be used as a variable name.
pub fn is_variable_name(text: &str) -> bool {
    if text == SHORTHAND_VARIABLE {
        return true;
    }

    text.strip_prefix(VARIABLE_PREFIX)
        .and_then(|rest| rest.strip_suffix(VARIABLE_SUFFIX))
        .is_some_and(|fillers| fillers.chars().all(|c| c == VARIABLE_FILLER))
}

/// Returns true if a token with this text starts a function definition or call.
pub fn is_function_name(text: &str) -> bool {
    text.starts_with(FUNCTION_PREFIX)
}

pub fn is_statement_keyword(text: &str) -> bool {
    STATEMENT_KEYWORDS.contains(&text)
}

/// Look up the operator spelled by `text`.
pub fn operator(text: &str) -> Option<BinOp> {
    OPERATORS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|(_, op)| *op)
}

/// Look up the fixed text produced by a constant word.
pub fn constant(text: &str) -> Option<&'static str> {
    CONSTANTS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|(_, payload)| *payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_names() {
        assert!(is_variable_name("밥"));
        assert!(is_variable_name("바압"));
        assert!(is_variable_name("바아압"));
        assert!(is_variable_name("바아아아아압"));

        assert!(!is_variable_name(""));
        assert!(!is_variable_name("바"));
        assert!(!is_variable_name("압"));
        assert!(!is_variable_name("바바압"));
        assert!(!is_variable_name("바아아"));
        assert!(!is_variable_name("바아x압"));
        assert!(!is_variable_name("밥밥"));
        assert!(!is_variable_name("rice"));
    }

    #[test]
    fn test_keywords_are_not_variables() {
        let words = OPERATORS
            .iter()
            .map(|(word, _)| *word)
            .chain(CONSTANTS.iter().map(|(word, _)| *word))
            .chain(STATEMENT_KEYWORDS)
            .chain([INPUT]);
        for word in words {
            assert!(is_keyword(word), "{word} should be a keyword");
            assert!(!is_variable_name(word));
        }
        assert!(is_keyword(FUNCTION_PREFIX));
        assert!(!is_keyword("캠프1"));
    }

    #[test]
    fn test_operator_lookup() {
        assert_eq!(operator("덧셈"), Some(BinOp::Add));
        assert_eq!(operator("더하기"), Some(BinOp::Add));
        assert_eq!(operator("곱"), Some(BinOp::Mul));
        assert_eq!(operator("같"), Some(BinOp::Eq));
        assert_eq!(operator("작"), Some(BinOp::Lt));
        assert_eq!(operator("작같"), Some(BinOp::Le));
        assert_eq!(operator("커서"), None);
    }

    #[test]
    fn test_constants() {
        assert_eq!(constant("그록"), Some("그록 누가씀?"));
        assert_eq!(constant("밥"), None);
    }
}
