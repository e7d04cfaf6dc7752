//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::{Position, Span};
use std::rc::Rc;

fn span(start: u32, end: u32) -> Span {
    let file = Rc::new("test.woc".to_string());
    Span {
        start: Position(start, Rc::clone(&file)),
        end: Position(end, file),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        span(10, 11),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_literal(), "@");
    assert!(error.is_lexical());
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        span(42, 43),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_span().end.0, 43);
    assert!(!error.is_lexical());
}

#[test]
fn test_illegal_identifier_error() {
    let error = Error::new(
        ErrorImpl::IllegalIdentifier {
            token: "5abc".to_string(),
        },
        span(0, 4),
    );

    assert_eq!(error.get_error_name(), "IllegalIdentifier");
    assert_eq!(
        error.get_message(),
        "illegal identifier \"5abc\": identifiers may not start with a digit"
    );
    assert_eq!(
        error.to_string(),
        "[0..4] illegal identifier \"5abc\": identifiers may not start with a digit"
    );
}

#[test]
fn test_undefined_symbol_error() {
    let error = Error::new(
        ErrorImpl::UndefinedSymbol {
            token: "=>".to_string(),
        },
        span(3, 5),
    );

    assert_eq!(error.get_error_name(), "UndefinedSymbol");
    assert!(error.is_lexical());
}

#[test]
fn test_expected_token_error() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::CloseParen,
            received: TokenKind::Semicolon,
            token: ";".to_string(),
        },
        span(7, 8),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(error.get_literal(), ";");
    assert_eq!(
        error.get_message(),
        "expected CloseParen, received Semicolon \";\""
    );
    assert_eq!(
        error.get_tip().to_string(),
        "expected CloseParen, found Semicolon `;`"
    );
}

#[test]
fn test_no_prefix_rule_error() {
    let error = Error::new(
        ErrorImpl::NoPrefixRule {
            kind: TokenKind::Star,
            token: "*".to_string(),
        },
        span(0, 1),
    );

    assert_eq!(error.get_error_name(), "NoPrefixRule");
    assert_eq!(error.get_tip().to_string(), "`*` (Star) cannot start an expression");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        span(0, 20),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        span(0, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "(".to_string(),
            message: "only identifiers can be called".to_string(),
        },
        span(0, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "Unexpected token: `(`, only identifiers can be called")
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
