use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position, Span};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.span.start
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The source literal the error was raised on.
    pub fn get_literal(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token }
            | ErrorImpl::UndefinedSymbol { token }
            | ErrorImpl::IllegalIdentifier { token }
            | ErrorImpl::UnexpectedToken { token }
            | ErrorImpl::UnexpectedTokenDetailed { token, .. }
            | ErrorImpl::ExpectedToken { token, .. }
            | ErrorImpl::NoPrefixRule { token, .. }
            | ErrorImpl::NumberParseError { token } => token,
        }
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn is_lexical(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedToken { .. }
                | ErrorImpl::UndefinedSymbol { .. }
                | ErrorImpl::IllegalIdentifier { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UndefinedSymbol { .. } => "UndefinedSymbol",
            ErrorImpl::IllegalIdentifier { .. } => "IllegalIdentifier",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::NoPrefixRule { .. } => "NoPrefixRule",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UndefinedSymbol { token } => ErrorTip::Suggestion(format!(
                "`{}` is not a known keyword or symbol",
                token
            )),
            ErrorImpl::IllegalIdentifier { token } => ErrorTip::Suggestion(format!(
                "Identifier `{}` starts with a digit, identifiers must start with a letter",
                token
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::ExpectedToken {
                expected,
                received,
                token,
            } => ErrorTip::Suggestion(format!(
                "expected {}, found {} `{}`",
                expected, received, token
            )),
            ErrorImpl::NoPrefixRule { kind, token } => ErrorTip::Suggestion(format!(
                "`{}` ({}) cannot start an expression",
                token, kind
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}..{}] {}",
            self.span.start.0, self.span.end.0, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("symbol or keyword {token:?} is not defined")]
    UndefinedSymbol { token: String },
    #[error("illegal identifier {token:?}: identifiers may not start with a digit")]
    IllegalIdentifier { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("expected {expected}, received {received} {token:?}")]
    ExpectedToken {
        expected: TokenKind,
        received: TokenKind,
        token: String,
    },
    #[error("no prefix parse rule for {kind} {token:?}")]
    NoPrefixRule { kind: TokenKind, token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}
