//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Tokens are pulled one at a time from a [`TokenSource`], with a single
//! token of lookahead.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token source and maintains lookup tables for
/// parsing statements and expressions. It tracks the current and next
/// token and collects every syntax error met along the way.
pub struct Parser {
    /// Where tokens are pulled from
    tokens: Box<dyn TokenSource>,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Syntax errors in the order they were found
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance with empty lookup tables.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Anything that hands out tokens one at a time
    pub fn new<S: TokenSource + 'static>(mut tokens: S) -> Self {
        let current = tokens.next_token();
        let peek = tokens.next_token();

        Parser {
            tokens: Box::new(tokens),
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let next = std::mem::replace(&mut self.peek, self.tokens.next_token());
        std::mem::replace(&mut self.current, next)
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) and advances if the current token matches,
    /// otherwise returns the given error or an `ExpectedToken` error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::ExpectedToken {
                        expected: expected_kind,
                        received: token.kind,
                        token: token.value.clone(),
                    },
                    token.span.clone(),
                )),
            }
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// The binding power of the current token as an infix operator.
    /// Tokens that are not infix operators bind with `Default`, which ends
    /// any expression.
    pub fn current_binding_power(&self) -> BindingPower {
        *self
            .get_bp_lookup()
            .get(&self.current_token_kind())
            .unwrap_or(&BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// The prefix role of a token never changes its infix binding power, so
    /// `-` can be both negation and subtraction.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Syntax errors recorded so far, in source order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn record_error(&mut self, error: Error) {
        debug!("syntax error {}", error);
        self.errors.push(error);
    }

    /// Skips the rest of a failed statement.
    ///
    /// Stops just past the next `;`, or before a `}` or `EOF` so the
    /// enclosing statement list can close itself.
    pub fn synchronize(&mut self) {
        while !self
            .current
            .is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EOF])
        {
            if self.advance().kind == TokenKind::Semicolon {
                break;
            }
        }
    }

    /// Parses top-level statements until `EOF`.
    ///
    /// A statement that fails is recorded and skipped, so one pass reports
    /// every independent syntax error.
    pub fn parse_program(&mut self) -> Program {
        let start = self.get_position();
        let mut statements = vec![];

        while self.has_tokens() {
            if self.current_token_kind() == TokenKind::CloseCurly {
                let token = self.advance();
                self.record_error(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: token.value,
                        message: String::from("no block to close"),
                    },
                    token.span,
                ));
                continue;
            }

            match parse_stmt(self) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    self.record_error(error);
                    self.synchronize();
                }
            }
        }

        debug!(
            "parsed {} statements, {} errors",
            statements.len(),
            self.errors.len()
        );

        Program {
            statements,
            span: Span {
                start,
                end: self.current.span.end.clone(),
            },
        }
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses all statements until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, whose `errors()` hold every syntax error found
/// - The Program, complete when there are no errors and best effort otherwise
pub fn parse<S: TokenSource + 'static>(tokens: S) -> (Parser, Program) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let program = parser.parse_program();

    (parser, program)
}
