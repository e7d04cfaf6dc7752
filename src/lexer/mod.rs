//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization through a deterministic finite automaton
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Non-fatal lexical errors

pub mod dfa;
pub mod lexer;
pub mod tokens;
