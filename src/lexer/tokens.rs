use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("func", TokenKind::Func);
        map.insert("meth", TokenKind::Meth);
        map.insert("var", TokenKind::Var);
        map.insert("bool", TokenKind::Bool);
        map.insert("int32", TokenKind::Int32);
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };

    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(",", TokenKind::Comma);
        map.insert(".", TokenKind::Dot);
        map.insert(":", TokenKind::Colon);
        map.insert(";", TokenKind::Semicolon);
        map.insert("_", TokenKind::Underline);
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("[", TokenKind::OpenBracket);
        map.insert("]", TokenKind::CloseBracket);
        map.insert("{", TokenKind::OpenCurly);
        map.insert("}", TokenKind::CloseCurly);
        map.insert("=", TokenKind::Assignment);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Dash);
        map.insert("*", TokenKind::Star);
        map.insert("/", TokenKind::Slash);
        map.insert("<", TokenKind::Less);
        map.insert(">", TokenKind::Greater);
        map.insert("==", TokenKind::Equals);
        map.insert("!=", TokenKind::NotEquals);
        map.insert("<=", TokenKind::LessEquals);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert("!", TokenKind::Not);
        map.insert("&", TokenKind::BitAnd);
        map.insert("|", TokenKind::BitOr);
        map.insert("<<", TokenKind::ShiftLeft);
        map.insert(">>", TokenKind::ShiftRight);
        map.insert("->", TokenKind::Arrow);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Identifier,
    Integer,
    Boolean,

    Comma,
    Dot,
    Colon,
    Semicolon,
    Underline,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Assignment, // =
    Plus,
    Dash,
    Star,
    Slash,

    Less,
    Greater,
    Equals,        // ==
    NotEquals,     // !=
    LessEquals,    // <=
    GreaterEquals, // >=

    And, // &&
    Or,  // ||
    Not, // !

    BitAnd,     // &
    BitOr,      // |
    ShiftLeft,  // <<
    ShiftRight, // >>

    Arrow, // ->

    // Reserved
    Func,
    Meth,
    Var,
    Bool,
    Int32,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Whether a literal of this kind must be found in the reserved or
    /// symbol lookup tables to be valid.
    pub fn is_fixed(&self) -> bool {
        !matches!(
            self,
            TokenKind::EOF | TokenKind::Illegal | TokenKind::Identifier | TokenKind::Integer
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Resolves a fixed literal against the reserved words, then the symbols.
pub fn lookup_fixed(literal: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP
        .get(literal)
        .or_else(|| SYMBOL_LOOKUP.get(literal))
        .copied()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn eof(span: Span) -> Token {
        Token {
            kind: TokenKind::EOF,
            value: String::new(),
            span,
        }
    }

    pub fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }
}
