//! The tokenizer's finite automaton.
//!
//! S (states) is [`DfaState`], the alphabet is every `char`, the start state
//! is [`DfaState::Initial`] and the accepting states are those for which
//! [`DfaState::accepts`] returns a kind. Transitions come from two places:
//!
//! - [`EDGES`], the explicit `(state, char) -> state` table. Every operator
//!   and keyword spelling lives here, one edge per matched character.
//! - [`class_transition`], fallbacks keyed on the character class (letters
//!   promote keyword prefixes to identifiers, digits loop in numbers, ...).
//!
//! A state with no transition for the next character is complete: the lexer
//! emits its token and re-dispatches that character from `Initial`. When that
//! state accepts nothing, the lexer backs up to the last accepting state of
//! the same token and re-scans the characters after it.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::tokens::TokenKind;

use self::DfaState as S;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DfaState {
    Initial,
    End,

    Ident,
    Number,
    /// Digits followed by letters, e.g. `5abc`
    MalformedIdent,
    /// A character that starts no token
    Unknown,

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

    Assign,
    Plus,
    Minus,
    Star,
    Slash,

    Less,
    Greater,
    Equals,
    NotEquals,
    LessEquals,
    GreaterEquals,

    And,
    Or,
    Bang,

    BitAnd,
    BitOr,
    ShiftLeft,
    ShiftRight,

    Arrow,

    // Keyword chains, named after the prefix matched so far
    F,
    Fu,
    Fun,
    Func,
    Fa,
    Fal,
    Fals,
    False,

    M,
    Me,
    Met,
    Meth,

    V,
    Va,
    Var,

    B,
    Bo,
    Boo,
    Bool,

    T,
    Tr,
    Tru,
    True,

    I,
    If,
    In,
    Int,
    Int3,
    Int32,

    E,
    El,
    Els,
    Else,

    R,
    Re,
    Ret,
    Retu,
    Retur,
    Return,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CharClass {
    Letter,
    Digit,
    Whitespace,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> CharClass {
        if c.is_ascii_alphabetic() {
            CharClass::Letter
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else if c.is_ascii_whitespace() {
            CharClass::Whitespace
        } else {
            CharClass::Other
        }
    }
}

pub const EDGES: &[(DfaState, char, DfaState)] = &[
    // Single character symbols
    (S::Initial, ',', S::Comma),
    (S::Initial, '.', S::Dot),
    (S::Initial, ':', S::Colon),
    (S::Initial, ';', S::Semicolon),
    (S::Initial, '_', S::Underline),
    (S::Initial, '(', S::OpenParen),
    (S::Initial, ')', S::CloseParen),
    (S::Initial, '[', S::OpenBracket),
    (S::Initial, ']', S::CloseBracket),
    (S::Initial, '{', S::OpenCurly),
    (S::Initial, '}', S::CloseCurly),
    (S::Initial, '+', S::Plus),
    (S::Initial, '*', S::Star),
    (S::Initial, '/', S::Slash),
    // Symbols with a two character form
    (S::Initial, '=', S::Assign),
    (S::Assign, '=', S::Equals),
    (S::Initial, '!', S::Bang),
    (S::Bang, '=', S::NotEquals),
    (S::Initial, '-', S::Minus),
    (S::Minus, '>', S::Arrow),
    (S::Initial, '<', S::Less),
    (S::Less, '=', S::LessEquals),
    (S::Less, '<', S::ShiftLeft),
    (S::Initial, '>', S::Greater),
    (S::Greater, '=', S::GreaterEquals),
    (S::Greater, '>', S::ShiftRight),
    (S::Initial, '&', S::BitAnd),
    (S::BitAnd, '&', S::And),
    (S::Initial, '|', S::BitOr),
    (S::BitOr, '|', S::Or),
    // func / false
    (S::Initial, 'f', S::F),
    (S::F, 'u', S::Fu),
    (S::Fu, 'n', S::Fun),
    (S::Fun, 'c', S::Func),
    (S::F, 'a', S::Fa),
    (S::Fa, 'l', S::Fal),
    (S::Fal, 's', S::Fals),
    (S::Fals, 'e', S::False),
    // meth
    (S::Initial, 'm', S::M),
    (S::M, 'e', S::Me),
    (S::Me, 't', S::Met),
    (S::Met, 'h', S::Meth),
    // var
    (S::Initial, 'v', S::V),
    (S::V, 'a', S::Va),
    (S::Va, 'r', S::Var),
    // bool
    (S::Initial, 'b', S::B),
    (S::B, 'o', S::Bo),
    (S::Bo, 'o', S::Boo),
    (S::Boo, 'l', S::Bool),
    // true
    (S::Initial, 't', S::T),
    (S::T, 'r', S::Tr),
    (S::Tr, 'u', S::Tru),
    (S::Tru, 'e', S::True),
    // if / int32
    (S::Initial, 'i', S::I),
    (S::I, 'f', S::If),
    (S::I, 'n', S::In),
    (S::In, 't', S::Int),
    (S::Int, '3', S::Int3),
    (S::Int3, '2', S::Int32),
    // else
    (S::Initial, 'e', S::E),
    (S::E, 'l', S::El),
    (S::El, 's', S::Els),
    (S::Els, 'e', S::Else),
    // return
    (S::Initial, 'r', S::R),
    (S::R, 'e', S::Re),
    (S::Re, 't', S::Ret),
    (S::Ret, 'u', S::Retu),
    (S::Retu, 'r', S::Retur),
    (S::Retur, 'n', S::Return),
];

lazy_static! {
    static ref TRANSITIONS: HashMap<(DfaState, char), DfaState> = EDGES
        .iter()
        .map(|(from, c, to)| ((*from, *c), *to))
        .collect();
}

/// The next state for `c`, or `None` when the current construct is complete.
///
/// From `Initial` every character has a transition.
pub fn transition(state: DfaState, c: char) -> Option<DfaState> {
    if let Some(next) = TRANSITIONS.get(&(state, c)) {
        return Some(*next);
    }

    class_transition(state, CharClass::of(c))
}

fn class_transition(state: DfaState, class: CharClass) -> Option<DfaState> {
    match (state, class) {
        (S::End, _) => None,
        (S::Initial, CharClass::Whitespace) => Some(S::Initial),
        (S::Initial, CharClass::Letter) => Some(S::Ident),
        (S::Initial, CharClass::Digit) => Some(S::Number),
        (S::Initial, CharClass::Other) => Some(S::Unknown),
        (S::Number, CharClass::Digit) => Some(S::Number),
        (S::Number, CharClass::Letter) => Some(S::MalformedIdent),
        (S::MalformedIdent, CharClass::Letter | CharClass::Digit) => Some(S::MalformedIdent),
        (state, CharClass::Letter) if state.is_word() => Some(S::Ident),
        _ => None,
    }
}

impl DfaState {
    /// Identifier and keyword states, which a further letter turns into a
    /// plain identifier.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            S::Ident
                | S::F
                | S::Fu
                | S::Fun
                | S::Func
                | S::Fa
                | S::Fal
                | S::Fals
                | S::False
                | S::M
                | S::Me
                | S::Met
                | S::Meth
                | S::V
                | S::Va
                | S::Var
                | S::B
                | S::Bo
                | S::Boo
                | S::Bool
                | S::T
                | S::Tr
                | S::Tru
                | S::True
                | S::I
                | S::If
                | S::In
                | S::Int
                | S::E
                | S::El
                | S::Els
                | S::Else
                | S::R
                | S::Re
                | S::Ret
                | S::Retu
                | S::Retur
                | S::Return
        )
    }

    /// The token kind recognised when the automaton leaves this state.
    pub fn accepts(&self) -> Option<TokenKind> {
        let kind = match self {
            // `int3` is only a step towards `int32`, the lexer backs up to `int`
            S::Initial | S::End | S::Int3 => return None,

            S::Ident => TokenKind::Identifier,
            S::Number => TokenKind::Integer,
            S::MalformedIdent | S::Unknown => TokenKind::Illegal,

            S::Comma => TokenKind::Comma,
            S::Dot => TokenKind::Dot,
            S::Colon => TokenKind::Colon,
            S::Semicolon => TokenKind::Semicolon,
            S::Underline => TokenKind::Underline,

            S::OpenParen => TokenKind::OpenParen,
            S::CloseParen => TokenKind::CloseParen,
            S::OpenBracket => TokenKind::OpenBracket,
            S::CloseBracket => TokenKind::CloseBracket,
            S::OpenCurly => TokenKind::OpenCurly,
            S::CloseCurly => TokenKind::CloseCurly,

            S::Assign => TokenKind::Assignment,
            S::Plus => TokenKind::Plus,
            S::Minus => TokenKind::Dash,
            S::Star => TokenKind::Star,
            S::Slash => TokenKind::Slash,

            S::Less => TokenKind::Less,
            S::Greater => TokenKind::Greater,
            S::Equals => TokenKind::Equals,
            S::NotEquals => TokenKind::NotEquals,
            S::LessEquals => TokenKind::LessEquals,
            S::GreaterEquals => TokenKind::GreaterEquals,

            S::And => TokenKind::And,
            S::Or => TokenKind::Or,
            S::Bang => TokenKind::Not,

            S::BitAnd => TokenKind::BitAnd,
            S::BitOr => TokenKind::BitOr,
            S::ShiftLeft => TokenKind::ShiftLeft,
            S::ShiftRight => TokenKind::ShiftRight,

            S::Arrow => TokenKind::Arrow,

            S::Func => TokenKind::Func,
            S::Meth => TokenKind::Meth,
            S::Var => TokenKind::Var,
            S::Bool => TokenKind::Bool,
            S::True | S::False => TokenKind::Boolean,
            S::If => TokenKind::If,
            S::Int32 => TokenKind::Int32,
            S::Else => TokenKind::Else,
            S::Return => TokenKind::Return,

            // A keyword prefix that stopped early is just an identifier
            S::F
            | S::Fu
            | S::Fun
            | S::Fa
            | S::Fal
            | S::Fals
            | S::M
            | S::Me
            | S::Met
            | S::V
            | S::Va
            | S::B
            | S::Bo
            | S::Boo
            | S::T
            | S::Tr
            | S::Tru
            | S::I
            | S::In
            | S::Int
            | S::E
            | S::El
            | S::Els
            | S::R
            | S::Re
            | S::Ret
            | S::Retu
            | S::Retur => TokenKind::Identifier,
        };

        Some(kind)
    }
}
