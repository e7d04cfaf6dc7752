use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::{
    dfa::{transition, DfaState},
    tokens::{lookup_fixed, Token, TokenKind},
};

/// Marks the end of input. Anything after it is never scanned.
pub const SENTINEL: char = '\0';

/// Appended after the last character so the pending token is always flushed.
const TERMINATOR: char = '\n';

/// Pull access to a token sequence, one token at a time.
///
/// Once the sequence is exhausted every call returns an `EOF` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

#[derive(Clone)]
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    errors: Vec<Error>,
    state: DfaState,
    /// Offset of the first character of the pending token
    start: usize,
    /// Latest accepting state of the pending token and the offset just past it
    last_accept: Option<(DfaState, usize)>,
    /// Index of the next token handed out by `next_token`
    reader: usize,
    file: Rc<String>,
}

impl Lexer {
    /// Scans `source` completely; tokens and errors are ready on return.
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source: source.chars().take_while(|c| *c != SENTINEL).collect(),
            tokens: vec![],
            errors: vec![],
            state: DfaState::Initial,
            start: 0,
            last_accept: None,
            reader: 0,
            file: file_name,
        };
        lexer.tokenize();
        lexer
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn state(&self) -> DfaState {
        self.state
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<Error>) {
        (self.tokens, self.errors)
    }

    fn tokenize(&mut self) {
        let mut pos = 0;
        while pos <= self.source.len() {
            let c = self.source.get(pos).copied().unwrap_or(TERMINATOR);
            pos = self.step(pos, c);
        }

        self.push_eof();

        debug!(
            "tokenized {}: {} tokens, {} errors",
            self.file,
            self.tokens.len(),
            self.errors.len()
        );
    }

    /// Feeds `c` at offset `pos` and returns the offset of the next character
    /// to scan.
    fn step(&mut self, pos: usize, c: char) -> usize {
        match transition(self.state, c) {
            Some(DfaState::Initial) => {
                // Whitespace while idle is never part of a token
                self.start = pos + 1;
                pos + 1
            }
            Some(next) => {
                self.state = next;
                if next.accepts().is_some() {
                    self.last_accept = Some((next, pos + 1));
                }
                pos + 1
            }
            None => {
                if self.state.accepts().is_none() {
                    if let Some((state, end)) = self.last_accept {
                        // Dead end inside a keyword: emit the longest accepted
                        // prefix and scan again from the character after it
                        self.state = state;
                        self.accept(end);
                        return end;
                    }
                }

                self.accept(pos);
                // `c` triggered the acceptance but has not been classified yet.
                // From `Initial` it always has a transition, so this recurses once.
                self.step(pos, c)
            }
        }
    }

    /// Emits the token spanning `start..end` and resets to `Initial`.
    fn accept(&mut self, end: usize) {
        let Some(kind) = self.state.accepts() else {
            self.state = DfaState::Initial;
            self.last_accept = None;
            return;
        };

        let literal = self.source[self.start..end]
            .iter()
            .collect::<String>()
            .trim()
            .to_string();
        let span = MK_SPAN!(self.start, end, self.file);

        let kind = self.check_token(kind, &literal, &span);

        trace!("accepted {} {:?} at {}..{}", kind, literal, self.start, end);
        self.push(MK_TOKEN!(kind, literal, span));

        self.start = end;
        self.state = DfaState::Initial;
        self.last_accept = None;
    }

    /// Validates a completed literal, recording an error and downgrading the
    /// kind to `Illegal` when it does not hold up.
    fn check_token(&mut self, kind: TokenKind, literal: &str, span: &Span) -> TokenKind {
        let error = match self.state {
            DfaState::MalformedIdent => ErrorImpl::IllegalIdentifier {
                token: literal.to_string(),
            },
            DfaState::Unknown => ErrorImpl::UnrecognisedToken {
                token: literal.to_string(),
            },
            _ if kind == TokenKind::Illegal => ErrorImpl::UndefinedSymbol {
                token: literal.to_string(),
            },
            _ if kind.is_fixed() && lookup_fixed(literal) != Some(kind) => {
                ErrorImpl::UndefinedSymbol {
                    token: literal.to_string(),
                }
            }
            _ => return kind,
        };

        let error = Error::new(error, span.clone());
        debug!("lexical error {}", error);
        self.errors.push(error);

        TokenKind::Illegal
    }

    fn push_eof(&mut self) {
        let end = self.source.len();
        self.state = DfaState::End;
        self.push(Token::eof(MK_SPAN!(end, end, self.file)));
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        match self.tokens.get(self.reader) {
            Some(token) => {
                self.reader += 1;
                token.clone()
            }
            None => {
                let end = self.source.len();
                Token::eof(MK_SPAN!(end, end, self.file))
            }
        }
    }
}

impl TokenSource for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Token {
        self.next().unwrap_or_else(|| Token::eof(Span::null()))
    }
}

/// Scans `source` into its tokens (always ending in `EOF`) and the lexical
/// errors met on the way.
pub fn tokenize(source: &str, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    Lexer::new(source, file).into_parts()
}
