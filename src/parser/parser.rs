//! Parser state and the top-level entry point.
//!
//! The parser walks an already-materialized token vector with a single
//! cursor. All grammar knowledge lives in a [`Lookups`] value that the parser
//! only reads:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers

use tracing::debug;

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{BPLookup, Lookups, NUDLookup, LEDLookup, StmtLookup, DEFAULT_LOOKUPS},
    stmt::parse_stmt,
    types::{TypeBPLookup, TypeLEDLookup, TypeNUDLookup},
};

/// Deepest nesting of groupings, prefix operators, array types and blocks
/// a single parse accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// The list of tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Grammar tables consulted for every dispatch
    lookups: &'a Lookups,
    /// Number of prefix and statement handlers currently running
    depth: usize,
}

impl Parser<'static> {
    /// Creates a parser over `tokens` using the default grammar.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_lookups(tokens, &DEFAULT_LOOKUPS)
    }
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens` using caller-supplied grammar tables.
    ///
    /// A missing trailing EOF token is appended, so the cursor always has a
    /// token to look at.
    pub fn with_lookups(mut tokens: Vec<Token>, lookups: &'a Lookups) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens.last().map(|token| token.span.end.clone()).unwrap_or_else(Position::null);
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("eof"),
                span: Span { start: end.clone(), end },
            });
        }

        Parser {
            tokens,
            pos: 0,
            lookups,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past the trailing EOF.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if index + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the specified kind, with an optional message for
    /// the resulting error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        message: Option<&str>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::ExpectedTokenKind {
                    expected: expected_kind,
                    received: token.kind,
                    message: message.map(String::from),
                },
                token.span.start.clone(),
            ));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with the default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Error for a token that no handler can start a construct with.
    pub fn unexpected_token(&self) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
                kind: token.kind,
            },
            token.span.start.clone(),
        )
    }

    /// Runs `handler` one nesting level deeper, failing once
    /// [`MAX_NESTING_DEPTH`] levels are already open.
    pub fn nested<T, F>(&mut self, handler: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = handler(self);
        self.depth -= 1;

        result
    }

    pub fn get_stmt_lookup(&self) -> &'a StmtLookup {
        &self.lookups.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &'a NUDLookup {
        &self.lookups.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &'a LEDLookup {
        &self.lookups.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &'a BPLookup {
        &self.lookups.binding_power_lookup
    }

    pub fn get_type_nud_lookup(&self) -> &'a TypeNUDLookup {
        &self.lookups.type_nud_lookup
    }

    pub fn get_type_led_lookup(&self) -> &'a TypeLEDLookup {
        &self.lookups.type_led_lookup
    }

    pub fn get_type_bp_lookup(&self) -> &'a TypeBPLookup {
        &self.lookups.type_binding_power_lookup
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Parses a stream of tokens into the root block using the default grammar.
pub fn parse(tokens: Vec<Token>) -> Result<BlockStmt, Error> {
    parse_with_lookups(tokens, &DEFAULT_LOOKUPS)
}

/// Parses statements until EOF, stopping at the first error.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_with_lookups(tokens: Vec<Token>, lookups: &Lookups) -> Result<BlockStmt, Error> {
    let mut parser = Parser::with_lookups(tokens, lookups);
    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    debug!(statement_count = body.len(), "parsed source");
    Ok(BlockStmt { body })
}
