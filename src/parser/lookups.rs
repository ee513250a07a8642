use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::{Expr, Stmt}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    expr::*,
    parser::Parser,
    stmt::*,
    types::{create_token_type_lookups, TypeBPLookup, TypeLEDHandler, TypeLEDLookup, TypeNUDHandler, TypeNUDLookup},
};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Comma,
    Assignment,
    Logical,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Member,
    Primary
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

lazy_static! {
    /// Grammar tables shared by every parse that doesn't bring its own.
    pub static ref DEFAULT_LOOKUPS: Lookups = Lookups::new();
}

/// The grammar registries for statements, expressions and types.
///
/// Binding powers are stored apart from the handlers so the same climbing
/// loop can serve each grammar by consulting a different pair of tables.
/// Tables are only written while building; parsers hold a shared reference.
#[derive(Default)]
pub struct Lookups {
    pub(super) stmt_lookup: StmtLookup,
    pub(super) nud_lookup: NUDLookup,
    pub(super) led_lookup: LEDLookup,
    pub(super) binding_power_lookup: BPLookup,
    pub(super) type_nud_lookup: TypeNUDLookup,
    pub(super) type_led_lookup: TypeLEDLookup,
    pub(super) type_binding_power_lookup: TypeBPLookup,
}

impl Lookups {
    /// Builds the complete grammar for the language.
    pub fn new() -> Self {
        let mut lookups = Lookups::default();
        create_token_lookups(&mut lookups);
        create_token_type_lookups(&mut lookups);
        lookups
    }

    /// Registers a left denotation (infix) handler and its binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a whole-statement handler for a leading token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.binding_power_lookup.insert(kind, BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn type_led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: TypeLEDHandler) {
        self.type_binding_power_lookup.insert(kind, binding_power);
        self.type_led_lookup.insert(kind, led_fn);
    }

    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }
}

pub fn create_token_lookups(lookups: &mut Lookups) {
    lookups.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);
    lookups.led(TokenKind::PlusEquals, BindingPower::Assignment, parse_assignment_expr);
    lookups.led(TokenKind::MinusEquals, BindingPower::Assignment, parse_assignment_expr);

    // Logical
    lookups.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);
    lookups.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);
    lookups.led(TokenKind::DotDot, BindingPower::Logical, parse_binary_expr);

    // Relational
    lookups.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::Equals, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::NotEquals, BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    lookups.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    lookups.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Number, parse_primary_expr);
    lookups.nud(TokenKind::String, parse_primary_expr);
    lookups.nud(TokenKind::Identifier, parse_primary_expr);
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);
    lookups.nud(TokenKind::Dash, parse_prefix_expr);

    // Statements
    lookups.stmt(TokenKind::Const, parse_var_decl_stmt);
    lookups.stmt(TokenKind::Let, parse_var_decl_stmt);
    lookups.stmt(TokenKind::OpenCurly, parse_block_stmt);
}
