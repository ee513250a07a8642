//! Type parsing implementation.
//!
//! This module handles parsing of type annotations:
//!
//! - Named types (identifiers)
//! - Array types, written `[]T`
//!
//! It runs the same binding-power loop as expression parsing, against its
//! own tables, so expression operators never leak into type position. The
//! infix table starts empty.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::Type,
        types::{ArrayType, SymbolType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, Lookups},
    parser::Parser,
};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, Type, BindingPower) -> Result<Type, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Type alias for type LED lookup table.
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;

/// Type alias for type binding power lookup table.
pub type TypeBPLookup = HashMap<TokenKind, BindingPower>;

/// Registers the handlers for parsing type expressions.
pub fn create_token_type_lookups(lookups: &mut Lookups) {
    lookups.type_nud(TokenKind::Identifier, parse_symbol_type);
    lookups.type_nud(TokenKind::OpenBracket, parse_array_type);
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(Type::from(SymbolType { name: token.value }))
}

pub fn parse_array_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.advance();
    parser.expect_error(TokenKind::CloseBracket, Some("array types are written `[]T`"))?;

    let underlying = parse_type(parser, BindingPower::Default)?;

    Ok(Type::from(ArrayType {
        underlying: Box::new(underlying),
    }))
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<Type, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_type_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected_token());
    };

    let mut left = parser.nested(nud_fn)?;

    // While the current token binds tighter than `bp`, keep extending the lhs
    loop {
        let token_kind = parser.current_token_kind();
        let current_bp = parser
            .get_type_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);

        if current_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_type_led_lookup().get(&token_kind).copied() else {
            return Err(Error::new(
                ErrorImpl::MissingInfixHandler { kind: token_kind },
                parser.get_position(),
            ));
        };

        left = led_fn(parser, left, current_bp)?;
    }

    Ok(left)
}
