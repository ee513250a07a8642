use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{AssignmentExpr, BinaryExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected_token());
    };

    trace!(kind = %token_kind, ?bp, "nud");
    let mut left = parser.nested(nud_fn)?;

    // While the current token binds tighter than `bp`, keep extending the lhs
    loop {
        let token_kind = parser.current_token_kind();
        let current_bp = parser
            .get_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);

        if current_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(Error::new(
                ErrorImpl::MissingInfixHandler { kind: token_kind },
                parser.get_position(),
            ));
        };

        trace!(kind = %token_kind, bp = ?current_bp, "led");
        left = led_fn(parser, left, current_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.current_token();
            let value = token.value.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError { token: token.value.clone() },
                    token.span.start.clone(),
                )
            })?;

            parser.advance();
            Ok(Expr::from(NumberExpr { value }))
        }
        TokenKind::String => Ok(Expr::from(StringExpr {
            value: parser.advance().value.clone(),
        })),
        TokenKind::Identifier => Ok(Expr::from(SymbolExpr {
            value: parser.advance().value.clone(),
        })),
        _ => Err(parser.unexpected_token()),
    }
}

/// Recursing with the operator's own binding power makes every binary
/// operator left-associative.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::from(BinaryExpr {
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::from(PrefixExpr {
        operator: operator_token,
        right_expr: Box::new(rhs),
    }))
}

/// Same recursion rule as binary operators, so `a = b = c` chains to
/// `(a = b) = c`.
pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let rhs = parse_expr(parser, bp)?;

    Ok(Expr::from(AssignmentExpr {
        assignee: Box::new(left),
        operator: operator_token,
        value: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::CloseParen, Some("unclosed parenthesis"))?;

    Ok(expr)
}
