use tracing::trace;

use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ExpressionStmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token_kind = parser.current_token_kind();
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&token_kind).copied() {
        trace!(kind = %token_kind, "statement handler");
        return parser.nested(stmt_fn);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::SemiColon)?;

    Ok(Stmt::from(ExpressionStmt { expression }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let is_constant = parser.advance().kind == TokenKind::Const;

    let identifier = parser
        .expect_error(TokenKind::Identifier, Some("expected identifier during variable declaration"))?
        .value;

    let explicit_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    let assigned_value = if parser.current_token_kind() != TokenKind::SemiColon {
        parser.expect(TokenKind::Assignment)?;
        Some(parse_expr(parser, BindingPower::Assignment)?)
    } else {
        None
    };

    let terminator = parser.expect(TokenKind::SemiColon)?;

    if assigned_value.is_none() {
        if is_constant {
            return Err(Error::new(
                ErrorImpl::ConstantWithoutValue { identifier },
                terminator.span.start,
            ));
        }

        if explicit_type.is_none() {
            return Err(Error::new(
                ErrorImpl::MissingTypeOrValue { identifier },
                terminator.span.start,
            ));
        }
    }

    Ok(Stmt::from(VarDeclStmt {
        identifier,
        is_constant,
        assigned_value,
        explicit_type,
    }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let mut body = Vec::new();
    while !matches!(parser.current_token_kind(), TokenKind::CloseCurly | TokenKind::EOF) {
        body.push(parse_stmt(parser)?);
    }

    parser.expect_error(TokenKind::CloseCurly, Some("unclosed block"))?;

    Ok(Stmt::from(BlockStmt { body }))
}
