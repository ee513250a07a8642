//! Unit tests for the parser module.
//!
//! - Operator precedence and associativity
//! - Grouping and prefix operators
//! - Assignment chaining
//! - Variable declarations and type annotations
//! - Nested blocks and the nesting depth limit
//! - Error cases, including registry inconsistencies

use pretty_assertions::assert_eq;

use crate::{
    ast::{
        ast::{Expr, Stmt, Type},
        expressions::{AssignmentExpr, BinaryExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr},
        statements::{BlockStmt, ExpressionStmt, VarDeclStmt},
        types::{ArrayType, SymbolType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{BindingPower, Lookups},
    parser::{parse, parse_with_lookups, Parser, MAX_NESTING_DEPTH},
};

fn parse_str(source: &str) -> Result<BlockStmt, Error> {
    let tokens = tokenize(source, Some("test.lang")).unwrap();
    parse(tokens)
}

fn single_expr(source: &str) -> Expr {
    let block = parse_str(source).unwrap();
    assert_eq!(block.len(), 1);

    match &block.body[0] {
        Stmt::Expression(stmt) => stmt.expression.clone(),
        other => panic!("expected expression statement, got {:?}", other),
    }
}

fn single_stmt(source: &str) -> Stmt {
    let mut block = parse_str(source).unwrap();
    assert_eq!(block.len(), 1);
    block.body.remove(0)
}

fn op(kind: TokenKind, value: &str) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: Span {
            start: Position::null(),
            end: Position::null(),
        },
    }
}

fn num(value: f64) -> Expr {
    Expr::from(NumberExpr { value })
}

fn sym(name: &str) -> Expr {
    Expr::from(SymbolExpr {
        value: name.to_string(),
    })
}

fn binary(left: Expr, operator: Token, right: Expr) -> Expr {
    Expr::from(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

fn prefix(operator: Token, right: Expr) -> Expr {
    Expr::from(PrefixExpr {
        operator,
        right_expr: Box::new(right),
    })
}

fn assign(assignee: Expr, operator: Token, value: Expr) -> Expr {
    Expr::from(AssignmentExpr {
        assignee: Box::new(assignee),
        operator,
        value: Box::new(value),
    })
}

fn named(name: &str) -> Type {
    Type::from(SymbolType {
        name: name.to_string(),
    })
}

fn array_of(underlying: Type) -> Type {
    Type::from(ArrayType {
        underlying: Box::new(underlying),
    })
}

fn plus() -> Token {
    op(TokenKind::Plus, "+")
}

fn dash() -> Token {
    op(TokenKind::Dash, "-")
}

fn star() -> Token {
    op(TokenKind::Star, "*")
}

#[test]
fn test_multiplicative_binds_tighter_than_additive() {
    assert_eq!(
        single_expr("2 + 3 * 2;"),
        binary(num(2.0), plus(), binary(num(3.0), star(), num(2.0)))
    );
    assert_eq!(
        single_expr("2 * 3 + 2;"),
        binary(binary(num(2.0), star(), num(3.0)), plus(), num(2.0))
    );
}

#[test]
fn test_binary_operators_are_left_associative() {
    assert_eq!(
        single_expr("1 - 2 - 3;"),
        binary(binary(num(1.0), dash(), num(2.0)), dash(), num(3.0))
    );
    assert_eq!(
        single_expr("8 / 4 % 3;"),
        binary(
            binary(num(8.0), op(TokenKind::Slash, "/"), num(4.0)),
            op(TokenKind::Percent, "%"),
            num(3.0)
        )
    );
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(
        single_expr("(1 + 2) * 3;"),
        binary(binary(num(1.0), plus(), num(2.0)), star(), num(3.0))
    );
    assert_eq!(single_expr("((x));"), sym("x"));
}

#[test]
fn test_prefix_binds_its_operand_first() {
    assert_eq!(
        single_expr("-1 + 2;"),
        binary(prefix(dash(), num(1.0)), plus(), num(2.0))
    );
    assert_eq!(
        single_expr("-a * b;"),
        binary(prefix(dash(), sym("a")), star(), sym("b"))
    );
    assert_eq!(
        single_expr("- -x;"),
        prefix(dash(), prefix(dash(), sym("x")))
    );
    assert_eq!(
        single_expr("-(1 + 2);"),
        prefix(dash(), binary(num(1.0), plus(), num(2.0)))
    );
}

#[test]
fn test_logical_and_relational_levels() {
    assert_eq!(
        single_expr("a < b && c == d;"),
        binary(
            binary(sym("a"), op(TokenKind::Less, "<"), sym("b")),
            op(TokenKind::And, "&&"),
            binary(sym("c"), op(TokenKind::Equals, "=="), sym("d"))
        )
    );
    assert_eq!(
        single_expr("a >= 1 || b != 2;"),
        binary(
            binary(sym("a"), op(TokenKind::GreaterEquals, ">="), num(1.0)),
            op(TokenKind::Or, "||"),
            binary(sym("b"), op(TokenKind::NotEquals, "!="), num(2.0))
        )
    );
}

#[test]
fn test_range_operator_binds_loosely() {
    assert_eq!(
        single_expr("1..n + 1;"),
        binary(
            num(1.0),
            op(TokenKind::DotDot, ".."),
            binary(sym("n"), plus(), num(1.0))
        )
    );
}

#[test]
fn test_literals() {
    assert_eq!(single_expr("3.25;"), num(3.25));
    assert_eq!(
        single_expr(r#""hello world";"#),
        Expr::from(StringExpr {
            value: "hello world".to_string()
        })
    );
    assert_eq!(single_expr("foo;"), sym("foo"));
}

#[test]
fn test_assignment() {
    assert_eq!(
        single_expr("x = 1 + 2;"),
        assign(
            sym("x"),
            op(TokenKind::Assignment, "="),
            binary(num(1.0), plus(), num(2.0))
        )
    );
}

#[test]
fn test_compound_assignment_keeps_operator_spelling() {
    let expr = single_expr("x += 5;");
    assert_eq!(
        expr,
        assign(sym("x"), op(TokenKind::PlusEquals, "+="), num(5.0))
    );

    let Expr::Assignment(assignment) = single_expr("total -= 1;") else {
        panic!("expected assignment");
    };
    assert_eq!(assignment.operator.kind, TokenKind::MinusEquals);
    assert_eq!(assignment.operator.value, "-=");
    assert_eq!(assignment.operator.span.start.0, 6);
}

#[test]
fn test_assignment_chains_left_to_right() {
    // The right-hand side recurses at the operator's own binding power.
    assert_eq!(
        single_expr("a = b = c;"),
        assign(
            assign(sym("a"), op(TokenKind::Assignment, "="), sym("b")),
            op(TokenKind::Assignment, "="),
            sym("c")
        )
    );
}

#[test]
fn test_let_with_value() {
    assert_eq!(
        single_stmt("let x = 5;"),
        Stmt::from(VarDeclStmt {
            identifier: "x".to_string(),
            is_constant: false,
            assigned_value: Some(num(5.0)),
            explicit_type: None,
        })
    );
}

#[test]
fn test_let_with_array_type() {
    assert_eq!(
        single_stmt("let x: []number;"),
        Stmt::from(VarDeclStmt {
            identifier: "x".to_string(),
            is_constant: false,
            assigned_value: None,
            explicit_type: Some(array_of(named("number"))),
        })
    );
}

#[test]
fn test_const_with_type_and_value() {
    assert_eq!(
        single_stmt("const grid: [][]number = rows * 2;"),
        Stmt::from(VarDeclStmt {
            identifier: "grid".to_string(),
            is_constant: true,
            assigned_value: Some(binary(sym("rows"), star(), num(2.0))),
            explicit_type: Some(array_of(array_of(named("number")))),
        })
    );
}

#[test]
fn test_const_without_value() {
    let error = parse_str("const x;").unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::ConstantWithoutValue {
            identifier: "x".to_string()
        }
    );
    assert_eq!(error.get_position().0, 7);

    let error = parse_str("const x: number;").unwrap_err();
    assert_eq!(error.get_error_name(), "ConstantWithoutValue");
}

#[test]
fn test_let_without_type_or_value() {
    let error = parse_str("let x;").unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::MissingTypeOrValue {
            identifier: "x".to_string()
        }
    );
}

#[test]
fn test_let_requires_identifier() {
    let error = parse_str("let = 42;").unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::ExpectedTokenKind {
            expected: TokenKind::Identifier,
            received: TokenKind::Assignment,
            message: Some("expected identifier during variable declaration".to_string()),
        }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_missing_semicolon() {
    let error = parse_str("let x = 42").unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::ExpectedTokenKind {
            expected: TokenKind::SemiColon,
            received: TokenKind::EOF,
            message: None,
        }
    );

    let error = parse_str("1 2;").unwrap_err();
    assert_eq!(error.get_error_name(), "ExpectedTokenKind");
}

#[test]
fn test_declaration_value_stops_at_assignment() {
    // The initializer is parsed above assignment binding power.
    let error = parse_str("let x = y = 1;").unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::ExpectedTokenKind {
            expected: TokenKind::SemiColon,
            received: TokenKind::Assignment,
            message: None,
        }
    );
}

#[test]
fn test_unexpected_token_in_expression() {
    let error = parse_str("1 + ;").unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnexpectedToken {
            token: ";".to_string(),
            kind: TokenKind::SemiColon,
        }
    );
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_reserved_word_without_handler() {
    let error = parse_str("true;").unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnexpectedToken {
            token: "true".to_string(),
            kind: TokenKind::True,
        }
    );
}

#[test]
fn test_unclosed_grouping() {
    let error = parse_str("(1 + 2;").unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::ExpectedTokenKind {
            expected: TokenKind::CloseParen,
            received: TokenKind::SemiColon,
            message: Some("unclosed parenthesis".to_string()),
        }
    );
}

#[test]
fn test_invalid_types() {
    let error = parse_str("let x: 5;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");

    let error = parse_str("let x: [number;").unwrap_err();
    assert!(matches!(
        error.get_error(),
        ErrorImpl::ExpectedTokenKind {
            expected: TokenKind::CloseBracket,
            received: TokenKind::Identifier,
            ..
        }
    ));
}

#[test]
fn test_multiple_statements_keep_order() {
    let block = parse_str("let x = 10; let y = 20; x + y;").unwrap();

    assert_eq!(block.len(), 3);
    let names: Vec<String> = block
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::VarDecl(decl) => Some(decl.identifier.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["x".to_string(), "y".to_string()]);
    assert!(matches!(block.body[2], Stmt::Expression(_)));
}

#[test]
fn test_nested_blocks() {
    assert_eq!(
        single_stmt("{ x; { y; } }"),
        Stmt::from(BlockStmt {
            body: vec![
                Stmt::from(ExpressionStmt { expression: sym("x") }),
                Stmt::from(BlockStmt {
                    body: vec![Stmt::from(ExpressionStmt { expression: sym("y") })],
                }),
            ],
        })
    );
}

#[test]
fn test_unclosed_block() {
    let error = parse_str("{ let x = 1;").unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::ExpectedTokenKind {
            expected: TokenKind::CloseCurly,
            received: TokenKind::EOF,
            message: Some("unclosed block".to_string()),
        }
    );
}

#[test]
fn test_empty_program() {
    assert_eq!(parse_str("").unwrap(), BlockStmt::default());
    assert_eq!(parse_str("  // nothing here\n").unwrap(), BlockStmt::default());
}

#[test]
fn test_parser_appends_missing_eof() {
    let parser = Parser::new(vec![]);
    assert!(!parser.has_tokens());
    assert_eq!(parser.current_token_kind(), TokenKind::EOF);

    assert_eq!(parse(vec![]).unwrap(), BlockStmt::default());
}

#[test]
fn test_missing_infix_handler() {
    let mut lookups = Lookups::new();
    lookups.led_lookup.remove(&TokenKind::Star);

    let tokens = tokenize("1 * 2;", Some("test.lang")).unwrap();
    let error = parse_with_lookups(tokens, &lookups).unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::MissingInfixHandler {
            kind: TokenKind::Star
        }
    );
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_missing_type_infix_handler() {
    let mut lookups = Lookups::new();
    lookups
        .type_binding_power_lookup
        .insert(TokenKind::OpenBracket, BindingPower::Call);

    let tokens = tokenize("let x: number[];", Some("test.lang")).unwrap();
    let error = parse_with_lookups(tokens, &lookups).unwrap_err();

    assert_eq!(error.get_error_name(), "MissingInfixHandler");
}

fn parse_postfix_array_type(
    parser: &mut Parser,
    left: Type,
    _bp: BindingPower,
) -> Result<Type, Error> {
    parser.advance();
    parser.expect(TokenKind::CloseBracket)?;
    Ok(array_of(left))
}

#[test]
fn test_custom_type_led_is_used() {
    let mut lookups = Lookups::new();
    lookups.type_led(TokenKind::OpenBracket, BindingPower::Call, parse_postfix_array_type);

    let tokens = tokenize("let x: number[];", Some("test.lang")).unwrap();
    let block = parse_with_lookups(tokens, &lookups).unwrap();

    assert_eq!(
        block.body[0],
        Stmt::from(VarDeclStmt {
            identifier: "x".to_string(),
            is_constant: false,
            assigned_value: None,
            explicit_type: Some(array_of(named("number"))),
        })
    );

    // The default grammar is untouched by a custom table.
    let error = parse_str("let x: number[];").unwrap_err();
    assert_eq!(error.get_error_name(), "ExpectedTokenKind");
}

fn assert_too_deep(source: &str) -> Error {
    let error = parse_str(source).unwrap_err();
    assert_eq!(
        error.get_error(),
        &ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
    error
}

#[test]
fn test_deep_grouping_is_rejected() {
    let source = format!("{}1{};", "(".repeat(300), ")".repeat(300));
    let error = assert_too_deep(&source);

    // The first parenthesis past the limit
    assert_eq!(error.get_position().0, MAX_NESTING_DEPTH as u32);
}

#[test]
fn test_deep_prefix_is_rejected() {
    assert_too_deep(&format!("{}1;", "- ".repeat(5000)));
}

#[test]
fn test_deep_array_type_is_rejected() {
    assert_too_deep(&format!("let x: {}number;", "[]".repeat(50000)));
}

#[test]
fn test_deep_blocks_are_rejected() {
    let source = format!("{}{}", "{".repeat(300), "}".repeat(300));
    let error = assert_too_deep(&source);

    assert_eq!(error.get_position().0, MAX_NESTING_DEPTH as u32);
}

#[test]
fn test_nesting_below_limit_is_accepted() {
    let source = format!("{}1{};", "(".repeat(200), ")".repeat(200));
    assert_eq!(single_expr(&source), num(1.0));

    let mut expected = sym("x");
    for _ in 0..200 {
        expected = prefix(dash(), expected);
    }
    assert_eq!(single_expr(&format!("{}x;", "- ".repeat(200))), expected);
}

#[test]
fn test_nesting_depth_resets_between_constructs() {
    // Sequential nesting never accumulates towards the limit
    let source = "let v: [][]number = ((a)) + -(-(b));\n".repeat(MAX_NESTING_DEPTH * 2);
    let block = parse_str(&source).unwrap();

    assert_eq!(block.len(), MAX_NESTING_DEPTH * 2);
}
