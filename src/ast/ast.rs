use super::{
    expressions::{AssignmentExpr, BinaryExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr},
    statements::{BlockStmt, ExpressionStmt, VarDeclStmt},
    types::{ArrayType, SymbolType},
};

/// Statement
///
/// Every statement kind the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
}

/// Expression
///
/// Every expression kind the parser can produce. Children are boxed and owned
/// by their parent node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Assignment(AssignmentExpr),
}

/// Type
///
/// A type annotation as written in source; nothing is resolved here.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Symbol(SymbolType),
    Array(ArrayType),
}

macro_rules! impl_from_node {
    ($enum:ident :: $variant:ident, $node:ty) => {
        impl From<$node> for $enum {
            fn from(node: $node) -> Self {
                $enum::$variant(node)
            }
        }
    };
}

impl_from_node!(Stmt::Block, BlockStmt);
impl_from_node!(Stmt::Expression, ExpressionStmt);
impl_from_node!(Stmt::VarDecl, VarDeclStmt);

impl_from_node!(Expr::Number, NumberExpr);
impl_from_node!(Expr::String, StringExpr);
impl_from_node!(Expr::Symbol, SymbolExpr);
impl_from_node!(Expr::Binary, BinaryExpr);
impl_from_node!(Expr::Prefix, PrefixExpr);
impl_from_node!(Expr::Assignment, AssignmentExpr);

impl_from_node!(Type::Symbol, SymbolType);
impl_from_node!(Type::Array, ArrayType);
