//! Type annotations as they appear in source.
//!
//! Types are kept symbolic: `number` is just the name `number`, and `[]T` is
//! an array whose element type is itself a parsed annotation.

use super::ast::Type;

/// A named type reference.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolType {
    pub name: String,
}

/// `[]T`, an array of `underlying`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub underlying: Box<Type>,
}
