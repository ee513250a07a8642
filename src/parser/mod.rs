//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Three grammars share one precedence
//! climbing ("Pratt") mechanism, each with its own tables:
//!
//! - Statement parsing (dispatch on the leading token, else `expr ;`)
//! - Expression parsing (literals, grouping, prefix and binary operators, assignment)
//! - Type parsing for annotations (`name`, `[]T`)
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! with binding power for precedence handling. The first error aborts the parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
