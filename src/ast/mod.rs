/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Expr`, `Stmt` and `Type` node sets
/// - expressions: Payloads of the expression variants
/// - statements: Payloads of the statement variants
/// - types: Payloads of the type variants
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
