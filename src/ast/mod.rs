/// AST (Abstract Syntax Tree) module
/// Contains all node types produced by the parser
///
/// Submodules:
/// - ast: Program root, subroutines, main block and the statement/expression variants
/// - expressions: Expression node structs and operators
/// - statements: Block and statement node structs
pub mod ast;
pub mod expressions;
pub mod statements;
