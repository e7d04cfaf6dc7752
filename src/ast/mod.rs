/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the statement/expression sum types
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
pub mod ast;
pub mod expressions;
pub mod statements;
