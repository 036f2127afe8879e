/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree
///
/// Submodules:
/// - ast: The `Node` capability trait, node tags and borrowed child views
/// - expressions: Expression nodes, including the invalid-expression marker
/// - declarations: Identifiers, parameters and function declarations
/// - types: Type annotations
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod types;
