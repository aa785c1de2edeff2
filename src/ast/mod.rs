/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root
/// - expressions: The expression node variants
/// - statements: The statement node variants
///
/// Every node keeps the token it was built from and renders back to
/// source-like text through `Display`.
pub mod ast;
pub mod expressions;
pub mod statements;
