//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms tokens into an AST. It
//! uses a Pratt parser for expressions with operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and binary operators, literals, grouping, `if`)
//! - Error collection without stopping at the first failure
//!
//! Prefix and infix handlers are selected by an exhaustive match over the
//! token kind (see `lookups`), with precedence deciding how far to fold.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
