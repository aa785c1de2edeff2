//! Lexical analysis module.
//!
//! This module contains the scanner that turns source text into tokens on
//! demand. It handles:
//!
//! - Single and two-character operators (`=` vs `==`, `!` vs `!=`)
//! - Keyword and identifier disambiguation through a reserved word table
//! - Integer runs
//! - Unrecognised characters, reported as `Illegal` tokens rather than errors

pub mod lexer;
pub mod tokens;
