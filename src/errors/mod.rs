//! Diagnostics produced while parsing.
//!
//! The parser never stops at the first problem. Each failure is recorded as
//! an [`errors::Error`] carrying the position of the offending token, and the
//! full list is inspected once the program has been parsed.

pub mod errors;
