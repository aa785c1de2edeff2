//! Line-based shell around the lexer and parser.
//!
//! Each input line is scanned and parsed on its own. In the default mode the
//! shell echoes the program rendered back from its AST, or the parse errors
//! when there are any. The token mode dumps the raw token stream instead.

pub mod repl;
