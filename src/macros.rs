//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! The lexer builds every token through this macro.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$start` - Character offset where the token starts
/// * `$end` - Character offset just past the token
///
/// Offsets that do not fit in a `u32` are clamped to `u32::MAX`.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: Span {
                start: Position(u32::try_from($start).unwrap_or(u32::MAX)),
                end: Position(u32::try_from($end).unwrap_or(u32::MAX)),
            },
        }
    };
}
