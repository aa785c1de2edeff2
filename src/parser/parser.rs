//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser pulls tokens from the [`Lexer`] one at a time and keeps a two
//! token window (current + peek). Statements are parsed by recursive descent
//! and expressions by precedence climbing over the handlers in `lookups`.
//!
//! Parsing never stops early: every problem is recorded in the error list and
//! the parser moves on to the next statement.

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{token_precedence, Precedence},
    stmt::parse_stmt,
};

/// Deepest expression nesting the parser will follow before giving up on a
/// statement. Each nested operand and each folded operator counts one level.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// Token under examination
    current_token: Token,
    /// Token after `current_token`
    peek_token: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Current expression nesting, bounded by `MAX_NESTING_DEPTH`
    nesting_depth: usize,
}

impl Parser {
    /// Creates a new Parser and fills the lookahead window from `lexer`.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            nesting_depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Shifts the window forward by one token.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the peek token is of kind `expected`, otherwise records
    /// a peek error and leaves the window where it is.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_token_is(expected) {
            self.next_token();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    pub fn peek_error(&mut self, expected: TokenKind) {
        let error = ErrorImpl::UnexpectedPeek {
            expected,
            received: self.peek_token.kind,
        };
        self.errors.push(Error::new(error, self.peek_token.span.start));
    }

    pub fn no_prefix_parse_fn_error(&mut self, kind: TokenKind) {
        let error = ErrorImpl::NoPrefixParseFn { kind };
        self.errors.push(Error::new(error, self.current_token.span.start));
    }

    /// Records an error located at the current token.
    pub fn error(&mut self, error: ErrorImpl) {
        self.errors.push(Error::new(error, self.get_position()));
    }

    pub fn nesting_depth(&self) -> usize {
        self.nesting_depth
    }

    pub(crate) fn set_nesting_depth(&mut self, depth: usize) {
        self.nesting_depth = depth;
    }

    /// Records that the expression went past `MAX_NESTING_DEPTH` and skips
    /// to the last token before the next `;` or the end of input, so the
    /// enclosing frames unwind without reporting anything further.
    pub(crate) fn abandon_nested_expr(&mut self) {
        self.error(ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        });

        while !self
            .peek_token
            .is_one_of_many(&[TokenKind::Semicolon, TokenKind::Eof])
        {
            self.next_token();
        }
    }

    pub fn peek_precedence(&self) -> Precedence {
        token_precedence(self.peek_token.kind)
    }

    pub fn current_precedence(&self) -> Precedence {
        token_precedence(self.current_token.kind)
    }

    /// Every diagnostic recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that fail contribute no node; their errors stay in
    /// [`Parser::errors`] and parsing resumes at the next token.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_token_is(TokenKind::Eof) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }
}

/// Scans and parses `source` in one go.
///
/// The parser is returned alongside the program so callers can inspect its
/// errors before trusting the tree.
pub fn parse(source: &str) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
