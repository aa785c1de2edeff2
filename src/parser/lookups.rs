use crate::{ast::expressions::Expr, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator precedence, lowest to highest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,
}

pub type PrefixHandler = fn(&mut Parser) -> Option<Expr>;
pub type InfixHandler = fn(&mut Parser, Option<Expr>) -> Option<Expr>;

pub fn token_precedence(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,

        TokenKind::Illegal
        | TokenKind::Eof
        | TokenKind::Ident
        | TokenKind::Int
        | TokenKind::Assign
        | TokenKind::Bang
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::LParen
        | TokenKind::RParen
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::Function
        | TokenKind::Let
        | TokenKind::True
        | TokenKind::False
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return => Precedence::Lowest,
    }
}

/// Handler for a token that starts an expression.
pub fn prefix_handler(kind: TokenKind) -> Option<PrefixHandler> {
    match kind {
        TokenKind::Ident => Some(parse_identifier),
        TokenKind::Int => Some(parse_integer_literal),
        TokenKind::Bang | TokenKind::Minus => Some(parse_prefix_expr),
        TokenKind::True | TokenKind::False => Some(parse_boolean),
        TokenKind::LParen => Some(parse_grouped_expr),
        TokenKind::If => Some(parse_if_expr),

        TokenKind::Illegal
        | TokenKind::Eof
        | TokenKind::Assign
        | TokenKind::Plus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Lt
        | TokenKind::Gt
        | TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::RParen
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::Function
        | TokenKind::Let
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

/// Handler for a token that continues an already parsed left operand.
pub fn infix_handler(kind: TokenKind) -> Option<InfixHandler> {
    match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::Gt => Some(parse_infix_expr),

        TokenKind::Illegal
        | TokenKind::Eof
        | TokenKind::Ident
        | TokenKind::Int
        | TokenKind::Assign
        | TokenKind::Bang
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::LParen
        | TokenKind::RParen
        | TokenKind::LBrace
        | TokenKind::RBrace
        | TokenKind::Function
        | TokenKind::Let
        | TokenKind::True
        | TokenKind::False
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}
