use crate::{
    ast::{
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt, Stmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser).map(Stmt::Let),
        TokenKind::Return => parse_return_stmt(parser).map(Stmt::Return),
        _ => Some(Stmt::Expression(parse_expression_stmt(parser))),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<LetStmt> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }

    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    // TODO: build the bound expression with parse_expr instead of skipping it
    skip_to_semicolon(parser);

    Some(LetStmt {
        token,
        name,
        value: None,
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<ReturnStmt> {
    let token = parser.current_token().clone();

    parser.next_token();
    skip_to_semicolon(parser);

    Some(ReturnStmt {
        token,
        return_value: None,
    })
}

/// Moves to the terminating `;`, stopping at end of input if there is none.
fn skip_to_semicolon(parser: &mut Parser) {
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::Semicolon, TokenKind::Eof])
    {
        parser.next_token();
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> ExpressionStmt {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest);

    // Terminator is optional
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    ExpressionStmt { token, expression }
}

/// Parses `{ ... }` starting on the `{`. Stops on `}` or end of input without
/// complaining about a missing `}`.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStmt {
    let token = parser.current_token().clone();
    let mut statements = Vec::new();

    parser.next_token();

    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::RBrace, TokenKind::Eof])
    {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.next_token();
    }

    BlockStmt { token, statements }
}
