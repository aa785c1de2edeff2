use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    ast::expressions::{BooleanLiteral, Expr, Identifier, IfExpr, InfixExpr, IntegerLiteral, PrefixExpr},
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{infix_handler, prefix_handler, Precedence},
    parser::{Parser, MAX_NESTING_DEPTH},
    stmt::parse_block_stmt,
};

lazy_static! {
    // 0x.. hex, 0b.. binary, 0o.. octal, 0.. legacy octal, otherwise decimal
    static ref INTEGER_LITERAL: Regex = Regex::new(
        r"^(?:0[xX](?P<hex>[0-9a-fA-F]+)|0[bB](?P<bin>[01]+)|0[oO](?P<oct>[0-7]+)|0(?P<legacy>[0-7]+)|(?P<dec>0|[1-9][0-9]*))$"
    )
    .unwrap();
}

pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expr> {
    let depth = parser.nesting_depth();
    let expr = parse_nested_expr(parser, precedence, depth + 1);
    parser.set_nesting_depth(depth);

    expr
}

fn parse_nested_expr(parser: &mut Parser, precedence: Precedence, mut depth: usize) -> Option<Expr> {
    if depth > MAX_NESTING_DEPTH {
        parser.abandon_nested_expr();
        return None;
    }
    parser.set_nesting_depth(depth);

    // First parse the prefix
    let token_kind = parser.current_token_kind();
    let Some(prefix) = prefix_handler(token_kind) else {
        parser.no_prefix_parse_fn_error(token_kind);
        return None;
    };

    let mut left = prefix(parser);

    // Keep folding while the next operator binds tighter than the caller
    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(infix) = infix_handler(parser.peek_token().kind) else {
            return left;
        };

        parser.next_token();

        // Every fold wraps `left` one level deeper
        depth += 1;
        if depth > MAX_NESTING_DEPTH {
            parser.abandon_nested_expr();
            return None;
        }
        parser.set_nesting_depth(depth);

        left = infix(parser, left);
    }

    left
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    match parse_int_literal(&token.literal) {
        Some(value) => Some(Expr::Integer(IntegerLiteral { token, value })),
        None => {
            parser.error(ErrorImpl::IntegerParse {
                literal: token.literal,
            });
            None
        }
    }
}

/// Converts integer literal text, detecting the base from its prefix.
///
/// Returns `None` for malformed digits and for values outside `i64`.
pub fn parse_int_literal(text: &str) -> Option<i64> {
    let captures = INTEGER_LITERAL.captures(text)?;

    let (digits, radix) = if let Some(hex) = captures.name("hex") {
        (hex.as_str(), 16)
    } else if let Some(bin) = captures.name("bin") {
        (bin.as_str(), 2)
    } else if let Some(oct) = captures.name("oct") {
        (oct.as_str(), 8)
    } else if let Some(legacy) = captures.name("legacy") {
        (legacy.as_str(), 8)
    } else {
        (captures.name("dec")?.as_str(), 10)
    };

    i64::from_str_radix(digits, radix).ok()
}

pub fn parse_boolean(parser: &mut Parser) -> Option<Expr> {
    Some(Expr::Boolean(BooleanLiteral {
        token: parser.current_token().clone(),
        value: parser.current_token_is(TokenKind::True),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.current_token().clone();

    parser.next_token();
    let right = parse_expr(parser, Precedence::Prefix);

    Some(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: right.map(Box::new),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Option<Expr>) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();

    parser.next_token();
    let right = parse_expr(parser, precedence);

    Some(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: left.map(Box::new),
        right: right.map(Box::new),
    }))
}

pub fn parse_grouped_expr(parser: &mut Parser) -> Option<Expr> {
    parser.next_token();
    let expr = parse_expr(parser, Precedence::Lowest);

    if !parser.expect_peek(TokenKind::RParen) {
        // The missing `)` is recorded twice
        parser.peek_error(TokenKind::RParen);
        return None;
    }

    expr
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::LParen) {
        return None;
    }

    parser.next_token();
    let condition = parse_expr(parser, Precedence::Lowest);

    if !parser.expect_peek(TokenKind::RParen) {
        return None;
    }

    if !parser.expect_peek(TokenKind::LBrace) {
        return None;
    }

    let consequence = parse_block_stmt(parser);

    let mut alternative = None;
    if parser.peek_token_is(TokenKind::Else) {
        parser.next_token();

        if !parser.expect_peek(TokenKind::LBrace) {
            return None;
        }

        alternative = Some(parse_block_stmt(parser));
    }

    Some(Expr::If(IfExpr {
        token,
        condition: condition.map(Box::new),
        consequence,
        alternative,
    }))
}
