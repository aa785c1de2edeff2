//! Unit tests for the parser module.
//!
//! Covers statements, every expression form, operator precedence and the
//! error list produced for malformed input.

use crate::ast::{
    ast::Program,
    expressions::Expr,
    statements::{ExpressionStmt, Stmt},
};
use crate::lexer::tokens::TokenKind;

use super::{
    expr::parse_int_literal,
    lookups::{infix_handler, prefix_handler, token_precedence, Precedence},
    parser::{parse, Parser, MAX_NESTING_DEPTH},
};

fn parse_ok(source: &str) -> Program {
    let (parser, program) = parse(source);
    let errors: Vec<String> = parser.errors().iter().map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "unexpected errors for {:?}: {:?}", source, errors);
    program
}

fn error_messages(source: &str) -> Vec<String> {
    let (parser, _) = parse(source);
    parser.errors().iter().map(|e| e.to_string()).collect()
}

fn single_expression(program: &Program) -> &Expr {
    assert_eq!(program.len(), 1, "expected one statement in {:?}", program);
    match &program.statements[0] {
        Stmt::Expression(ExpressionStmt {
            expression: Some(expr),
            ..
        }) => expr,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statements() {
    let program = parse_ok("let x = 5;\nlet y = true;\nlet foobar = y;");

    assert_eq!(program.len(), 3);
    let names: Vec<&str> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Let(let_stmt) => {
                assert_eq!(let_stmt.token.kind, TokenKind::Let);
                assert_eq!(let_stmt.name.token.literal, let_stmt.name.value);
                assert!(let_stmt.value.is_none());
                let_stmt.name.value.as_str()
            }
            other => panic!("expected let statement, got {:?}", other),
        })
        .collect();

    assert_eq!(names, vec!["x", "y", "foobar"]);
    assert_eq!(program.to_string(), "let x = ;let y = ;let foobar = ;");
}

#[test]
fn test_parse_let_without_semicolon_terminates() {
    let program = parse_ok("let x = 5 + 6");

    assert_eq!(program.len(), 1);
    assert!(matches!(program.statements[0], Stmt::Let(_)));
}

#[test]
fn test_parse_let_missing_assign() {
    let (parser, program) = parse("let x 5;");

    let errors: Vec<String> = parser.errors().iter().map(|e| e.to_string()).collect();
    assert_eq!(errors, vec!["expected next token to be =, got INT instead"]);
    assert_eq!(parser.errors()[0].get_position().0, 6);

    // Recovery picks up at the value
    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "5");
}

#[test]
fn test_parse_let_missing_identifier() {
    assert_eq!(
        error_messages("let = 10;"),
        vec![
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found",
        ]
    );

    assert_eq!(
        error_messages("let 838383;"),
        vec!["expected next token to be IDENT, got INT instead"]
    );
}

#[test]
fn test_parse_return_statements() {
    let program = parse_ok("return 5;\nreturn 10;\nreturn 993322;\nreturn;");

    assert_eq!(program.len(), 4);
    for stmt in program.iter() {
        match stmt {
            Stmt::Return(return_stmt) => {
                assert_eq!(return_stmt.token.literal, "return");
                assert!(return_stmt.return_value.is_none());
            }
            other => panic!("expected return statement, got {:?}", other),
        }
    }

    assert_eq!(program.to_string(), "return ;return ;return ;return ;");
}

#[test]
fn test_parse_return_without_semicolon_terminates() {
    let program = parse_ok("return x");

    assert_eq!(program.len(), 1);
}

#[test]
fn test_parse_identifier_expression() {
    let program = parse_ok("foobar;");

    match single_expression(&program) {
        Expr::Identifier(ident) => {
            assert_eq!(ident.value, "foobar");
            assert_eq!(ident.token.literal, "foobar");
        }
        other => panic!("expected identifier, got {:?}", other),
    }
}

#[test]
fn test_parse_integer_literal_expression() {
    let program = parse_ok("5;");

    match single_expression(&program) {
        Expr::Integer(literal) => {
            assert_eq!(literal.value, 5);
            assert_eq!(literal.token.literal, "5");
        }
        other => panic!("expected integer literal, got {:?}", other),
    }
}

#[test]
fn test_parse_int_literal_bases() {
    assert_eq!(parse_int_literal("0"), Some(0));
    assert_eq!(parse_int_literal("00"), Some(0));
    assert_eq!(parse_int_literal("42"), Some(42));
    assert_eq!(parse_int_literal("0755"), Some(493));
    assert_eq!(parse_int_literal("0x1F"), Some(31));
    assert_eq!(parse_int_literal("0b101"), Some(5));
    assert_eq!(parse_int_literal("0o17"), Some(15));
    assert_eq!(parse_int_literal("9223372036854775807"), Some(i64::MAX));

    assert_eq!(parse_int_literal("09"), None);
    assert_eq!(parse_int_literal("9223372036854775808"), None);
    assert_eq!(parse_int_literal("0x"), None);
    assert_eq!(parse_int_literal(""), None);
}

#[test]
fn test_parse_leading_zero_is_octal() {
    let program = parse_ok("010;");

    match single_expression(&program) {
        Expr::Integer(literal) => {
            assert_eq!(literal.value, 8);
            assert_eq!(literal.to_string(), "010");
        }
        other => panic!("expected integer literal, got {:?}", other),
    }
}

#[test]
fn test_parse_invalid_integer_literal() {
    let (parser, program) = parse("09;");

    let errors: Vec<String> = parser.errors().iter().map(|e| e.to_string()).collect();
    assert_eq!(errors, vec!["could not parse \"09\" as integer"]);
    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_parse_integer_overflow() {
    assert_eq!(
        error_messages("99999999999999999999"),
        vec!["could not parse \"99999999999999999999\" as integer"]
    );
}

#[test]
fn test_parse_boolean_expressions() {
    for (source, expected) in [("true;", true), ("false;", false)] {
        let program = parse_ok(source);

        match single_expression(&program) {
            Expr::Boolean(boolean) => assert_eq!(boolean.value, expected),
            other => panic!("expected boolean, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_prefix_expressions() {
    for (source, operator, operand) in [("!5;", "!", "5"), ("-15;", "-", "15"), ("!true;", "!", "true")] {
        let program = parse_ok(source);

        match single_expression(&program) {
            Expr::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert_eq!(
                    prefix.right.as_ref().map(|right| right.to_string()),
                    Some(operand.to_string())
                );
            }
            other => panic!("expected prefix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_infix_expressions() {
    for operator in ["+", "-", "*", "/", ">", "<", "==", "!="] {
        let source = format!("5 {} 6;", operator);
        let program = parse_ok(&source);

        match single_expression(&program) {
            Expr::Infix(infix) => {
                assert_eq!(infix.operator, operator);
                assert_eq!(infix.token.literal, operator);
                assert_eq!(infix.left.as_ref().map(|left| left.to_string()), Some("5".to_string()));
                assert_eq!(infix.right.as_ref().map(|right| right.to_string()), Some("6".to_string()));
            }
            other => panic!("expected infix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("-a + b", "((-a) + b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a - b - c", "((a - b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("(1 + 2) * 3", "((1 + 2) * 3)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
    ];

    for (source, expected) in cases {
        let program = parse_ok(source);
        assert_eq!(program.to_string(), expected, "source: {:?}", source);
    }
}

#[test]
fn test_parse_if_expression() {
    let program = parse_ok("if (x < y) { x }");

    match single_expression(&program) {
        Expr::If(if_expr) => {
            assert_eq!(
                if_expr.condition.as_ref().map(|condition| condition.to_string()),
                Some("(x < y)".to_string())
            );
            assert_eq!(if_expr.consequence.statements.len(), 1);
            assert_eq!(if_expr.consequence.to_string(), "x");
            assert!(if_expr.alternative.is_none());
        }
        other => panic!("expected if expression, got {:?}", other),
    }
}

#[test]
fn test_parse_if_else_expression() {
    let program = parse_ok("if (x < y) { x } else { y }");

    match single_expression(&program) {
        Expr::If(if_expr) => {
            let alternative = if_expr.alternative.as_ref().expect("alternative block");
            assert_eq!(alternative.iter().count(), 1);
            assert_eq!(alternative.to_string(), "y");
        }
        other => panic!("expected if expression, got {:?}", other),
    }

    assert_eq!(program.to_string(), "if(x < y) x else y");
}

#[test]
fn test_parse_block_with_statements() {
    let program = parse_ok("if (true) { let x = 1; return x; y }");

    match single_expression(&program) {
        Expr::If(if_expr) => {
            let kinds: Vec<TokenKind> = if_expr
                .consequence
                .iter()
                .map(|stmt| stmt.token().kind)
                .collect();
            assert_eq!(kinds, vec![TokenKind::Let, TokenKind::Return, TokenKind::Ident]);
        }
        other => panic!("expected if expression, got {:?}", other),
    }

    assert_eq!(program.to_string(), "iftrue let x = ;return ;y");
}

#[test]
fn test_unterminated_block_is_not_an_error() {
    let program = parse_ok("if (x) { x");

    match single_expression(&program) {
        Expr::If(if_expr) => assert_eq!(if_expr.consequence.to_string(), "x"),
        other => panic!("expected if expression, got {:?}", other),
    }
}

#[test]
fn test_if_missing_brace() {
    let (parser, program) = parse("if (x) x");

    let errors: Vec<String> = parser.errors().iter().map(|e| e.to_string()).collect();
    assert_eq!(errors, vec!["expected next token to be {, got IDENT instead"]);

    // The failed if leaves an empty statement, parsing resumes at `x`
    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "x");
}

#[test]
fn test_if_else_missing_brace() {
    assert_eq!(
        error_messages("if (x) { x } else y"),
        vec!["expected next token to be {, got IDENT instead"]
    );
}

#[test]
fn test_grouped_missing_paren_reports_twice() {
    let (parser, program) = parse("(1 + 2");

    let errors: Vec<String> = parser.errors().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        errors,
        vec![
            "expected next token to be ), got EOF instead",
            "expected next token to be ), got EOF instead",
        ]
    );
    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_no_prefix_parse_function() {
    assert_eq!(error_messages(";"), vec!["no prefix parse function for ; found"]);
    assert_eq!(error_messages("}"), vec!["no prefix parse function for } found"]);
    assert_eq!(error_messages("@"), vec!["no prefix parse function for ILLEGAL found"]);
    assert_eq!(error_messages("fn"), vec!["no prefix parse function for FUNCTION found"]);
}

#[test]
fn test_missing_right_operand() {
    let (parser, program) = parse("5 +;");

    let errors: Vec<String> = parser.errors().iter().map(|e| e.to_string()).collect();
    assert_eq!(errors, vec!["no prefix parse function for ; found"]);
    assert_eq!(program.to_string(), "(5 + )");
}

#[test]
fn test_failed_left_operand_still_folds() {
    let (parser, program) = parse("09 + 1");

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.to_string(), "( + 1)");
}

#[test]
fn test_errors_accumulate_across_statements() {
    let errors = error_messages("let x 5; let = 1; ) ;");

    assert_eq!(
        errors,
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found",
            "no prefix parse function for ) found",
        ]
    );
}

#[test]
fn test_parse_empty_program() {
    let program = parse_ok("");

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_parser_window() {
    let mut parser = Parser::new(crate::lexer::lexer::Lexer::new("a + b"));

    assert!(parser.current_token_is(TokenKind::Ident));
    assert!(parser.peek_token_is(TokenKind::Plus));
    assert_eq!(parser.peek_precedence(), Precedence::Sum);

    parser.next_token();
    assert_eq!(parser.current_token().literal, "+");
    assert_eq!(parser.current_precedence(), Precedence::Sum);
    assert_eq!(parser.get_position().0, 2);

    assert!(parser.expect_peek(TokenKind::Ident));
    assert!(!parser.expect_peek(TokenKind::Semicolon));
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.peek_token().kind, TokenKind::Eof);
}

#[test]
fn test_precedence_table() {
    assert!(Precedence::Lowest < Precedence::Equals);
    assert!(Precedence::Equals < Precedence::LessGreater);
    assert!(Precedence::LessGreater < Precedence::Sum);
    assert!(Precedence::Sum < Precedence::Product);
    assert!(Precedence::Product < Precedence::Prefix);
    assert!(Precedence::Prefix < Precedence::Call);

    assert_eq!(token_precedence(TokenKind::NotEq), Precedence::Equals);
    assert_eq!(token_precedence(TokenKind::Gt), Precedence::LessGreater);
    assert_eq!(token_precedence(TokenKind::Minus), Precedence::Sum);
    assert_eq!(token_precedence(TokenKind::Slash), Precedence::Product);
    assert_eq!(token_precedence(TokenKind::LParen), Precedence::Lowest);
    assert_eq!(token_precedence(TokenKind::Assign), Precedence::Lowest);
}

#[test]
fn test_handler_registration() {
    for kind in [
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Bang,
        TokenKind::Minus,
        TokenKind::True,
        TokenKind::False,
        TokenKind::LParen,
        TokenKind::If,
    ] {
        assert!(prefix_handler(kind).is_some(), "prefix for {}", kind);
    }
    assert!(prefix_handler(TokenKind::Function).is_none());
    assert!(prefix_handler(TokenKind::Plus).is_none());

    for kind in [
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::Eq,
        TokenKind::NotEq,
        TokenKind::Lt,
        TokenKind::Gt,
    ] {
        assert!(infix_handler(kind).is_some(), "infix for {}", kind);
    }
    assert!(infix_handler(TokenKind::LParen).is_none());
    assert!(infix_handler(TokenKind::Bang).is_none());
}

#[test]
fn test_deep_prefix_nesting_is_cut_off() {
    let source = "-".repeat(10_000) + "a";
    let (parser, program) = parse(&source);

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.errors()[0].get_error_name(), "NestingTooDeep");
    assert_eq!(
        parser.errors()[0].to_string(),
        format!("expression nested deeper than {} levels", MAX_NESTING_DEPTH)
    );
    assert_eq!(program.len(), 1);
    assert_eq!(parser.nesting_depth(), 0);
}

#[test]
fn test_long_infix_chain_is_cut_off() {
    let source = vec!["a"; 10_000].join(" + ");
    let (parser, program) = parse(&source);

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.errors()[0].get_error_name(), "NestingTooDeep");
    assert_eq!(program.len(), 1);
}

#[test]
fn test_deep_grouping_does_not_abort() {
    let source = "(".repeat(10_000) + "1" + &")".repeat(10_000);
    let (parser, _) = parse(&source);

    assert!(!parser.errors().is_empty());
    assert_eq!(parser.errors()[0].get_error_name(), "NestingTooDeep");
}

#[test]
fn test_nesting_limit_resets_per_statement() {
    let deep = "-".repeat(10_000) + "a";
    let source = format!("{};\n{};\n-(-(-b));", deep, deep);
    let (parser, program) = parse(&source);

    assert_eq!(parser.errors().len(), 2);
    assert_eq!(program.len(), 3);
    assert_eq!(program.statements[2].to_string(), "(-(-(-b)))");
}

#[test]
fn test_nesting_within_limit_parses() {
    let depth = MAX_NESTING_DEPTH - 1;
    let source = "-".repeat(depth) + "a";
    let program = parse_ok(&source);

    let expected = "(-".repeat(depth) + "a" + &")".repeat(depth);
    assert_eq!(program.to_string(), expected);
}
