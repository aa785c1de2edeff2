use crate::{Position, Span, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Marks the end of input in `ch`.
const EOF_CHAR: char = '\0';

/// Cursor-based scanner over the characters of one source text.
///
/// Tokens are produced one per [`Lexer::next_token`] call. Once the input is
/// exhausted every further call returns `Eof`.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<char>,
    /// Index of `ch`
    position: usize,
    /// Index of the character after `ch`
    read_position: usize,
    ch: char,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            input: source.chars().collect(),
            position: 0,
            read_position: 0,
            ch: EOF_CHAR,
        };

        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied().unwrap_or(EOF_CHAR);
        self.position = self.read_position.min(self.input.len());
        self.read_position = self.position + 1;
    }

    /// Looks at the character after `ch` without moving.
    fn peek_char(&self) -> char {
        self.input.get(self.read_position).copied().unwrap_or(EOF_CHAR)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;

        let (kind, literal) = match self.ch {
            '=' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    (TokenKind::Eq, String::from("=="))
                } else {
                    (TokenKind::Assign, String::from("="))
                }
            }
            '!' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    (TokenKind::NotEq, String::from("!="))
                } else {
                    (TokenKind::Bang, String::from("!"))
                }
            }
            ';' => (TokenKind::Semicolon, String::from(";")),
            '(' => (TokenKind::LParen, String::from("(")),
            ')' => (TokenKind::RParen, String::from(")")),
            ',' => (TokenKind::Comma, String::from(",")),
            '+' => (TokenKind::Plus, String::from("+")),
            '-' => (TokenKind::Minus, String::from("-")),
            '*' => (TokenKind::Asterisk, String::from("*")),
            '/' => (TokenKind::Slash, String::from("/")),
            '<' => (TokenKind::Lt, String::from("<")),
            '>' => (TokenKind::Gt, String::from(">")),
            '{' => (TokenKind::LBrace, String::from("{")),
            '}' => (TokenKind::RBrace, String::from("}")),
            EOF_CHAR => {
                return MK_TOKEN!(TokenKind::Eof, String::new(), start, start);
            }
            ch if is_letter(ch) => {
                // Identifiers and numbers stop on the first character past
                // their run, so there is nothing left to advance over.
                let literal = self.read_identifier();
                return MK_TOKEN!(lookup_ident(&literal), literal, start, self.position);
            }
            ch if is_digit(ch) => {
                let literal = self.read_number();
                return MK_TOKEN!(TokenKind::Int, literal, start, self.position);
            }
            ch => (TokenKind::Illegal, ch.to_string()),
        };

        self.read_char();

        MK_TOKEN!(kind, literal, start, self.position)
    }

    fn read_identifier(&mut self) -> String {
        let position = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }

        self.input[position..self.position].iter().collect()
    }

    fn read_number(&mut self) -> String {
        let position = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }

        self.input[position..self.position].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_whitespace() {
            self.read_char();
        }
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Scans the whole source, returning every token up to and including `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let at_eof = token.kind == TokenKind::Eof;
        tokens.push(token);

        if at_eof {
            return tokens;
        }
    }
}
