use std::io::{self, BufRead, Write};

use crate::{
    display_error,
    errors::errors::Error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::Parser,
};

pub const PROMPT: &str = ">> ";

/// What the shell prints for each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplMode {
    /// Rendered program, or the parse errors
    #[default]
    Parse,
    /// One line per token, without the trailing `Eof`
    Tokens,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub mode: ReplMode,
    /// Follow each error with the source line and a caret under the offending token.
    pub show_source: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: String::from(PROMPT),
            mode: ReplMode::default(),
            show_source: false,
        }
    }
}

impl ReplConfig {
    /// Default prompt, printing each line's tokens instead of parsing it.
    pub fn tokens() -> Self {
        ReplConfig {
            mode: ReplMode::Tokens,
            ..ReplConfig::default()
        }
    }
}

/// Runs the shell until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(input: R, mut output: W, config: &ReplConfig) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match config.mode {
            ReplMode::Parse => parse_line(&line, &mut output, config.show_source)?,
            ReplMode::Tokens => print_tokens(&line, &mut output)?,
        }
    }
}

fn parse_line<W: Write>(line: &str, output: &mut W, show_source: bool) -> io::Result<()> {
    let mut parser = Parser::new(Lexer::new(line));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return print_parse_errors(output, parser.errors(), line, show_source);
    }

    writeln!(output, "{}", program)
}

fn print_parse_errors<W: Write>(
    output: &mut W,
    errors: &[Error],
    line: &str,
    show_source: bool,
) -> io::Result<()> {
    for error in errors {
        writeln!(output, "\t{}", error)?;

        if show_source {
            write!(output, "{}", display_error(error, line))?;
        }
    }

    Ok(())
}

fn print_tokens<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let mut lexer = Lexer::new(line);

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            return Ok(());
        }

        writeln!(output, "{}", token)?;
    }
}
