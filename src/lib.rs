#![allow(clippy::module_inception)]

use crate::errors::errors::Error;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

extern crate regex;

/// Zero-based character offset into the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding `position`.
///
/// Returns the one-based line number, the line text and the character column
/// inside that line. Offsets past the end resolve to the end of the last line.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = String::new();

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
        last_line = line.to_string();
    }

    if last_line.is_empty() {
        return (1, String::new(), 0);
    }

    let column = last_line.trim_end_matches('\n').chars().count();
    (line_number - 1, last_line, column)
}


/// Renders an error with the offending source line and a caret under it.
pub fn display_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedPeek (expected next token to be =, got INT instead)
          |
        1 | let x 5;
          | ------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut result = String::new();
    result.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error));
    result.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    result.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    result.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    result
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
