#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line holding the character offset `position`.
///
/// Returns the 1-based line number, the line text and the column of the
/// offset within it. Offsets at or past the end of the source resolve to
/// the end of the last line, which is where `EOF` diagnostics point.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut last = None;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let len = line.chars().count();
        let end = start + len;

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        last = Some((index + 1, line.to_string(), line.trim_end_matches('\n').chars().count()));
        start = end;
    }

    last
}

pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> shell
          |
        1 | var x = #;
          | --------^
    */

    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    output.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use crate::lexer::lexer::tokenize;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nvar x = 5;\n\n  Testing { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 36).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "  Testing { }\n");
        assert_eq!(line_pos, 10);
    }

    #[test]
    fn test_get_line_past_end() {
        let (line_number, line, line_pos) = super::get_line_at_position("var x = 5", 9).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "var x = 5");
        assert_eq!(line_pos, 9);

        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_format_lexical_error() {
        let source = "var x = 5;\nvar y = @;";
        let (_, errors) = tokenize(source, Some(String::from("test.woc")));

        let rendered = super::format_error(&errors[0], source);
        assert_eq!(
            rendered,
            "Error: UnrecognisedToken\n-> test.woc\n  |\n2 | var y = @;\n  | --------^\n"
        );
    }
}
