use std::str::Chars;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::HppError;

mod classes;
mod variables;

pub use classes::{ClassDecl, scan_classes};
pub use variables::{VarDecl, scan_variables};

pub(crate) const CLASS_KEYWORD: &str = "class";
pub(crate) const ARRAY_MARKER: &str = "[]";

/// Statement-initial words: an identifier, optionally carrying the array
/// marker.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+(\[\])?$").unwrap());

/// Separators end words: whitespace or the assignment operator.
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '='
}

/// Character cursor over one class body, with line/column tracking for
/// error reporting.
pub(crate) struct Cursor<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        let mut cursor = Cursor {
            input: input.chars(),
            peek: None,
            line: 1,
            column: 0,
        };
        cursor.peek = cursor.input.next();
        cursor
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.peek
    }

    /// Advance one character and update line/column tracking.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let curr = self.peek;
        if let Some(c) = curr {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        self.peek = self.input.next();
        curr
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn column(&self) -> usize {
        self.column
    }

    pub(crate) fn skip_separators(&mut self) {
        while let Some(c) = self.peek {
            if !is_separator(c) {
                break;
            }
            self.bump();
        }
    }

    /// Advance to the next statement and read its leading word, or `None`
    /// at end of text. Empty statements are skipped; a stray `}` is a
    /// brace-balance failure; anything that is not an identifier or the
    /// class keyword is a malformed statement.
    pub(crate) fn next_statement_word(&mut self) -> Result<Option<String>, HppError> {
        loop {
            self.skip_separators();
            match self.peek {
                None => return Ok(None),
                Some('}') => {
                    return Err(malformed_class(self, "found '}' with no open class body", 122));
                }
                Some(';') => {
                    self.bump();
                }
                Some(_) => break,
            }
        }

        let mut word = String::new();
        while let Some(c) = self.peek {
            if is_separator(c) {
                break;
            }
            word.push(c);
            self.bump();
        }

        if !WORD.is_match(&word) {
            return Err(HppError::MalformedStatement {
                word,
                line: self.line,
                column: self.column,
                hint: Some("Statements must start with an identifier or the class keyword".into()),
                code: Some(101),
            });
        }

        Ok(Some(word))
    }

    /// Consume a variable statement up to its `;`. Quoted strings may
    /// contain `;` without ending the statement.
    pub(crate) fn skip_statement(&mut self) -> Result<(), HppError> {
        let mut in_string = false;
        loop {
            match self.bump() {
                None => {
                    return Err(malformed_variable(self, "variable statement is unterminated", 112));
                }
                Some('"') => in_string = !in_string,
                Some(';') if !in_string => return Ok(()),
                Some(_) => {}
            }
        }
    }

    /// Consume a whole class declaration, tracking brace nesting, up to
    /// the `;` that ends it at nesting depth zero.
    pub(crate) fn skip_class_statement(&mut self) -> Result<(), HppError> {
        let mut depth = 0usize;
        let mut in_string = false;
        loop {
            match self.bump() {
                None => {
                    return Err(malformed_class(self, "class declaration is unterminated", 123));
                }
                Some('"') => in_string = !in_string,
                Some('{') if !in_string => depth += 1,
                Some('}') if !in_string => {
                    if depth == 0 {
                        return Err(malformed_class(self, "found '}' with no open class body", 122));
                    }
                    depth -= 1;
                }
                Some(';') if !in_string && depth == 0 => return Ok(()),
                Some(_) => {}
            }
        }
    }
}

pub(crate) fn malformed_class(cursor: &Cursor, message: impl Into<String>, code: u32) -> HppError {
    HppError::MalformedClass {
        message: message.into(),
        line: cursor.line(),
        column: cursor.column(),
        hint: None,
        code: Some(code),
    }
}

pub(crate) fn malformed_variable(
    cursor: &Cursor,
    message: impl Into<String>,
    code: u32,
) -> HppError {
    HppError::MalformedVariable {
        message: message.into(),
        line: cursor.line(),
        column: cursor.column(),
        hint: None,
        code: Some(code),
    }
}
