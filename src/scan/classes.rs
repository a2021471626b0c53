use super::*;

/// One top-level class declaration: its name, the optional inherit
/// target, and the body text between its braces.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub inherit: Option<String>,
    pub body: String,
}

/// Extract the top-level class declarations of one class body, in source
/// order. Variable statements are mirror-skipped so the pass stays in
/// step with the variable scanner over the same text.
pub fn scan_classes(body: &str) -> Result<Vec<ClassDecl>, HppError> {
    let mut cursor = Cursor::new(body);
    let mut decls = Vec::new();

    while let Some(word) = cursor.next_statement_word()? {
        if word != CLASS_KEYWORD {
            cursor.skip_statement()?;
            continue;
        }
        if let Some(decl) = scan_declaration(&mut cursor)? {
            decls.push(decl);
        }
    }

    Ok(decls)
}

/// Scan one declaration after the class keyword. Returns `None` for a
/// bodiless forward declaration (`class X;`), which produces no node.
fn scan_declaration(cursor: &mut Cursor) -> Result<Option<ClassDecl>, HppError> {
    let name = scan_name(cursor)?;

    cursor.skip_separators();
    let inherit = match cursor.peek() {
        Some(';') => {
            cursor.bump();
            return Ok(None);
        }
        Some(':') => {
            cursor.bump();
            scan_inherit(cursor)?
        }
        Some('{') => None,
        None => return Err(malformed_class(cursor, "class declaration is unterminated", 123)),
        Some(c) => {
            return Err(malformed_class(
                cursor,
                format!("unexpected '{}' in class declaration", c),
                121,
            ));
        }
    };

    cursor.skip_separators();
    match cursor.peek() {
        Some('{') => {}
        Some(';') => {
            return Err(malformed_class(
                cursor,
                "inherit clause terminated by ';'",
                121,
            ));
        }
        None => return Err(malformed_class(cursor, "class declaration is unterminated", 123)),
        Some(c) => {
            return Err(malformed_class(
                cursor,
                format!("expected '{{' to open the class body, found '{}'", c),
                121,
            ));
        }
    }
    let body = scan_body(cursor)?;

    // the `;` closing the declaration
    cursor.skip_separators();
    match cursor.peek() {
        Some(';') => {
            cursor.bump();
        }
        None => return Err(malformed_class(cursor, "missing ';' after class body", 124)),
        Some(c) => {
            return Err(malformed_class(
                cursor,
                format!("expected ';' after class body, found '{}'", c),
                124,
            ));
        }
    }

    Ok(Some(ClassDecl { name, inherit, body }))
}

/// Class name: the run of characters up to `:`, `;`, `{` or a separator.
fn scan_name(cursor: &mut Cursor) -> Result<String, HppError> {
    cursor.skip_separators();
    let mut name = String::new();
    loop {
        match cursor.peek() {
            None => return Err(malformed_class(cursor, "class declaration is unterminated", 123)),
            Some(':') | Some(';') | Some('{') => break,
            Some(c) if is_separator(c) => break,
            Some(c) => {
                name.push(c);
                cursor.bump();
            }
        }
    }
    if name.is_empty() {
        return Err(malformed_class(cursor, "class declaration is missing a name", 120));
    }
    Ok(name)
}

/// Inherit target between `:` and `{`. An empty target counts as absent.
fn scan_inherit(cursor: &mut Cursor) -> Result<Option<String>, HppError> {
    cursor.skip_separators();
    let mut target = String::new();
    loop {
        match cursor.peek() {
            None => return Err(malformed_class(cursor, "class declaration is unterminated", 123)),
            Some(';') => {
                return Err(malformed_class(
                    cursor,
                    "inherit clause terminated by ';'",
                    121,
                ));
            }
            Some('{') => break,
            Some(c) if is_separator(c) && !target.is_empty() => break,
            Some(c) if is_separator(c) => {
                cursor.bump();
            }
            Some(c) => {
                target.push(c);
                cursor.bump();
            }
        }
    }
    if target.is_empty() {
        Ok(None)
    } else {
        Ok(Some(target))
    }
}

/// Body text between the matching brace pair, braces excluded. Brace
/// nesting is tracked with a counter; braces inside quoted strings are
/// inert.
fn scan_body(cursor: &mut Cursor) -> Result<String, HppError> {
    cursor.bump(); // the opening '{'
    let mut depth = 1usize;
    let mut in_string = false;
    let mut body = String::new();
    loop {
        match cursor.bump() {
            None => return Err(malformed_class(cursor, "class body is unterminated", 123)),
            Some('"') => {
                in_string = !in_string;
                body.push('"');
            }
            Some('{') if !in_string => {
                depth += 1;
                body.push('{');
            }
            Some('}') if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Ok(body);
                }
                body.push('}');
            }
            Some(c) => body.push(c),
        }
    }
}
