use super::*;

/// One top-level variable assignment: the stored name (array marker
/// stripped), the raw value text, and whether the array marker was
/// present.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub raw: String,
    pub is_array: bool,
}

/// Extract the top-level variable assignments of one class body, in
/// source order. Class declarations are mirror-skipped, nested bodies
/// included, so deeper assignments stay with their own class.
pub fn scan_variables(body: &str) -> Result<Vec<VarDecl>, HppError> {
    let mut cursor = Cursor::new(body);
    let mut decls = Vec::new();

    while let Some(word) = cursor.next_statement_word()? {
        if word == CLASS_KEYWORD {
            cursor.skip_class_statement()?;
            continue;
        }
        decls.push(scan_assignment(&mut cursor, word)?);
    }

    Ok(decls)
}

fn scan_assignment(cursor: &mut Cursor, word: String) -> Result<VarDecl, HppError> {
    let (name, is_array) = match word.strip_suffix(ARRAY_MARKER) {
        Some(base) => (base.to_string(), true),
        None => (word, false),
    };

    // the assignment operator must come before the terminator
    loop {
        match cursor.bump() {
            None | Some(';') => {
                return Err(malformed_variable(
                    cursor,
                    format!("variable '{}' has no assignment", name),
                    110,
                ));
            }
            Some('=') => break,
            Some(_) => {}
        }
    }

    // raw value text up to the unguarded ';'
    let mut raw = String::new();
    let mut in_string = false;
    loop {
        match cursor.bump() {
            None => {
                return Err(malformed_variable(
                    cursor,
                    format!("variable '{}' is unterminated", name),
                    112,
                ));
            }
            Some('"') => {
                in_string = !in_string;
                raw.push('"');
            }
            Some(';') if !in_string => break,
            Some(c) => raw.push(c),
        }
    }

    let raw = raw.trim().to_string();
    if raw.is_empty() {
        return Err(malformed_variable(
            cursor,
            format!("variable '{}' has an empty value", name),
            111,
        ));
    }

    Ok(VarDecl { name, raw, is_array })
}
