use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

/// Quoted strings are matched before comment markers so `//` and `/*`
/// inside string values survive stripping.
static COMMENT_OR_STRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"\n]*"|/\*(?s:.)*?\*/|//[^\n]*"#).unwrap());

/// Remove `/* */` and `//` comments, leaving quoted-string contents
/// untouched.
pub(super) fn strip_comments(text: &str) -> String {
    COMMENT_OR_STRING
        .replace_all(text, |caps: &regex::Captures| {
            let matched = &caps[0];
            if matched.starts_with('"') {
                matched.to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Everything between the outermost brace pair. The enclosing class
/// header and trailing `;` belong to the file wrapper, not the content.
pub(super) fn outer_body(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(open), Some(close)) if open < close => &text[open + 1..close],
        _ => "",
    }
}

/// Expand a leading `~/` against the home directory.
pub(super) fn resolve_path(path: &Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|s| s.strip_prefix("~/")) {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Find the line where a variable is assigned, for error hints.
pub(super) fn find_source_line(name: &str, raw_content: &str) -> (usize, String) {
    for (idx, line) in raw_content.lines().enumerate() {
        let trimmed = line.trim();
        let key = trimmed
            .split(|c: char| c == '=' || c.is_whitespace())
            .next()
            .unwrap_or("");
        let key = key.strip_suffix("[]").unwrap_or(key);
        if !key.is_empty() && key.eq_ignore_ascii_case(name) {
            return (idx + 1, trimmed.to_string());
        }
    }
    (0, "<name not found>".into())
}
