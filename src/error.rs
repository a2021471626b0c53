use std::fmt;

/// The main error type for parsing and querying class config files.
#[derive(Debug, Clone, PartialEq)]
pub enum HppError {
    /// Raised when the source text could not be obtained.
    Fetch {
        message: String,
        origin: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a statement starts with something that is neither a
    /// keyword nor an identifier.
    MalformedStatement {
        word: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    MalformedVariable {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    MalformedClass {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when an inherit target is not found in any enclosing scope.
    UnresolvedInherit {
        target: String,
        class: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnknownClass {
        name: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnknownVariable {
        name: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a value cannot be converted to the requested type.
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for HppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HppError::Fetch { message, origin, hint, code } =>
                write!(f, "[HPP] Fetch Error '{}': {}{}{}",
                    origin, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            HppError::MalformedStatement { word, line, column, hint, code } =>
                write!(f, "[HPP] Malformed Statement '{}' at {}:{}{}{}",
                    word, line, column,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            HppError::MalformedVariable { message, line, column, hint, code } =>
                write!(f, "[HPP] Malformed Variable at {}:{}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            HppError::MalformedClass { message, line, column, hint, code } =>
                write!(f, "[HPP] Malformed Class at {}:{}: {}{}{}",
                    line, column, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            HppError::UnresolvedInherit { target, class, hint, code } =>
                write!(f, "[HPP] Unresolved Inherit '{}' for class '{}'{}{}",
                    target, class,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            HppError::UnknownClass { name, hint, code } =>
                write!(f, "[HPP] Unknown Class '{}'{}{}",
                    name,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            HppError::UnknownVariable { name, hint, code } =>
                write!(f, "[HPP] Unknown Variable '{}'{}{}",
                    name,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            HppError::TypeError { message, hint, code } =>
                write!(f, "[HPP] Type Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for HppError {}

impl HppError {
    /// Helper for retrieval errors when loading source text.
    ///
    /// Keeps a consistent error code and a friendly default hint.
    pub fn fetch_error(message: String, origin: String) -> Self {
        HppError::Fetch {
            message,
            origin,
            hint: Some("Check that the source exists and is readable".into()),
            code: Some(300),
        }
    }
}
