use crate::HppError;
use crate::ast::ClassNode;
use crate::resolver::Aliases;

mod document;
mod value;

/// Parses comment-stripped class body text into a `ClassNode` tree.
///
/// The alias table carried here feeds the inheritance resolver: classes
/// whose names appear in it inherit implicitly when no `: Parent` clause
/// is written.
pub struct Parser {
    aliases: Aliases,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            aliases: Aliases::new(),
        }
    }

    pub fn with_aliases(aliases: Aliases) -> Self {
        Parser { aliases }
    }

    pub(crate) fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    /// Parse one top-level class body (the outermost braces of the file
    /// already stripped) into an unnamed root node.
    pub fn parse_document(&self, body: &str) -> Result<ClassNode, HppError> {
        document::parse_document(self, body)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
