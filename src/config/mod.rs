use std::fmt;
use std::fs;
use std::path::Path;

use crate::HppError;
use crate::ast::ClassNode;
use crate::parser::Parser;
use crate::resolver::Aliases;

mod access;
mod conversion;
mod helpers;
mod validation;

/// Main entry point: obtains source text, strips comments and the outer
/// class wrapper, and parses the class tree.
#[derive(Debug)]
pub struct HppConfig {
    root: ClassNode,
    raw_content: String, // Store for error reporting
}

impl HppConfig {
    /// Parse a config from a string.
    ///
    /// The text is expected to wrap the whole document in one enclosing
    /// class; everything outside the outermost brace pair (the wrapper's
    /// header and trailing `;`) is discarded before parsing.
    ///
    /// # Example
    /// ```
    /// # use hpp_cfg::HppConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = HppConfig::from_str("class Addon { class Bandaging {}; };")?;
    /// assert!(config.root().has_class("Bandaging"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_str(content: &str) -> Result<Self, HppError> {
        Self::parse(content, Aliases::new())
    }

    /// Parse a config with an alias table for implicit inheritance.
    pub fn from_str_with_aliases(content: &str, aliases: Aliases) -> Result<Self, HppError> {
        Self::parse(content, aliases)
    }

    /// Load a config file. A leading `~/` resolves against the home
    /// directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HppError> {
        let resolved = helpers::resolve_path(path.as_ref());
        let content = fs::read_to_string(&resolved).map_err(|e| {
            HppError::fetch_error(
                format!("Failed to read file: {}", e),
                resolved.to_string_lossy().to_string(),
            )
        })?;
        Self::from_str(&content)
    }

    /// Obtain the source text from an arbitrary retrieval function, such
    /// as an HTTP client. A retrieval failure surfaces as a `Fetch`
    /// error naming `origin`.
    ///
    /// # Example
    /// ```no_run
    /// # use hpp_cfg::HppConfig;
    /// # fn download() -> Result<String, std::io::Error> { unimplemented!() }
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = HppConfig::from_fetch("ACE_Medical_Treatment.hpp", download)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_fetch<F, E>(origin: &str, fetch: F) -> Result<Self, HppError>
    where
        F: FnOnce() -> Result<String, E>,
        E: fmt::Display,
    {
        let content = fetch().map_err(|e| HppError::Fetch {
            message: e.to_string(),
            origin: origin.to_string(),
            hint: Some("The source document could not be retrieved".into()),
            code: Some(301),
        })?;
        Self::from_str(&content)
    }

    fn parse(content: &str, aliases: Aliases) -> Result<Self, HppError> {
        let stripped = helpers::strip_comments(content);
        let body = helpers::outer_body(&stripped);
        let root = Parser::with_aliases(aliases).parse_document(body)?;
        Ok(HppConfig {
            root,
            raw_content: content.to_string(),
        })
    }

    /// The unnamed root node. Its children are the document's pages.
    pub fn root(&self) -> &ClassNode {
        &self.root
    }

    /// Top-level class names, in source order.
    pub fn pages(&self) -> Vec<&str> {
        self.root.class_names()
    }

    /// The original source text, as given.
    pub fn source(&self) -> &str {
        &self.raw_content
    }
}
