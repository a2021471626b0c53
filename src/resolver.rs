use indexmap::IndexMap;

use crate::HppError;
use crate::ast::{ClassNode, Value};
use crate::scan::ClassDecl;

/// Maps a class's own name to the ancestor it implicitly inherits from.
///
/// Some well-known class names inherit from a common ancestor without
/// writing `: Ancestor`. That is domain knowledge, not syntax, so it is
/// kept in an explicit table passed into the parser rather than wired
/// into the scanning logic. Keys match case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Aliases {
    map: IndexMap<String, String>,
}

impl Aliases {
    pub fn new() -> Self {
        Aliases {
            map: IndexMap::new(),
        }
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut aliases = Aliases::new();
        for (name, target) in pairs {
            aliases.insert(name, target);
        }
        aliases
    }

    pub fn insert(&mut self, name: &str, target: &str) {
        self.map.insert(name.to_ascii_lowercase(), target.to_string());
    }

    pub fn target_for(&self, name: &str) -> Option<&str> {
        self.map.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

/// Initial variable set for a new class: an independent copy of the
/// resolved inherit target's variables at this moment, or empty when the
/// class inherits nothing.
pub(crate) fn initial_variables(
    decl: &ClassDecl,
    scope: &ClassNode,
    ancestors: &[&ClassNode],
    aliases: &Aliases,
) -> Result<Vec<(String, Value)>, HppError> {
    let target = match &decl.inherit {
        Some(target) => target.as_str(),
        None => match aliases.target_for(&decl.name) {
            Some(target) => target,
            None => return Ok(Vec::new()),
        },
    };

    if let Some(variables) = lookup(scope, target) {
        return Ok(variables);
    }
    for ancestor in ancestors.iter().rev() {
        if let Some(variables) = lookup(ancestor, target) {
            return Ok(variables);
        }
    }

    Err(HppError::UnresolvedInherit {
        target: target.to_string(),
        class: decl.name.clone(),
        hint: Some("Inherit targets must be declared earlier in an enclosing scope".into()),
        code: Some(201),
    })
}

/// One scope step: the scope's already-registered children (the most
/// recently declared match wins), then the scope's own name, so a class
/// can inherit from its immediate parent.
fn lookup(scope: &ClassNode, target: &str) -> Option<Vec<(String, Value)>> {
    if let Some(sibling) = scope
        .classes
        .iter()
        .rev()
        .find(|class| class.name.eq_ignore_ascii_case(target))
    {
        return Some(sibling.variables.clone());
    }
    if !scope.name.is_empty() && scope.name.eq_ignore_ascii_case(target) {
        return Some(scope.variables.clone());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, variables: Vec<(String, Value)>) -> ClassNode {
        ClassNode {
            name: name.to_string(),
            variables,
            classes: Vec::new(),
        }
    }

    fn decl(name: &str, inherit: Option<&str>) -> ClassDecl {
        ClassDecl {
            name: name.to_string(),
            inherit: inherit.map(String::from),
            body: String::new(),
        }
    }

    #[test]
    fn test_alias_lookup_is_case_insensitive() {
        let aliases = Aliases::from_pairs([("Tourniquet", "BasicBandage")]);
        assert_eq!(aliases.target_for("tourniquet"), Some("BasicBandage"));
        assert_eq!(aliases.target_for("TOURNIQUET"), Some("BasicBandage"));
        assert_eq!(aliases.target_for("Splint"), None);
    }

    #[test]
    fn test_sibling_resolution_copies_variables() {
        let mut scope = node("Bandaging", Vec::new());
        scope.classes.push(node(
            "BasicBandage",
            vec![("effectiveness".to_string(), Value::Number(0.5))],
        ));

        let variables =
            initial_variables(&decl("Tourniquet", Some("basicbandage")), &scope, &[], &Aliases::new())
                .expect("sibling should resolve");
        assert_eq!(
            variables,
            vec![("effectiveness".to_string(), Value::Number(0.5))]
        );
    }

    #[test]
    fn test_latest_duplicate_sibling_wins() {
        let mut scope = node("Root", Vec::new());
        scope.classes.push(node(
            "Twin",
            vec![("x".to_string(), Value::Number(1.0))],
        ));
        scope.classes.push(node(
            "Twin",
            vec![("x".to_string(), Value::Number(2.0))],
        ));

        let variables =
            initial_variables(&decl("Child", Some("Twin")), &scope, &[], &Aliases::new())
                .expect("duplicate sibling should resolve");
        assert_eq!(variables, vec![("x".to_string(), Value::Number(2.0))]);
    }

    #[test]
    fn test_inherit_from_enclosing_scope_by_name() {
        let parent = node(
            "Treatment",
            vec![("duration".to_string(), Value::Number(8.0))],
        );
        let scope = node("Inner", Vec::new());

        let variables = initial_variables(
            &decl("Child", Some("treatment")),
            &scope,
            &[&parent],
            &Aliases::new(),
        )
        .expect("ancestor name should resolve");
        assert_eq!(variables, vec![("duration".to_string(), Value::Number(8.0))]);
    }

    #[test]
    fn test_unresolved_inherit_names_the_target() {
        let scope = node("Root", Vec::new());
        let err = initial_variables(&decl("Child", Some("Ghost")), &scope, &[], &Aliases::new())
            .unwrap_err();
        match err {
            HppError::UnresolvedInherit { target, class, .. } => {
                assert_eq!(target, "Ghost");
                assert_eq!(class, "Child");
            }
            other => panic!("Expected UnresolvedInherit, got {:?}", other),
        }
    }

    #[test]
    fn test_no_inherit_and_no_alias_starts_empty() {
        let scope = node("Root", Vec::new());
        let variables =
            initial_variables(&decl("Fresh", None), &scope, &[], &Aliases::new()).unwrap();
        assert!(variables.is_empty());
    }
}
