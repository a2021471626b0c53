use crate::HppError;
use crate::ast::ClassNode;
use crate::resolver;
use crate::scan;

use super::{Parser, value};

pub(super) fn parse_document(parser: &Parser, body: &str) -> Result<ClassNode, HppError> {
    let mut root = ClassNode::root();
    parse_body(parser, &mut root, body, &[])?;
    Ok(root)
}

/// Populate `node` from its body text: the variable pass first, then the
/// class pass, each child parsed recursively against its own body.
///
/// `scopes` is the chain of enclosing classes, outermost first. It lives
/// on the call stack only; nothing in the finished tree refers back to a
/// parent.
fn parse_body(
    parser: &Parser,
    node: &mut ClassNode,
    body: &str,
    scopes: &[&ClassNode],
) -> Result<(), HppError> {
    for decl in scan::scan_variables(body)? {
        let value = value::coerce(&decl);
        node.set_variable(decl.name, value);
    }

    for decl in scan::scan_classes(body)? {
        // snapshot of the inherit target's variables, taken before the
        // child parses its own statements over them
        let inherited = resolver::initial_variables(&decl, node, scopes, parser.aliases())?;

        let mut child = ClassNode::named(decl.name);
        child.variables = inherited;

        let mut chain = Vec::with_capacity(scopes.len() + 1);
        chain.extend_from_slice(scopes);
        chain.push(&*node);
        parse_body(parser, &mut child, &decl.body, &chain)?;

        node.classes.push(child);
    }

    Ok(())
}
