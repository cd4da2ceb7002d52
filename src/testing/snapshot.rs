//! DOM outline rendering for snapshot tests.
//!
//! [`dump_tree`] prints the tree as one indented line per node (type, id,
//! classes, attributes, text) in a stable order, which is what an `insta`
//! snapshot wants to diff.

use crate::dom::node::NodeId;
use crate::dom::tree::Dom;

/// Render the subtree under `start` as an indented outline.
///
/// One line per node: `Type #id .class.class [attr=value] "text"`, with
/// children indented two spaces per depth. Attribute order is stable
/// (nodes store them sorted by name).
pub fn dump_node(dom: &Dom, start: NodeId) -> String {
    let mut out = String::new();
    dump_into(dom, start, 0, &mut out);
    out
}

/// Render the whole tree from the root. Empty string for an empty DOM.
pub fn dump_tree(dom: &Dom) -> String {
    match dom.root() {
        Some(root) => dump_node(dom, root),
        None => String::new(),
    }
}

fn dump_into(dom: &Dom, node: NodeId, depth: usize, out: &mut String) {
    let Some(data) = dom.get(node) else { return };

    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&data.element_type);
    if let Some(id) = &data.id {
        out.push_str(" #");
        out.push_str(id);
    }
    for class in &data.classes {
        out.push_str(" .");
        out.push_str(class);
    }
    for (name, value) in &data.attributes {
        out.push_str(&format!(" [{name}={value}]"));
    }
    if let Some(text) = &data.text {
        out.push_str(&format!(" {text:?}"));
    }
    out.push('\n');

    for &child in dom.children(node) {
        dump_into(dom, child, depth + 1, out);
    }
}
