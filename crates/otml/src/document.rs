use std::fmt;

use serde::Serialize;

use crate::node::{Node, Parent};

/// Tag reported by a [`Document`] when it stands in as a parent.
pub const DOCUMENT_TAG: &str = "doc";

// ── Document ──────────────────────────────────────────────────────────────

/// Root container of a parsed tree. Owns the top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    source: String,
    children: Vec<Node>,
}

impl Document {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into(), children: Vec::new() }
    }

    /// Depth-first iterator over every node in the document.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.children.iter().flat_map(|n| n.descendants())
    }

    /// Render the tree as OTML text.
    pub fn emit(&self) -> String {
        let mut out = String::new();
        for (i, node) in self.children.iter().enumerate() {
            if i != 0 {
                out.push('\n');
            }
            emit_node(&mut out, node, 0);
        }
        out
    }
}

impl Parent for Document {
    fn tag(&self) -> &str {
        DOCUMENT_TAG
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.emit())
    }
}

// ── Emitter ───────────────────────────────────────────────────────────────

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn emit_node(out: &mut String, node: &Node, depth: usize) {
    indent(out, depth);
    out.push_str(node.tag());
    if node.has_value() || node.is_unique() {
        out.push(':');
    }

    if let Some(value) = node.value() {
        if value.contains('\n') {
            // block scalar: `|` keeps the final newline, `|-` strips it
            out.push_str(if value.ends_with('\n') { " |" } else { " |-" });
            for line in value.lines() {
                out.push('\n');
                indent(out, depth + 1);
                out.push_str(line);
            }
        } else if !value.is_empty() {
            out.push(' ');
            out.push_str(value);
        }
    }

    for child in node.children() {
        out.push('\n');
        emit_node(out, child, depth + 1);
    }
}
