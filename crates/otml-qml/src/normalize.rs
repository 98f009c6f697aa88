//! Renames QML component tags (and a few of their properties) to the UI
//! toolkit's vocabulary.

use std::collections::HashMap;

use otml::{Document, Node, Parent};

// ── Rule ──────────────────────────────────────────────────────────────────

/// What happens to a node whose tag matches a table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Replacement tag for the node itself.
    pub tag: String,
    /// `(from, to)` renames applied to the first direct child tagged `from`.
    pub renames: Vec<(String, String)>,
}

impl Rule {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), renames: Vec::new() }
    }

    pub fn rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.renames.push((from.into(), to.into()));
        self
    }
}

// ── RewriteTable ──────────────────────────────────────────────────────────

/// Source tag → [`Rule`]. Tags without an entry are left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteTable {
    rules: HashMap<String, Rule>,
}

impl RewriteTable {
    /// A table with no rules; normalizing with it changes nothing.
    pub fn empty() -> Self {
        Self { rules: HashMap::new() }
    }

    /// Register `rule` for every tag in `sources`, replacing earlier entries.
    pub fn with_rule<I, S>(mut self, sources: I, rule: Rule) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for source in sources {
            self.rules.insert(source.into(), rule.clone());
        }
        self
    }

    pub fn rule(&self, tag: &str) -> Option<&Rule> {
        self.rules.get(tag)
    }

    /// Rewrite `node` and then every nested component below it.
    ///
    /// Only children whose tag starts with an ASCII uppercase letter are
    /// visited; lowercase tags are property leaves.
    pub fn apply(&self, node: &mut Node) {
        if let Some(rule) = self.rules.get(node.tag()) {
            node.set_tag(rule.tag.as_str());
            for (from, to) in &rule.renames {
                if let Some(child) = node.child_mut(from) {
                    child.set_tag(to.as_str());
                }
            }
        }

        for child in node.children_mut() {
            if is_component(child.tag()) {
                self.apply(child);
            }
        }
    }
}

impl Default for RewriteTable {
    fn default() -> Self {
        Self::empty()
            .with_rule(["Item", "Rectangle"], Rule::new("Widget").rename("color", "background-color"))
            .with_rule(["Text", "Label"], Rule::new("Label"))
            .with_rule(["Image"], Rule::new("Widget").rename("source", "image-source"))
            .with_rule(["MouseArea"], Rule::new("Widget"))
    }
}

fn is_component(tag: &str) -> bool {
    tag.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Normalize every top-level node of `doc` in place.
pub fn normalize(doc: &mut Document, table: &RewriteTable) {
    for node in doc.children_mut() {
        table.apply(node);
    }
    log::debug!("normalized {} ({} nodes)", doc.source(), doc.nodes().count());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(tag: &str, children: Vec<Node>) -> Node {
        let mut node = Node::new(tag, "t:1");
        for child in children {
            node.add_child(child);
        }
        node
    }

    fn prop(tag: &str, value: &str) -> Node {
        Node::property(tag, value, "t:1")
    }

    fn doc_of(nodes: Vec<Node>) -> Document {
        let mut doc = Document::new("t");
        for node in nodes {
            doc.add_child(node);
        }
        doc
    }

    #[test]
    fn default_table_mappings() {
        let table = RewriteTable::default();
        for (from, to) in [
            ("Item", "Widget"),
            ("Rectangle", "Widget"),
            ("Text", "Label"),
            ("Label", "Label"),
            ("Image", "Widget"),
            ("MouseArea", "Widget"),
        ] {
            let mut node = Node::new(from, "t:1");
            table.apply(&mut node);
            assert_eq!(node.tag(), to, "{from}");
        }
    }

    #[test]
    fn unknown_tags_are_kept() {
        let table = RewriteTable::default();
        assert!(table.rule("ListView").is_none());
        let mut node = Node::new("ListView", "t:1");
        table.apply(&mut node);
        assert_eq!(node.tag(), "ListView");
    }

    #[test]
    fn renames_only_direct_child() {
        let mut doc = doc_of(vec![block(
            "Rectangle",
            vec![
                prop("color", "red"),
                block("Column", vec![prop("color", "blue")]),
            ],
        )]);
        normalize(&mut doc, &RewriteTable::default());

        let widget = &doc.children()[0];
        assert_eq!(widget.tag(), "Widget");
        assert_eq!(widget.value_of("background-color"), Some("red"));
        assert_eq!(widget.children()[1].value_of("color"), Some("blue"));
    }

    #[test]
    fn image_source_is_renamed() {
        let mut doc = doc_of(vec![block("Image", vec![prop("source", "icon.png")])]);
        normalize(&mut doc, &RewriteTable::default());
        assert_eq!(doc.children()[0].value_of("image-source"), Some("icon.png"));
    }

    #[test]
    fn recursion_skips_lowercase_children() {
        // `anchors` is a lowercase block, so the `Item` inside it is not reached
        let mut doc = doc_of(vec![block(
            "Item",
            vec![
                block("anchors", vec![block("Item", vec![])]),
                block("Column", vec![block("Text", vec![])]),
            ],
        )]);
        normalize(&mut doc, &RewriteTable::default());

        let root = &doc.children()[0];
        assert_eq!(root.children()[0].children()[0].tag(), "Item");
        assert_eq!(root.children()[1].tag(), "Column");
        assert_eq!(root.children()[1].children()[0].tag(), "Label");
    }

    #[test]
    fn second_pass_changes_nothing() {
        let mut doc = doc_of(vec![block(
            "Item",
            vec![prop("color", "red"), block("Text", vec![prop("text", "x")])],
        )]);
        let table = RewriteTable::default();
        normalize(&mut doc, &table);
        let once = doc.clone();
        normalize(&mut doc, &table);
        assert_eq!(doc, once);
    }

    #[test]
    fn custom_rules_extend_the_table() {
        let table = RewriteTable::default()
            .with_rule(["Button"], Rule::new("Button").rename("text", "label"))
            .with_rule(["MouseArea"], Rule::new("Clickable"));
        let mut doc = doc_of(vec![
            block("Button", vec![prop("text", "OK")]),
            block("MouseArea", vec![]),
        ]);
        normalize(&mut doc, &table);
        assert_eq!(doc.children()[0].value_of("label"), Some("OK"));
        assert_eq!(doc.children()[1].tag(), "Clickable");
    }

    #[test]
    fn empty_table_is_identity() {
        let mut doc = doc_of(vec![block("Rectangle", vec![prop("color", "red")])]);
        let before = doc.clone();
        normalize(&mut doc, &RewriteTable::empty());
        assert_eq!(doc, before);
    }
}
