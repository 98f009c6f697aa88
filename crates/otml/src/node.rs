use serde::Serialize;

// ── Parent ────────────────────────────────────────────────────────────────

/// Anything that owns an ordered list of child [`Node`]s: a [`Node`] itself
/// or the top-level [`Document`](crate::Document).
pub trait Parent {
    fn tag(&self) -> &str;
    fn source(&self) -> &str;
    fn children(&self) -> &[Node];
    fn children_mut(&mut self) -> &mut Vec<Node>;

    /// Insert `child`, honouring the unique-replace rule.
    ///
    /// If a child with the same tag already exists and either side is
    /// unique, the new node becomes unique, takes the place of the first
    /// match, and every other child carrying that tag is dropped.
    fn add_child(&mut self, mut child: Node) {
        let children = self.children_mut();
        if !child.tag.is_empty() {
            let hit = children
                .iter()
                .position(|n| n.tag == child.tag && (n.unique || child.unique));
            if let Some(idx) = hit {
                child.unique = true;
                let tag = child.tag.clone();
                children[idx] = child;
                let mut i = 0;
                children.retain(|n| {
                    let keep = i == idx || n.tag != tag;
                    i += 1;
                    keep
                });
                return;
            }
        }
        children.push(child);
    }

    /// First direct child with the given tag.
    fn child(&self, tag: &str) -> Option<&Node> {
        self.children().iter().find(|n| n.tag == tag)
    }

    fn child_mut(&mut self, tag: &str) -> Option<&mut Node> {
        self.children_mut().iter_mut().find(|n| n.tag == tag)
    }

    fn has_child(&self, tag: &str) -> bool {
        self.child(tag).is_some()
    }

    fn len(&self) -> usize {
        self.children().len()
    }

    fn is_empty(&self) -> bool {
        self.children().is_empty()
    }
}

// ── Node ──────────────────────────────────────────────────────────────────

/// One element of the tree.
///
/// Property nodes carry a scalar `value`; block nodes carry `children`.
/// `source` is `"<name>:<line>"` and is fixed once the node exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    unique: bool,
    source: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: None,
            unique: false,
            source: source.into(),
            children: Vec::new(),
        }
    }

    /// Convenience for a unique property node holding `value`.
    pub fn property(
        tag: impl Into<String>,
        value: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        let mut node = Self::new(tag, source);
        node.value = Some(value.into());
        node.unique = true;
        node
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn set_unique(&mut self, unique: bool) {
        self.unique = unique;
    }

    /// Look up a direct child's value by tag.
    pub fn value_of(&self, tag: &str) -> Option<&str> {
        self.child(tag).and_then(Node::value)
    }

    /// Depth-first iterator over this node and all of its descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &Node> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

impl Parent for Node {
    fn tag(&self) -> &str {
        &self.tag
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
