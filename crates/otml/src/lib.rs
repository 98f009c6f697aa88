//! Generic attributed tree used as the hand-off format to the UI loader.
//!
//! A [`Document`] owns a list of [`Node`]s; each node owns its children.
//! Nodes are either property leaves (`tag: value`) or blocks holding
//! further nodes. The [`Parent`] trait gives both the same insertion and
//! lookup surface.
//!
//! ```rust
//! use otml::{Document, Node, Parent};
//!
//! let mut doc = Document::new("main.qml");
//! let mut widget = Node::new("Widget", "main.qml:1");
//! widget.add_child(Node::property("width", "100", "main.qml:2"));
//! doc.add_child(widget);
//!
//! assert_eq!(doc.emit(), "Widget\n  width: 100");
//! ```

pub mod document;
pub mod node;

pub use document::{DOCUMENT_TAG, Document};
pub use node::{Node, Parent};
