//! QML to OTML translator.
//!
//! Parses the brace-delimited QML syntax (component blocks, `id: value`
//! properties, `property` / `signal` / `function` / `import` declarations)
//! into an [`otml::Document`] and renames component tags to the UI
//! toolkit's vocabulary.
//!
//! Script bodies are never evaluated; `function` and property expressions
//! are kept verbatim as node values.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`cursor`] | `Cursor`: index-addressed scanner with one-char push-back |
//! | [`value`] | `read_value`: right-hand sides of properties |
//! | [`parser`] | `Parser`, `parse_document` |
//! | [`normalize`] | `RewriteTable`, `Rule`, `normalize` |
//! | [`resource`] | `ResourceReader`, `FsReader` |
//! | [`error`] | `ParseError`, `QmlError` |
//!
//! # Quick start
//!
//! ```rust
//! use otml::Parent;
//!
//! let doc = otml_qml::parse_str("Rectangle {\n  color: \"#ff0000\"\n}", "main.qml").unwrap();
//! let root = &doc.children()[0];
//! assert_eq!(root.tag(), "Widget");
//! assert_eq!(root.value_of("background-color"), Some("#ff0000"));
//! ```

pub mod cursor;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod resource;
pub mod value;

use otml::Document;

pub use error::{ParseError, QmlError, QmlResult};
pub use normalize::{RewriteTable, Rule, normalize};
pub use parser::parse_document;
pub use resource::{FsReader, ResourceReader};

// ── QmlLoader ─────────────────────────────────────────────────────────────

/// Reads, parses and normalizes QML files.
pub struct QmlLoader<R> {
    reader: R,
    rewrites: RewriteTable,
}

impl QmlLoader<FsReader> {
    /// Loader reading from the working directory with the default table.
    pub fn from_fs() -> Self {
        Self::new(FsReader::new())
    }
}

impl<R: ResourceReader> QmlLoader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, rewrites: RewriteTable::default() }
    }

    pub fn with_rewrites(mut self, rewrites: RewriteTable) -> Self {
        self.rewrites = rewrites;
        self
    }

    /// Parse and normalize `src`. Syntax errors are returned as-is.
    pub fn parse_str(&self, src: &str, source: &str) -> Result<Document, ParseError> {
        let mut doc = parse_document(src, source)?;
        normalize(&mut doc, &self.rewrites);
        Ok(doc)
    }

    /// Read `file_name` through the reader, then parse and normalize it.
    pub fn load(&self, file_name: &str) -> QmlResult<Document> {
        let src = self
            .reader
            .read_file_contents(file_name)
            .map_err(|source| QmlError::Read { file: file_name.to_string(), source })?;
        log::debug!("parsing {} ({} bytes)", file_name, src.len());
        Ok(self.parse_str(&src, file_name)?)
    }

    /// Like [`load`](Self::load), but failures are logged and yield `None`.
    pub fn parse_file(&self, file_name: &str) -> Option<Document> {
        match self.load(file_name) {
            Ok(doc) => Some(doc),
            Err(e) => {
                log::error!("Failed to parse QML file '{}': {}", file_name, e);
                None
            }
        }
    }
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse and normalize QML source with the default rewrite table.
pub fn parse_str(src: &str, source: &str) -> Result<Document, ParseError> {
    let mut doc = parse_document(src, source)?;
    normalize(&mut doc, &RewriteTable::default());
    Ok(doc)
}

/// Read, parse and normalize a file from disk. Failures are logged.
pub fn parse_file(file_name: &str) -> Option<Document> {
    QmlLoader::from_fs().parse_file(file_name)
}
