use otml::{Document, Node, Parent};

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::value::read_value;

// ── Parser ────────────────────────────────────────────────────────────────

/// Recursive-descent parser turning QML source into an unnormalized tree.
///
/// One instance covers exactly one parse; [`parse_document`] builds a
/// fresh one per call.
pub struct Parser<'s> {
    cursor: Cursor<'s>,
    source: &'s str,
}

impl<'s> Parser<'s> {
    pub fn new(src: &'s str, source: &'s str) -> Self {
        Self { cursor: Cursor::new(src), source }
    }

    fn location(&self, line: usize) -> String {
        format!("{}:{}", self.source, line)
    }

    pub fn parse(mut self) -> Result<Document, ParseError> {
        let mut doc = Document::new(self.source);
        self.parse_block(&mut doc)?;
        Ok(doc)
    }

    // ── Block ─────────────────────────────────────────────────────────────

    /// Parse statements into `parent` until end of input or a closing `}`.
    ///
    /// The `}` is consumed, handing control back to the enclosing block.
    fn parse_block<P: Parent>(&mut self, parent: &mut P) -> Result<(), ParseError> {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() {
                return Ok(());
            }
            if self.cursor.eat('}') {
                return Ok(());
            }

            let line = self.cursor.line();
            let identifier = self.cursor.read_identifier();

            match identifier {
                // Nothing here can start a statement; the block ends quietly.
                "" => return Ok(()),
                "import" => self.cursor.skip_line(),
                "signal" => self.cursor.skip_statement(),
                "property" => self.parse_property(parent, line),
                "function" => self.parse_function(parent, line),
                _ => self.parse_statement(parent, identifier, line)?,
            }
        }
    }

    // ── property <type> <name>: <value> ───────────────────────────────────

    fn parse_property<P: Parent>(&mut self, parent: &mut P, line: usize) {
        self.cursor.skip_blanks();
        // type (or `alias`); only its extent matters
        while let Some(ch) = self.cursor.advance() {
            if ch.is_whitespace() {
                break;
            }
        }

        self.cursor.skip_blanks();
        let name = self.cursor.take_while(|c| c != ':' && !c.is_whitespace());

        self.cursor.skip_whitespace();
        if !self.cursor.eat(':') {
            log::debug!("{}: property '{}' has no value, skipped", self.location(line), name);
            return;
        }

        let value = read_value(&mut self.cursor);
        if name.is_empty() {
            log::debug!("{}: property without a name, skipped", self.location(line));
        } else {
            parent.add_child(Node::property(name, value, self.location(line)));
        }
        self.eat_semicolon();
    }

    // ── function <name>(<args>) { <body> } ────────────────────────────────

    fn parse_function<P: Parent>(&mut self, parent: &mut P, line: usize) {
        self.cursor.skip_whitespace();
        let name = self.cursor.take_while(|c| c != '(' && !c.is_whitespace());
        let body = read_value(&mut self.cursor);
        if name.is_empty() {
            log::debug!("{}: anonymous function, skipped", self.location(line));
            return;
        }
        parent.add_child(Node::property(name, format!("function {body}"), self.location(line)));
    }

    // ── <identifier>: <value>  |  <Identifier> { ... } ────────────────────

    fn parse_statement<P: Parent>(
        &mut self,
        parent: &mut P,
        identifier: &'s str,
        line: usize,
    ) -> Result<(), ParseError> {
        self.cursor.skip_whitespace();

        match self.cursor.peek() {
            Some(':') => {
                self.cursor.advance();
                let value = read_value(&mut self.cursor);
                parent.add_child(Node::property(identifier, value, self.location(line)));
                self.eat_semicolon();
            }
            Some('{') => {
                self.cursor.advance();
                let mut node = Node::new(identifier, self.location(line));
                self.parse_block(&mut node)?;
                parent.add_child(node);
            }
            Some(found) => {
                return Err(ParseError::UnexpectedCharacter {
                    node: parent.tag().to_string(),
                    node_source: parent.source().to_string(),
                    found,
                    identifier: identifier.to_string(),
                    line: self.cursor.line(),
                });
            }
            None => {
                return Err(ParseError::UnexpectedEof {
                    node: parent.tag().to_string(),
                    node_source: parent.source().to_string(),
                    identifier: identifier.to_string(),
                    line: self.cursor.line(),
                });
            }
        }
        Ok(())
    }

    /// Optional `;` after a property value.
    fn eat_semicolon(&mut self) {
        self.cursor.skip_whitespace();
        self.cursor.eat(';');
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse QML source into an unnormalized [`Document`].
///
/// `source` names the input in every node's source location.
pub fn parse_document(src: &str, source: &str) -> Result<Document, ParseError> {
    Parser::new(src, source).parse()
}
