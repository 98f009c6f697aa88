use std::io;

use thiserror::Error;

/// A syntax error raised while parsing QML source.
///
/// `node` and `node_source` identify the block the offending statement was
/// in (`doc` and the source name at top level).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "QML error in '{node_source}' ({node}): unexpected character '{found}' after identifier '{identifier}' at line {line}"
    )]
    UnexpectedCharacter {
        node: String,
        node_source: String,
        found: char,
        identifier: String,
        line: usize,
    },

    #[error(
        "QML error in '{node_source}' ({node}): unexpected end of input after identifier '{identifier}' at line {line}"
    )]
    UnexpectedEof {
        node: String,
        node_source: String,
        identifier: String,
        line: usize,
    },
}

impl ParseError {
    /// 1-based line on which the error was detected.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedCharacter { line, .. } | ParseError::UnexpectedEof { line, .. } => {
                *line
            }
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            ParseError::UnexpectedCharacter { identifier, .. }
            | ParseError::UnexpectedEof { identifier, .. } => identifier,
        }
    }
}

/// Any failure of the load-by-name pipeline.
#[derive(Error, Debug)]
pub enum QmlError {
    #[error("unable to read '{file}': {source}")]
    Read {
        file: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type QmlResult<T> = Result<T, QmlError>;
