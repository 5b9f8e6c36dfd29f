//! Error types for lectern operations.

use thiserror::Error;

/// Errors that can occur while composing or navigating a reader.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown panel: {0}")]
    UnknownPanel(String),

    #[error("unknown node type: {0}")]
    UnknownNodeType(String),

    #[error("invalid navigation state: {0}")]
    InvalidNavigationState(String),

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("no route matches location {0:?}")]
    NoRoute(String),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
